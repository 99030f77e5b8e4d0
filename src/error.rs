//! Error type shared by the controllers and the page/storage backends.
//!
//! Missing page elements are not errors; the controllers treat them as
//! no-ops. This type covers host calls the browser rejected and bad
//! configuration.

/// Failure reported by a [`crate::page::Page`], a [`crate::page::Store`], or
/// while building a [`crate::config::Config`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("dom {op} failed: {detail}")]
    Dom { op: &'static str, detail: String },
    #[error("storage {op} failed: {detail}")]
    Storage { op: &'static str, detail: String },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
