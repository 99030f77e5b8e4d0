//! Theme and active-state behaviors for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and loaded by the page after its
//! markup is in place. It persists a light/dark theme preference, lets card
//! swatch buttons restyle their card, and keeps one role link active per
//! group. With the `hydrate` feature the `web` module binds the controllers
//! to the browser; without it the crate runs against the in-memory page in
//! [`mem`], which is what the tests use.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controls`] | Theme controller, card theme switcher, role-link tracker, and [`controls::PageControls`] |
//! | [`page`] | [`page::Page`] and [`page::Store`] seams the controllers run against |
//! | [`mem`] | In-memory page and store |
//! | [`selector`] | Typed selectors rendered to CSS or matched in memory |
//! | [`boot`] | Once-per-page guard used by the browser entry points |
//! | [`config`] | Marker names and storage key, JSON-overridable |
//! | [`theme`] | The light/dark [`theme::Theme`] value |
//! | [`error`] | Crate error type |
//! | [`consts`] | Default marker names |
//! | `web` | `web-sys` backend and the `boot` / `bootWithConfig` exports (`hydrate` only) |

pub mod boot;
pub mod config;
pub mod consts;
pub mod controls;
pub mod error;
pub mod mem;
pub mod page;
pub mod selector;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::Config;
pub use controls::PageControls;
pub use error::Error;
pub use theme::Theme;
