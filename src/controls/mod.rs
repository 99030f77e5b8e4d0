//! Page behaviors and the bundle that installs them.
//!
//! SYSTEM CONTEXT
//! ==============
//! The three controllers are independent: they share the page and the
//! config, nothing else. `PageControls::install` builds them once at startup,
//! applies the stored theme, and attaches every listener.

pub mod role_link;
pub mod swatch;
pub mod theme;


use std::rc::Rc;

use crate::config::Config;
use crate::error::Error;
use crate::page::{Page, Store};

pub use role_link::RoleLinkTracker;
pub use swatch::CardThemeSwitcher;
pub use theme::ThemeController;

/// Installed behaviors for one page.
pub struct PageControls<P: Page, S: Store> {
    pub theme: Rc<ThemeController<P, S>>,
    pub swatches: Rc<CardThemeSwitcher>,
    pub role_links: Rc<RoleLinkTracker>,
}

impl<P: Page, S: Store> PageControls<P, S> {
    /// Validate `config`, apply the stored theme, and wire all listeners.
    pub fn install(page: &P, store: S, config: Config) -> Result<Self, Error> {
        config.validate()?;
        let config = Rc::new(config);

        let theme = Rc::new(ThemeController::new(page, store, Rc::clone(&config)));
        let swatches = Rc::new(CardThemeSwitcher::new(Rc::clone(&config)));
        let role_links = Rc::new(RoleLinkTracker::new(config));

        let initial = theme.init(page)?;
        let has_toggle = Rc::clone(&theme).install(page)?;
        let triggers = Rc::clone(&swatches).install(page)?;
        Rc::clone(&role_links).install(page)?;

        log::info!("page controls installed: theme={initial} toggle={has_toggle} swatch_triggers={triggers}");
        Ok(Self { theme, swatches, role_links })
    }
}
