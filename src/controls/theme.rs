//! Light/dark theme controller.
//!
//! Owns the persisted preference and the optional toggle control. The theme
//! is mirrored onto `<html>` and `<body>` so stylesheets can key off either.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::config::Config;
use crate::error::Error;
use crate::page::{Page, Store};
use crate::theme::Theme;

pub struct ThemeController<P: Page, S: Store> {
    config: Rc<Config>,
    store: S,
    toggle: Option<P::Element>,
}

impl<P: Page, S: Store> ThemeController<P, S> {
    /// Bind to `store` and look up the toggle control once.
    pub fn new(page: &P, store: S, config: Rc<Config>) -> Self {
        let toggle = page.element_by_id(&config.toggle_id);
        if toggle.is_none() {
            log::debug!("theme toggle #{} not on page", config.toggle_id);
        }
        Self { config, store, toggle }
    }

    #[must_use]
    pub fn toggle_element(&self) -> Option<&P::Element> {
        self.toggle.as_ref()
    }

    /// The theme startup would apply: the stored preference, or the default
    /// when nothing usable is stored.
    pub fn stored(&self) -> Theme {
        match self.store.get(&self.config.storage_key) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => theme,
                Err(err) => {
                    log::debug!("ignoring stored preference: {err}");
                    self.config.default_theme
                }
            },
            Ok(None) => self.config.default_theme,
            Err(err) => {
                log::warn!("reading theme preference failed: {err}");
                self.config.default_theme
            }
        }
    }

    /// The theme currently on the root element, if recognized.
    pub fn current(&self, page: &P) -> Option<Theme> {
        let root = page.root()?;
        let raw = page.attribute(&root, &self.config.theme_attribute)?;
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::debug!("root carries {err}");
                None
            }
        }
    }

    /// Put `theme` on root and body, persist it, and sync the toggle class.
    ///
    /// A failed storage write is logged and does not stop the page update.
    pub fn apply(&self, page: &P, theme: Theme) -> Result<(), Error> {
        let value = theme.as_str();
        for element in [page.root(), page.body()].into_iter().flatten() {
            page.set_attribute(&element, &self.config.theme_attribute, value)?;
        }
        if let Err(err) = self.store.set(&self.config.storage_key, value) {
            log::warn!("persisting theme preference failed: {err}");
        }
        if let Some(toggle) = &self.toggle {
            page.set_class(toggle, &self.config.toggle_dark_class, theme.is_dark())?;
        }
        Ok(())
    }

    /// Apply the stored preference. Returns the theme applied.
    pub fn init(&self, page: &P) -> Result<Theme, Error> {
        let theme = self.stored();
        self.apply(page, theme)?;
        Ok(theme)
    }

    /// Flip the theme read from the root element. Returns the new theme.
    pub fn toggle(&self, page: &P) -> Result<Theme, Error> {
        let current = page.root().and_then(|root| page.attribute(&root, &self.config.theme_attribute));
        let next = Theme::after_toggle(current.as_deref());
        self.apply(page, next)?;
        log::debug!("theme toggled to {next}");
        Ok(next)
    }

    /// Attach the click listener to the toggle control, if present.
    ///
    /// Returns whether a listener was attached.
    pub fn install(self: Rc<Self>, page: &P) -> Result<bool, Error> {
        let Some(toggle) = self.toggle_element().cloned() else {
            return Ok(false);
        };
        let controller = Rc::clone(&self);
        page.on_click(
            &toggle,
            Rc::new(move |page: &P, _: &P::Element| {
                if let Err(err) = controller.toggle(page) {
                    log::warn!("theme toggle failed: {err}");
                }
            }),
        )?;
        Ok(true)
    }
}
