//! Card theme swatches.
//!
//! Each swatch button names a card (by id) and a theme value. Clicking it
//! restyles the card and makes the button the only active one in its row.

#[cfg(test)]
#[path = "swatch_test.rs"]
mod swatch_test;

use std::rc::Rc;

use crate::config::Config;
use crate::error::Error;
use crate::page::Page;

pub struct CardThemeSwitcher {
    config: Rc<Config>,
}

impl CardThemeSwitcher {
    #[must_use]
    pub fn new(config: Rc<Config>) -> Self {
        Self { config }
    }

    /// Swatch buttons currently on the page.
    pub fn triggers<P: Page>(&self, page: &P) -> Result<Vec<P::Element>, Error> {
        page.select_all(&self.config.swatch_trigger())
    }

    /// Handle a click on `button`.
    ///
    /// A missing target card stops before anything changes. A button outside
    /// any swatch row still restyles its card.
    pub fn select<P: Page>(&self, page: &P, button: &P::Element) -> Result<(), Error> {
        let Some(theme) = page.attribute(button, &self.config.swatch_trigger_attribute) else {
            return Ok(());
        };
        let Some(target_id) = page.attribute(button, &self.config.swatch_target_attribute) else {
            log::debug!("swatch {theme:?} has no target");
            return Ok(());
        };
        let Some(card) = page.element_by_id(&target_id) else {
            log::debug!("swatch target #{target_id} not on page");
            return Ok(());
        };
        page.set_attribute(&card, &self.config.card_theme_attribute, &theme)?;

        let Some(row) = page.closest(button, &self.config.swatch_row())? else {
            return Ok(());
        };
        for other in page.select_within(&row, &self.config.swatch_button())? {
            page.set_class(&other, &self.config.active_class, other == *button)?;
        }
        Ok(())
    }

    /// Attach one listener per swatch button present now. Returns how many.
    pub fn install<P: Page>(self: Rc<Self>, page: &P) -> Result<usize, Error> {
        let triggers = self.triggers(page)?;
        for button in &triggers {
            let switcher = Rc::clone(&self);
            page.on_click(
                button,
                Rc::new(move |page: &P, button: &P::Element| {
                    if let Err(err) = switcher.select(page, button) {
                        log::warn!("card theme switch failed: {err}");
                    }
                }),
            )?;
        }
        Ok(triggers.len())
    }
}
