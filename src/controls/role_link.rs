//! Active-state tracking for role links.
//!
//! Links that share a group name are mutually exclusive. A link without a
//! group clears every role link on the page when activated.

#[cfg(test)]
#[path = "role_link_test.rs"]
mod role_link_test;

use std::rc::Rc;

use crate::config::Config;
use crate::error::Error;
use crate::page::Page;
use crate::selector::Selector;

pub struct RoleLinkTracker {
    config: Rc<Config>,
}

impl RoleLinkTracker {
    #[must_use]
    pub fn new(config: Rc<Config>) -> Self {
        Self { config }
    }

    /// Links whose active class is cleared when `link` is activated.
    ///
    /// An empty group attribute counts as no group.
    pub fn scope<P: Page>(&self, page: &P, link: &P::Element) -> Selector {
        match page.attribute(link, &self.config.role_group_attribute) {
            Some(group) if !group.is_empty() => self.config.role_link_in_group(&group),
            _ => self.config.role_link(),
        }
    }

    /// Activate the role link enclosing `target`.
    ///
    /// Returns the activated link, or `None` when the click landed outside
    /// every role link.
    pub fn activate<P: Page>(&self, page: &P, target: &P::Element) -> Result<Option<P::Element>, Error> {
        let Some(link) = page.closest(target, &self.config.role_link())? else {
            return Ok(None);
        };
        for other in page.select_all(&self.scope(page, &link))? {
            page.set_class(&other, &self.config.active_class, false)?;
        }
        page.set_class(&link, &self.config.active_class, true)?;
        Ok(Some(link))
    }

    /// Attach the single document-level listener.
    pub fn install<P: Page>(self: Rc<Self>, page: &P) -> Result<(), Error> {
        let tracker = Rc::clone(&self);
        page.on_document_click(Rc::new(move |page: &P, target: &P::Element| {
            if let Err(err) = tracker.activate(page, target) {
                log::warn!("role link activation failed: {err}");
            }
        }))
    }
}
