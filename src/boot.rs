//! Once-per-page installation guard.
//!
//! Listeners attached by a second boot would run alongside the first set;
//! two toggle listeners flip the theme twice per click and cancel out.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct BootGuard {
    booted: Cell<bool>,
}

impl BootGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self { booted: Cell::new(false) }
    }

    /// Claim the page. Only the first call returns `true`.
    pub fn claim(&self) -> bool {
        !self.booted.replace(true)
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.booted.get()
    }
}
