use super::*;
use crate::config::Config;
use crate::controls::PageControls;
use crate::mem::{MemPage, MemStore};
use crate::page::Page;

#[test]
fn first_claim_wins() {
    let guard = BootGuard::new();
    assert!(!guard.is_claimed());
    assert!(guard.claim());
    assert!(!guard.claim());
    assert!(guard.is_claimed());
}

#[test]
fn guarded_second_boot_keeps_toggle_working() {
    let page = MemPage::new();
    let toggle = page.append(page.body_id(), "button", &[("id", "theme-toggle")]);
    let guard = BootGuard::new();

    for _ in 0..2 {
        if guard.claim() {
            PageControls::install(&page, MemStore::new(), Config::default()).unwrap();
        }
    }

    assert_eq!(page.listener_count(toggle), 1);
    page.click(toggle);
    assert_eq!(page.attribute(&page.root().unwrap(), "data-theme").as_deref(), Some("dark"));
}
