use std::cell::Cell;

use super::*;

#[test]
fn new_page_has_root_and_body() {
    let page = MemPage::new();
    let root = page.root().unwrap();
    let body = page.body().unwrap();
    assert_ne!(root, body);
    assert_eq!(page.closest(&body, &Selector::tag("html")).unwrap(), Some(root));
}

#[test]
fn element_by_id_finds_first_in_document_order() {
    let page = MemPage::new();
    let first = page.append(page.body_id(), "div", &[("id", "card-1")]);
    page.append(page.body_id(), "div", &[("id", "card-1")]);
    assert_eq!(page.element_by_id("card-1"), Some(first));
    assert_eq!(page.element_by_id("card-2"), None);
}

#[test]
fn select_all_returns_document_order() {
    let page = MemPage::new();
    let outer = page.append(page.body_id(), "nav", &[("data-role-link", "")]);
    let inner = page.append(outer, "a", &[("data-role-link", "")]);
    let later = page.append(page.body_id(), "a", &[("data-role-link", "")]);
    let found = page.select_all(&Selector::attr("data-role-link")).unwrap();
    assert_eq!(found, vec![outer, inner, later]);
}

#[test]
fn select_within_excludes_scope() {
    let page = MemPage::new();
    let row = page.append(page.body_id(), "button", &[]);
    let child = page.append(row, "button", &[]);
    assert_eq!(page.select_within(&row, &Selector::tag("button")).unwrap(), vec![child]);
}

#[test]
fn closest_includes_self() {
    let page = MemPage::new();
    let link = page.append(page.body_id(), "a", &[("data-role-link", "")]);
    let icon = page.append(link, "span", &[]);
    let sel = Selector::attr("data-role-link");
    assert_eq!(page.closest(&link, &sel).unwrap(), Some(link));
    assert_eq!(page.closest(&icon, &sel).unwrap(), Some(link));
    assert_eq!(page.closest(&page.body_id(), &sel).unwrap(), None);
}

#[test]
fn set_class_adds_once_and_removes() {
    let page = MemPage::new();
    let el = page.append(page.body_id(), "a", &[("class", "nav-item")]);
    page.set_class(&el, "active", true).unwrap();
    page.set_class(&el, "active", true).unwrap();
    assert_eq!(page.attribute(&el, "class").as_deref(), Some("nav-item active"));
    page.set_class(&el, "active", false).unwrap();
    assert!(!page.has_class(&el, "active"));
    assert!(page.has_class(&el, "nav-item"));
}

#[test]
fn click_bubbles_to_ancestors_then_document() {
    let page = MemPage::new();
    let row = page.append(page.body_id(), "div", &[]);
    let button = page.append(row, "button", &[]);
    let order = Rc::new(RefCell::new(Vec::new()));

    let seen = Rc::clone(&order);
    page.on_click(&row, Rc::new(move |_: &MemPage, el: &NodeId| seen.borrow_mut().push(("row", *el)))).unwrap();
    let seen = Rc::clone(&order);
    page.on_click(&button, Rc::new(move |_: &MemPage, el: &NodeId| seen.borrow_mut().push(("button", *el))))
        .unwrap();
    let seen = Rc::clone(&order);
    page.on_document_click(Rc::new(move |_: &MemPage, el: &NodeId| seen.borrow_mut().push(("document", *el))))
        .unwrap();

    page.click(button);
    assert_eq!(*order.borrow(), vec![("button", button), ("row", row), ("document", button)]);
}

#[test]
fn handlers_may_mutate_page_during_dispatch() {
    let page = MemPage::new();
    let el = page.append(page.body_id(), "a", &[]);
    page.on_click(&el, Rc::new(|page: &MemPage, el: &NodeId| page.set_class(el, "active", true).unwrap()))
        .unwrap();
    page.click(el);
    assert!(page.has_class(&el, "active"));
    assert_eq!(page.listener_count(el), 1);
}

#[test]
fn click_without_listeners_is_harmless() {
    let page = MemPage::new();
    let el = page.append(page.body_id(), "p", &[]);
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    page.on_document_click(Rc::new(move |_: &MemPage, _: &NodeId| counter.set(counter.get() + 1))).unwrap();
    page.click(el);
    page.click(page.body_id());
    assert_eq!(hits.get(), 2);
    assert_eq!(page.document_listener_count(), 1);
}

#[test]
fn mem_store_clones_share_entries() {
    let store = MemStore::new();
    let view = store.clone();
    assert_eq!(view.get("pg-theme").unwrap(), None);
    store.set("pg-theme", "dark").unwrap();
    assert_eq!(view.get("pg-theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(MemStore::with("k", "v").get("k").unwrap().as_deref(), Some("v"));
}
