//! Testing utilities for tabnav
//!
//! Shared fixtures for the unit and integration tests. Only available
//! when compiled with `cfg(test)`.

use crate::tabs::{TabId, TabList};

/// A tab list together with the ids of its tabs, in push order
pub struct Fixture {
    pub list: TabList,
    pub ids: Vec<TabId>,
}

/// Five tabs on distinct `example.com` subdomains, first tab selected
///
/// The shared domain makes `"example.com"` an ambiguous filter while each
/// subdomain (`a.example.com` and so on) matches exactly one tab.
#[must_use]
pub fn five_tabs() -> Fixture {
    let mut list = TabList::new();
    let tabs = [
        ("Alpha", "https://a.example.com/"),
        ("Beta", "https://b.example.com/"),
        ("Gamma", "https://c.example.com/"),
        ("Delta", "https://d.example.com/"),
        ("Epsilon", "https://e.example.com/"),
    ];
    let ids = tabs
        .iter()
        .map(|(title, url)| list.push(*title, *url))
        .collect();
    Fixture { list, ids }
}
