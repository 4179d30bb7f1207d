//! Pagination contract checks.
//!
//! `Page::slice` mirrors the Platform API's pagination contract and backs
//! the endpoints that return full datasets (wishlist). These tests walk
//! the contract end to end.

#![allow(clippy::unwrap_used)]

use bristle_core::Page;

#[test]
fn test_walking_all_pages_yields_every_item_once() {
    let items: Vec<i32> = (1..=23).collect();
    let per_page = 5;

    let first = Page::slice(items.clone(), 1, per_page);
    let mut collected = Vec::new();
    let mut page_number = 1;
    loop {
        let page = Page::slice(items.clone(), page_number, per_page);
        collected.extend(page.items.iter().copied());
        if !page.has_next() {
            break;
        }
        page_number += 1;
    }

    assert_eq!(collected, items);
    assert_eq!(page_number, first.total_pages);
}

#[test]
fn test_page_past_the_end_is_empty_with_totals_intact() {
    let page = Page::slice((1..=8).collect::<Vec<_>>(), 99, 4);
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 8);
    assert_eq!(page.total_pages, 2);
    assert!(!page.has_next());
}

#[test]
fn test_metadata_survives_mapping_to_view_rows() {
    let page = Page::slice((1..=9).collect::<Vec<_>>(), 2, 4).map(|n| format!("row-{n}"));
    assert_eq!(page.items, vec!["row-5", "row-6", "row-7", "row-8"]);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_prev());
    assert!(page.has_next());
}

#[test]
fn test_single_page_dataset_has_no_neighbors() {
    let page = Page::slice(vec!["only"], 1, 20);
    assert!(!page.has_next());
    assert!(!page.has_prev());
    assert_eq!(page.total_pages, 1);
}
