//! Integration tests exercising the public API surface
//!
//! Covers the serialized wire shape consumers embed in API responses,
//! including the explicit-null contract for absent page links.

use api_pagination::{page_info, Error, PageInfo, Paginator};
use serde_json::json;

// ============================================================================
// Serialized Shape Tests
// ============================================================================

#[test]
fn test_serializes_to_fixed_nested_shape() {
    let info = Paginator::new(50, 10).page_info(2).unwrap();
    let value = serde_json::to_value(&info).unwrap();

    assert_eq!(
        value,
        json!({
            "overall": {
                "first_page": 1,
                "last_page": 5,
                "pages": 5,
                "total": 50,
            },
            "page": {
                "current_page": 2,
                "previous_page": 1,
                "next_page": 3,
            },
        })
    );
}

#[test]
fn test_absent_links_serialize_as_explicit_nulls() {
    let info = Paginator::new(50, 100).page_info(1).unwrap();
    let value = serde_json::to_value(&info).unwrap();

    // The keys must be present with null values, never omitted
    assert_eq!(
        value,
        json!({
            "overall": {
                "first_page": 1,
                "last_page": 1,
                "pages": 1,
                "total": 50,
            },
            "page": {
                "current_page": 1,
                "previous_page": null,
                "next_page": null,
            },
        })
    );
}

#[test]
fn test_deserializes_from_wire_shape() {
    let value = json!({
        "overall": {"first_page": 1, "last_page": 5, "pages": 5, "total": 45},
        "page": {"current_page": 5, "previous_page": 4, "next_page": null},
    });

    let info: PageInfo = serde_json::from_value(value).unwrap();
    assert_eq!(info.overall.total, 45);
    assert_eq!(info.page.previous_page, Some(4));
    assert_eq!(info.page.next_page, None);
}

// ============================================================================
// Convenience Function Tests
// ============================================================================

#[test]
fn test_one_call_page_info() {
    let info = page_info(1, 50, 100).unwrap();
    assert_eq!(info.overall.pages, 1);
    assert_eq!(info.page.current_page, 1);
    assert_eq!(info.page.previous_page, None);
    assert_eq!(info.page.next_page, None);
}

#[test]
fn test_one_call_page_info_propagates_errors() {
    let err = page_info(1, 50, 0).unwrap_err();
    assert_eq!(err, Error::ZeroItemsPerPage);
    assert_eq!(err.to_string(), "items_per_page must be positive, got 0");
}

// ============================================================================
// Shared Instance Tests
// ============================================================================

#[test]
fn test_paginator_is_reusable_and_copyable() {
    let paginator = Paginator::new(45, 10);
    let copy = paginator;

    // Both handles answer from the same immutable inputs
    assert_eq!(paginator.page_count().unwrap(), 5);
    assert_eq!(copy.page_info(3).unwrap().overall.last_page, 5);
    assert_eq!(paginator.page_info(3).unwrap(), copy.page_info(3).unwrap());
}

#[test]
fn test_paginator_shared_across_threads() {
    let paginator = Paginator::new(1000, 25);

    let handles: Vec<_> = (1..=4)
        .map(|page| std::thread::spawn(move || paginator.page_info(page).unwrap()))
        .collect();

    for (page, handle) in (1..=4).zip(handles) {
        let info = handle.join().unwrap();
        assert_eq!(info.page.current_page, page);
        assert_eq!(info.overall.pages, 40);
    }
}
