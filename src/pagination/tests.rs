//! Tests for pagination module

use super::*;
use crate::database::{RecordStore, StuffDatabase};
use crate::error::Result;
use crate::types::Stuff;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use test_case::test_case;

/// Vec-backed store that counts how often it is queried
struct CountingStore {
    records: Vec<Stuff>,
    queries: AtomicUsize,
}

impl CountingStore {
    fn with_records(n: i64) -> Self {
        Self {
            records: (1..=n)
                .map(|id| Stuff {
                    id,
                    name: format!("Stuff Item {id}"),
                    description: None,
                })
                .collect(),
            queries: AtomicUsize::new(0),
        }
    }

    fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl RecordStore for CountingStore {
    fn fetch_window(&self, window: PageWindow) -> Result<Vec<Stuff>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .iter()
            .skip(usize::try_from(window.offset).unwrap_or(usize::MAX))
            .take(window.limit as usize)
            .cloned()
            .collect())
    }
}

fn seeded_service(n: usize) -> PaginationService<StuffDatabase> {
    let db = StuffDatabase::open_in_memory().unwrap();
    db.seed_demo(n).unwrap();
    PaginationService::new(db)
}

fn ids(items: &[Stuff]) -> Vec<i64> {
    items.iter().map(|s| s.id).collect()
}

// ============================================================================
// PageNumber Tests
// ============================================================================

#[test]
fn test_page_number_rejects_below_one() {
    for page in [0, -1, i64::MIN] {
        let err = PageNumber::new(page).unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), INVALID_PAGE_MESSAGE);
    }
}

#[test]
fn test_page_number_has_no_upper_bound() {
    let page = PageNumber::new(i64::MAX).unwrap();
    assert_eq!(page.get(), i64::MAX as u64);
}

#[test_case(None, Some(1) ; "missing defaults to first page")]
#[test_case(Some("3"), Some(3) ; "plain integer")]
#[test_case(Some(" 2 "), Some(2) ; "surrounding whitespace")]
#[test_case(Some("0"), None ; "zero")]
#[test_case(Some("-4"), None ; "negative")]
#[test_case(Some("abc"), None ; "not a number")]
#[test_case(Some("1.5"), None ; "fraction")]
#[test_case(Some(""), None ; "empty value")]
#[test_case(Some("99999999999999999999"), None ; "overflows i64")]
fn test_page_number_parse(raw: Option<&str>, expected: Option<u64>) {
    let parsed = PageNumber::parse(raw);
    match expected {
        Some(page) => assert_eq!(parsed.unwrap().get(), page),
        None => {
            let err = parsed.unwrap_err();
            assert!(err.is_client_error());
            assert_eq!(err.to_string(), INVALID_PAGE_MESSAGE);
        }
    }
}

#[test]
fn test_page_number_navigation() {
    let first = PageNumber::FIRST;
    assert!(first.is_first());
    assert!(first.previous().is_none());

    let second = first.next();
    assert_eq!(second.get(), 2);
    assert_eq!(second.previous(), Some(first));
    assert_eq!(second.to_string(), "2");
}

#[test]
fn test_page_number_serde() {
    let page: PageNumber = serde_json::from_str("4").unwrap();
    assert_eq!(page.get(), 4);
    assert_eq!(serde_json::to_string(&page).unwrap(), "4");
    assert!(serde_json::from_str::<PageNumber>("0").is_err());
}

// ============================================================================
// PageWindow Tests
// ============================================================================

#[test]
fn test_window_for_pages() {
    assert_eq!(
        PageNumber::FIRST.window(),
        PageWindow {
            offset: 0,
            limit: PAGE_SIZE
        }
    );
    assert_eq!(PageNumber::new(3).unwrap().window().offset, 20);
}

#[test]
fn test_window_saturates_for_huge_pages() {
    let window = PageNumber::new(i64::MAX).unwrap().window();
    assert_eq!(window.offset, u64::MAX);
    assert_eq!(window.limit, PAGE_SIZE);
}

#[test]
fn test_is_last_page() {
    assert!(is_last_page(0));
    assert!(is_last_page(9));
    assert!(!is_last_page(10));
}

// ============================================================================
// PaginationService Tests
// ============================================================================

#[test_case(0, 1 ; "empty store")]
#[test_case(5, 1 ; "partial first page")]
#[test_case(10, 1 ; "exactly one page")]
#[test_case(10, 2 ; "one page past a full page")]
#[test_case(12, 1 ; "first of two")]
#[test_case(12, 2 ; "short second page")]
#[test_case(12, 3 ; "past the end")]
#[test_case(25, 3 ; "third page")]
#[test_case(25, 100 ; "far past the end")]
fn test_page_length_matches_formula(n: usize, page: i64) {
    let service = seeded_service(n);
    let items = service.get_page(page).unwrap();

    let skipped = (page as usize - 1) * PAGE_SIZE as usize;
    let expected = n.saturating_sub(skipped).min(PAGE_SIZE as usize);
    assert_eq!(items.len(), expected);
}

#[test]
fn test_pages_cover_store_in_order() {
    let service = seeded_service(12);

    assert_eq!(ids(&service.get_page(1).unwrap()), (1..=10).collect::<Vec<_>>());
    assert_eq!(ids(&service.get_page(2).unwrap()), vec![11, 12]);
    assert!(service.get_page(3).unwrap().is_empty());
}

#[test]
fn test_first_page_names() {
    let service = seeded_service(12);
    let items = service.get_page(1).unwrap();

    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.name, format!("Stuff Item {}", i + 1));
    }
}

#[test]
fn test_invalid_page_never_queries_store() {
    let store = Arc::new(CountingStore::with_records(12));
    let service = PaginationService::new(Arc::clone(&store));

    assert!(service.get_page(0).is_err());
    assert!(service.get_page(-7).is_err());
    assert!(service.get_page_from_query(Some("nope")).is_err());
    assert_eq!(store.queries(), 0);

    service.get_page(1).unwrap();
    assert_eq!(store.queries(), 1);
}

#[test]
fn test_get_page_is_idempotent() {
    let service = seeded_service(17);

    let first = service.get_page(2).unwrap();
    let second = service.get_page(2).unwrap();
    assert_eq!(first, second);
    assert_eq!(ids(&first), (11..=17).collect::<Vec<_>>());
}

#[test]
fn test_huge_page_is_empty_not_error() {
    let store = CountingStore::with_records(12);
    let service = PaginationService::new(store);

    assert!(service.get_page(i64::MAX).unwrap().is_empty());
}

#[test]
fn test_get_page_from_query_defaults_to_first() {
    let service = seeded_service(3);
    let items = service.get_page_from_query(None).unwrap();
    assert_eq!(ids(&items), vec![1, 2, 3]);
}
