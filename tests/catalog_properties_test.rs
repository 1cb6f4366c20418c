//! Behavioral properties of the catalog tree

mod common;

use bookshelf::{Catalog, Isbn};
use common::{book, init_test_logging, isbns, pseudo_random_ids};
use pretty_assertions::assert_eq;

fn is_non_decreasing(ids: &[u64]) -> bool {
    ids.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn test_scenario_three_books_then_two_child_removal() {
    init_test_logging();
    let mut catalog = Catalog::new();

    catalog.insert(book(9780000000013));
    catalog.insert(book(9780000000020));
    catalog.insert(book(9780000000005));
    assert_eq!(
        isbns(&catalog),
        vec![9780000000005, 9780000000013, 9780000000020]
    );

    // 9780000000013 is the root with one child on each side; one more insert
    // under the right child keeps the removal in the two-child case
    catalog.insert(book(9780000000017));
    catalog.remove(Isbn::new(9780000000013));

    assert_eq!(
        isbns(&catalog),
        vec![9780000000005, 9780000000017, 9780000000020]
    );
    assert_eq!(catalog.len(), 3);
    assert!(catalog.find(Isbn::new(9780000000013)).is_none());

    // the successor's payload survived the splice
    let promoted = catalog.find(Isbn::new(9780000000017)).unwrap();
    assert_eq!(promoted, &book(9780000000017));
}

#[test]
fn test_ordering_invariant_under_mixed_operations() {
    init_test_logging();
    let inserts = pseudo_random_ids(7, 500, 300);
    let removals = pseudo_random_ids(11, 300, 300);

    let mut catalog: Catalog = inserts.iter().copied().map(book).collect();
    assert!(is_non_decreasing(&isbns(&catalog)));

    for id in removals {
        catalog.remove(Isbn::new(id));
        let ids = isbns(&catalog);
        assert!(is_non_decreasing(&ids), "order broken after removing {id}");
        assert_eq!(ids.len(), catalog.len());
    }
}

#[test]
fn test_insert_then_find() {
    let ids = pseudo_random_ids(3, 200, 1_000_000);
    let mut catalog = Catalog::new();
    for &id in &ids {
        catalog.insert(book(id));
        assert_eq!(catalog.find(Isbn::new(id)).map(|r| r.isbn), Some(Isbn::new(id)));
    }
    for &id in &ids {
        assert!(catalog.contains(Isbn::new(id)));
    }
}

#[test]
fn test_remove_of_absent_id_leaves_enumeration_unchanged() {
    let mut catalog: Catalog = [40, 20, 60, 10, 30].into_iter().map(book).collect();
    let before: Vec<_> = catalog.enumerate().into_iter().cloned().collect();

    assert!(catalog.remove(Isbn::new(25)).is_none());
    assert!(catalog.remove(Isbn::new(25)).is_none());

    let after: Vec<_> = catalog.enumerate().into_iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_two_child_removal_decreases_count_by_one() {
    let mut catalog: Catalog = [50, 25, 75, 60, 80, 55].into_iter().map(book).collect();
    let count = catalog.enumerate().len();

    let removed = catalog.remove(Isbn::new(50)).unwrap();
    assert_eq!(removed, book(50));
    assert_eq!(catalog.enumerate().len(), count - 1);

    // successor 55 is findable exactly once and keeps its own payload
    let successors: Vec<_> = catalog
        .iter()
        .filter(|r| r.isbn == Isbn::new(55))
        .collect();
    assert_eq!(successors, vec![&book(55)]);
}

#[test]
fn test_empty_catalog_behavior() {
    let mut catalog = Catalog::new();
    assert!(catalog.find(Isbn::new(9780000000013)).is_none());
    assert!(catalog.remove(Isbn::new(9780000000013)).is_none());
    assert!(catalog.enumerate().is_empty());
    assert!(catalog.is_empty());
}

#[test]
fn test_removing_everything_empties_the_catalog() {
    let ids = pseudo_random_ids(5, 100, 50);
    let mut catalog: Catalog = ids.iter().copied().map(book).collect();

    // duplicates are stored separately, so each insert needs its own remove
    for &id in &ids {
        assert!(catalog.remove(Isbn::new(id)).is_some());
    }
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn test_sorted_inserts_build_a_chain() {
    let catalog: Catalog = (1..=64).map(book).collect();
    assert_eq!(catalog.height(), 64);
    assert_eq!(isbns(&catalog), (1..=64).collect::<Vec<_>>());
}
