//! Test helper functions for integration tests

#![allow(dead_code)]

use bookshelf::{Catalog, Record};
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A record whose payload is derived from its id
pub fn book(isbn: u64) -> Record {
    Record::new(
        isbn,
        format!("Title {isbn}"),
        format!("Author {isbn}"),
        format!("Description {isbn}"),
    )
}

/// Ids of an in-order enumeration
pub fn isbns(catalog: &Catalog) -> Vec<u64> {
    catalog.enumerate().iter().map(|r| r.isbn.value()).collect()
}

/// Deterministic pseudo-random ids (64-bit LCG), so runs are reproducible
pub fn pseudo_random_ids(seed: u64, count: usize, modulo: u64) -> Vec<u64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) % modulo + 1
        })
        .collect()
}
