//! In-memory book catalog ordered by ISBN

pub mod record;
pub mod tree;

pub use record::{Isbn, Record};
pub use tree::{Catalog, DuplicatePolicy, Iter};
