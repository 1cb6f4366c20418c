pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod metadata;
pub mod shell;

pub use catalog::{Catalog, DuplicatePolicy, Isbn, Record};
pub use error::{BookshelfError, Result};
