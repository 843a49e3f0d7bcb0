//! Document store backends.
//!
//! [`JsonFileStore`] keeps a document as a pretty-printed JSON file and is
//! what the site runs on. [`InMemoryStore`] holds the document in memory and
//! stands in for the file in tests.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use mmds_core::{DocumentStore, StorageError};
