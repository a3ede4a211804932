//! Word-vector loading and similarity lookups.
//!
//! Loads GloVe-format text files into memory and answers nearest-neighbour
//! queries by cosine similarity. Keyword expansion treats the whole store as
//! optional: when no model file is configured or loading fails, vector-based
//! expansion is simply disabled.

/// Error types for vector loading.
pub mod error;
/// The in-memory vector store.
pub mod store;

pub use error::{Result, VectorError};
pub use store::VectorStore;
