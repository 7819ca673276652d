//! Document registry: seed loading, exact-match edits, and ordered listing.

pub mod seed;
mod store;
pub mod types;

pub use store::{DocumentApi, DocumentStore};
pub use types::{Document, DocumentError, ReplaceOutcome, SeedError};
