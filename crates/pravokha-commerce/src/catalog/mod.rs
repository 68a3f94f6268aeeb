//! Product catalog module.
//!
//! The catalog is the collaborator that supplies identifiers, display
//! attributes, stock tables and prices at the moment a shopper adds to
//! cart; the cart snapshots what it needs and never re-queries.

mod product;
mod seed;

pub use product::{Product, ProductVariant, SizeStock};
pub use seed::seed;
