//! Key-value persistence layer for the Pravokha storefront.
//!
//! Everything the storefront persists between sessions (the cart, the
//! recently-viewed list) goes through the [`KeyValueStore`] trait, so the
//! domain crates stay testable against the in-memory backend and portable
//! to any persistence backend.
//!
//! # Example
//!
//! ```rust
//! use pravokha_kv::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Settings {
//!     dark_mode: bool,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! cache.set("settings", &Settings { dark_mode: true }).unwrap();
//! let settings: Option<Settings> = cache.get("settings").unwrap();
//! assert!(settings.unwrap().dark_mode);
//! ```

mod cache;
mod error;
mod file;
mod memory;
mod store;

pub use cache::Cache;
pub use error::KvError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, FileStore, KeyValueStore, KvError, MemoryStore};
}
