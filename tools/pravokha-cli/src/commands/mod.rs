//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod products;
pub mod recent;

pub use cart::CartArgs;
pub use checkout::CheckoutArgs;
pub use config::ConfigArgs;
pub use products::ProductsArgs;
pub use recent::RecentArgs;
