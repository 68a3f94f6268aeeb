//! Shared command context.

use anyhow::{Context as _, Result};

use pravokha_commerce::cart::CartStore;
use pravokha_commerce::catalog::{self, Product};
use pravokha_commerce::notify::{Notice, Notifier};
use pravokha_commerce::recent::RecentlyViewed;
use pravokha_kv::{Cache, FileStore};

use crate::config::CliConfig;
use crate::output::Output;

/// Everything a command needs: resolved config plus output handles.
pub struct Context {
    pub config: CliConfig,
    pub output: Output,
}

impl Context {
    /// Load config and build the context.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = CliConfig::load(config_path)?;
        output.debug(&format!("storage dir: {}", config.storage.dir.display()));
        Ok(Self { config, output })
    }

    /// The demo catalog.
    pub fn catalog(&self) -> Vec<Product> {
        catalog::seed()
    }

    /// Find a product by id, slug or SKU.
    pub fn find_product<'a>(&self, catalog: &'a [Product], needle: &str) -> Option<&'a Product> {
        catalog
            .iter()
            .find(|p| p.id.as_str() == needle || p.slug == needle || p.sku == needle)
    }

    /// Open the persistence layer under the configured directory.
    pub fn cache(&self) -> Result<Cache<FileStore>> {
        let store = FileStore::open(&self.config.storage.dir)
            .with_context(|| format!("Opening {}", self.config.storage.dir.display()))?;
        Ok(Cache::new(store))
    }

    /// Hydrate the cart with the configured offer and a console notifier.
    pub fn cart(&self) -> Result<CartStore<FileStore>> {
        Ok(CartStore::open(self.cache()?)
            .with_offer(self.config.offer.to_offer())
            .with_notifier(Box::new(ConsoleNotifier(self.output.clone()))))
    }

    /// Hydrate the recently-viewed list.
    pub fn recently_viewed(&self) -> Result<RecentlyViewed<FileStore>> {
        Ok(RecentlyViewed::open(self.cache()?))
    }
}

/// Shows cart notices the way the web UI toasts them.
pub struct ConsoleNotifier(pub Output);

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        self.0.success(&format!("{}: {}", notice.title, notice.detail));
    }
}
