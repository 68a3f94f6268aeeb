//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use pravokha_commerce::cart::ComboOffer;
use pravokha_commerce::money::Money;

/// Where the CLI looks for its config when `--config` isn't given.
pub const DEFAULT_CONFIG_PATH: &str = "pravokha.toml";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Storage configuration.
    pub storage: StorageConfig,

    /// Combo offer override.
    pub offer: OfferConfig,
}

/// Where persisted state lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the cart and recently-viewed files.
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".pravokha"),
        }
    }
}

/// The combo promotion, overridable without a rebuild.
///
/// Defaults to the launch promo: any 3 pieces priced 325 for a flat 949.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferConfig {
    /// Unit price that marks an item combo-eligible.
    pub unit_price: i64,
    /// Number of eligible units the bundle covers.
    pub bundle_size: i64,
    /// Flat price for the bundle.
    pub bundle_price: i64,
}

impl Default for OfferConfig {
    fn default() -> Self {
        Self {
            unit_price: 325,
            bundle_size: 3,
            bundle_price: 949,
        }
    }
}

impl OfferConfig {
    /// Build the domain offer from the configured numbers.
    pub fn to_offer(&self) -> ComboOffer {
        ComboOffer::new(
            Money::rupees(self.unit_price),
            self.bundle_size,
            Money::rupees(self.bundle_price),
        )
    }
}

impl CliConfig {
    /// Load config, falling back to defaults when no file exists.
    ///
    /// An explicitly passed path must exist; the default path is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a file.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse TOML config: {}", path))
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offer_is_three_for_949() {
        let config = CliConfig::default();
        let offer = config.offer.to_offer();
        assert_eq!(offer.unit_price, Money::rupees(325));
        assert_eq!(offer.bundle_size, 3);
        assert_eq!(offer.bundle_price, Money::rupees(949));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pravokha.toml");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.offer.bundle_price = 899;
        config.save(path).unwrap();

        let loaded = CliConfig::from_file(path).unwrap();
        assert_eq!(loaded.offer.bundle_price, 899);
        assert_eq!(loaded.offer.unit_price, 325);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[offer]\nbundle_size = 4\n").unwrap();

        let loaded = CliConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.offer.bundle_size, 4);
        assert_eq!(loaded.offer.unit_price, 325);
        assert_eq!(loaded.storage.dir, PathBuf::from(".pravokha"));
    }
}
