//! Configuration model loaded from external sources.

use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::{ADMIN_PAGE_SIZE, CATALOG_PAGE_SIZE};

/// Settings shared by both storefront surfaces.
#[derive(Clone, Debug, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the backend product API.
    pub api_base_url: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Products per page on the customer catalog.
    pub catalog_page_size: usize,
    /// Products per page on the admin table.
    pub admin_page_size: usize,
}

impl StorefrontConfig {
    /// Loads settings from an optional `storefront.yaml` in the working
    /// directory plus `STOREFRONT_*` environment variables, reading `.env`
    /// first. `api_base_url` has no default and must be provided.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::builder()?
            .add_source(File::with_name("storefront").required(false))
            .add_source(Environment::with_prefix("STOREFRONT"))
            .build()?
            .try_deserialize()
    }

    /// Loads settings from a specific YAML file plus environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from(path).format(FileFormat::Yaml))
            .add_source(Environment::with_prefix("STOREFRONT"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("timeout_secs", 30u64)?
            .set_default("catalog_page_size", CATALOG_PAGE_SIZE as u64)?
            .set_default("admin_page_size", ADMIN_PAGE_SIZE as u64)
    }
}
