//! Gallery configuration.
//!
//! Handles loading, validating, and merging `gallery.toml`. User values are
//! layered on top of stock defaults, so a config file only needs the keys it
//! wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_name = "Tullips Creative Green Spaces"
//!
//! [catalog]
//! shape = "categorized"        # "categorized" or "flat"
//! image_root = "images/photos" # Prefix for every photo path
//!
//! [pagination]
//! page_size = 12               # Photos per page
//!
//! [favorites]
//! storage_key = "tullipsFavorites"
//! state_dir = ".tullips-gallery"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::catalog::{Catalog, CatalogShape};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file inside the config directory.
pub const CONFIG_FILENAME: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Site name, used as the alt-text prefix and page title.
    pub site_name: String,
    /// Which catalog definition to load and where its images live.
    pub catalog: CatalogConfig,
    /// Page size for the visible slice.
    pub pagination: PaginationConfig,
    /// Where the favorite set is persisted.
    pub favorites: FavoritesConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            site_name: "Tullips Creative Green Spaces".to_string(),
            catalog: CatalogConfig::default(),
            pagination: PaginationConfig::default(),
            favorites: FavoritesConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.page_size == 0 {
            return Err(ConfigError::Validation(
                "pagination.page_size must be at least 1".into(),
            ));
        }
        let key = self.favorites.storage_key.as_str();
        if key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "favorites.storage_key must not be empty".into(),
            ));
        }
        if key.trim() != key {
            return Err(ConfigError::Validation(
                "favorites.storage_key must not have leading or trailing whitespace".into(),
            ));
        }
        if key.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "favorites.storage_key must not contain path separators".into(),
            ));
        }
        if self.favorites.state_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "favorites.state_dir must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Build the catalog this config describes.
    pub fn build_catalog(&self) -> Catalog {
        Catalog::build(self.catalog.shape, &self.site_name, &self.catalog.image_root)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Categorized photos with tags, or the flat unclassified list.
    pub shape: CatalogShape,
    /// Directory prefix joined to every photo filename.
    pub image_root: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            shape: CatalogShape::Categorized,
            image_root: "images/photos".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { page_size: 12 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FavoritesConfig {
    /// Namespaced key the favorite ids are stored under.
    pub storage_key: String,
    /// Directory holding the file-backed store (CLI only).
    pub state_dir: String,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            storage_key: "tullipsFavorites".to_string(),
            state_dir: ".tullips-gallery".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `gallery.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `gallery.toml` in the given directory, over stock defaults.
pub fn load_config(dir: &Path) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Tullips Gallery Configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Site name. Prefixes every photo's alt text and titles the rendered page.
site_name = "Tullips Creative Green Spaces"

# ---------------------------------------------------------------------------
# Catalog
# ---------------------------------------------------------------------------
[catalog]
# "categorized": photos carry a category, subcategory and tags.
# "flat": the same photos with no classification.
shape = "categorized"

# Directory prefix joined to every photo filename.
image_root = "images/photos"

# ---------------------------------------------------------------------------
# Pagination
# ---------------------------------------------------------------------------
[pagination]
# Photos shown per page. Must be at least 1.
page_size = 12

# ---------------------------------------------------------------------------
# Favorites
# ---------------------------------------------------------------------------
[favorites]
# Key the favorite ids are stored under (a JSON array of integers).
storage_key = "tullipsFavorites"

# Directory for the file-backed store used by the command line.
state_dir = ".tullips-gallery"
"##
}
