//! Configuration model loaded from external sources.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{PageSize, TypeConstraintError};
use crate::table::options::{TableAnchors, TableOptions};
use crate::table::viewport::DEFAULT_BREAKPOINT_PX;

/// How the console prints a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

#[derive(Clone, Debug, Deserialize, Validate, PartialEq, Eq)]
/// Per-listing table settings.
pub struct ListingSettings {
    #[validate(range(min = 1))]
    pub page_size_desktop: usize,
    /// Falls back to half the desktop size.
    #[validate(range(min = 1))]
    pub page_size_mobile: Option<usize>,
    /// Fields concatenated into each row's search text; all text when unset.
    #[serde(default)]
    pub searchable_fields: Option<Vec<String>>,
    #[serde(default)]
    pub filter_input: bool,
    #[serde(default = "default_true")]
    pub master_toggle: bool,
}

fn default_true() -> bool {
    true
}

impl ListingSettings {
    /// Primary listing: single cards, with a filter box.
    pub fn cards() -> Self {
        Self {
            page_size_desktop: 25,
            page_size_mobile: Some(12),
            searchable_fields: Some(
                [
                    "name",
                    "set_code",
                    "collector_number",
                    "condition",
                    "language",
                    "notes",
                ]
                .map(String::from)
                .to_vec(),
            ),
            filter_input: true,
            master_toggle: true,
        }
    }

    /// Secondary listing: sealed products, without a filter box.
    pub fn sealed_products() -> Self {
        Self {
            page_size_desktop: 15,
            page_size_mobile: Some(8),
            searchable_fields: Some(
                ["name", "set_code", "product_type"]
                    .map(String::from)
                    .to_vec(),
            ),
            filter_input: false,
            master_toggle: true,
        }
    }

    /// Builds controller options, naming anchors after `prefix`.
    pub fn table_options(&self, prefix: &str) -> Result<TableOptions, TypeConstraintError> {
        let desktop = PageSize::new(self.page_size_desktop)?;
        let mut options = TableOptions::new(TableAnchors::with_prefix(prefix), desktop);
        if let Some(mobile) = self.page_size_mobile {
            options = options.mobile_page_size(PageSize::new(mobile)?);
        }
        if self.filter_input {
            options = options.filter_input(format!("{prefix}-filter"));
        }
        if self.master_toggle {
            options = options.master_toggle(format!("{prefix}-select-all"));
        }
        Ok(options)
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings for the listing console.
pub struct AppConfig {
    #[serde(default = "default_breakpoint")]
    #[validate(range(min = 1))]
    pub viewport_breakpoint_px: u32,
    /// Viewport width the session starts with.
    #[serde(default = "default_viewport_width")]
    pub viewport_width_px: u32,
    /// JSON inventory snapshot.
    pub inventory_path: Option<String>,
    /// Card CSV export (TCGplayer or TCG Live) appended to the snapshot.
    pub import_csv_path: Option<String>,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default = "ListingSettings::cards")]
    #[validate(nested)]
    pub cards: ListingSettings,
    #[serde(default = "ListingSettings::sealed_products")]
    #[validate(nested)]
    pub sealed_products: ListingSettings,
}

fn default_breakpoint() -> u32 {
    DEFAULT_BREAKPOINT_PX
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_templates_dir() -> String {
    "templates/**/*".to_string()
}

#[cfg(feature = "console")]
pub use loader::{ConfigError, load_config};

#[cfg(feature = "console")]
mod loader {
    use config::Config;
    use thiserror::Error;
    use validator::{Validate, ValidationErrors};

    use super::AppConfig;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("error loading settings: {0}")]
        Source(#[from] config::ConfigError),

        #[error("invalid settings: {0}")]
        Validation(#[from] ValidationErrors),
    }

    /// Loads `{dir}/default`, then `{dir}/{app_env}` if present, then
    /// `APP_`-prefixed environment variables, and validates the result.
    pub fn load_config(dir: &str, app_env: &str) -> Result<AppConfig, ConfigError> {
        let settings = Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")))
            .add_source(config::File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config = settings.try_deserialize::<AppConfig>()?;
        app_config.validate()?;
        Ok(app_config)
    }
}
