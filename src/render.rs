//! HTML and JSON output for listings.

use tera::{Context, Tera};
use thiserror::Error;

use crate::dto::table::ListingPageData;

/// Template drawing one listing: rows, selection boxes and the page bar.
pub const LISTING_TEMPLATE: &str = "listing/table.html";

const BUNDLED_LISTING_TEMPLATE: &str = include_str!("../templates/listing/table.html");

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct ListingRenderer {
    tera: Tera,
}

impl ListingRenderer {
    /// Loads templates matching `glob`, e.g. `templates/**/*`.
    pub fn from_glob(glob: &str) -> Result<Self, RenderError> {
        let tera = Tera::new(glob)?;
        if !tera.get_template_names().any(|name| name == LISTING_TEMPLATE) {
            log::warn!("{glob} has no {LISTING_TEMPLATE}; using the bundled one");
            return Self::bundled();
        }
        Ok(Self { tera })
    }

    /// Uses the template compiled into the binary.
    pub fn bundled() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(LISTING_TEMPLATE, BUNDLED_LISTING_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render_html(&self, page: &ListingPageData<'_>) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("listing", page);
        Ok(self.tera.render(LISTING_TEMPLATE, &context)?)
    }
}

pub fn render_json(page: &ListingPageData<'_>) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(page)?)
}
