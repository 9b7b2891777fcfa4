//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the catalog model directly. Absent fields stay `null`.

use crate::model::Catalog;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(catalog).context("failed to serialize catalog")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
