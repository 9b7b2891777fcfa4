//! Renderer module — trait-based format dispatch.

pub mod dump;
pub mod json;

use crate::model::Catalog;
use anyhow::{anyhow, Result};

/// Trait for serializing a catalog into a specific output format.
pub trait Renderer {
    fn render(&self, catalog: &Catalog) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "dump" | "txt" => Ok(Box::new(dump::DumpRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use dump or json", format)),
    }
}
