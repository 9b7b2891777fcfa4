//! Human-readable dump — one `key => value` per line, nested by indent.
//!
//! Goes through the same serialized form as the JSON renderer, so field
//! names and ordering match between the two.

use crate::model::Catalog;
use crate::render::Renderer;
use anyhow::{Context, Result};
use serde_json::Value;

pub struct DumpRenderer;

const INDENT: &str = "  ";

impl Renderer for DumpRenderer {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let value = serde_json::to_value(catalog).context("failed to serialize catalog")?;
        let mut out = String::new();
        write_value(&mut out, &value, 0);
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(map) => {
            out.push_str("{\n");
            for (key, item) in map {
                write_entry(out, &Value::String(key.clone()).to_string(), item, depth + 1);
            }
            out.push_str(&INDENT.repeat(depth));
            out.push('}');
        }
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                write_entry(out, &i.to_string(), item, depth + 1);
            }
            out.push_str(&INDENT.repeat(depth));
            out.push(']');
        }
        // scalars print as their JSON literal
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_entry(out: &mut String, key: &str, value: &Value, depth: usize) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(key);
    out.push_str(" => ");
    write_value(out, value, depth);
    out.push_str(",\n");
}
