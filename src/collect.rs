//! Collector — the public entry point of extraction.

use crate::dom::{Document, Element};
use crate::extract::new_class;
use crate::model::{Catalog, ClassKind, ClassRecord};

/// Extract every class, interface and trait in the document.
///
/// Class-like elements are found at any depth (normally `project/file/*`).
/// The catalog is keyed by fully-qualified name; when two types share a
/// name the one later in the document wins.
pub fn collect(document: &Document) -> Catalog {
    let mut catalog = Catalog::new();
    visit(document.root(), &mut catalog);
    tracing::debug!(types = catalog.len(), "collected class-like types");
    catalog
}

fn visit(node: &Element, catalog: &mut Catalog) {
    if node.name.parse::<ClassKind>().is_ok() {
        if let Some(class) = new_class(node) {
            add(catalog, class);
        }
        // classes do not nest
        return;
    }
    for child in &node.children {
        visit(child, catalog);
    }
}

fn add(catalog: &mut Catalog, class: ClassRecord) {
    tracing::debug!(class = %class.full_name, kind = %class.kind, "extracted");
    let full_name = class.full_name.clone();
    if catalog.insert(full_name.clone(), class).is_some() {
        tracing::warn!(class = %full_name, "duplicate type definition replaced an earlier one");
    }
}
