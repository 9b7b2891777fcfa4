//! Docblock tag lookup.
//!
//! Every tag-driven field (deprecation, `@return`, `@var`, per-argument
//! `@param`) goes through [`find_tags`], which matches the direct `tag`
//! children of a node's `docblock` on attribute equality.

use crate::dom::Element;

/// Tags under `node`'s docblock whose attributes equal every `(name, value)`
/// pair in `criteria`. Returns them in document order; empty when the node
/// has no docblock or nothing matches.
pub fn find_tags<'a>(node: &'a Element, criteria: &[(&str, &str)]) -> Vec<&'a Element> {
    let Some(docblock) = node.child("docblock") else {
        return Vec::new();
    };
    docblock
        .children("tag")
        .filter(|tag| {
            criteria
                .iter()
                .all(|(key, value)| tag.attr(key) == Some(*value))
        })
        .collect()
}

/// First tag matching `criteria`, if any.
pub fn find_tag<'a>(node: &'a Element, criteria: &[(&str, &str)]) -> Option<&'a Element> {
    find_tags(node, criteria).into_iter().next()
}
