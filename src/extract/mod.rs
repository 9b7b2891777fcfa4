//! Extraction — turns reflection elements into records.
//!
//! Member extractors live in [`member`], the class-level aggregation with
//! the own/inherited split in [`class`]. None of these fail: a missing
//! element, attribute or tag yields `None` (or `false`).

pub mod class;
pub mod member;

pub use class::new_class;
pub use member::{new_argument, new_constant, new_method, new_property};

use crate::dom::Element;
use crate::query::find_tag;

/// Owned copy of `value`, or `None` when it is missing or empty.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Text of the first `name` child, `None` when missing or empty.
pub fn child_value(node: &Element, name: &str) -> Option<String> {
    non_empty(node.child_text(name))
}

/// Attribute value, `None` when missing or empty.
pub fn attr_value(node: &Element, name: &str) -> Option<String> {
    non_empty(node.attr(name))
}

/// `Some(keyword)` when the attribute named `keyword` is exactly `"true"`.
pub fn keyword(node: &Element, keyword: &str) -> Option<String> {
    (node.attr(keyword) == Some("true")).then(|| keyword.to_string())
}

pub fn is_deprecated(node: &Element) -> bool {
    find_tag(node, &[("name", "deprecated")]).is_some()
}

/// Docblock description.
pub fn summary(node: &Element) -> Option<String> {
    node.child("docblock")
        .and_then(|docblock| child_value(docblock, "description"))
}

/// Docblock long-description.
pub fn narrative(node: &Element) -> Option<String> {
    node.child("docblock")
        .and_then(|docblock| child_value(docblock, "long-description"))
}

pub fn inherited_from(node: &Element) -> Option<String> {
    child_value(node, "inherited_from")
}

/// Strip leading namespace separators: `\Foo\Bar` → `Foo\Bar`.
pub fn strip_namespace(name: &str) -> &str {
    name.trim_start_matches('\\')
}
