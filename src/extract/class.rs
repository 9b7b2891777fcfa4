//! Class-level extraction: shell fields plus the own/inherited member split.

use super::member::{new_constant, new_method, new_property};
use super::{attr_value, child_value, is_deprecated, keyword, narrative, strip_namespace, summary};
use crate::dom::Element;
use crate::model::*;
use std::collections::BTreeMap;

/// Build the record for a `class`, `interface` or `trait` element.
///
/// Returns `None` for any other element. Constants, properties and methods
/// are each extracted and then routed by `inherited_from`: set means the
/// member lands in [`ClassRecord::inherited`], unset means it is declared on
/// this type. All six maps come out sorted by member name.
pub fn new_class(node: &Element) -> Option<ClassRecord> {
    let kind: ClassKind = node.name.parse().ok()?;

    let (constants, inherited_constants) = partition(node.children("constant").map(new_constant));
    let (properties, inherited_properties) =
        partition(node.children("property").map(new_property));
    let (methods, inherited_methods) = partition(node.children("method").map(new_method));

    let full_name = strip_namespace(node.child_text("full_name").unwrap_or_default()).to_string();
    tracing::trace!(
        class = %full_name,
        constants = constants.len(),
        properties = properties.len(),
        methods = methods.len(),
        inherited = inherited_constants.len() + inherited_properties.len() + inherited_methods.len(),
        "extracted members"
    );

    Some(ClassRecord {
        full_name,
        package: attr_value(node, "package"),
        namespace: attr_value(node, "namespace"),
        name: child_value(node, "name"),
        kind,
        is_deprecated: is_deprecated(node),
        summary: summary(node),
        narrative: narrative(node),
        is_final: keyword(node, "final"),
        is_abstract: keyword(node, "abstract"),
        extends: type_names(node, "extends"),
        implements: type_names(node, "implements"),
        constants,
        properties,
        methods,
        inherited: Inherited {
            constants: inherited_constants,
            properties: inherited_properties,
            methods: inherited_methods,
        },
    })
}

/// Split members into (declared, inherited), each keyed and sorted by name.
/// A later member with a duplicate name replaces the earlier one.
pub fn partition<T: Member>(
    members: impl IntoIterator<Item = T>,
) -> (BTreeMap<String, T>, BTreeMap<String, T>) {
    let mut own = BTreeMap::new();
    let mut inherited = BTreeMap::new();
    for member in members {
        let target = if member.inherited_from().is_some() {
            &mut inherited
        } else {
            &mut own
        };
        target.insert(member.name().to_string(), member);
    }
    (own, inherited)
}

/// Stripped, non-empty texts of every `name` child (`extends`, `implements`).
fn type_names(node: &Element, name: &str) -> Vec<String> {
    node.children(name)
        .map(|child| strip_namespace(child.text()))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
