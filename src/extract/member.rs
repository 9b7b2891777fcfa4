//! Member extractors: constants, properties, methods and their arguments.

use super::{attr_value, child_value, inherited_from, is_deprecated, keyword, narrative, summary};
use crate::dom::Element;
use crate::model::*;
use crate::query::{find_tag, find_tags};
use indexmap::IndexMap;

pub fn new_constant(node: &Element) -> ConstantRecord {
    ConstantRecord {
        name: name(node),
        inherited_from: inherited_from(node),
        is_deprecated: is_deprecated(node),
        summary: summary(node),
        narrative: narrative(node),
        ty: var_type(node),
        value: child_value(node, "value"),
    }
}

pub fn new_property(node: &Element) -> PropertyRecord {
    PropertyRecord {
        name: name(node),
        inherited_from: inherited_from(node),
        is_deprecated: is_deprecated(node),
        summary: summary(node),
        narrative: narrative(node),
        ty: var_type(node),
        visibility: attr_value(node, "visibility"),
        is_static: keyword(node, "static"),
        default: child_value(node, "default"),
    }
}

pub fn new_method(node: &Element) -> MethodRecord {
    MethodRecord {
        name: name(node),
        inherited_from: inherited_from(node),
        is_deprecated: is_deprecated(node),
        summary: summary(node),
        narrative: narrative(node),
        returns: return_record(node),
        visibility: attr_value(node, "visibility"),
        is_final: keyword(node, "final"),
        is_abstract: keyword(node, "abstract"),
        is_static: keyword(node, "static"),
        arguments: arguments(node),
    }
}

/// Arguments of a method in declaration order, each paired with its
/// `@param` tag.
pub fn arguments(method: &Element) -> IndexMap<String, ArgumentRecord> {
    let params = find_tags(method, &[("name", "param")]);
    let mut arguments = IndexMap::new();
    for node in method.children("argument") {
        let argument = new_argument(node, &params);
        arguments.insert(argument.name.clone(), argument);
    }
    arguments
}

/// Build an argument record. A structural `<type>` always wins over the
/// `@param` tag's type; the summary only ever comes from the tag.
pub fn new_argument(node: &Element, params: &[&Element]) -> ArgumentRecord {
    let name = name(node);
    let param = params
        .iter()
        .find(|tag| tag.attr("variable") == Some(name.as_str()));

    ArgumentRecord {
        summary: param.and_then(|tag| attr_value(tag, "description")),
        by_reference: node.attr("by_reference") == Some("true"),
        ty: child_value(node, "type").or_else(|| param.and_then(|tag| tag_type(tag))),
        default: child_value(node, "default"),
        name,
    }
}

/// Type declared by the first `@var` tag, read from its `<type>` child.
pub fn var_type(node: &Element) -> Option<String> {
    find_tag(node, &[("name", "var")]).and_then(|tag| child_value(tag, "type"))
}

/// `@return` tag as a record; `None` when the method has no such tag.
pub fn return_record(method: &Element) -> Option<ReturnRecord> {
    find_tag(method, &[("name", "return")]).map(|tag| ReturnRecord {
        ty: tag_type(tag).unwrap_or_default(),
        summary: tag.attr("description").unwrap_or_default().to_string(),
    })
}

/// A tag's `type` attribute, falling back to its `<type>` child.
fn tag_type(tag: &Element) -> Option<String> {
    attr_value(tag, "type").or_else(|| child_value(tag, "type"))
}

fn name(node: &Element) -> String {
    node.child_text("name").unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn parse(xml: &str) -> Document {
        Document::parse(xml).unwrap()
    }

    fn param_tags() -> Document {
        parse(
            r#"<docs>
                <tag name="param" description="Bar" type="string" variable="$bar"><type>string</type></tag>
                <tag name="param" description="Foo" type="array" variable="$foo"><type>array</type></tag>
                <tag name="param" description="Baz" type="int" variable="$baz"><type>int</type></tag>
            </docs>"#,
        )
    }

    #[test]
    fn argument_takes_summary_from_matching_param() {
        let tags = param_tags();
        let params: Vec<&Element> = tags.root().children("tag").collect();
        let node = parse(
            r#"<argument by_reference="true">
                <name>$foo</name>
                <default>array()</default>
                <type>array</type>
            </argument>"#,
        );

        let argument = new_argument(node.root(), &params);
        assert_eq!(
            argument,
            ArgumentRecord {
                name: "$foo".to_string(),
                summary: Some("Foo".to_string()),
                by_reference: true,
                ty: Some("array".to_string()),
                default: Some("array()".to_string()),
            }
        );
    }

    #[test]
    fn structural_type_beats_param_type() {
        let tags = param_tags();
        let params: Vec<&Element> = tags.root().children("tag").collect();
        let node = parse("<argument><name>$bar</name><type>int</type></argument>");
        assert_eq!(new_argument(node.root(), &params).ty.as_deref(), Some("int"));
    }

    #[test]
    fn param_type_fills_missing_structural_type() {
        let tags = param_tags();
        let params: Vec<&Element> = tags.root().children("tag").collect();
        let node = parse("<argument><name>$baz</name><type></type></argument>");
        assert_eq!(new_argument(node.root(), &params).ty.as_deref(), Some("int"));

        let child_only = parse(r#"<d><tag name="param" variable="$x"><type>float</type></tag></d>"#);
        let params: Vec<&Element> = child_only.root().children("tag").collect();
        let node = parse("<argument><name>$x</name></argument>");
        assert_eq!(new_argument(node.root(), &params).ty.as_deref(), Some("float"));
    }

    #[test]
    fn argument_without_any_type() {
        let node = parse("<argument><name>$x</name></argument>");
        let argument = new_argument(node.root(), &[]);
        assert_eq!(argument.ty, None);
        assert_eq!(argument.summary, None);
        assert_eq!(argument.default, None);
    }

    #[test]
    fn by_reference_requires_exact_true() {
        for (attr, expected) in [
            (r#" by_reference="true""#, true),
            (r#" by_reference="false""#, false),
            (r#" by_reference="TRUE""#, false),
            (r#" by_reference="1""#, false),
            ("", false),
        ] {
            let node = parse(&format!("<argument{attr}><name>$x</name></argument>"));
            assert_eq!(new_argument(node.root(), &[]).by_reference, expected, "{attr}");
        }
    }

    #[test]
    fn arguments_keep_declaration_order() {
        let node = parse(
            r#"<method>
                <argument><name>$foo</name><default></default><type>string</type></argument>
                <argument><name>$bar</name><default></default><type>int</type></argument>
                <argument><name>$baz</name><default></default><type>array</type></argument>
            </method>"#,
        );

        let arguments = arguments(node.root());
        let names: Vec<&str> = arguments.keys().map(String::as_str).collect();
        assert_eq!(names, ["$foo", "$bar", "$baz"]);
        assert!(arguments.values().all(|a| a.summary.is_none() && a.default.is_none()));
        assert!(arguments.values().all(|a| !a.by_reference));
        assert_eq!(arguments["$bar"].ty.as_deref(), Some("int"));
    }

    #[test]
    fn method_matches_params_by_variable() {
        let node = parse(
            r#"<method>
                <name>fooMethod</name>
                <docblock>
                    <description>Short summary.</description>
                    <long-description>Long narrative.</long-description>
                    <tag name="param" description="Bar" type="string" variable="$bar"><type>string</type></tag>
                    <tag name="param" description="Foo" type="array" variable="$foo"><type>array</type></tag>
                    <tag name="param" description="Baz" type="int" variable="$baz"><type>int</type></tag>
                </docblock>
                <argument><name>$baz</name><default></default><type>array</type></argument>
                <argument><name>$bar</name><default></default><type>int</type></argument>
                <argument><name>$foo</name><default></default><type>string</type></argument>
            </method>"#,
        );

        let method = new_method(node.root());
        assert_eq!(method.name, "fooMethod");
        assert_eq!(method.inherited_from, None);
        assert!(!method.is_deprecated);
        assert_eq!(method.summary.as_deref(), Some("Short summary."));
        assert_eq!(method.narrative.as_deref(), Some("Long narrative."));
        assert_eq!(method.returns, None);
        assert_eq!(method.visibility, None);
        assert_eq!(method.is_final, None);
        assert_eq!(method.is_abstract, None);
        assert_eq!(method.is_static, None);

        let names: Vec<&str> = method.arguments.keys().map(String::as_str).collect();
        assert_eq!(names, ["$baz", "$bar", "$foo"]);
        assert_eq!(method.arguments["$baz"].summary.as_deref(), Some("Baz"));
        assert_eq!(method.arguments["$bar"].summary.as_deref(), Some("Bar"));
        assert_eq!(method.arguments["$foo"].summary.as_deref(), Some("Foo"));
        // structural types are kept even though the tags disagree
        assert_eq!(method.arguments["$bar"].ty.as_deref(), Some("int"));
    }

    #[test]
    fn method_modifiers_and_return() {
        let node = parse(
            r#"<method final="true" abstract="false" static="true" visibility="protected">
                <name>make</name>
                <inherited_from>\Base</inherited_from>
                <docblock>
                    <tag name="deprecated"/>
                    <tag name="return" description="Returns this." type="mixed"><type>mixed</type></tag>
                </docblock>
            </method>"#,
        );

        let method = new_method(node.root());
        assert_eq!(method.inherited_from.as_deref(), Some("\\Base"));
        assert!(method.is_deprecated);
        assert_eq!(method.visibility.as_deref(), Some("protected"));
        assert_eq!(method.is_final.as_deref(), Some("final"));
        assert_eq!(method.is_abstract, None);
        assert_eq!(method.is_static.as_deref(), Some("static"));
        assert_eq!(
            method.returns,
            Some(ReturnRecord {
                ty: "mixed".to_string(),
                summary: "Returns this.".to_string(),
            })
        );
        assert!(method.arguments.is_empty());
    }

    #[test]
    fn return_tag_without_attributes() {
        let node = parse(r#"<method><docblock><tag name="return"/></docblock></method>"#);
        assert_eq!(
            return_record(node.root()),
            Some(ReturnRecord {
                ty: String::new(),
                summary: String::new(),
            })
        );

        let node = parse("<method><docblock></docblock></method>");
        assert_eq!(return_record(node.root()), None);
    }

    #[test]
    fn property_fields() {
        let node = parse(
            r#"<property static="false" visibility="public">
                <name>$foo</name>
                <default></default>
                <docblock>
                    <description>Foo summary.</description>
                    <long-description>Foo narrative.</long-description>
                    <tag name="var" line="43" description="" type="string" variable="">
                        <type>string</type>
                    </tag>
                </docblock>
            </property>"#,
        );

        assert_eq!(
            new_property(node.root()),
            PropertyRecord {
                name: "$foo".to_string(),
                inherited_from: None,
                is_deprecated: false,
                summary: Some("Foo summary.".to_string()),
                narrative: Some("Foo narrative.".to_string()),
                ty: Some("string".to_string()),
                visibility: Some("public".to_string()),
                is_static: None,
                default: None,
            }
        );
    }

    #[test]
    fn property_type_is_absent_without_var_tag() {
        let node = parse("<property><name>$foo</name><docblock></docblock></property>");
        let property = new_property(node.root());
        assert_eq!(property.ty, None);
        assert_eq!(property.visibility, None);

        let node = parse(r#"<property><docblock><tag name="var"><type>string</type></tag></docblock></property>"#);
        assert_eq!(var_type(node.root()).as_deref(), Some("string"));
    }

    #[test]
    fn var_type_reads_the_type_child_not_the_attribute() {
        let node = parse(
            r#"<property><name>$p</name><docblock>
                <tag name="var" type="mixed"><type>string</type></tag>
            </docblock></property>"#,
        );
        assert_eq!(new_property(node.root()).ty.as_deref(), Some("string"));

        let node = parse(r#"<constant><docblock><tag name="var" type="int"/></docblock></constant>"#);
        assert_eq!(new_constant(node.root()).ty, None);
    }

    #[test]
    fn constant_fields() {
        let node = parse(
            r#"<constant>
                <name>VERSION</name>
                <value>'1.0'</value>
                <inherited_from>\Base</inherited_from>
                <docblock>
                    <description>Current version.</description>
                    <tag name="var" type="string"><type>string</type></tag>
                    <tag name="deprecated" description=""/>
                </docblock>
            </constant>"#,
        );

        assert_eq!(
            new_constant(node.root()),
            ConstantRecord {
                name: "VERSION".to_string(),
                inherited_from: Some("\\Base".to_string()),
                is_deprecated: true,
                summary: Some("Current version.".to_string()),
                narrative: None,
                ty: Some("string".to_string()),
                value: Some("'1.0'".to_string()),
            }
        );
    }
}
