//! Data model for extracted API documentation — format-agnostic.
//!
//! Every optional string is `None` when the source value was empty, so a
//! renderer can tell "no summary" apart from an empty one.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// All class-like types of a document, keyed by fully-qualified name.
pub type Catalog = BTreeMap<String, ClassRecord>;

/// Kind of a class-like node, taken from its element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
    Trait,
}

impl ClassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Trait => "trait",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(ClassKind::Class),
            "interface" => Ok(ClassKind::Interface),
            "trait" => Ok(ClassKind::Trait),
            _ => Err(()),
        }
    }
}

/// A single class, interface or trait.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    /// Fully-qualified name without the leading `\`
    pub full_name: String,
    pub package: Option<String>,
    pub namespace: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: ClassKind,
    pub is_deprecated: bool,
    /// Docblock description
    pub summary: Option<String>,
    /// Docblock long-description
    pub narrative: Option<String>,
    #[serde(rename = "final")]
    pub is_final: Option<String>,
    #[serde(rename = "abstract")]
    pub is_abstract: Option<String>,
    /// Parent types; a class has at most one, an interface may extend several
    pub extends: Vec<String>,
    pub implements: Vec<String>,
    /// Members declared on this type, sorted by name
    pub constants: BTreeMap<String, ConstantRecord>,
    pub properties: BTreeMap<String, PropertyRecord>,
    pub methods: BTreeMap<String, MethodRecord>,
    /// Members carried over from an ancestor
    pub inherited: Inherited,
}

/// Members whose `inherited_from` is set, one map per member kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Inherited {
    pub constants: BTreeMap<String, ConstantRecord>,
    pub properties: BTreeMap<String, PropertyRecord>,
    pub methods: BTreeMap<String, MethodRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantRecord {
    pub name: String,
    pub inherited_from: Option<String>,
    pub is_deprecated: bool,
    pub summary: Option<String>,
    pub narrative: Option<String>,
    /// From the `@var` tag
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub name: String,
    pub inherited_from: Option<String>,
    pub is_deprecated: bool,
    pub summary: Option<String>,
    pub narrative: Option<String>,
    /// From the `@var` tag
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub visibility: Option<String>,
    #[serde(rename = "static")]
    pub is_static: Option<String>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    pub name: String,
    pub inherited_from: Option<String>,
    pub is_deprecated: bool,
    pub summary: Option<String>,
    pub narrative: Option<String>,
    #[serde(rename = "return")]
    pub returns: Option<ReturnRecord>,
    pub visibility: Option<String>,
    #[serde(rename = "final")]
    pub is_final: Option<String>,
    #[serde(rename = "abstract")]
    pub is_abstract: Option<String>,
    #[serde(rename = "static")]
    pub is_static: Option<String>,
    /// Arguments in declaration order
    pub arguments: IndexMap<String, ArgumentRecord>,
}

/// Built from a `@return` tag; both fields are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReturnRecord {
    #[serde(rename = "type")]
    pub ty: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentRecord {
    pub name: String,
    /// Matching `@param` description
    pub summary: Option<String>,
    pub by_reference: bool,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    /// Literal source text of the default value
    pub default: Option<String>,
}

/// Common view over the three member kinds, used to partition them.
pub trait Member {
    fn name(&self) -> &str;
    fn inherited_from(&self) -> Option<&str>;
}

macro_rules! impl_member {
    ($($ty:ty),*) => {
        $(
            impl Member for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn inherited_from(&self) -> Option<&str> {
                    self.inherited_from.as_deref()
                }
            }
        )*
    };
}

impl_member!(ConstantRecord, PropertyRecord, MethodRecord);
