//! The declaration tree: rendered classes and properties as plain data.
//!
//! Nothing here knows about textual syntax. The renderer produces these
//! nodes and any printer can serialize them; the CLI also dumps them as
//! JSON directly.

use serde::Serialize;

use crate::types::AccessModifier;

/// The serialization requirement attached to a property annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequiredPolicy {
    Always,
    AllowNull,
    Default,
}

impl RequiredPolicy {
    /// The policy name as it appears in the emitted annotation.
    pub fn keyword(&self) -> &'static str {
        match self {
            RequiredPolicy::Always => "Always",
            RequiredPolicy::AllowNull => "AllowNull",
            RequiredPolicy::Default => "Default",
        }
    }
}

/// A serialization annotation on a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JsonAnnotation {
    pub required: RequiredPolicy,
}

/// A rendered auto-property: name, output type, optional annotation, and
/// documentation lines. Accessors are always a trivial get and set, so the
/// tree does not model them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDeclaration {
    pub name: String,
    pub type_name: String,
    pub modifier: AccessModifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<JsonAnnotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
}

/// A rendered class: documentation lines plus an ordered mix of property
/// and nested-class members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDeclaration {
    pub name: String,
    pub modifier: AccessModifier,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
    pub members: Vec<MemberDeclaration>,
}

/// One member of a class, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberDeclaration {
    Property(PropertyDeclaration),
    Class(ClassDeclaration),
}

/// The root of the declaration tree: using directives, an optional
/// namespace wrapper, and the root class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompilationUnit {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub usings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub root: ClassDeclaration,
}
