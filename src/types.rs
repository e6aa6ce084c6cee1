//! Construction options and shared vocabulary for the build and render phases.

use serde::Serialize;
use serde_json::Value;

use crate::names::NameAllocator;

/// Default cap on schema nesting depth during symbol building.
///
/// Deep enough for any hand-written schema while keeping recursion far away
/// from stack exhaustion on generated or hostile input.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Access level attached to every generated declaration.
///
/// Only `Public` is ever produced today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    #[default]
    Public,
}

impl AccessModifier {
    /// The C# keyword for this modifier.
    pub fn keyword(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
        }
    }
}

/// Options for building the symbol tree.
#[derive(Debug, Clone)]
pub struct BuildOptions<'a> {
    /// Class name for the root symbol. Overrides the schema title and
    /// suppresses placeholder-name allocation.
    pub root_name: Option<String>,
    /// Maximum allowed schema nesting depth.
    pub max_depth: usize,
    /// Allocator for placeholder class names when the schema has no title.
    /// Defaults to the process-wide allocator; supply a local one for
    /// deterministic naming.
    pub allocator: &'a NameAllocator,
}

impl Default for BuildOptions<'static> {
    fn default() -> Self {
        BuildOptions {
            root_name: None,
            max_depth: DEFAULT_MAX_DEPTH,
            allocator: NameAllocator::global(),
        }
    }
}

impl BuildOptions<'static> {
    /// Create build options with the defaults: no root-name override, the
    /// default depth cap, and the process-wide name allocator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> BuildOptions<'a> {
    /// Set the class name used for the root symbol.
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    /// Set the maximum allowed schema nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Use an explicit name allocator instead of the process-wide one.
    pub fn allocator<'b>(self, allocator: &'b NameAllocator) -> BuildOptions<'b> {
        BuildOptions {
            root_name: self.root_name,
            max_depth: self.max_depth,
            allocator,
        }
    }
}

/// Options for rendering a symbol tree into a declaration tree.
///
/// The recognized set is closed: a namespace wrapper and the serialization
/// annotation switch. Nothing else is configurable.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Namespace to wrap the root class in. Empty or absent means no wrapper.
    pub namespace: Option<String>,
    /// When true, every rendered property carries a `JsonProperty`
    /// serialization annotation.
    pub json_serializable: bool,
}

impl RenderOptions {
    /// Create render options with no namespace and annotations disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace wrapping the root class.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Enable or disable serialization annotations.
    pub fn json_serializable(mut self, enabled: bool) -> Self {
        self.json_serializable = enabled;
        self
    }

    /// The namespace to emit, if one was configured and is non-empty.
    pub fn wrapping_namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(12)), "number");
        assert_eq!(json_type_name(&json!("s")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn access_modifier_keyword() {
        assert_eq!(AccessModifier::Public.keyword(), "public");
        assert_eq!(AccessModifier::default(), AccessModifier::Public);
    }

    #[test]
    fn build_options_defaults() {
        let options = BuildOptions::new();
        assert!(options.root_name.is_none());
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn build_options_builder() {
        let options = BuildOptions::new().root_name("Widget").max_depth(4);
        assert_eq!(options.root_name.as_deref(), Some("Widget"));
        assert_eq!(options.max_depth, 4);
    }

    #[test]
    fn build_options_with_local_allocator() {
        let allocator = NameAllocator::new();
        let options = BuildOptions::new().allocator(&allocator);
        assert_eq!(options.allocator.next_class_name(), "Class0");
    }

    #[test]
    fn render_options_defaults() {
        let options = RenderOptions::new();
        assert!(options.namespace.is_none());
        assert!(!options.json_serializable);
        assert!(options.wrapping_namespace().is_none());
    }

    #[test]
    fn empty_namespace_does_not_wrap() {
        let options = RenderOptions::new().namespace("");
        assert!(options.wrapping_namespace().is_none());

        let options = RenderOptions::new().namespace("Hoge.Foo");
        assert_eq!(options.wrapping_namespace(), Some("Hoge.Foo"));
    }
}
