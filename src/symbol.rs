//! Symbol tree construction.
//!
//! The first phase of the pipeline: walk a schema document recursively and
//! produce a tree of [`Symbol`] records capturing name, declared type,
//! nullability, requiredness, and nested members. Symbols are neutral with
//! respect to any output syntax; rendering them into declarations is the
//! second phase.

use serde_json::{json, Value};

use crate::error::{describe_tokens, BuildError};
use crate::names::class_name;
use crate::types::{json_type_name, AccessModifier, BuildOptions};

/// The scalar types a schema node can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Integer,
    Number,
    Boolean,
}

impl ScalarKind {
    /// Parse a normalized type token into a scalar kind.
    pub fn from_token(token: &str) -> Option<ScalarKind> {
        match token {
            "string" => Some(ScalarKind::String),
            "integer" => Some(ScalarKind::Integer),
            "number" => Some(ScalarKind::Number),
            "boolean" => Some(ScalarKind::Boolean),
            _ => None,
        }
    }

    /// The schema type token for this kind.
    pub fn token(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Number => "number",
            ScalarKind::Boolean => "boolean",
        }
    }
}

/// The shape of a symbol: an object with ordered members, an array, or a
/// scalar.
///
/// Members live inside the `Object` variant, so a non-object symbol cannot
/// carry children by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    Object { members: Vec<Symbol> },
    Array,
    Scalar(ScalarKind),
}

/// One named value in the modeled shape.
///
/// Built once by [`parse_schema`] and immutable afterwards; the renderer
/// reads the tree without touching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Identifier from the schema property key, or the class name chosen
    /// for the root.
    pub name: String,
    /// Object, array, or scalar shape.
    pub kind: SymbolKind,
    /// True when the schema's type union included a `null` marker.
    pub nullable: bool,
    /// True when the enclosing object's required set names this member.
    /// Always true for the root.
    pub required: bool,
    /// Free-text description carried through for documentation rendering.
    pub summary: Option<String>,
    /// Access level for the rendered declaration.
    pub modifier: AccessModifier,
}

impl Symbol {
    /// A scalar symbol: required, non-nullable, no documentation.
    pub fn scalar(name: impl Into<String>, kind: ScalarKind) -> Symbol {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Scalar(kind),
            nullable: false,
            required: true,
            summary: None,
            modifier: AccessModifier::default(),
        }
    }

    /// An object symbol with the given members.
    pub fn object(name: impl Into<String>, members: Vec<Symbol>) -> Symbol {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Object { members },
            nullable: false,
            required: true,
            summary: None,
            modifier: AccessModifier::default(),
        }
    }

    /// An array symbol. Arrays are modeled but never rendered.
    pub fn array(name: impl Into<String>) -> Symbol {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Array,
            nullable: false,
            required: true,
            summary: None,
            modifier: AccessModifier::default(),
        }
    }

    /// Set the nullable flag.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Attach a documentation summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// True when this symbol is an object.
    pub fn is_object(&self) -> bool {
        matches!(self.kind, SymbolKind::Object { .. })
    }

    /// True when this symbol is an array.
    pub fn is_array(&self) -> bool {
        matches!(self.kind, SymbolKind::Array)
    }

    /// The member symbols of an object, in declaration order. Empty for
    /// non-object symbols.
    pub fn members(&self) -> &[Symbol] {
        match &self.kind {
            SymbolKind::Object { members } => members,
            _ => &[],
        }
    }

    /// The schema type token for this symbol's shape.
    pub fn type_token(&self) -> &'static str {
        match &self.kind {
            SymbolKind::Object { .. } => "object",
            SymbolKind::Array => "array",
            SymbolKind::Scalar(kind) => kind.token(),
        }
    }

    /// A JSON description of this symbol and its members, for inspection.
    pub fn to_value(&self) -> Value {
        let mut value = json!({
            "name": self.name,
            "type": self.type_token(),
            "nullable": self.nullable,
            "required": self.required,
            "modifier": self.modifier.keyword(),
        });
        if let Some(summary) = &self.summary {
            value["summary"] = json!(summary);
        }
        if let SymbolKind::Object { members } = &self.kind {
            value["members"] = Value::Array(members.iter().map(Symbol::to_value).collect());
        }
        value
    }
}

/// Build the symbol tree for a schema document.
///
/// The root schema must declare `type` as exactly `object`; a scalar,
/// array, or nullable root is rejected. The root class name comes from
/// `options.root_name` if set, else from the schema `title` converted to a
/// type-name-safe identifier, else from the options' name allocator.
///
/// # Errors
///
/// Returns `BuildError::InvalidRoot` for a non-object root, and the other
/// `BuildError` variants for faults inside the tree; those carry the
/// offending node's schema path.
pub fn parse_schema(schema: &Value, options: &BuildOptions) -> Result<Symbol, BuildError> {
    // Check the root type before naming, so a rejected root never consumes
    // an allocator index.
    let Some(declaration) = schema.get("type") else {
        return Err(BuildError::InvalidRoot {
            found: "none".to_string(),
        });
    };
    let tokens = type_tokens(declaration, "")?;
    if tokens != ["object"] {
        return Err(BuildError::InvalidRoot {
            found: describe_tokens(&tokens),
        });
    }

    let name = root_class_name(schema, options);
    build_symbol(schema, &name, true, "", 0, options)
}

/// Resolve the root class name: explicit override, then sanitized title,
/// then an allocated placeholder.
fn root_class_name(schema: &Value, options: &BuildOptions) -> String {
    if let Some(name) = &options.root_name {
        return name.clone();
    }
    if let Some(title) = schema.get("title").and_then(Value::as_str) {
        let converted = class_name(title);
        if !converted.is_empty() {
            return converted;
        }
    }
    options.allocator.next_class_name()
}

fn build_symbol(
    node: &Value,
    name: &str,
    required: bool,
    path: &str,
    depth: usize,
    options: &BuildOptions,
) -> Result<Symbol, BuildError> {
    if depth > options.max_depth {
        return Err(BuildError::DepthExceeded {
            path: path.to_string(),
            limit: options.max_depth,
        });
    }

    let Some(declaration) = node.get("type") else {
        return Err(BuildError::InvalidTypeDeclaration {
            path: format!("{}/type", path),
            actual: "nothing".to_string(),
        });
    };
    let tokens = type_tokens(declaration, path)?;
    let (token, nullable) = resolve_union(tokens, path)?;

    let summary = node
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    let kind = match token.as_str() {
        "object" => SymbolKind::Object {
            members: build_members(node, path, depth + 1, options)?,
        },
        "array" => {
            return Err(BuildError::ArrayNotImplemented {
                path: path.to_string(),
            })
        }
        token => match ScalarKind::from_token(token) {
            Some(kind) => SymbolKind::Scalar(kind),
            None => {
                return Err(BuildError::UnknownType {
                    path: path.to_string(),
                    token: token.to_string(),
                })
            }
        },
    };

    Ok(Symbol {
        name: name.to_string(),
        kind,
        nullable,
        required,
        summary,
        modifier: AccessModifier::default(),
    })
}

/// Build the member symbols of an object node, in property declaration
/// order. `depth` is the nesting depth of the members themselves.
fn build_members(
    node: &Value,
    path: &str,
    depth: usize,
    options: &BuildOptions,
) -> Result<Vec<Symbol>, BuildError> {
    let Some(properties) = node.get("properties").and_then(Value::as_object) else {
        return Ok(Vec::new());
    };
    let required = required_names(node);

    let mut members = Vec::with_capacity(properties.len());
    for (key, subschema) in properties {
        let child_path = format!("{}/properties/{}", path, key);
        let child_required = required.contains(&key.as_str());
        members.push(build_symbol(
            subschema,
            key,
            child_required,
            &child_path,
            depth,
            options,
        )?);
    }
    Ok(members)
}

/// The property names an object node marks as required.
fn required_names(node: &Value) -> Vec<&str> {
    node.get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Extract the normalized type tokens of a declaration: a single string
/// (possibly comma-separated) or an array of strings. Tokens are trimmed,
/// lowercased, and deduplicated preserving first occurrence.
fn type_tokens(declaration: &Value, path: &str) -> Result<Vec<String>, BuildError> {
    let raw: Vec<String> = match declaration {
        Value::String(s) => s
            .split(',')
            .map(|token| token.trim().to_ascii_lowercase())
            .collect(),
        Value::Array(entries) => {
            let mut tokens = Vec::with_capacity(entries.len());
            for entry in entries {
                let Some(token) = entry.as_str() else {
                    return Err(BuildError::InvalidTypeDeclaration {
                        path: format!("{}/type", path),
                        actual: json_type_name(entry).to_string(),
                    });
                };
                tokens.push(token.trim().to_ascii_lowercase());
            }
            tokens
        }
        other => {
            return Err(BuildError::InvalidTypeDeclaration {
                path: format!("{}/type", path),
                actual: json_type_name(other).to_string(),
            })
        }
    };

    let mut tokens = Vec::with_capacity(raw.len());
    for token in raw {
        if !token.is_empty() && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    Ok(tokens)
}

/// Fold the `null` marker out of a token set into the nullable flag and
/// return the single remaining primary type. Zero or more than one
/// remaining token is rejected rather than silently picking one.
fn resolve_union(tokens: Vec<String>, path: &str) -> Result<(String, bool), BuildError> {
    let nullable = tokens.iter().any(|token| token == "null");
    let mut remaining: Vec<String> = tokens.into_iter().filter(|token| token != "null").collect();

    match remaining.len() {
        1 => Ok((remaining.remove(0), nullable)),
        _ => Err(BuildError::UnsupportedTypeUnion {
            path: path.to_string(),
            tokens: remaining,
        }),
    }
}
