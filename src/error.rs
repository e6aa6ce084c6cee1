//! Error types for schema loading, symbol building, and declaration rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading a schema document.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

/// Errors while building the symbol tree from a schema document.
///
/// Every variant below the root check carries the JSON path of the offending
/// schema node (e.g. `/properties/label`) so callers can locate the fault.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("root schema type must be exactly \"object\", found {found}")]
    InvalidRoot { found: String },

    #[error("invalid type declaration at {path}: expected a string or an array of strings, got {actual}")]
    InvalidTypeDeclaration { path: String, actual: String },

    #[error("type union at {path} must leave exactly one non-null type, found {}", describe_tokens(.tokens))]
    UnsupportedTypeUnion { path: String, tokens: Vec<String> },

    #[error("unknown type \"{token}\" at {path}")]
    UnknownType { path: String, token: String },

    #[error("array types are not implemented at {path}")]
    ArrayNotImplemented { path: String },

    #[error("schema nesting exceeds the maximum depth of {limit} at {path}")]
    DepthExceeded { path: String, limit: usize },
}

/// Errors while rendering a symbol tree into a declaration tree.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("root symbol must be an object to render a class declaration, found {found}")]
    InvalidRoot { found: String },

    #[error("array symbols are not implemented at {path}")]
    ArrayNotImplemented { path: String },
}

/// Any failure of the end-to-end generate pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub(crate) fn describe_tokens(tokens: &[String]) -> String {
    if tokens.is_empty() {
        "none".to_string()
    } else {
        tokens.join(", ")
    }
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } | Self::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            Self::NetworkError { .. } => 3,
            Self::InvalidJson { .. } => 2,
        }
    }
}

impl BuildError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

impl RenderError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

impl GenerateError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Load(e) => e.exit_code(),
            Self::Build(e) => e.exit_code(),
            Self::Render(e) => e.exit_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_exit_codes() {
        let err = LoadError::FileNotFound {
            path: PathBuf::from("schema.json"),
        };
        assert_eq!(err.exit_code(), 3);

        let err = LoadError::InvalidJson {
            source: serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn build_errors_carry_the_schema_path() {
        let err = BuildError::UnknownType {
            path: "/properties/label".into(),
            token: "text".into(),
        };
        assert_eq!(err.to_string(), "unknown type \"text\" at /properties/label");

        let err = BuildError::ArrayNotImplemented {
            path: "/properties/tags".into(),
        };
        assert!(err.to_string().contains("/properties/tags"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn type_union_message_lists_tokens() {
        let err = BuildError::UnsupportedTypeUnion {
            path: "/properties/id".into(),
            tokens: vec!["string".into(), "integer".into()],
        };
        assert_eq!(
            err.to_string(),
            "type union at /properties/id must leave exactly one non-null type, found string, integer"
        );
    }

    #[test]
    fn type_union_message_with_no_tokens() {
        let err = BuildError::UnsupportedTypeUnion {
            path: "/properties/id".into(),
            tokens: vec![],
        };
        assert!(err.to_string().ends_with("found none"));
    }

    #[test]
    fn generate_error_delegates_exit_codes() {
        let err = GenerateError::from(LoadError::FileNotFound {
            path: PathBuf::from("schema.json"),
        });
        assert_eq!(err.exit_code(), 3);

        let err = GenerateError::from(BuildError::InvalidRoot {
            found: "string".into(),
        });
        assert_eq!(err.exit_code(), 2);

        let err = GenerateError::from(RenderError::ArrayNotImplemented {
            path: "Widget/tags".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }
}
