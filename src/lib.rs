//! JSON Schema to C# Classes
//!
//! Generation of C# class declarations from JSON Schema documents.
//!
//! The pipeline has two phases: [`parse_schema`] walks a schema document
//! into a neutral symbol tree, and [`construct_declaration`] renders that
//! tree into a declaration tree according to [`RenderOptions`]. The
//! declaration tree is plain data; [`emit`] serializes it to C# source, and
//! [`generate`] runs all three steps in one call.
//!
//! # Example
//!
//! ```
//! use schema2cs::{construct_declaration, emit, parse_schema, BuildOptions, RenderOptions};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "title": "Widget",
//!     "required": ["id"],
//!     "properties": {
//!         "id": { "type": "integer" },
//!         "label": { "type": ["string", "null"] }
//!     }
//! });
//!
//! let symbol = parse_schema(&schema, &BuildOptions::new()).unwrap();
//! let options = RenderOptions::new().json_serializable(true);
//! let unit = construct_declaration(&symbol, &options).unwrap();
//! let code = emit(&unit);
//!
//! assert!(code.contains("public class Widget"));
//! assert!(code.contains("[JsonProperty(Required = Required.Always)]"));
//! assert!(code.contains("public int id { get; set; }"));
//! ```
//!
//! # Annotation Policy
//!
//! With `json_serializable` on, every property carries a `JsonProperty`
//! annotation chosen from requiredness and nullability, requiredness
//! checked first:
//!
//! | Required | Nullable | Annotation value |
//! |----------|----------|----------------------|
//! | yes | no | `Required.Always` |
//! | yes | yes | `Required.AllowNull` |
//! | no | (any) | `Required.Default` |
//!
//! # Type Declarations
//!
//! A schema node's `type` may be a single token (`"string"`), a
//! comma-separated union (`"string, null"`), or an array of tokens
//! (`["string", "null"]`). A `null` token marks the symbol nullable and is
//! stripped; exactly one primary type must remain afterwards. The root must
//! be exactly `object`, and `array` anywhere is rejected as not
//! implemented.

mod declaration;
mod error;
mod loader;
mod names;
mod printer;
mod render;
mod symbol;
mod types;

pub use declaration::{
    ClassDeclaration, CompilationUnit, JsonAnnotation, MemberDeclaration, PropertyDeclaration,
    RequiredPolicy,
};
pub use error::{BuildError, GenerateError, LoadError, RenderError};
pub use loader::{load_schema, load_schema_auto, load_schema_str};
pub use names::{class_name, NameAllocator};
pub use printer::{emit, CSharpPrinter, Printer};
pub use render::construct_declaration;
pub use symbol::{parse_schema, ScalarKind, Symbol, SymbolKind};
pub use types::{AccessModifier, BuildOptions, RenderOptions, DEFAULT_MAX_DEPTH};

#[cfg(feature = "remote")]
pub use loader::load_schema_url;

use serde_json::Value;

/// Build and render in one call: schema document in, C# source out.
///
/// # Example
///
/// ```
/// use schema2cs::{generate, BuildOptions, RenderOptions};
/// use serde_json::json;
///
/// let schema = json!({ "type": "object", "title": "Empty" });
/// let code = generate(&schema, &BuildOptions::new(), &RenderOptions::new()).unwrap();
///
/// assert_eq!(code, "public class Empty\n{\n}\n");
/// ```
///
/// # Errors
///
/// Returns `GenerateError` wrapping the build or render failure.
pub fn generate(
    schema: &Value,
    build: &BuildOptions,
    render: &RenderOptions,
) -> Result<String, GenerateError> {
    let symbol = parse_schema(schema, build)?;
    let unit = construct_declaration(&symbol, render)?;
    Ok(emit(&unit))
}
