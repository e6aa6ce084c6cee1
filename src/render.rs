//! Declaration rendering.
//!
//! The second phase of the pipeline: walk a symbol tree and produce a
//! [`CompilationUnit`] according to the render options. A pure function of
//! its inputs; the symbol tree is never mutated, so re-rendering the same
//! tree under different options is side-effect-free.

use crate::declaration::{
    ClassDeclaration, CompilationUnit, JsonAnnotation, MemberDeclaration, PropertyDeclaration,
    RequiredPolicy,
};
use crate::error::RenderError;
use crate::symbol::{ScalarKind, Symbol, SymbolKind};
use crate::types::RenderOptions;

/// The using directive recorded when serialization annotations are on.
const JSON_USING: &str = "Newtonsoft.Json";

/// Render a symbol tree into a declaration tree.
///
/// The root symbol must be an object; the returned unit wraps the root
/// class in a namespace container when the options name one, and carries
/// the JSON using directive exactly when `json_serializable` is on.
///
/// # Errors
///
/// Returns `RenderError::InvalidRoot` for a non-object root and
/// `RenderError::ArrayNotImplemented` when an array symbol is reached
/// anywhere in the tree.
pub fn construct_declaration(
    symbol: &Symbol,
    options: &RenderOptions,
) -> Result<CompilationUnit, RenderError> {
    let SymbolKind::Object { members } = &symbol.kind else {
        return Err(RenderError::InvalidRoot {
            found: symbol.type_token().to_string(),
        });
    };

    let root = render_class(symbol, members, options, &symbol.name)?;

    let usings = if options.json_serializable {
        vec![JSON_USING.to_string()]
    } else {
        Vec::new()
    };

    Ok(CompilationUnit {
        usings,
        namespace: options.wrapping_namespace().map(str::to_string),
        root,
    })
}

fn render_class(
    symbol: &Symbol,
    members: &[Symbol],
    options: &RenderOptions,
    path: &str,
) -> Result<ClassDeclaration, RenderError> {
    let mut rendered = Vec::with_capacity(members.len());
    for member in members {
        let member_path = format!("{}/{}", path, member.name);
        rendered.push(render_member(member, options, &member_path)?);
    }

    Ok(ClassDeclaration {
        name: symbol.name.clone(),
        modifier: symbol.modifier,
        docs: doc_lines(symbol.summary.as_deref()),
        members: rendered,
    })
}

fn render_member(
    symbol: &Symbol,
    options: &RenderOptions,
    path: &str,
) -> Result<MemberDeclaration, RenderError> {
    match &symbol.kind {
        SymbolKind::Object { members } => Ok(MemberDeclaration::Class(render_class(
            symbol, members, options, path,
        )?)),
        SymbolKind::Array => Err(RenderError::ArrayNotImplemented {
            path: path.to_string(),
        }),
        SymbolKind::Scalar(kind) => Ok(MemberDeclaration::Property(render_property(
            symbol, *kind, options,
        ))),
    }
}

fn render_property(symbol: &Symbol, kind: ScalarKind, options: &RenderOptions) -> PropertyDeclaration {
    let annotation = options.json_serializable.then(|| JsonAnnotation {
        required: required_policy(symbol),
    });

    PropertyDeclaration {
        name: symbol.name.clone(),
        type_name: cs_type(kind).to_string(),
        modifier: symbol.modifier,
        annotation,
        docs: doc_lines(symbol.summary.as_deref()),
    }
}

/// Map requiredness and nullability to the annotation policy. Requiredness
/// is checked before nullability.
fn required_policy(symbol: &Symbol) -> RequiredPolicy {
    match (symbol.required, symbol.nullable) {
        (true, false) => RequiredPolicy::Always,
        (true, true) => RequiredPolicy::AllowNull,
        (false, _) => RequiredPolicy::Default,
    }
}

/// The C# type name for a scalar kind.
fn cs_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String => "string",
        ScalarKind::Integer => "int",
        ScalarKind::Number => "double",
        ScalarKind::Boolean => "bool",
    }
}

fn doc_lines(summary: Option<&str>) -> Vec<String> {
    summary
        .map(|text| text.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
