//! C# source emission.
//!
//! The declaration tree is plain data; everything textual (braces,
//! indentation, doc-comment syntax) lives behind the [`Printer`] trait so
//! an alternate output style never touches the pipeline.

use crate::declaration::{ClassDeclaration, CompilationUnit, MemberDeclaration, PropertyDeclaration};

const INDENT: &str = "    ";

/// Serializes a declaration tree to source text.
pub trait Printer {
    fn print(&self, unit: &CompilationUnit) -> String;
}

/// The default printer: Allman braces, four-space indents, XML doc
/// comments, auto-implemented accessors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpPrinter;

impl Printer for CSharpPrinter {
    fn print(&self, unit: &CompilationUnit) -> String {
        let mut code = String::new();

        for using in &unit.usings {
            code.push_str(&format!("using {};\n", using));
        }
        if !unit.usings.is_empty() {
            code.push('\n');
        }

        match &unit.namespace {
            Some(namespace) => {
                code.push_str(&format!("namespace {}\n{{\n", namespace));
                self.print_class(&mut code, &unit.root, 1);
                code.push_str("}\n");
            }
            None => self.print_class(&mut code, &unit.root, 0),
        }

        code
    }
}

impl CSharpPrinter {
    fn print_class(&self, code: &mut String, class: &ClassDeclaration, level: usize) {
        let indent = INDENT.repeat(level);

        self.print_docs(code, &class.docs, &indent);
        code.push_str(&format!(
            "{}{} class {}\n",
            indent,
            class.modifier.keyword(),
            class.name
        ));
        code.push_str(&format!("{}{{\n", indent));

        for (index, member) in class.members.iter().enumerate() {
            if index > 0 {
                code.push('\n');
            }
            match member {
                MemberDeclaration::Property(property) => {
                    self.print_property(code, property, level + 1)
                }
                MemberDeclaration::Class(nested) => self.print_class(code, nested, level + 1),
            }
        }

        code.push_str(&format!("{}}}\n", indent));
    }

    fn print_property(&self, code: &mut String, property: &PropertyDeclaration, level: usize) {
        let indent = INDENT.repeat(level);

        self.print_docs(code, &property.docs, &indent);
        if let Some(annotation) = &property.annotation {
            code.push_str(&format!(
                "{}[JsonProperty(Required = Required.{})]\n",
                indent,
                annotation.required.keyword()
            ));
        }
        code.push_str(&format!(
            "{}{} {} {} {{ get; set; }}\n",
            indent,
            property.modifier.keyword(),
            property.type_name,
            property.name
        ));
    }

    fn print_docs(&self, code: &mut String, docs: &[String], indent: &str) {
        if docs.is_empty() {
            return;
        }
        code.push_str(&format!("{}/// <summary>\n", indent));
        for line in docs {
            code.push_str(&format!("{}/// {}\n", indent, line));
        }
        code.push_str(&format!("{}/// </summary>\n", indent));
    }
}

/// Serialize a declaration tree with the default C# printer.
pub fn emit(unit: &CompilationUnit) -> String {
    CSharpPrinter.print(unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::construct_declaration;
    use crate::symbol::{ScalarKind, Symbol};
    use crate::types::RenderOptions;

    fn widget_tree() -> Symbol {
        Symbol::object(
            "Widget",
            vec![
                Symbol::scalar("id", ScalarKind::Integer),
                Symbol::scalar("label", ScalarKind::String)
                    .nullable(true)
                    .required(false),
            ],
        )
    }

    #[test]
    fn prints_a_bare_class() {
        let unit = construct_declaration(&widget_tree(), &RenderOptions::new()).unwrap();
        let code = emit(&unit);

        let expected = "\
public class Widget
{
    public int id { get; set; }

    public string label { get; set; }
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn prints_namespace_usings_and_annotations() {
        let tree = widget_tree().summary("A widget.");
        let options = RenderOptions::new()
            .namespace("Hoge")
            .json_serializable(true);
        let unit = construct_declaration(&tree, &options).unwrap();
        let code = emit(&unit);

        let expected = "\
using Newtonsoft.Json;

namespace Hoge
{
    /// <summary>
    /// A widget.
    /// </summary>
    public class Widget
    {
        [JsonProperty(Required = Required.Always)]
        public int id { get; set; }

        [JsonProperty(Required = Required.Default)]
        public string label { get; set; }
    }
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn prints_property_docs_above_annotations() {
        let tree = Symbol::object(
            "Widget",
            vec![Symbol::scalar("id", ScalarKind::Integer).summary("Unique id.")],
        );
        let options = RenderOptions::new().json_serializable(true);
        let unit = construct_declaration(&tree, &options).unwrap();
        let code = emit(&unit);

        let expected = "\
using Newtonsoft.Json;

public class Widget
{
    /// <summary>
    /// Unique id.
    /// </summary>
    [JsonProperty(Required = Required.Always)]
    public int id { get; set; }
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn prints_nested_classes_indented() {
        let tree = Symbol::object(
            "Order",
            vec![
                Symbol::scalar("total", ScalarKind::Number),
                Symbol::object(
                    "customer",
                    vec![Symbol::scalar("name", ScalarKind::String)],
                ),
            ],
        );
        let unit = construct_declaration(&tree, &RenderOptions::new()).unwrap();
        let code = emit(&unit);

        let expected = "\
public class Order
{
    public double total { get; set; }

    public class customer
    {
        public string name { get; set; }
    }
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn prints_an_empty_class_body() {
        let tree = Symbol::object("Empty", Vec::new());
        let unit = construct_declaration(&tree, &RenderOptions::new()).unwrap();

        assert_eq!(emit(&unit), "public class Empty\n{\n}\n");
    }

    #[test]
    fn emit_matches_the_default_printer() {
        let unit = construct_declaration(&widget_tree(), &RenderOptions::new()).unwrap();
        assert_eq!(emit(&unit), CSharpPrinter.print(&unit));
    }
}
