//! Declarations and type nodes.

use super::{Printer, Result, unsupported};
use gx_parser::parser::node::Node;
use gx_parser::{NodeIndex, NodeList, syntax_kind_ext};

const INDENT: &str = "    ";

impl<'a> Printer<'a> {
    pub(super) fn emit_type(&mut self, node: &Node) -> Result<()> {
        let arena = self.arena;
        match node.kind {
            syntax_kind_ext::TYPE_REFERENCE => match arena.get_type_ref(node) {
                Some(data) => self.emit(data.type_name),
                None => Err(unsupported(node)),
            },
            syntax_kind_ext::MAPPED_TYPE => {
                let Some(data) = arena.get_mapped_type(node) else {
                    return Err(unsupported(node));
                };
                self.emit(data.type_name)?;
                self.write("<");
                self.emit_list(&data.type_arguments, ", ")?;
                self.write(">");
                Ok(())
            }
            syntax_kind_ext::ARRAY_TYPE => {
                let Some(data) = arena.get_array_type(node) else {
                    return Err(unsupported(node));
                };
                self.emit(data.element_type)?;
                self.write("[");
                if data.size.is_some() {
                    self.emit(data.size)?;
                }
                self.write("]");
                Ok(())
            }
            _ => Err(unsupported(node)),
        }
    }

    /// Declarations print as one line, except structs which list one member
    /// per line. Functions print their signature only.
    pub(super) fn emit_declaration(&mut self, node: &Node) -> Result<()> {
        let arena = self.arena;
        match node.kind {
            syntax_kind_ext::INCLUDE_STATEMENT => {
                let Some(data) = arena.get_include(node) else {
                    return Err(unsupported(node));
                };
                self.write("include ");
                self.emit(data.path)
            }
            syntax_kind_ext::STRUCT_DECLARATION => {
                let Some(data) = arena.get_struct(node) else {
                    return Err(unsupported(node));
                };
                self.write("struct ");
                self.emit(data.name)?;
                self.write(" {");
                for &member in &data.members.nodes {
                    self.write("\n");
                    self.write(INDENT);
                    self.emit(member)?;
                }
                if !data.members.nodes.is_empty() {
                    self.write("\n");
                }
                self.write("};");
                Ok(())
            }
            syntax_kind_ext::PROPERTY_DECLARATION | syntax_kind_ext::PARAMETER_DECLARATION => {
                let Some(data) = arena.get_named_type(node) else {
                    return Err(unsupported(node));
                };
                self.emit_typed_name(data.type_node, data.name)?;
                if node.kind == syntax_kind_ext::PROPERTY_DECLARATION {
                    self.write(";");
                }
                Ok(())
            }
            syntax_kind_ext::TYPEDEF_DECLARATION => {
                let Some(data) = arena.get_named_type(node) else {
                    return Err(unsupported(node));
                };
                self.write("typedef ");
                self.emit_typed_name(data.type_node, data.name)?;
                self.write(";");
                Ok(())
            }
            syntax_kind_ext::VARIABLE_DECLARATION => {
                let Some(data) = arena.get_variable(node) else {
                    return Err(unsupported(node));
                };
                self.emit_modifiers(data.modifiers.as_ref())?;
                self.emit_typed_name(data.type_node, data.name)?;
                if data.initializer.is_some() {
                    self.write(" = ");
                    self.emit(data.initializer)?;
                }
                self.write(";");
                Ok(())
            }
            syntax_kind_ext::FUNCTION_DECLARATION => {
                let Some(data) = arena.get_function(node) else {
                    return Err(unsupported(node));
                };
                self.emit_modifiers(data.modifiers.as_ref())?;
                self.emit_typed_name(data.type_node, data.name)?;
                self.write("(");
                self.emit_list(&data.parameters, ", ")?;
                self.write(")");
                Ok(())
            }
            _ => Err(unsupported(node)),
        }
    }

    fn emit_typed_name(&mut self, type_node: NodeIndex, name: NodeIndex) -> Result<()> {
        self.emit(type_node)?;
        self.write(" ");
        self.emit(name)
    }

    fn emit_modifiers(&mut self, modifiers: Option<&NodeList>) -> Result<()> {
        let Some(modifiers) = modifiers else {
            return Ok(());
        };
        for &modifier in &modifiers.nodes {
            self.emit(modifier)?;
            self.write(" ");
        }
        Ok(())
    }
}
