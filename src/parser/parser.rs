use std::path::Path;

use tracing::{debug, trace};
use tree_sitter::{Node, Parser};

use crate::error::{Result, SurfaceError};
use crate::parser::types::*;

/// Node kinds the grammars use for declaration names.
const IDENTIFIER_KINDS: &[&str] = &["identifier", "simple_identifier", "type_identifier"];

/// Wrapper nodes whose children are declarations in their own right.
const TRANSPARENT_KINDS: &[&str] = &[
    "class_member_declarations",
    "class_member_declaration",
    "top_level_object",
    "declaration",
    "statement",
];

// Front-end turning Kotlin source text into a declaration forest
pub struct KotlinParser {
    parser: Parser,
}

impl KotlinParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_kotlin_ng::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parse one file's text. `path` is only used for diagnostics.
    pub fn parse_source(&mut self, path: &Path, source: &str) -> Result<Vec<ParsedDeclaration>> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| SurfaceError::Unparseable(path.to_path_buf()))?;
        let root = tree.root_node();

        if root.has_error() {
            // Keep whatever declarations survived error recovery
            debug!("syntax errors in {}, rendering recovered declarations", path.display());
        }

        let declarations = ItemParser::new(source.as_bytes()).parse_declarations(root);
        trace!("{} top-level declarations in {}", declarations.len(), path.display());
        Ok(declarations)
    }
}

// Converts syntax nodes of a single file into typed declarations
struct ItemParser<'a> {
    source: &'a [u8],
}

impl<'a> ItemParser<'a> {
    fn new(source: &'a [u8]) -> Self {
        Self { source }
    }

    fn text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source).unwrap_or("").trim()
    }

    fn parse_declarations(&self, parent: Node) -> Vec<ParsedDeclaration> {
        let mut declarations = Vec::new();
        let mut cursor = parent.walk();

        for child in parent.named_children(&mut cursor) {
            if let Some(parsed) = self.parse_declaration(child) {
                declarations.push(parsed);
            } else if TRANSPARENT_KINDS.contains(&child.kind()) {
                declarations.extend(self.parse_declarations(child));
            }
        }

        declarations
    }

    /// Members of a class or object body.
    ///
    /// Error recovery can wrap intact members of a body in an `ERROR` node;
    /// those are still members of this container. At top level an `ERROR`
    /// node may hold members of a nested class, so only bodies look inside.
    fn parse_body(&self, body: Node) -> Vec<ParsedDeclaration> {
        let mut members = Vec::new();
        let mut cursor = body.walk();

        for child in body.named_children(&mut cursor) {
            if child.is_error() {
                members.extend(self.parse_declarations(child));
            } else if let Some(parsed) = self.parse_declaration(child) {
                members.push(parsed);
            } else if TRANSPARENT_KINDS.contains(&child.kind()) {
                members.extend(self.parse_declarations(child));
            }
        }

        members
    }

    fn parse_declaration(&self, node: Node) -> Option<ParsedDeclaration> {
        match node.kind() {
            "function_declaration" => Some(ParsedDeclaration::Function(self.parse_function(node))),
            "property_declaration" => Some(ParsedDeclaration::Property(self.parse_property(node))),
            "class_declaration" => Some(ParsedDeclaration::Container(self.parse_class(node))),
            "object_declaration" => Some(ParsedDeclaration::Container(
                self.parse_object(node, ContainerKind::Object),
            )),
            "companion_object" => Some(ParsedDeclaration::Container(
                self.parse_object(node, ContainerKind::CompanionObject),
            )),
            "type_alias" => Some(ParsedDeclaration::TypeAlias(self.parse_type_alias(node))),
            _ => None,
        }
    }

    fn parse_function(&self, node: Node) -> ParsedFunction {
        let params = find_child(node, "function_value_parameters")
            .map(|list| self.parse_parameters(list))
            .unwrap_or_default();

        ParsedFunction {
            name: self.name_of(node),
            visibility: self.visibility_of(node),
            params,
            return_type: self.type_after(node, ":"),
        }
    }

    fn parse_parameters(&self, list: Node) -> Vec<Parameter> {
        let mut params = Vec::new();
        let mut cursor = list.walk();

        for child in list.named_children(&mut cursor) {
            let param = if child.kind() == "parameter" {
                Some(child)
            } else {
                // Some grammar versions wrap the parameter together with its modifiers
                find_child(child, "parameter")
            };

            if let Some(param) = param {
                params.push(Parameter {
                    name: self.name_of(param).unwrap_or_default(),
                    ty: self.type_after(param, ":"),
                });
            }
        }

        params
    }

    fn parse_property(&self, node: Node) -> ParsedProperty {
        // The name and type live on the variable declaration when there is one
        let variable = find_child(node, "variable_declaration").unwrap_or(node);

        ParsedProperty {
            name: self.name_of(variable),
            visibility: self.visibility_of(node),
            ty: self.type_after(variable, ":"),
            mutability: self.mutability_of(node).unwrap_or(Mutability::Val),
        }
    }

    fn parse_class(&self, node: Node) -> ParsedContainer {
        let modifiers = self.modifier_keywords(node);
        let body = find_child(node, "class_body").or_else(|| find_child(node, "enum_class_body"));

        let kind = if has_token(node, "interface") {
            ContainerKind::Interface
        } else if modifiers.contains(&"enum") || has_token(node, "enum") {
            ContainerKind::Enum
        } else if modifiers.contains(&"data") {
            ContainerKind::Data
        } else {
            ContainerKind::Class
        };

        let fields = find_child(node, "primary_constructor")
            .map(|ctor| self.parse_constructor_fields(ctor))
            .unwrap_or_default();

        ParsedContainer {
            name: self.name_of(node),
            visibility: visibility_from(&modifiers),
            kind,
            fields,
            members: body.map(|b| self.parse_body(b)).unwrap_or_default(),
        }
    }

    fn parse_object(&self, node: Node, kind: ContainerKind) -> ParsedContainer {
        ParsedContainer {
            name: self.name_of(node),
            visibility: self.visibility_of(node),
            kind,
            fields: Vec::new(),
            members: find_child(node, "class_body")
                .map(|b| self.parse_body(b))
                .unwrap_or_default(),
        }
    }

    fn parse_constructor_fields(&self, ctor: Node) -> Vec<ConstructorField> {
        let mut fields = Vec::new();
        let mut parameters = Vec::new();
        collect_descendants(ctor, "class_parameter", &mut parameters);

        for param in parameters {
            // Plain constructor parameters are not stored on the instance
            let Some(mutability) = self.mutability_of(param) else {
                continue;
            };
            fields.push(ConstructorField {
                name: self.name_of(param).unwrap_or_default(),
                ty: self.type_after(param, ":"),
                mutability,
            });
        }

        fields
    }

    fn parse_type_alias(&self, node: Node) -> ParsedTypeAlias {
        ParsedTypeAlias {
            name: self.name_of(node),
            visibility: self.visibility_of(node),
            target: self.type_after(node, "="),
        }
    }

    fn name_of(&self, node: Node) -> Option<String> {
        if let Some(name) = node.child_by_field_name("name") {
            return Some(self.text(name).to_string());
        }

        let mut cursor = node.walk();
        let name = node
            .named_children(&mut cursor)
            .find(|child| IDENTIFIER_KINDS.contains(&child.kind()))
            .map(|child| self.text(child).to_string());
        name
    }

    /// Text of the first named node following the `separator` token among
    /// the direct children of `node`.
    fn type_after(&self, node: Node, separator: &str) -> Option<String> {
        let mut cursor = node.walk();
        let mut seen_separator = false;

        for child in node.children(&mut cursor) {
            if !child.is_named() {
                if child.kind() == separator {
                    seen_separator = true;
                }
                continue;
            }
            if seen_separator && !is_comment(child) {
                return Some(self.text(child).to_string());
            }
        }

        None
    }

    fn mutability_of(&self, node: Node) -> Option<Mutability> {
        let mut cursor = node.walk();

        for child in node.children(&mut cursor) {
            let keyword = match child.kind() {
                "binding_pattern_kind" => self.text(child),
                kind => kind,
            };
            match keyword {
                "var" => return Some(Mutability::Var),
                "val" => return Some(Mutability::Val),
                _ => {}
            }
        }

        None
    }

    fn visibility_of(&self, node: Node) -> Option<VisibilityModifier> {
        visibility_from(&self.modifier_keywords(node))
    }

    /// Keywords listed in the `modifiers` child, annotations excluded.
    fn modifier_keywords(&self, node: Node) -> Vec<&'a str> {
        let Some(modifiers) = find_child(node, "modifiers") else {
            return Vec::new();
        };

        let mut keywords = Vec::new();
        let mut cursor = modifiers.walk();
        for child in modifiers.children(&mut cursor) {
            if child.kind() == "annotation" || is_comment(child) {
                continue;
            }
            keywords.push(self.text(child));
        }
        keywords
    }
}

fn visibility_from(keywords: &[&str]) -> Option<VisibilityModifier> {
    keywords
        .iter()
        .find_map(|keyword| VisibilityModifier::from_keyword(keyword))
}

fn find_child<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|child| child.kind() == kind);
    found
}

fn has_token(node: Node, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == kind);
    found
}

fn collect_descendants<'t>(node: Node<'t>, kind: &str, out: &mut Vec<Node<'t>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == kind {
            out.push(child);
        } else {
            collect_descendants(child, kind, out);
        }
    }
}

fn is_comment(node: Node) -> bool {
    matches!(node.kind(), "line_comment" | "multiline_comment" | "block_comment" | "comment")
}
