use crate::parser::*;
use crate::renderer::traits::*;

pub const ANONYMOUS: &str = "<anonymous>";
pub const ANY_TYPE: &str = "Any";
pub const UNKNOWN_TYPE: &str = "Unknown";
pub const UNKNOWN_TARGET: &str = "<?>";

/// Helper for rendering the pieces shared by several signatures
pub struct SignatureRenderer;

impl SignatureRenderer {
    pub fn render_name<'a>(&self, name: Option<&'a str>) -> &'a str {
        name.unwrap_or(ANONYMOUS)
    }

    pub fn render_parameters(&self, params: &[Parameter]) -> String {
        let param_strs: Vec<String> = params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty.as_deref().unwrap_or(ANY_TYPE)))
            .collect();
        param_strs.join(", ")
    }

    pub fn render_return_type(&self, return_type: Option<&str>) -> String {
        match return_type {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        }
    }

    /// `<var|val> <name>: <type>` with `placeholder` standing in for a missing type.
    pub fn render_binding(&self, mutability: Mutability, name: &str, ty: Option<&str>, placeholder: &str) -> String {
        format!("{} {}: {}", mutability.keyword(), name, ty.unwrap_or(placeholder))
    }

    pub fn render_container_keyword(&self, kind: ContainerKind) -> &'static str {
        match kind {
            ContainerKind::Object | ContainerKind::CompanionObject => "object",
            ContainerKind::Interface => "interface",
            ContainerKind::Enum => "enum class",
            ContainerKind::Data => "data class",
            ContainerKind::Class => "class",
        }
    }
}

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    pub fn indent_for_depth(depth: usize) -> String {
        "    ".repeat(depth)
    }

    pub fn indent_from_context(context: &RenderContext) -> String {
        Self::indent_for_depth(context.depth)
    }
}
