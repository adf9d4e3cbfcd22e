use crate::parser::*;
use crate::renderer::accumulator::OutputAccumulator;
use crate::renderer::traits::*;
use crate::renderer::visibility::is_included;

/// Depth-first, pre-order walk over `decls` in source order.
///
/// Excluded declarations are skipped together with their whole subtree.
/// Containers recurse into their members from their own `Render` impl.
pub fn render_declarations(
    decls: &[ParsedDeclaration],
    ancestor_is_public: bool,
    context: &RenderContext,
    out: &mut OutputAccumulator,
) {
    for decl in decls {
        if !is_included(decl, ancestor_is_public) {
            continue;
        }
        decl.render(context, out);
    }
}

pub struct ParsedRenderer;

impl ParsedRenderer {
    /// Render one file's top-level declarations.
    pub fn render(&self, declarations: &[ParsedDeclaration]) -> String {
        let mut out = OutputAccumulator::new();
        render_declarations(declarations, true, &RenderContext::new(), &mut out);
        out.finish()
    }
}
