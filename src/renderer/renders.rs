use crate::parser::*;
use crate::renderer::accumulator::OutputAccumulator;
use crate::renderer::components::*;
use crate::renderer::renderer::render_declarations;
use crate::renderer::traits::*;

impl Render for ParsedFunction {
    fn render(&self, context: &RenderContext, out: &mut OutputAccumulator) {
        let signature_renderer = SignatureRenderer;
        let mut signature = String::new();

        signature.push_str("fun ");
        signature.push_str(signature_renderer.render_name(self.name.as_deref()));

        signature.push('(');
        signature.push_str(&signature_renderer.render_parameters(&self.params));
        signature.push(')');

        // Without a declared return type the line ends after the parameters
        signature.push_str(&signature_renderer.render_return_type(self.return_type.as_deref()));

        out.push_line(context, &signature);
    }
}

impl Render for ParsedProperty {
    fn render(&self, context: &RenderContext, out: &mut OutputAccumulator) {
        let signature_renderer = SignatureRenderer;
        let line = signature_renderer.render_binding(
            self.mutability,
            signature_renderer.render_name(self.name.as_deref()),
            self.ty.as_deref(),
            UNKNOWN_TYPE,
        );
        out.push_line(context, &line);
    }
}

impl Render for ParsedContainer {
    fn render(&self, context: &RenderContext, out: &mut OutputAccumulator) {
        let signature_renderer = SignatureRenderer;
        let member_context = context.nested();

        out.push_line(
            context,
            &format!(
                "{} {} {{",
                signature_renderer.render_container_keyword(self.kind),
                signature_renderer.render_name(self.name.as_deref()),
            ),
        );

        // Stored constructor parameters come before the body members
        if self.kind.is_class_variant() {
            for field in &self.fields {
                let line = signature_renderer.render_binding(
                    field.mutability,
                    &field.name,
                    field.ty.as_deref(),
                    ANY_TYPE,
                );
                out.push_line(&member_context, &line);
            }
        }

        // The container itself was admitted, so its members start from a public context
        render_declarations(&self.members, true, &member_context, out);

        out.push_line(context, "}");
    }
}

impl Render for ParsedTypeAlias {
    fn render(&self, context: &RenderContext, out: &mut OutputAccumulator) {
        let signature_renderer = SignatureRenderer;
        out.push_line(
            context,
            &format!(
                "typealias {} = {}",
                signature_renderer.render_name(self.name.as_deref()),
                self.target.as_deref().unwrap_or(UNKNOWN_TARGET),
            ),
        );
    }
}

impl Render for ParsedDeclaration {
    fn render(&self, context: &RenderContext, out: &mut OutputAccumulator) {
        match self {
            ParsedDeclaration::Function(function) => function.render(context, out),
            ParsedDeclaration::Property(property) => property.render(context, out),
            ParsedDeclaration::Container(container) => container.render(context, out),
            ParsedDeclaration::TypeAlias(alias) => alias.render(context, out),
        }
    }
}
