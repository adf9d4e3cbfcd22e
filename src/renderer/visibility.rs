use crate::parser::*;

/// Whether `decl` belongs to the public surface given its lexical context.
///
/// Nothing nested inside a non-public container is admitted, whatever its own
/// modifier says. `protected` counts as hidden.
pub fn is_included(decl: &ParsedDeclaration, ancestor_is_public: bool) -> bool {
    ancestor_is_public && decl.visibility().is_none()
}

/// Clone of `decls` restricted to admitted declarations, containers pruned
/// recursively.
pub fn public_surface(decls: &[ParsedDeclaration], ancestor_is_public: bool) -> Vec<ParsedDeclaration> {
    decls
        .iter()
        .filter(|decl| is_included(decl, ancestor_is_public))
        .map(|decl| match decl {
            ParsedDeclaration::Container(container) => {
                ParsedDeclaration::Container(ParsedContainer {
                    members: public_surface(&container.members, true),
                    ..container.clone()
                })
            }
            other => other.clone(),
        })
        .collect()
}
