use serde::Serialize;

/// Explicit modifier narrowing a declaration below public.
///
/// A missing modifier (or an explicit `public`) is represented by `None`
/// wherever a declaration carries its visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityModifier {
    Private,
    Internal,
    Protected,
}

impl VisibilityModifier {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "private" => Some(VisibilityModifier::Private),
            "internal" => Some(VisibilityModifier::Internal),
            "protected" => Some(VisibilityModifier::Protected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mutability {
    Val,
    Var,
}

impl Mutability {
    pub fn keyword(&self) -> &'static str {
        match self {
            Mutability::Val => "val",
            Mutability::Var => "var",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Class,
    Interface,
    Enum,
    Data,
    Object,
    CompanionObject,
}

impl ContainerKind {
    /// Objects never carry a primary constructor, so only class variants
    /// contribute stored fields.
    pub fn is_class_variant(&self) -> bool {
        !matches!(self, ContainerKind::Object | ContainerKind::CompanionObject)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub ty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedFunction {
    pub name: Option<String>,
    pub visibility: Option<VisibilityModifier>,
    pub params: Vec<Parameter>,
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedProperty {
    pub name: Option<String>,
    pub visibility: Option<VisibilityModifier>,
    pub ty: Option<String>,
    pub mutability: Mutability,
}

/// Primary-constructor parameter declared with `val` or `var`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstructorField {
    pub name: String,
    pub ty: Option<String>,
    pub mutability: Mutability,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedContainer {
    pub name: Option<String>,
    pub visibility: Option<VisibilityModifier>,
    pub kind: ContainerKind,
    pub fields: Vec<ConstructorField>,
    pub members: Vec<ParsedDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedTypeAlias {
    pub name: Option<String>,
    pub visibility: Option<VisibilityModifier>,
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "declaration", rename_all = "snake_case")]
pub enum ParsedDeclaration {
    Function(ParsedFunction),
    Property(ParsedProperty),
    Container(ParsedContainer),
    TypeAlias(ParsedTypeAlias),
}

impl ParsedDeclaration {
    pub fn visibility(&self) -> Option<VisibilityModifier> {
        match self {
            ParsedDeclaration::Function(f) => f.visibility,
            ParsedDeclaration::Property(p) => p.visibility,
            ParsedDeclaration::Container(c) => c.visibility,
            ParsedDeclaration::TypeAlias(t) => t.visibility,
        }
    }
}

/// The admitted declarations of one source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSurface {
    pub path: String,
    pub declarations: Vec<ParsedDeclaration>,
}
