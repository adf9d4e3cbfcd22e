#[cfg(test)]
mod rendering_tests {
    use crate::{
        ConstructorField, ContainerKind, Mutability, Parameter, ParsedContainer, ParsedDeclaration,
        ParsedFunction, ParsedProperty, ParsedRenderer, ParsedTypeAlias, VisibilityModifier,
    };

    fn function(name: &str, visibility: Option<VisibilityModifier>) -> ParsedDeclaration {
        ParsedDeclaration::Function(ParsedFunction {
            name: Some(name.to_string()),
            visibility,
            params: vec![],
            return_type: None,
        })
    }

    fn property(name: &str, ty: &str, visibility: Option<VisibilityModifier>) -> ParsedDeclaration {
        ParsedDeclaration::Property(ParsedProperty {
            name: Some(name.to_string()),
            visibility,
            ty: Some(ty.to_string()),
            mutability: Mutability::Val,
        })
    }

    fn class(name: &str, visibility: Option<VisibilityModifier>, members: Vec<ParsedDeclaration>) -> ParsedDeclaration {
        container(name, ContainerKind::Class, visibility, members)
    }

    fn container(
        name: &str,
        kind: ContainerKind,
        visibility: Option<VisibilityModifier>,
        members: Vec<ParsedDeclaration>,
    ) -> ParsedDeclaration {
        ParsedDeclaration::Container(ParsedContainer {
            name: Some(name.to_string()),
            visibility,
            kind,
            fields: vec![],
            members,
        })
    }

    fn render(decls: &[ParsedDeclaration]) -> String {
        ParsedRenderer.render(decls)
    }

    #[test]
    fn test_scenario_public_class_and_top_level_functions() {
        let forest = vec![
            class("Test", None, vec![function("publicFunction", None)]),
            function("privateFunction", Some(VisibilityModifier::Private)),
            function("internalFunction", Some(VisibilityModifier::Internal)),
            function("Function", None),
        ];

        let output = render(&forest);

        assert_eq!(output, "class Test {\n    fun publicFunction()\n}\nfun Function()\n");
        assert!(!output.contains("privateFunction"));
        assert!(!output.contains("internalFunction"));
    }

    #[test]
    fn test_scenario_protected_method_hidden() {
        let forest = vec![class(
            "PublicClass",
            None,
            vec![
                function("method", None),
                function("protectedMethod", Some(VisibilityModifier::Protected)),
            ],
        )];

        assert_eq!(render(&forest), "class PublicClass {\n    fun method()\n}\n");
    }

    #[test]
    fn test_scenario_private_property_hidden() {
        let forest = vec![class(
            "PublicClass",
            None,
            vec![
                property("publicProperty", "String", None),
                property("privateProperty", "String", Some(VisibilityModifier::Private)),
            ],
        )];

        let output = render(&forest);
        assert!(output.contains("    val publicProperty: String\n"));
        assert!(!output.contains("privateProperty"));
    }

    #[test]
    fn test_scenario_empty_forest() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_hidden_container_suppresses_public_descendants() {
        let forest = vec![class(
            "Outer",
            Some(VisibilityModifier::Internal),
            vec![
                function("visibleLooking", None),
                class("Inner", None, vec![property("deep", "Int", None)]),
            ],
        )];

        assert_eq!(render(&forest), "");
    }

    #[test]
    fn test_hidden_nested_container_only_drops_its_subtree() {
        let forest = vec![class(
            "Outer",
            None,
            vec![
                class("Hidden", Some(VisibilityModifier::Private), vec![function("f", None)]),
                function("g", None),
            ],
        )];

        assert_eq!(render(&forest), "class Outer {\n    fun g()\n}\n");
    }

    #[test]
    fn test_empty_container_keeps_braces() {
        let forest = vec![class(
            "Empty",
            None,
            vec![function("secret", Some(VisibilityModifier::Private))],
        )];

        assert_eq!(render(&forest), "class Empty {\n}\n");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let forest = vec![
            class("A", None, vec![function("f", None), property("p", "Int", None)]),
            function("g", None),
        ];

        assert_eq!(render(&forest), render(&forest));
    }

    #[test]
    fn test_function_parameters_and_return_type() {
        let forest = vec![ParsedDeclaration::Function(ParsedFunction {
            name: Some("lookup".to_string()),
            visibility: None,
            params: vec![
                Parameter { name: "key".to_string(), ty: Some("String".to_string()) },
                Parameter { name: "fallback".to_string(), ty: None },
            ],
            return_type: Some("Int?".to_string()),
        })];

        assert_eq!(render(&forest), "fun lookup(key: String, fallback: Any): Int?\n");
    }

    #[test]
    fn test_placeholders_for_missing_parts() {
        let forest = vec![
            ParsedDeclaration::Function(ParsedFunction {
                name: None,
                visibility: None,
                params: vec![],
                return_type: None,
            }),
            ParsedDeclaration::Property(ParsedProperty {
                name: Some("counter".to_string()),
                visibility: None,
                ty: None,
                mutability: Mutability::Var,
            }),
            ParsedDeclaration::TypeAlias(ParsedTypeAlias {
                name: Some("Handler".to_string()),
                visibility: None,
                target: None,
            }),
        ];

        assert_eq!(
            render(&forest),
            "fun <anonymous>()\nvar counter: Unknown\ntypealias Handler = <?>\n"
        );
    }

    #[test]
    fn test_container_keywords() {
        let forest = vec![
            container("Plain", ContainerKind::Class, None, vec![]),
            container("Shape", ContainerKind::Interface, None, vec![]),
            container("Color", ContainerKind::Enum, None, vec![]),
            container("Point", ContainerKind::Data, None, vec![]),
            container("Registry", ContainerKind::Object, None, vec![]),
            container("Factory", ContainerKind::CompanionObject, None, vec![]),
        ];

        let output = render(&forest);
        let headers: Vec<&str> = output.lines().filter(|line| line.ends_with('{')).collect();

        assert_eq!(
            headers,
            vec![
                "class Plain {",
                "interface Shape {",
                "enum class Color {",
                "data class Point {",
                "object Registry {",
                "object Factory {",
            ]
        );
    }

    #[test]
    fn test_stored_fields_precede_members() {
        let forest = vec![ParsedDeclaration::Container(ParsedContainer {
            name: Some("User".to_string()),
            visibility: None,
            kind: ContainerKind::Data,
            fields: vec![
                ConstructorField {
                    name: "id".to_string(),
                    ty: Some("Long".to_string()),
                    mutability: Mutability::Val,
                },
                ConstructorField {
                    name: "nick".to_string(),
                    ty: None,
                    mutability: Mutability::Var,
                },
            ],
            members: vec![function("display", None)],
        })];

        assert_eq!(
            render(&forest),
            "data class User {\n    val id: Long\n    var nick: Any\n    fun display()\n}\n"
        );
    }

    #[test]
    fn test_objects_ignore_constructor_fields() {
        let forest = vec![ParsedDeclaration::Container(ParsedContainer {
            name: None,
            visibility: None,
            kind: ContainerKind::CompanionObject,
            fields: vec![ConstructorField {
                name: "ignored".to_string(),
                ty: None,
                mutability: Mutability::Val,
            }],
            members: vec![],
        })];

        assert_eq!(render(&forest), "object <anonymous> {\n}\n");
    }

    #[test]
    fn test_nested_indentation() {
        let forest = vec![class(
            "A",
            None,
            vec![class("B", None, vec![class("C", None, vec![function("f", None)])])],
        )];

        assert_eq!(
            render(&forest),
            "class A {\n    class B {\n        class C {\n            fun f()\n        }\n    }\n}\n"
        );
    }
}

#[cfg(test)]
mod frontend_tests {
    use crate::summarize_str;
    use anyhow::Result;

    #[test]
    fn test_sample_file() -> Result<()> {
        let source = r#"
package testDir

class Test {
    public fun publicFunction() {
        println("publicFunction")
    }
}

private fun privateFunction() {
    println("privateFunction")
}

internal fun internalFunction() {
    println("internalFunction")
}

fun Function() {
    println("protectedFunction")
}

class PublicClass {
    public fun method() {
        println("method")
    }

    protected  fun protectedMethod() {
        println("protectedMethod")
    }
}
"#;

        assert_eq!(
            summarize_str(source)?,
            "class Test {\n    fun publicFunction()\n}\nfun Function()\nclass PublicClass {\n    fun method()\n}\n"
        );
        Ok(())
    }

    #[test]
    fn test_properties_and_return_types() -> Result<()> {
        let source = r#"
fun test(): String {
    return "Test"
}

public class PublicClass {
    val publicProperty: String = "PublicProperty"
    private val privateProperty: String = "PrivateProperty"
    var counter = 0
}
"#;

        assert_eq!(
            summarize_str(source)?,
            "fun test(): String\nclass PublicClass {\n    val publicProperty: String\n    var counter: Unknown\n}\n"
        );
        Ok(())
    }

    #[test]
    fn test_parameters() -> Result<()> {
        let source = "fun connect(host: String, port: Int = 80): Boolean = true\n";

        assert_eq!(
            summarize_str(source)?,
            "fun connect(host: String, port: Int): Boolean\n"
        );
        Ok(())
    }

    #[test]
    fn test_container_kinds() -> Result<()> {
        let source = r#"
interface Shape {
    fun area(): Double
}

enum class Color {
    RED, GREEN;

    fun hex(): String = ""
}

data class Point(val x: Int, var y: Int, scale: Int)

object Registry {
    fun register(name: String)
}

class Service {
    companion object {
        fun create(): Service = Service()
    }
}
"#;

        let output = summarize_str(source)?;

        assert!(output.contains("interface Shape {\n    fun area(): Double\n}\n"));
        assert!(output.contains("enum class Color {\n"));
        assert!(output.contains("    fun hex(): String\n"));
        assert!(output.contains("data class Point {\n    val x: Int\n    var y: Int\n}\n"));
        assert!(!output.contains("scale"));
        assert!(output.contains("object Registry {\n    fun register(name: String)\n}\n"));
        assert!(output.contains("class Service {\n    object <anonymous> {\n        fun create(): Service\n    }\n}\n"));
        Ok(())
    }

    #[test]
    fn test_type_alias() -> Result<()> {
        let source = "typealias Handler = (String) -> Unit\nprivate typealias Hidden = Int\n";

        assert_eq!(summarize_str(source)?, "typealias Handler = (String) -> Unit\n");
        Ok(())
    }

    #[test]
    fn test_private_class_hides_members() -> Result<()> {
        let source = r#"
private class Hidden {
    fun looksPublic() {}
    class Nested {
        val deep: Int = 1
    }
}
"#;

        assert_eq!(summarize_str(source)?, "");
        Ok(())
    }

    #[test]
    fn test_empty_source() -> Result<()> {
        assert_eq!(summarize_str("")?, "");
        Ok(())
    }

    #[test]
    fn test_annotations_do_not_hide_declarations() -> Result<()> {
        let source = "@Deprecated(\"old\")\nfun legacy()\n";

        assert_eq!(summarize_str(source)?, "fun legacy()\n");
        Ok(())
    }

    #[test]
    fn test_one_line_bodies() -> Result<()> {
        assert_eq!(summarize_str("class A { val x = 1 }\n")?, "class A {\n    val x: Unknown\n}\n");
        assert_eq!(summarize_str("object O { fun x() {} }\n")?, "object O {\n    fun x()\n}\n");
        assert_eq!(
            summarize_str("class A(val x: Int) { fun a() {} }\n")?,
            "class A {\n    val x: Int\n    fun a()\n}\n"
        );
        Ok(())
    }

    #[test]
    fn test_one_line_nested_body_stays_nested() -> Result<()> {
        let output = summarize_str("class Outer { inner class In { val z = 1 } }\n")?;

        assert!(output.starts_with("class Outer {\n"), "got: {}", output);
        assert!(!output.lines().any(|line| line.starts_with("val z")), "got: {}", output);
        Ok(())
    }

    #[test]
    fn test_broken_member_keeps_siblings() -> Result<()> {
        let source = r#"
class Widget {
    fun ok() {}
    val = 5
    fun alsoOk(): Int = 1
}
"#;

        let output = summarize_str(source)?;

        assert!(output.starts_with("class Widget {\n"), "got: {}", output);
        assert!(output.contains("    fun ok()\n"), "got: {}", output);
        assert!(!output.contains("enum class"), "got: {}", output);
        Ok(())
    }
}
