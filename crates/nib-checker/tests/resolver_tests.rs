use super::*;
use crate::test_fixtures::{CAR, Fixture, messages};
use nib_solver::PrimitiveKind;

fn format(fx: &Fixture, ty: TypeId) -> String {
    TypeFormatter::new(&fx.types).format(ty)
}

#[test]
fn test_resolve_car_example() {
    let fx = Fixture::new().round(CAR);
    let (model, tracker) = fx.resolve("org.nibeans.example.Car");
    let model = model.expect("Car should resolve");

    assert!(model.valid);
    assert!(!tracker.has_issues(), "{}", tracker.render());
    assert_eq!(
        model.properties.keys().collect::<Vec<_>>(),
        vec!["automatic", "make"]
    );

    let make = model.property("make").unwrap();
    assert_eq!(format(&fx, make.value_type), "java.lang.String");
    assert_eq!(make.getter.as_ref().unwrap().name, "getMake");
    assert_eq!(make.setter.as_ref().unwrap().name, "setMake");
    assert_eq!(make.chain_setter.as_ref().unwrap().name, "withMake");
    assert!(make.boolean_getter.is_none());
    assert_eq!(make.role_count, 3);

    let automatic = model.property("automatic").unwrap();
    assert_eq!(
        format(&fx, automatic.value_type),
        "java.lang.Boolean",
        "boxed setter should widen the value type"
    );
    assert_eq!(automatic.boolean_getter.as_ref().unwrap().ty, TypeId::BOOLEAN);
    assert!(automatic.getter.is_none());
    assert_eq!(automatic.role_count, 2);
}

#[test]
fn test_getter_and_setter_of_matching_type() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Person", "methods": [
            { "name": "getName", "returns": "java.lang.String" },
            { "name": "setName", "parameters": ["java.lang.String"] },
            { "name": "getAge", "returns": "int" },
            { "name": "setAge", "parameters": ["int"] }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.Person");
    let model = model.unwrap();

    assert!(model.valid);
    assert!(!tracker.has_issues());
    assert_eq!(model.properties.len(), 2);
    assert_eq!(model.property("age").unwrap().value_type, TypeId::INT);
    assert!(model.properties.values().all(Property::is_complete));
}

#[test]
fn test_getter_only_property_is_incomplete() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.ReadOnly", "methods": [
            { "name": "getName", "returns": "java.lang.String" }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.ReadOnly");
    let model = model.expect("incomplete interfaces still produce a model");

    assert!(!model.valid);
    assert_eq!(
        messages(&tracker),
        vec!["incomplete bean property `name`: missing setter"]
    );
}

#[test]
fn test_setter_only_property_is_incomplete() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.WriteOnly", "methods": [
            { "name": "setName", "parameters": ["java.lang.String"] }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.WriteOnly");

    assert!(!model.unwrap().valid);
    assert_eq!(
        messages(&tracker),
        vec!["incomplete bean property `name`: missing getter"]
    );
}

#[test]
fn test_non_boolean_is_getter_is_rejected() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Flag", "methods": [
            { "name": "isActive", "returns": "java.lang.String" },
            { "name": "setActive", "parameters": ["java.lang.String"] }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.Flag");
    let model = model.unwrap();

    assert!(!model.valid);
    let issues = messages(&tracker);
    assert!(
        issues.contains(&"non-boolean return type java.lang.String".to_string()),
        "{issues:?}"
    );
    assert!(model.property("active").unwrap().boolean_getter.is_none());
}

#[test]
fn test_boxed_boolean_is_getter_is_accepted() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Flag", "methods": [
            { "name": "isActive", "returns": "java.lang.Boolean" },
            { "name": "setActive", "parameters": ["boolean"] }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.Flag");
    let model = model.unwrap();

    assert!(model.valid, "{}", tracker.render());
    let active = model.property("active").unwrap();
    assert_eq!(format(&fx, active.value_type), "java.lang.Boolean");
}

#[test]
fn test_fluent_setter_is_distinct_from_chain_setter() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Car", "methods": [
            { "name": "getMake", "returns": "java.lang.String" },
            { "name": "setMake", "parameters": ["java.lang.String"], "returns": "org.x.Car" },
            { "name": "withMake", "parameters": ["java.lang.String"], "returns": "org.x.Car" }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.Car");
    let model = model.unwrap();
    assert!(model.valid, "{}", tracker.render());

    let make = model.property("make").unwrap();
    let setter = make.setter.as_ref().unwrap();
    let chain = make.chain_setter.as_ref().unwrap();
    assert!(setter.returns_self, "self-returning setter is fluent");
    assert_eq!(setter.name, "setMake");
    assert_eq!(chain.name, "withMake");
    assert_eq!(
        make.accessors().map(|(kind, _)| kind).collect::<Vec<_>>(),
        vec![AccessorKind::Getter, AccessorKind::Setter, AccessorKind::ChainSetter]
    );
}

#[test]
fn test_void_setter_is_not_fluent() {
    let fx = Fixture::new().round(CAR);
    let (model, _) = fx.resolve("org.nibeans.example.Car");
    let make = model.unwrap().properties.remove("make").unwrap();
    assert!(!make.setter.unwrap().returns_self);
    assert!(make.chain_setter.unwrap().returns_self);
}

#[test]
fn test_boxing_widens_primitive_getter() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Counter", "methods": [
            { "name": "getCount", "returns": "int" },
            { "name": "setCount", "parameters": ["java.lang.Integer"] }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.Counter");
    let model = model.unwrap();

    assert!(model.valid, "{}", tracker.render());
    let count = model.property("count").unwrap();
    assert_eq!(count.value_type, fx.types.boxed_type(PrimitiveKind::Int));
    assert_eq!(count.getter.as_ref().unwrap().ty, TypeId::INT);
}

#[test]
fn test_boxed_getter_does_not_narrow_to_primitive() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Counter", "methods": [
            { "name": "getCount", "returns": "java.lang.Integer" },
            { "name": "setCount", "parameters": ["int"] }
        ] } ]"#,
    );
    let (model, _) = fx.resolve("org.x.Counter");
    let count = model.unwrap().properties.remove("count").unwrap();
    assert_eq!(count.value_type, fx.types.boxed_type(PrimitiveKind::Int));
}

#[test]
fn test_incompatible_setter_type_is_rejected() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Counter", "methods": [
            { "name": "getCount", "returns": "int" },
            { "name": "setCount", "parameters": ["long"] }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.Counter");

    assert!(!model.unwrap().valid);
    let issues = messages(&tracker);
    assert!(
        issues.contains(&"setter type long isn't compatible with int".to_string()),
        "{issues:?}"
    );
    assert!(
        issues.contains(&"incomplete bean property `count`: missing setter".to_string()),
        "{issues:?}"
    );
}

#[test]
fn test_incompatible_getter_after_setter() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Named", "methods": [
            { "name": "setName", "parameters": ["java.lang.String"] },
            { "name": "getName", "returns": "int" }
        ] } ]"#,
    );
    let (_, tracker) = fx.resolve("org.x.Named");
    let issues = messages(&tracker);
    assert!(
        issues.contains(&"getter type int isn't compatible with java.lang.String".to_string()),
        "{issues:?}"
    );
}

#[test]
fn test_is_and_get_getters_coexist() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Toggle", "methods": [
            { "name": "isEnabled", "returns": "boolean" },
            { "name": "getEnabled", "returns": "java.lang.Boolean" },
            { "name": "setEnabled", "parameters": ["boolean"] }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.Toggle");
    let model = model.unwrap();

    assert!(model.valid, "{}", tracker.render());
    let enabled = model.property("enabled").unwrap();
    assert!(enabled.getter.is_some());
    assert!(enabled.boolean_getter.is_some());
    assert_eq!(enabled.role_count, 3);
    assert_eq!(
        enabled.value_type,
        TypeId::BOOLEAN,
        "getters never widen the value type"
    );
}

#[test]
fn test_overloaded_setter_conflicts() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Car", "methods": [
            { "name": "getMake", "returns": "java.lang.String" },
            { "name": "setMake", "parameters": ["java.lang.String"] },
            { "name": "setMake", "parameters": ["java.lang.CharSequence"] }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.Car");

    assert!(!model.unwrap().valid);
    assert_eq!(
        messages(&tracker),
        vec!["conflict with already defined setter setMake(java.lang.String)"]
    );
}

#[test]
fn test_signature_rejections() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Odd", "methods": [
            { "name": "getA", "parameters": ["int"], "returns": "int" },
            { "name": "getB" },
            { "name": "setC", "parameters": ["int", "int"] },
            { "name": "setD", "parameters": ["int"], "returns": "java.lang.String" },
            { "name": "withE", "parameters": ["int"] },
            { "name": "withF", "parameters": [], "returns": "org.x.Odd" },
            { "name": "frobnicate", "parameters": ["int"] },
            { "name": "getG", "typeParameters": ["T"], "returns": "T" }
        ] } ]"#,
    );
    let (model, tracker) = fx.resolve("org.x.Odd");
    let model = model.unwrap();

    assert!(!model.valid);
    assert!(model.properties.is_empty());
    assert_eq!(
        messages(&tracker),
        vec![
            "unsupported getter signature",
            "unsupported getter signature",
            "unsupported setter signature",
            "unsupported setter signature",
            "unsupported chain setter signature",
            "unsupported chain setter signature",
            "unsupported method frobnicate(int)",
            "there are member-level generic type arguments",
        ],
        "every method is visited even after a failure"
    );
}

#[test]
fn test_method_issues_are_scoped_to_the_method() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Odd", "methods": [
            { "name": "getName", "returns": "java.lang.String" },
            { "name": "setName", "parameters": ["java.lang.String"] },
            { "name": "frobnicate" }
        ] } ]"#,
    );
    let symbol = fx.symbol("org.x.Odd");
    let (_, tracker) = fx.resolve("org.x.Odd");

    let interface = tracker
        .find_scope(&[ScopeElement::Interface(symbol)])
        .expect("interface scope should survive");
    assert_eq!(tracker.label(interface), Some("org.x.Odd"));
    assert_eq!(tracker.children(interface).len(), 1, "clean methods are pruned");

    let method = tracker
        .find_scope(&[ScopeElement::Interface(symbol), ScopeElement::Method(symbol, 2)])
        .unwrap();
    assert_eq!(tracker.label(method), Some("frobnicate()"));
    assert_eq!(tracker.issues(method), ["unsupported method frobnicate()"]);
    assert_eq!(tracker.depth(), 0);
}

#[test]
fn test_interface_level_rejections() {
    let fx = Fixture::new().round(
        r#"[
            { "name": "org.x.Engine", "kind": "class" },
            { "name": "org.x.A" },
            { "name": "org.x.B" },
            { "name": "org.x.Both", "bases": ["org.x.A", "org.x.B"] },
            { "name": "org.x.Box", "typeParameters": ["T"] },
            { "name": "org.x.Motor", "bases": ["org.x.Engine"] },
            { "name": "org.x.Numbers", "bases": ["int"] }
        ]"#,
    );
    let cases = [
        ("org.x.Engine", "not an interface type"),
        ("org.x.Both", "there is more than one base interface"),
        ("org.x.Box", "there are generic type arguments"),
        ("org.x.Motor", "base type org.x.Engine is not an interface"),
        ("org.x.Numbers", "base type int is not an interface"),
    ];
    for (name, expected) in cases {
        let (model, tracker) = fx.resolve(name);
        assert!(model.is_none(), "{name} should be rejected");
        assert_eq!(messages(&tracker), vec![expected], "{name}");
    }
}

#[test]
fn test_unknown_base_is_kept_for_linking() {
    let fx = Fixture::new().round(r#"[ { "name": "org.x.Car", "bases": ["org.y.Vehicle"] } ]"#);
    let (model, tracker) = fx.resolve("org.x.Car");
    let model = model.unwrap();

    assert!(model.valid);
    assert!(!tracker.has_issues());
    let base = model.base.unwrap();
    assert_eq!(base.qualified_name, "org.y.Vehicle");
    assert_eq!(base.symbol, None);
    assert_eq!(model.resolved_base, None);
}

#[test]
fn test_empty_interface_is_valid() {
    let fx = Fixture::new().round(r#"[ { "name": "org.x.Marker" } ]"#);
    let (model, _) = fx.resolve("org.x.Marker");
    let model = model.unwrap();
    assert!(model.valid);
    assert!(model.properties.is_empty());
    assert_eq!(model.impl_class_name(), "Marker_impl");
}
