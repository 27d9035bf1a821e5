use super::*;
use crate::test_fixtures::{CAR, Fixture, messages};

fn options(packages: &[&str], strict: bool) -> ScanOptions {
    ScanOptions {
        source_packages: packages.iter().map(|p| p.to_string()).collect(),
        strict,
    }
}

fn run(fx: &Fixture, processor: &mut BeanProcessor) -> BeanModelSet {
    for round in &fx.rounds {
        processor.process_round(fx.binder.symbols(), &fx.types, round);
    }
    processor.finish()
}

#[test]
fn test_process_car_example() {
    let fx = Fixture::new().round(CAR);
    let mut processor = BeanProcessor::new(&options(&["org.nibeans.example"], false));

    assert!(processor.process_round(fx.binder.symbols(), &fx.types, &fx.rounds[0]));
    let set = processor.finish();

    assert_eq!(set.len(), 1);
    let car = set.find("org.nibeans.example.Car").unwrap();
    assert_eq!(car.properties.len(), 2);
    assert!(!processor.tracker().has_issues());
}

#[test]
fn test_packages_outside_allow_list_are_ignored() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.other.Thing", "methods": [ { "name": "frobnicate" } ] } ]"#,
    );
    let mut processor = BeanProcessor::new(&options(&["org.x"], false));
    let set = run(&fx, &mut processor);

    assert!(set.is_empty());
    assert!(!processor.tracker().has_issues());
}

#[test]
fn test_non_bean_declarations_are_ignored() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Helper", "bean": false, "methods": [ { "name": "frobnicate" } ] } ]"#,
    );
    let mut processor = BeanProcessor::new(&options(&["org.x"], false));
    assert!(run(&fx, &mut processor).is_empty());
    assert!(!processor.tracker().has_issues());
}

#[test]
fn test_rounds_accumulate_and_link_once() {
    let fx = Fixture::new()
        .round(
            r#"[ { "name": "org.x.B", "bases": ["org.x.A"], "methods": [
                { "name": "getSize", "returns": "int" },
                { "name": "setSize", "parameters": ["int"] }
            ] } ]"#,
        )
        .round(
            r#"[ { "name": "org.x.A", "methods": [
                { "name": "getName", "returns": "java.lang.String" },
                { "name": "setName", "parameters": ["java.lang.String"] }
            ] } ]"#,
        );
    let mut processor = BeanProcessor::new(&options(&["org.x"], false));
    let set = run(&fx, &mut processor);

    assert_eq!(set.len(), 2, "{}", processor.tracker().render());
    let b = set.find("org.x.B").unwrap();
    assert_eq!(b.resolved_base, Some(fx.symbol("org.x.A")));
}

#[test]
fn test_round_with_host_errors_is_skipped() {
    let mut fx = Fixture::new().round(CAR);
    fx.rounds[0].error_raised = true;
    let mut processor = BeanProcessor::new(&options(&["org.nibeans.example"], false));

    assert!(!processor.process_round(fx.binder.symbols(), &fx.types, &fx.rounds[0]));
    assert!(processor.finish().is_empty());
}

#[test]
fn test_declarations_are_resolved_once() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Odd", "methods": [ { "name": "frobnicate" } ] } ]"#,
    );
    let mut processor = BeanProcessor::new(&options(&["org.x"], false));
    let round = &fx.rounds[0];
    processor.process_round(fx.binder.symbols(), &fx.types, round);
    processor.process_round(fx.binder.symbols(), &fx.types, round);

    assert_eq!(processor.models().count(), 1);
    assert_eq!(processor.tracker().total_issue_count(), 1);
}

#[test]
fn test_invalid_interfaces_do_not_affect_siblings() {
    let fx = Fixture::new().round(
        r#"[
            { "name": "org.x.Good", "methods": [
                { "name": "isReady", "returns": "boolean" },
                { "name": "setReady", "parameters": ["boolean"] }
            ] },
            { "name": "org.x.Bad", "methods": [ { "name": "isReady", "returns": "int" } ] }
        ]"#,
    );
    let mut processor = BeanProcessor::new(&options(&["org.x"], true));
    let set = run(&fx, &mut processor);

    assert_eq!(
        set.iter().map(|m| m.simple_name.as_str()).collect::<Vec<_>>(),
        vec!["Good"]
    );
    assert_eq!(messages(processor.tracker()), vec!["non-boolean return type int"]);
    assert!(processor.tracker().severity().is_error());
}

#[test]
fn test_finish_twice_returns_empty() {
    let fx = Fixture::new().round(CAR);
    let mut processor = BeanProcessor::new(&options(&["org.nibeans.example"], false));
    assert_eq!(run(&fx, &mut processor).len(), 1);
    assert!(processor.finish().is_empty());
    assert!(!processor.process_round(fx.binder.symbols(), &fx.types, &fx.rounds[0]));
}

#[test]
fn test_finish_leaves_tracker_at_run_scope() {
    let fx = Fixture::new().round(
        r#"[ { "name": "org.x.Derived", "bases": ["org.y.Missing"], "methods": [
            { "name": "frobnicate" }
        ] } ]"#,
    );
    let mut processor = BeanProcessor::new(&options(&["org.x"], false));
    assert!(run(&fx, &mut processor).is_empty());

    assert_eq!(processor.tracker().depth(), 0);
    processor.tracker_mut().add_issue("run-level note");
    assert_eq!(
        processor.tracker().issues(nib_common::ScopeId::ROOT),
        ["run-level note"]
    );
}
