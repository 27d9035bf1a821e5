use clap::Parser;
use std::path::PathBuf;

use super::args::CliArgs;

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["nibeans"]).expect("default args should parse");

    assert!(args.source_packages.is_empty());
    assert!(args.target_class.is_none());
    assert!(!args.strict);
    assert!(!args.dry_run);
    assert!(args.out_dir.is_none());
    assert!(args.config.is_none());
    assert!(args.pretty.is_none());
    assert!(args.inputs.is_empty());
}

#[test]
fn parses_generator_options() {
    let args = CliArgs::try_parse_from([
        "nibeans",
        "--srcpackages",
        "org.x,org.y",
        "--tgtclass",
        "org.x.gen.Beans",
        "--strict",
        "--out-dir",
        "build/gen",
        "round1.json",
        "round2.json",
    ])
    .expect("generator args should parse");

    assert_eq!(args.source_packages, vec!["org.x", "org.y"]);
    assert_eq!(args.target_class.as_deref(), Some("org.x.gen.Beans"));
    assert!(args.strict);
    assert_eq!(args.out_dir, Some(PathBuf::from("build/gen")));
    assert_eq!(
        args.inputs,
        vec![PathBuf::from("round1.json"), PathBuf::from("round2.json")]
    );
}

#[test]
fn repeated_source_packages_accumulate() {
    let args = CliArgs::try_parse_from([
        "nibeans",
        "--srcpackages",
        "org.x",
        "--source-packages",
        "org.y",
    ])
    .expect("repeated packages should parse");

    assert_eq!(args.source_packages, vec!["org.x", "org.y"]);
}

#[test]
fn parses_config_pretty_and_dry_run() {
    let args = CliArgs::try_parse_from([
        "nibeans",
        "-c",
        "conf/nibeans.json",
        "--pretty",
        "false",
        "--dry-run",
    ])
    .expect("config args should parse");

    assert_eq!(args.config, Some(PathBuf::from("conf/nibeans.json")));
    assert_eq!(args.pretty, Some(false));
    assert!(args.dry_run);
}

#[test]
fn rejects_unknown_flag() {
    assert!(CliArgs::try_parse_from(["nibeans", "--watch"]).is_err());
}
