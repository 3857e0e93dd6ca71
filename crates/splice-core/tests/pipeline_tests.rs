//! Integration tests for the pipeline against real files.

use pretty_assertions::assert_eq;
use rstest::rstest;
use splice_blocks::LocateStrategy;
use splice_core::{Error, JobConfig, Mode, Pipeline};
use splice_test_utils::project::TestProject;
use splice_test_utils::scenario;

fn pipeline(project: &TestProject) -> Pipeline {
    Pipeline::new(project.root(), JobConfig::default()).unwrap()
}

#[test]
fn test_review_writes_sibling_and_keeps_target() {
    let project = TestProject::with_layout(scenario::SOURCE, scenario::TARGET);

    let outcome = pipeline(&project).run(Mode::Review).unwrap();

    assert_eq!(project.read(scenario::REVIEW_PATH), scenario::EXPECTED);
    assert_eq!(project.read(scenario::TARGET_PATH), scenario::TARGET);
    assert_eq!(
        outcome.written.unwrap().to_native(),
        project.path(scenario::REVIEW_PATH)
    );
    assert_eq!(outcome.strategy, LocateStrategy::Pattern);
    assert_eq!(outcome.report.old.entries, 1);
    assert_eq!(outcome.report.new.entries, 2);
}

#[test]
fn test_direct_overwrites_target() {
    let project = TestProject::with_layout(scenario::SOURCE, scenario::TARGET);

    let outcome = pipeline(&project).run(Mode::Direct).unwrap();

    assert_eq!(project.read(scenario::TARGET_PATH), scenario::EXPECTED);
    project.assert_file_not_exists(scenario::REVIEW_PATH);
    assert_eq!(outcome.strategy, LocateStrategy::Lines);
    assert_eq!(project.list_dir("public/js"), vec!["app.js".to_string()]);
}

#[test]
fn test_check_writes_nothing() {
    let project = TestProject::with_layout(scenario::SOURCE, scenario::TARGET);

    let outcome = pipeline(&project).run(Mode::Check).unwrap();

    assert!(outcome.written.is_none());
    assert_eq!(outcome.report.new.entries, 2);
    assert_eq!(project.read(scenario::TARGET_PATH), scenario::TARGET);
    project.assert_file_not_exists(scenario::REVIEW_PATH);
}

#[test]
fn test_review_twice_is_idempotent() {
    let project = TestProject::with_layout(scenario::APP_SOURCE, scenario::APP_TARGET);
    let pipeline = pipeline(&project);

    pipeline.run(Mode::Review).unwrap();
    let first = project.read(scenario::REVIEW_PATH);
    pipeline.run(Mode::Review).unwrap();
    let second = project.read(scenario::REVIEW_PATH);

    assert_eq!(first, second);
}

#[rstest]
#[case(Mode::Review)]
#[case(Mode::Direct)]
fn test_strategies_agree_on_app_layout(#[case] mode: Mode) {
    let project = TestProject::with_layout(scenario::APP_SOURCE, scenario::APP_TARGET);

    let outcome = pipeline(&project).run(mode).unwrap();
    let written = std::fs::read_to_string(outcome.written.unwrap().to_native()).unwrap();

    assert!(written.starts_with("const game = {\n  techs: {},\n};\n\nconst TECH_DEFINITIONS = {\n  materials_metallurgy: {"));
    assert!(written.contains("  stellarMastery: {\n"));
    assert!(written.ends_with("};\n\n// Initialize tech state\nObject.keys(TECH_DEFINITIONS).forEach(key => {\n  game.techs[key] = { researched: false };\n});\n"));
    assert!(!written.contains("// TIER 1"));
    assert_eq!(outcome.report.old.entries, 2);
    assert_eq!(outcome.report.new.entries, 4);
}

#[rstest]
#[case(Mode::Review)]
#[case(Mode::Direct)]
fn test_missing_end_marker_leaves_files_untouched(#[case] mode: Mode) {
    let target = "const TECH_DEFINITIONS = {\n  x: {},\n};\n";
    let project = TestProject::with_layout(scenario::SOURCE, target);

    let err = pipeline(&project).run(mode).unwrap_err();

    assert!(matches!(
        err,
        Error::Blocks(splice_blocks::Error::BoundaryNotFound { .. })
    ));
    assert!(err.to_string().contains("app.js"));
    assert_eq!(project.read(scenario::TARGET_PATH), target);
    project.assert_file_not_exists(scenario::REVIEW_PATH);
}

#[rstest]
#[case(Mode::Review)]
#[case(Mode::Direct)]
fn test_missing_start_marker_leaves_files_untouched(#[case] mode: Mode) {
    let target = "const OTHER = {\n};\n\n// Initialize tech state\n";
    let project = TestProject::with_layout(scenario::SOURCE, target);

    let err = pipeline(&project).run(mode).unwrap_err();

    assert!(matches!(
        err,
        Error::Blocks(splice_blocks::Error::BoundaryNotFound { start: None, .. })
    ));
    assert_eq!(project.read(scenario::TARGET_PATH), target);
    project.assert_file_not_exists(scenario::REVIEW_PATH);
}

#[test]
fn test_check_detects_same_size_content_change() {
    let source = "const TECH_DEFINITIONS_EXPANDED = {\n  a: {},\n};";
    let project = TestProject::with_layout(source, scenario::TARGET);

    let outcome = pipeline(&project).run(Mode::Check).unwrap();

    assert_eq!(outcome.report.old, outcome.report.new);
    assert!(!outcome.report.unchanged);
}

#[test]
fn test_check_reports_unchanged_after_apply() {
    let project = TestProject::with_layout(scenario::SOURCE, scenario::TARGET);
    let pipeline = pipeline(&project);

    pipeline.run(Mode::Direct).unwrap();
    let outcome = pipeline.run(Mode::Check).unwrap();

    assert!(outcome.report.unchanged);
}

#[cfg(unix)]
#[test]
fn test_direct_keeps_target_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let project = TestProject::with_layout(scenario::SOURCE, scenario::TARGET);
    let target = project.path(scenario::TARGET_PATH);
    std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o600)).unwrap();

    pipeline(&project).run(Mode::Direct).unwrap();

    let mode = std::fs::metadata(&target).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
    assert_eq!(project.read(scenario::TARGET_PATH), scenario::EXPECTED);
}

#[test]
fn test_missing_source_block_is_not_found() {
    let project = TestProject::with_layout("const SOMETHING_ELSE = {\n};", scenario::TARGET);

    let err = pipeline(&project).run(Mode::Review).unwrap_err();

    assert!(matches!(
        err,
        Error::Blocks(splice_blocks::Error::NotFound { ref name, .. }) if name == "TECH_DEFINITIONS_EXPANDED"
    ));
    assert!(err.to_string().contains("tech-tree-expanded.js"));
    project.assert_file_not_exists(scenario::REVIEW_PATH);
}

#[test]
fn test_missing_source_file_is_io_error() {
    let project = TestProject::new();
    project.write(scenario::TARGET_PATH, scenario::TARGET);

    let err = pipeline(&project).run(Mode::Review).unwrap_err();

    assert!(matches!(err, Error::Fs(splice_fs::Error::Io { .. })));
}

#[test]
fn test_custom_job_config() {
    let project = TestProject::new();
    project.write("data/tree.js", "const TREE = {\n  t1: {},\n};\n");
    project.write(
        "web/main.js",
        "let a;\nconst TECHS = {\n};\n// boot\nstart();\n",
    );
    let config = JobConfig {
        source: "data/tree.js".into(),
        target: "web/main.js".into(),
        source_block: "TREE".into(),
        target_block: "TECHS".into(),
        end_marker: "// boot".into(),
        review_suffix: "review".into(),
        strategy: None,
    };

    Pipeline::new(project.root(), config)
        .unwrap()
        .run(Mode::Review)
        .unwrap();

    assert_eq!(
        project.read("web/main.js.review"),
        "let a;\nconst TECHS = {\n  t1: {},\n};\n// boot\nstart();\n"
    );
}

#[test]
fn test_load_job_from_toml() {
    let project = TestProject::new();
    project.write(
        "techsplice.toml",
        "target = \"web/main.js\"\nstrategy = \"lines\"\n",
    );

    let config =
        JobConfig::load(&splice_fs::NormalizedPath::new(project.path("techsplice.toml"))).unwrap();

    assert_eq!(config.target, "web/main.js");
    assert_eq!(config.source, "tech-tree-expanded.js");
    assert_eq!(config.strategy, Some(LocateStrategy::Lines));
}

#[test]
fn test_load_job_rejects_unknown_field() {
    let project = TestProject::new();
    project.write("techsplice.json", r#"{"targt": "web/main.js"}"#);

    let result = JobConfig::load(&splice_fs::NormalizedPath::new(project.path("techsplice.json")));

    assert!(matches!(
        result,
        Err(Error::Fs(splice_fs::Error::ConfigParse { .. }))
    ));
}

#[test]
fn test_outcome_serializes_to_json() {
    let project = TestProject::with_layout(scenario::SOURCE, scenario::TARGET);

    let outcome = pipeline(&project).run(Mode::Check).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["mode"], "check");
    assert_eq!(json["strategy"], "pattern");
    assert_eq!(json["report"]["old"]["entries"], 1);
    assert_eq!(json["report"]["new"]["entries"], 2);
    assert!(json["written"].is_null());
}
