use std::fs;
use std::path::Path;

use tempfile::tempdir;

use flowchart_data::config::{Config, SectionSource};
use flowchart_data::workflow::{SectionOutcome, SkipReason, run_with_config};

const SHEET: &str = "\
,BJB: Case Opening,,,
#,Quick Action Panel,Assigned To,Task,Objective,Function,SLA
,Case Setup,Alice,Open matter,Create the matter record,Intake,1 day
,Filing,Bob,File complaint,,Legal,3 days
";

fn write_input(base: &Path, file: &str, content: &str) {
    let dir = base.join("tmp-csv");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

#[test]
fn test_default_batch_writes_both_destinations() {
    let temp_dir = tempdir().unwrap();
    write_input(temp_dir.path(), "case-opening.csv", SHEET);

    let context = run_with_config(&Config::default(), temp_dir.path(), false).unwrap();

    assert_eq!(context.stats.sections_processed, 5);
    assert_eq!(context.stats.sections_emitted, 1);
    assert_eq!(context.stats.sections_skipped, 4);
    assert_eq!(context.stats.errors, 0);

    let data = fs::read(temp_dir.path().join("data/case-opening.json")).unwrap();
    let public = fs::read(temp_dir.path().join("public/data/case-opening.json")).unwrap();
    assert_eq!(data, public);

    let json: serde_json::Value = serde_json::from_slice(&data).unwrap();
    assert_eq!(json["title"], "Case Opening");
    assert_eq!(json["subtitle"], "2 tasks — Case Setup through Filing");
    assert_eq!(json["tasks"][1]["function"], "Legal");
}

#[test]
fn test_outcomes_follow_section_order() {
    let temp_dir = tempdir().unwrap();
    write_input(temp_dir.path(), "discovery.csv", ",Only a title\n");
    write_input(temp_dir.path(), "case-opening.csv", SHEET);

    let context = run_with_config(&Config::default(), temp_dir.path(), false).unwrap();
    let lines: Vec<String> = context.outcomes.iter().map(|o| o.status_line()).collect();

    assert_eq!(
        lines,
        vec![
            "  OK    case-opening.json  (2 tasks, 2 phases)",
            "  SKIP  treatment-monitoring.csv (not found)",
            "  SKIP  discovery.csv (empty or no tasks)",
            "  SKIP  expert-deposition.csv (not found)",
            "  SKIP  arbitration-mediation.csv (not found)",
        ]
    );
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = tempdir().unwrap();
    write_input(temp_dir.path(), "case-opening.csv", SHEET);

    let context = run_with_config(&Config::default(), temp_dir.path(), true).unwrap();

    assert!(context.dry_run);
    assert!(matches!(
        context.outcomes[0],
        SectionOutcome::Emitted { written: false, .. }
    ));
    assert!(!temp_dir.path().join("data").exists());
}

#[test]
fn test_unreadable_section_does_not_stop_the_batch() {
    let temp_dir = tempdir().unwrap();
    // a directory exists at the path but cannot be read as a file
    fs::create_dir_all(temp_dir.path().join("tmp-csv/first.csv")).unwrap();
    write_input(temp_dir.path(), "second.csv", SHEET);

    let config = Config {
        sections: vec![
            SectionSource::new("first.csv", "first"),
            SectionSource::new("second.csv", "second"),
        ],
        ..Config::default()
    };
    let context = run_with_config(&config, temp_dir.path(), false).unwrap();

    assert_eq!(context.stats.sections_emitted, 1);
    assert_eq!(context.stats.errors, 1);
    assert!(matches!(
        &context.outcomes[0],
        SectionOutcome::Skipped {
            reason: SkipReason::Failed(_),
            ..
        }
    ));
    assert!(
        context.outcomes[0]
            .status_line()
            .starts_with("  SKIP  first.csv (error: Failed to read file:")
    );
    assert!(temp_dir.path().join("data/second.json").exists());
}

#[test]
fn test_write_failure_is_reported_as_error() {
    let temp_dir = tempdir().unwrap();
    write_input(temp_dir.path(), "case-opening.csv", SHEET);
    // a file where the output folder should be
    fs::write(temp_dir.path().join("blocked"), "").unwrap();

    let config = Config {
        sections: vec![SectionSource::new("case-opening.csv", "case-opening")],
        output_dirs: vec!["blocked".into()],
        ..Config::default()
    };
    let context = run_with_config(&config, temp_dir.path(), false).unwrap();

    assert_eq!(context.stats.errors, 1);
    assert!(matches!(
        &context.outcomes[0],
        SectionOutcome::Skipped {
            reason: SkipReason::Failed(_),
            ..
        }
    ));
}

#[test]
fn test_configured_terminal_patterns_and_colours() {
    let temp_dir = tempdir().unwrap();
    write_input(
        temp_dir.path(),
        "intake.csv",
        ",Intake\nheader\n,Screening,Ann,Close file\n,Screening,Ann,Next\n",
    );

    let config: Config = serde_yaml::from_str(
        r##"
sections:
  - file: intake.csv
    id: intake
terminal_patterns: ["close file"]
category_colors:
  Screening: "#000000"
theme_colors:
  intake: "#123456"
"##,
    )
    .unwrap();
    run_with_config(&config, temp_dir.path(), false).unwrap();

    let json: serde_json::Value =
        serde_json::from_slice(&fs::read(temp_dir.path().join("data/intake.json")).unwrap())
            .unwrap();
    assert_eq!(json["themeColor"], "#123456");
    assert_eq!(json["legend"][0]["color"], "#000000");
    assert_eq!(json["styles"]["screening"]["fill"], "#d8d8d8");
    assert_eq!(json["tasks"][0]["connectsTo"], serde_json::json!([]));
}
