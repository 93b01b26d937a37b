//! Tests for output serialization

use hsa::output::{PreflightReport, SetupSummary};

#[test]
fn test_setup_summary_serializes_all_fields() {
    let summary = SetupSummary {
        success: true,
        project_dir: "helpscout-analytics".to_string(),
        files_created: 7,
        commit: "abc1234".to_string(),
    };

    let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["project_dir"], "helpscout-analytics");
    assert_eq!(json["files_created"], 7);
    assert_eq!(json["commit"], "abc1234");
}

#[test]
fn test_preflight_report_serializes_all_fields() {
    let report = PreflightReport {
        venv: true,
        env_file: true,
        data_file: false,
    };

    let json: serde_json::Value = serde_json::to_value(report).unwrap();
    assert_eq!(json["venv"], true);
    assert_eq!(json["env_file"], true);
    assert_eq!(json["data_file"], false);
}
