// Integration tests for file-based inputs and outputs:
//   CSV party tables, TOML config, coalition/point CSV, JSON report, SVG plots.

use std::{fs, path::PathBuf};

use coalesce::{Analysis, ModelConfig, PartyTable, ValidationError};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn sample_analysis() -> Analysis {
    let table = PartyTable::read_csv(&data("parties.csv")).unwrap();
    Analysis::run(table, &ModelConfig { step: 0.5, ..Default::default() }).unwrap()
}

#[test]
fn bundled_dataset_and_config_load() {
    let table = PartyTable::read_csv(&data("parties.csv")).unwrap();
    assert_eq!(table.len(), 6);
    assert_eq!(table.total_seats(), 101);

    let config = ModelConfig::read(&data("coalesce.toml")).unwrap();
    assert_eq!(config.legislature_size, Some(101));
    assert!(config.bounds.is_some());
    assert!(config.apply(table).is_ok());
}

#[test]
fn csv_errors_name_the_party() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "id,lr,conlib,seats\nA,1,1,10\nB,2,2,-3\n").unwrap();

    let err = PartyTable::read_csv(&path).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::NegativeSeats { party: "B".into(), seats: -3.0 })
    );
    assert!(PartyTable::read_csv(&dir.path().join("missing.csv")).is_err());
}

#[test]
fn coalition_csv_lists_ranked_majorities() {
    let analysis = sample_analysis();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coalitions.csv");
    analysis.coalitions().write_csv(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("label,parties,seats,points,percent,majority,minimal_winning"));
    assert_eq!(lines.count(), analysis.coalitions().ranked().count());

    let top = analysis.coalitions().top().unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with(&top.label));
}

#[test]
fn points_csv_has_membership_columns() {
    let analysis = sample_analysis();
    let frame = analysis.points_frame().unwrap();
    assert_eq!(frame.height(), analysis.sample().len());
    let names: Vec<String> = frame.get_column_names().iter().map(|n| n.to_string()).collect();
    for id in ["LAB", "LIB", "SOC", "GRN", "CON", "CHR"] {
        assert!(names.contains(&format!("in_{id}")));
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.csv");
    analysis.write_points_csv(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), analysis.sample().len() + 1);
}

#[test]
fn json_report_round_trips() {
    let analysis = sample_analysis();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    analysis.write_json(&path).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["total_seats"], 101);
    assert_eq!(json["majority_threshold"], 51);
    assert_eq!(json["pivot"]["x"], 1.5);
    assert_eq!(json["parties"].as_array().unwrap().len(), 6);
    assert_eq!(json["narrative"], analysis.narrative());
    assert_eq!(json["ranking"][0]["label"], analysis.coalitions().top().unwrap().label);
}

#[test]
fn plots_are_written() {
    let analysis = sample_analysis();
    let dir = tempfile::tempdir().unwrap();
    let paths = analysis.write_plots(&dir.path().join("plots")).unwrap();
    assert_eq!(paths.len(), 3);

    for path in &paths {
        let svg = fs::read_to_string(path).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    let space = analysis.space_svg_string().unwrap();
    assert_eq!(space.matches(r#"class="party""#).count(), 6);
    assert!(space.contains(r#"class="pivot""#));

    let ranking = analysis.ranking_svg_string().unwrap();
    assert_eq!(ranking.matches(r#"class="bar""#).count(), analysis.coalitions().ranked().count());

    let density = analysis.density_svg_string().unwrap();
    assert!(density.contains("<rect x="));
}
