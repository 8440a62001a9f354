use std::fs;

use serde_json::json;
use tempfile::TempDir;

use super::*;

struct Setup {
    _dir: TempDir,
    checker: PerformanceChecker,
    baseline: PathBuf,
}

fn setup(results: &Value, baseline: Option<&Value>) -> Setup {
    let dir = TempDir::new().unwrap();
    let results_path = dir.path().join("results.json");
    let baseline_path = dir.path().join("baseline.json");
    fs::write(&results_path, results.to_string()).unwrap();
    if let Some(baseline) = baseline {
        fs::write(&baseline_path, baseline.to_string()).unwrap();
    }
    Setup {
        checker: PerformanceChecker::new(&baseline_path, &results_path),
        baseline: baseline_path,
        _dir: dir,
    }
}

fn results(average: f64, total: f64, pass_rate: f64) -> Value {
    json!({
        "summary": {
            "total": 10,
            "pass_rate": pass_rate,
            "average_execution_time": average,
            "total_execution_time": total
        }
    })
}

fn baseline() -> Value {
    json!({
        "baselines": {
            "overall": {
                "avg_execution_time_ms": 10.0,
                "total_execution_time_s": 1.0,
                "total_fixtures": 10
            }
        }
    })
}

#[test]
fn no_baseline_means_no_regression() {
    let s = setup(&results(1.0, 100.0, 0.0), None);
    let check = s.checker.check(20.0).unwrap();
    assert!(!check.has_regression());
    assert!(check.current.is_empty());
}

#[test]
fn missing_results_is_an_error() {
    let dir = TempDir::new().unwrap();
    let checker = PerformanceChecker::new(dir.path().join("b.json"), dir.path().join("r.json"));
    assert!(checker.check(20.0).is_err());
}

#[test]
fn within_threshold_passes() {
    let s = setup(&results(0.011, 1.1, 100.0), Some(&baseline()));
    let check = s.checker.check(20.0).unwrap();
    assert!(!check.has_regression());
    assert!((check.baseline["average_execution_time"] - 0.01).abs() < 1e-12);
}

#[test]
fn slower_run_regresses() {
    let s = setup(&results(0.02, 1.5, 100.0), Some(&baseline()));
    let check = s.checker.check(20.0).unwrap();
    let metrics: Vec<&str> = check.regressions.iter().map(|r| r.metric.as_str()).collect();
    assert_eq!(metrics, vec!["average_execution_time", "total_execution_time"]);
    let increase = check.regressions[0].increase_percent.unwrap();
    assert!((increase - 100.0).abs() < 1e-9);
}

#[test]
fn baseline_threshold_overrides_argument() {
    let mut base = baseline();
    base["baselines"]["thresholds"] = json!({ "regression_percentage": 200.0 });
    let s = setup(&results(0.02, 1.5, 100.0), Some(&base));
    assert!(!s.checker.check(20.0).unwrap().has_regression());
}

#[test]
fn low_pass_rate_regresses() {
    let s = setup(&results(0.01, 1.0, 99.0), Some(&baseline()));
    let check = s.checker.check(20.0).unwrap();
    assert_eq!(check.regressions.len(), 1);
    assert_eq!(check.regressions[0].metric, "pass_rate");
    assert!((check.regressions[0].threshold - DEFAULT_MIN_PASS_RATE).abs() < f64::EPSILON);
    assert!(check.regressions[0].increase_percent.is_none());
}

#[test]
fn update_baseline_keeps_thresholds() {
    let mut base = baseline();
    base["baselines"]["thresholds"] = json!({ "min_pass_rate": 90.0 });
    base["note"] = json!("keep me");
    let s = setup(&results(0.005, 0.5, 100.0), Some(&base));
    s.checker.update_baseline().unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&s.baseline).unwrap()).unwrap();
    assert_eq!(written["baselines"]["overall"]["avg_execution_time_ms"], 5.0);
    assert_eq!(written["baselines"]["overall"]["total_execution_time_s"], 0.5);
    assert_eq!(written["baselines"]["overall"]["total_fixtures"], 10);
    assert_eq!(written["baselines"]["thresholds"]["min_pass_rate"], 90.0);
    assert_eq!(written["note"], "keep me");
}

#[test]
fn update_baseline_creates_missing_file() {
    let s = setup(&results(0.005, 0.5, 100.0), None);
    s.checker.update_baseline().unwrap();
    assert!(s.baseline.is_file());
}

#[test]
fn report_lists_regressions() {
    let s = setup(&results(0.02, 1.5, 100.0), Some(&baseline()));
    let check = s.checker.check(20.0).unwrap();
    let report = PerformanceChecker::report(&check, true);
    assert!(report.contains("PERFORMANCE REGRESSION CHECK"));
    assert!(report.contains("Current Performance:\n  average_execution_time: 0.020"));
    assert!(report.contains("PERFORMANCE REGRESSIONS DETECTED:"));
    assert!(report.contains("    Increase: 100.0%"));

    let brief = PerformanceChecker::report(&PerformanceCheck::default(), false);
    assert!(!brief.contains("Current Performance"));
    assert!(brief.contains("No performance regressions detected"));
}
