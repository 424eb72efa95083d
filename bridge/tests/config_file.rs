use std::fs;

use bridge::load_config;

#[test]
fn toml_file_round_trips_into_config() {
    let path = std::env::temp_dir().join("bridge_config_file_test.toml");
    fs::write(
        &path,
        "scenario = \"trench_run\"\ntick_hz = 30.0\nlog_telemetry = false\ntarget = [5.0, -10.0, 200.0]\n",
    )
    .expect("write temp config");

    let cfg = load_config(path.to_str()).expect("load config");
    assert_eq!(cfg.scenario, "trench_run");
    assert_eq!(cfg.tick_hz, 30.0);
    assert!(!cfg.log_telemetry);
    assert_eq!(cfg.target, Some([5.0, -10.0, 200.0]));

    let _ = fs::remove_file(path);
}

#[test]
fn missing_file_reports_the_path() {
    let err = load_config(Some("/nonexistent/bridge.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/bridge.toml"));
}
