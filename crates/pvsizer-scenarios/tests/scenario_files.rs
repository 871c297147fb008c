use pvsizer_core::ScenarioParameters;
use pvsizer_scenarios::{load_scenario_from_path, reference_scenario, write_scenario};
use std::fs;
use tempfile::tempdir;

#[test]
fn reference_survives_every_format() {
    let dir = tempdir().unwrap();
    let reference = reference_scenario().with_max_battery_capacity(2000.0);
    for name in ["ref.yaml", "ref.json", "ref.toml"] {
        let path = dir.path().join(name);
        write_scenario(&path, &reference).unwrap();
        let loaded = load_scenario_from_path(&path).unwrap();
        assert_eq!(loaded, reference, "{name}");
    }
}

#[test]
fn writes_into_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("site.yml");
    write_scenario(&path, &reference_scenario()).unwrap();
    assert!(path.exists());
}

#[test]
fn unknown_extension_falls_back_to_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scenario.data");
    let params = ScenarioParameters::new("json", vec![1.0], vec![0.2], 1.0, 1.0, 1.0, 1.0, 1.0);
    fs::write(&path, serde_json::to_string(&params).unwrap()).unwrap();
    assert_eq!(load_scenario_from_path(&path).unwrap(), params);
}

#[test]
fn write_rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let err = write_scenario(&dir.path().join("scenario.txt"), &reference_scenario()).unwrap_err();
    assert!(err.to_string().contains("cannot infer scenario format"));
}

#[test]
fn invalid_capacity_factor_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    let mut params = reference_scenario();
    params.capacity_factor[12] = 1.5;
    fs::write(&path, serde_json::to_string(&params).unwrap()).unwrap();

    let err = load_scenario_from_path(&path).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("capacity factor at step 12"), "{chain}");
    assert!(chain.contains("bad.json"), "{chain}");
}

#[test]
fn missing_file_names_path() {
    let err = load_scenario_from_path(std::path::Path::new("/nonexistent/site.yaml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/site.yaml"));
}
