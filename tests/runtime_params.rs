use std::fs;
use std::path::PathBuf;

use sift::SiftError;
use sift::matching::sift_descriptor::ArctangentMode;
use sift::pyramid::sift::sift_runtime_params::{SiftRuntimeParams, load_runtime_params};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sift_{}_{}.yaml", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn shipped_config_matches_defaults() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/sift_runtime_params.yaml");
    let runtime_params = load_runtime_params(&path).unwrap();
    assert_eq!(runtime_params, SiftRuntimeParams::default());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let path = scratch_file("partial", "octave_count: 2\narctangent: four_quadrant\n");
    let runtime_params = load_runtime_params(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(runtime_params.octave_count, 2);
    assert_eq!(runtime_params.arctangent, ArctangentMode::FourQuadrant);
    assert_eq!(runtime_params.scale_count, 3);
    assert_eq!(runtime_params.acceptance_threshold, Some(0.03));
}

#[test]
fn null_threshold_accepts_every_match() {
    let runtime_params: SiftRuntimeParams = serde_yaml::from_str("acceptance_threshold: ~\n").unwrap();
    assert_eq!(runtime_params.acceptance_threshold, None);
}

#[test]
fn unreadable_configs_surface_errors() {
    let missing = std::env::temp_dir().join("sift_params_that_do_not_exist.yaml");
    assert!(matches!(load_runtime_params(&missing), Err(SiftError::Io(_))));

    let path = scratch_file("malformed", "arctangent: sideways\n");
    let result = load_runtime_params(&path);
    fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(SiftError::Yaml(_))));
}
