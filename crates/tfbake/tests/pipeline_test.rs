//! End-to-end tests for the bake pipeline.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tfbake::{BakeConfig, BakeError, Pipeline};

fn config_for(dir: &Path, parallel: bool) -> BakeConfig {
    BakeConfig {
        output_dir: dir.to_path_buf(),
        scenarios: None,
        parallel_scenarios: parallel,
    }
}

fn file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect()
}

#[test]
fn test_basic_bake_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let report = Pipeline::new(config_for(dir.path(), false)).run().unwrap();

    assert_eq!(report.scenarios.len(), 1);
    assert_eq!(report.scenarios[0].0, "basic");
    assert_eq!(report.scenarios[0].1, dir.path().join("basic.tfsave"));
    assert_eq!(report.assets, 5);

    let names = file_names(dir.path());
    assert_eq!(names.len(), 6);
    assert_eq!(names.iter().filter(|n| n.ends_with(".glb")).count(), 5);
}

#[test]
fn test_save_references_existing_assets() {
    let dir = tempfile::tempdir().unwrap();
    Pipeline::new(config_for(dir.path(), false)).run().unwrap();

    let text = fs::read_to_string(dir.path().join("basic.tfsave")).unwrap();
    assert!(!text.contains(' ') && !text.contains('\n'));
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();

    let types = doc["types"].as_array().unwrap();
    let tags: Vec<&str> = types.iter().map(|t| t["type"].as_str().unwrap()).collect();
    assert_eq!(
        tags,
        vec![
            "traffloat.save.Building",
            "traffloat.save.Facility",
            "traffloat.save.fluid.Type",
            "traffloat.save.fluid.Container",
            "traffloat.save.fluid.ContainerElement",
        ]
    );

    for building in types[0]["defs"].as_array().unwrap() {
        for layer in ["distal", "proximal", "interior"] {
            let sha = building["appearance"][layer]["mesh"]["sha"].as_str().unwrap();
            assert!(dir.path().join(format!("{sha}.glb")).exists());
        }
    }
}

#[test]
fn test_rebake_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    Pipeline::new(config_for(first.path(), false)).run().unwrap();
    Pipeline::new(config_for(second.path(), true)).run().unwrap();

    let names = file_names(first.path());
    assert_eq!(names, file_names(second.path()));
    for name in &names {
        assert_eq!(
            fs::read(first.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap(),
            "{name} differs between runs"
        );
    }
}

#[test]
fn test_unknown_scenario_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = BakeConfig {
        scenarios: Some(vec!["basic".into(), "missing".into()]),
        ..config_for(dir.path(), false)
    };
    let err = Pipeline::new(config).run().unwrap_err();
    assert!(matches!(err, BakeError::UnknownScenario { name } if name == "missing"));
    assert!(file_names(dir.path()).is_empty());
}

#[test]
fn test_config_file_drives_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("baked");
    let config_path = dir.path().join("tfbake.toml");
    fs::write(
        &config_path,
        format!("output_dir = {:?}\nscenarios = [\"basic\"]\n", out.to_str().unwrap()),
    )
    .unwrap();

    let config = BakeConfig::load(&config_path).unwrap();
    let report = Pipeline::new(config).run().unwrap();
    assert_eq!(report.scenarios[0].1, out.join("basic.tfsave"));
    assert!(out.join("basic.tfsave").exists());
}
