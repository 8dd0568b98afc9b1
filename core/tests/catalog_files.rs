//! Loading configuration and orb lists from disk.

use orb_roller_core::{OrbRequest, RollerConfig, SimError, SimulationContext};
use std::fs;
use std::path::Path;

fn write_default_lists(dir: &Path) {
    fs::write(dir.join("blue_orbs.csv"), "name,weight\nAzure Orb,2\nCobalt Orb,1\n").unwrap();
    fs::write(dir.join("red_orbs.csv"), "name\nEmber Orb\nRuby Orb\n").unwrap();
    fs::write(dir.join("purple_orbs.csv"), "name,weight\nAmethyst Orb,1\n").unwrap();
    fs::write(dir.join("green_orbs.csv"), "name,weight,set\nJade Orb,1,core\n").unwrap();
}

#[test]
fn initialize_loads_every_configured_color() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    write_default_lists(dir.path());

    let mut ctx = SimulationContext::initialize(RollerConfig::default(), dir.path()).unwrap();
    assert_eq!(ctx.catalog().len(), 6);
    assert_eq!(ctx.catalog().orbs_in("red"), Some(&[2, 3][..]));

    ctx.reseed(Some(123));
    let colors = ctx.roll_colors(100).unwrap();
    let orbs = ctx.roll_orbs_for(&colors).unwrap();
    let drawn: u64 = orbs.iter().map(|(_, roll)| roll.counts.total()).sum();
    assert_eq!(drawn, 100);
}

#[test]
fn config_file_controls_colors_and_lists() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("gold.csv"), "name,weight\nSun Orb,1\n").unwrap();
    let config_path = dir.path().join("colors.json");
    fs::write(
        &config_path,
        r#"{"colors": [{"name": "gold", "weight": 1, "orb_list": "gold.csv"}]}"#,
    )
    .unwrap();

    let config = RollerConfig::load(&config_path).unwrap();
    let mut ctx = SimulationContext::initialize(config, dir.path()).unwrap();
    ctx.reseed(Some(1));

    assert_eq!(ctx.roll_colors(10).unwrap().count("gold"), 10);
    let rolls = ctx.roll_orbs(&OrbRequest::new().with("gold", 3)).unwrap();
    assert_eq!(rolls.get("gold").map(|r| r.count(&0)), Some(3));
}

#[test]
fn missing_orb_list_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimulationContext::initialize(RollerConfig::default(), dir.path()).unwrap_err();
    assert!(matches!(err, SimError::Io { .. }), "{err}");
}

#[test]
fn row_without_name_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    write_default_lists(dir.path());
    fs::write(dir.path().join("red_orbs.csv"), "name,weight\n,3\n").unwrap();

    let err = SimulationContext::initialize(RollerConfig::default(), dir.path()).unwrap_err();
    assert!(err.is_configuration(), "{err}");
}

#[test]
fn malformed_config_json_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colors.json");
    fs::write(&path, r#"{"colors": [{"name": "blue"}]}"#).unwrap();
    assert!(RollerConfig::load(&path).unwrap_err().is_configuration());
}
