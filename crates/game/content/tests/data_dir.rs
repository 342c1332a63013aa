//! Loading from ad-hoc data directories.

use std::fs;
use std::path::Path;

use tactics_content::ContentFactory;
use tactics_core::{GameConfig, WeaponRank, can_double_attack};

const CLASSES: &str = r#"{ "archer": { "hp": 17, "skill": 6, "speed": 7, "weaponRank": { "bow": "C" } } }"#;

const HEROES: &str = r#"{
    "neimi": { "name": "Neimi", "class": "archer", "inventory": ["Short Bow", "Vulnerary"] },
    "bad": { "class": "archer", "weaponRank": { "bow": "X" } }
}"#;

const WEAPONS: &str = r#"{
    "Short Bow": {
        "atk": 5, "hit": 85, "ctr": 10, "weight": 3, "range": "2", "rank": "D",
        "damageType": "physical", "weaponType": "bow", "usage": 22, "value": 1760
    }
}"#;

const CONSUMABLES: &str = r#"{ "Vulnerary": { "type": "heal", "usage": 3, "value": 300 } }"#;

fn write_catalogs(dir: &Path) {
    fs::write(dir.join("classes.json"), CLASSES).unwrap();
    fs::write(dir.join("heroes.json"), HEROES).unwrap();
    fs::write(dir.join("weapons.json"), WEAPONS).unwrap();
    fs::write(dir.join("consumables.json"), CONSUMABLES).unwrap();
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogs(dir.path());

    let content = ContentFactory::new(dir.path()).load().unwrap();
    assert_eq!(content.config, GameConfig::default());

    let neimi = content.unit_factory().build("neimi").unwrap();
    assert_eq!(neimi.weapon().unwrap().rank, WeaponRank::D);
    assert_eq!(neimi.item_count(), 2);
}

#[test]
fn config_file_tunes_rules() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogs(dir.path());
    fs::write(dir.path().join("config.toml"), "double_attack_threshold = 0\n").unwrap();

    let content = ContentFactory::new(dir.path()).load().unwrap();
    assert_eq!(content.config.double_attack_threshold, 0);
    assert_eq!(content.config.triangle_hit, GameConfig::DEFAULT_TRIANGLE_HIT);

    let neimi = content.unit_factory().build("neimi").unwrap();
    let twin = neimi.clone();
    assert!(can_double_attack(&neimi, &twin, &content.config));
    assert!(!can_double_attack(&neimi, &twin, &GameConfig::default()));
}

#[test]
fn bad_rank_letter_names_the_hero() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogs(dir.path());

    let content = ContentFactory::new(dir.path()).load().unwrap();
    let err = content.unit_factory().build("bad").unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to build hero 'bad'"));
    assert!(message.contains("invalid rank 'X' for bow"));
    assert!(content.unit_factory().build_all().is_err());
}

#[test]
fn missing_catalog_is_reported_with_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("classes.json"), CLASSES).unwrap();

    let err = ContentFactory::new(dir.path()).load().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Failed to read file"));
    assert!(message.contains("heroes.json"));
}

#[test]
fn malformed_catalog_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogs(dir.path());
    fs::write(dir.path().join("weapons.json"), "[1, 2, 3]").unwrap();

    let err = ContentFactory::new(dir.path()).load_weapons().unwrap_err();
    assert!(err.to_string().contains("Failed to parse catalog JSON"));
}
