use std::fs;

use tempfile::TempDir;

use sitesearch_core::config::Config;

#[test]
fn missing_files_fall_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_in(tmp.path(), "dev").expect("load");
    let settings = config.settings().expect("settings");
    assert_eq!(settings.search.display_tags, 3);
    assert_eq!(settings.log.level, "info");
    assert_eq!(config.content_dir().unwrap(), tmp.path().join("content"));
}

#[test]
fn env_file_overrides_base_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[search]\ndisplay_tags = 5\n[content]\ndir = \"site\"\n").unwrap();
    fs::write(tmp.path().join("config.test.toml"), "[search]\ndisplay_tags = 2\n").unwrap();

    let config = Config::load_in(tmp.path(), "test").expect("load");
    let settings = config.settings().expect("settings");
    assert_eq!(settings.search.display_tags, 2);
    assert_eq!(settings.content.dir, "site", "keys absent from the env file are kept");
    assert!(settings.content.validate);
    assert_eq!(config.get::<usize>("search.display_tags").unwrap(), 2);

    let dev = Config::load_in(tmp.path(), "dev").expect("load dev");
    assert_eq!(dev.settings().unwrap().search.display_tags, 5);
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[search]\ndisplay_tags = 0\n").unwrap();
    assert!(Config::load_in(tmp.path(), "dev").is_err());
}

#[test]
fn production_requires_validation() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.prod.toml"), "[content]\nvalidate = false\n").unwrap();
    assert!(Config::load_in(tmp.path(), "prod").is_err());
    assert!(Config::load_in(tmp.path(), "dev").is_ok());
}
