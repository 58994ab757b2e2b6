use vle_anticipation::config::{self, Config, ConfigError};
use vle_anticipation::limits_db::LimitTable;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default_at(&path).expect("load");
    assert!(path.exists());
    assert_eq!(cfg.display_decimals, 2);
    assert_eq!(cfg.proposed_max_mg_m3, 200.0);
    assert_eq!(cfg.default_pollutant, "CO");
    assert_eq!(cfg.path(), Some(path.as_path()));
    assert_eq!(cfg.limit_table().expect("table"), LimitTable::default());
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"fr\"\nproposed_max_mg_m3 = 300.0\n").expect("write");
    let cfg = config::load_or_default_at(&path).expect("load");
    assert_eq!(cfg.language, "fr");
    assert_eq!(cfg.proposed_max_mg_m3, 300.0);
    assert_eq!(cfg.default_hour, 14);
    assert!(cfg.limits.is_empty());
}

#[test]
fn limit_overrides_survive_save_and_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = config::load_or_default_at(&path).expect("load");

    let mut table = cfg.limit_table().expect("table");
    table.upsert("CO", 100.0).expect("upsert");
    cfg.set_limit_table(&table);
    cfg.display_decimals = 1;
    cfg.save().expect("save");

    let reloaded = config::load_or_default_at(&path).expect("reload");
    assert_eq!(reloaded.display_decimals, 1);
    assert_eq!(reloaded.limit_table().expect("table").limit_for("CO"), Some(100.0));
    assert_eq!(reloaded.limits.len(), 8);
}

#[test]
fn invalid_limits_in_config_are_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[[limits]]\npollutant = \"CO\"\nlimit_mg_m3 = 0.0\n",
    )
    .expect("write");
    assert!(matches!(
        config::load_or_default_at(&path),
        Err(ConfigError::Limits(_))
    ));

    std::fs::write(&path, "display_decimals = \"two\"\n").expect("write");
    assert!(matches!(
        config::load_or_default_at(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn display_and_input_bounds() {
    let mut cfg = Config::default();
    cfg.display_decimals = 5;
    assert_eq!(cfg.decimals(), 2);
    cfg.display_decimals = 0;
    assert_eq!(cfg.decimals(), 1);

    assert_eq!(cfg.clamp_proposed(250.0), 200.0);
    assert_eq!(cfg.clamp_proposed(-3.0), 0.0);
    assert_eq!(cfg.clamp_proposed(f64::NAN), 0.0);

    cfg.proposed_max_mg_m3 = -1.0;
    assert_eq!(cfg.proposed_ceiling(), 200.0);
}

#[test]
fn display_decimals_accept_whole_values_only() {
    let mut cfg = Config::default();
    assert!(cfg.set_display_decimals(1.0));
    assert_eq!(cfg.display_decimals, 1);
    assert!(!cfg.set_display_decimals(1.5));
    assert!(!cfg.set_display_decimals(3.0));
    assert!(!cfg.set_display_decimals(f64::NAN));
    assert_eq!(cfg.display_decimals, 1);
    assert!(cfg.set_display_decimals(2.0));
    assert_eq!(cfg.display_decimals, 2);
}
