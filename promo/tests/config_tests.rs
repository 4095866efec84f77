use promo::{
    config::{LogConfig, build_config, load_config},
    errors::ConfigError,
    telemetry,
};
use std::path::PathBuf;

#[test]
fn load_crate_config() {
    let config = build_config(PathBuf::from(env!("CARGO_MANIFEST_DIR"))).unwrap();

    let cfg = load_config(&config).unwrap();

    assert_eq!(cfg.store.capacity, 1024);
    assert_eq!(cfg.log.level, "debug");
    assert!(cfg.log.pretty);
    assert!(!cfg.log.target);
}

#[test]
fn missing_config_files_use_defaults() {
    let config = config::Config::builder().build().unwrap();

    let cfg = load_config(&config).unwrap();

    assert_eq!(cfg.store.capacity, 256);
    assert_eq!(cfg.log.level, "info");
    assert!(!cfg.log.pretty);
}

#[test]
fn zero_capacity_fails_validation() {
    let config = config::Config::builder()
        .set_override("store.capacity", 0)
        .unwrap()
        .build()
        .unwrap();

    let result = load_config(&config);

    assert!(matches!(
        result,
        Err(ConfigError::ValidationError { ref section, .. }) if section == "store"
    ));
}

#[test]
fn unknown_log_level_is_rejected() {
    let cfg = LogConfig {
        level: "verbose".to_string(),
        ..LogConfig::default()
    };

    let result = telemetry::init(&cfg);

    assert!(matches!(result, Err(ConfigError::Logging(_))));
}
