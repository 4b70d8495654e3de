//! Configuration loader tests

use std::path::PathBuf;

use autowire_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
use autowire_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_MAPPING_PATH};
use figment::Jail;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.mapping.path, PathBuf::from(DEFAULT_MAPPING_PATH));
    assert!(config.mapping.create_default);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("autowire.toml");

    let original = ConfigBuilder::new()
        .with_mapping_path("conf/beans.properties")
        .with_create_default(false)
        .build();
    ConfigLoader::new()
        .save_to_file(&original, &config_path)
        .unwrap();

    let loaded = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix("AUTOWIRE_SAVE_LOAD_TEST")
        .load()
        .unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .with_env_prefix("AUTOWIRE_MISSING_FILE_TEST");

    let config = loader.load().unwrap();

    assert_eq!(config, AppConfig::default());
    assert!(loader.config_path().is_some());
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "autowire.toml",
            r#"
                [mapping]
                path = "from-file.properties"

                [logging]
                level = "debug"
            "#,
        )?;
        jail.set_env("AUTOWIRE_MAPPING__PATH", "from-env.properties");
        jail.set_env("AUTOWIRE_LOGGING__JSON_FORMAT", "true");

        let config = ConfigLoader::new()
            .with_config_path("autowire.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.mapping.path, PathBuf::from("from-env.properties"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("autowire.toml", "[logging]\nlevel = \"loud\"\n")?;

        let result = ConfigLoader::new().with_config_path("autowire.toml").load();

        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn test_builder_logging() {
    let config = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "warn".to_string(),
            json_format: true,
        })
        .build();

    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.json_format);
}
