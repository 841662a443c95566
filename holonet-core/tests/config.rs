use holonet_core::config::{ConfigError, ConfigValue, HolonetConfig, ServerConfig};
use serial_test::serial;

#[test]
fn test_empty_config() {
    let config = HolonetConfig::empty();
    assert!(matches!(
        config.get::<String>("nonexistent"),
        Err(ConfigError::NotFound(_))
    ));
}

#[test]
fn test_set_and_get() {
    let mut config = HolonetConfig::empty();
    config.set("database.url", ConfigValue::String("sqlite::memory:".into()));
    assert_eq!(
        config.get::<String>("database.url").unwrap(),
        "sqlite::memory:"
    );
}

#[test]
fn test_get_or_only_defaults_missing_keys() {
    let mut config = HolonetConfig::empty();
    assert_eq!(config.get_or("missing", 42i64).unwrap(), 42);

    config.set("port", ConfigValue::String("not-a-number".into()));
    assert!(matches!(
        config.get_or("port", 3000u16),
        Err(ConfigError::TypeMismatch { .. })
    ));
}

#[test]
fn test_type_conversions() {
    let mut config = HolonetConfig::empty();
    config.set("int_val", ConfigValue::Integer(42));
    config.set("str_int", ConfigValue::String("8080".into()));
    config.set("bool_val", ConfigValue::String("yes".into()));
    config.set("null_val", ConfigValue::Null);

    assert_eq!(config.get::<i64>("int_val").unwrap(), 42);
    assert_eq!(config.get::<u16>("str_int").unwrap(), 8080);
    assert!(config.get::<bool>("bool_val").unwrap());
    assert_eq!(config.get::<String>("int_val").unwrap(), "42");
    assert!(config.get::<Option<String>>("null_val").unwrap().is_none());
}

#[test]
fn test_out_of_range_integer() {
    let mut config = HolonetConfig::empty();
    config.set("server.port", ConfigValue::Integer(70_000));
    assert!(matches!(
        config.get::<u16>("server.port"),
        Err(ConfigError::TypeMismatch { expected: "u16", .. })
    ));
}

#[test]
fn test_flatten_yaml() {
    let yaml = r#"
database:
  url: "sqlite::memory:"
  pool:
    size: 3
server:
  port: 8080
"#;
    let config = HolonetConfig::from_yaml_str(yaml, "test").unwrap();
    assert_eq!(
        config.get::<String>("database.url").unwrap(),
        "sqlite::memory:"
    );
    assert_eq!(config.get::<u32>("database.pool.size").unwrap(), 3);
    assert_eq!(config.get::<u16>("server.port").unwrap(), 8080);
    assert_eq!(config.profile(), "test");
}

#[test]
fn test_invalid_yaml() {
    let result = HolonetConfig::from_yaml_str("server: [unclosed", "test");
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn test_server_section_defaults() {
    let server: ServerConfig = HolonetConfig::empty().section().unwrap();
    assert_eq!(server, ServerConfig::default());
    assert_eq!(server.addr(), "0.0.0.0:3000");
}

#[test]
fn test_server_section_bare_port_key() {
    let mut config = HolonetConfig::empty();
    config.set("port", ConfigValue::String("4000".into()));
    let server: ServerConfig = config.section().unwrap();
    assert_eq!(server.port, 4000);

    config.set("server.port", ConfigValue::Integer(5000));
    let server: ServerConfig = config.section().unwrap();
    assert_eq!(server.port, 5000);
}

#[test]
#[serial]
fn test_load_from_dir_with_profile_and_env_overlay() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("application.yaml"),
        "server:\n  host: 127.0.0.1\nholonettest:\n  greeting: base\n  name: base\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("application-staging.yaml"),
        "holonettest:\n  greeting: staging\n",
    )
    .unwrap();

    std::env::remove_var("HOLONET_PROFILE");
    std::env::set_var("HOLONETTEST_NAME", "from-env");

    let config = HolonetConfig::load_from(dir.path(), "staging").unwrap();

    assert_eq!(config.profile(), "staging");
    assert_eq!(config.get::<String>("server.host").unwrap(), "127.0.0.1");
    assert_eq!(
        config.get::<String>("holonettest.greeting").unwrap(),
        "staging"
    );
    assert_eq!(config.get::<String>("holonettest.name").unwrap(), "from-env");

    std::env::remove_var("HOLONETTEST_NAME");
}

#[test]
#[serial]
fn test_dotenv_does_not_override_environment() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "HOLONETDOT_FIRST=from-file\nHOLONETDOT_SECOND=from-file\n",
    )
    .unwrap();

    std::env::remove_var("HOLONET_PROFILE");
    std::env::set_var("HOLONETDOT_SECOND", "from-env");

    let config = HolonetConfig::load_from(dir.path(), "dev").unwrap();

    assert_eq!(config.get::<String>("holonetdot.first").unwrap(), "from-file");
    assert_eq!(config.get::<String>("holonetdot.second").unwrap(), "from-env");

    std::env::remove_var("HOLONETDOT_FIRST");
    std::env::remove_var("HOLONETDOT_SECOND");
}

#[test]
#[serial]
fn test_profile_env_var_wins() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("HOLONET_PROFILE", "prod");
    let config = HolonetConfig::load_from(dir.path(), "dev").unwrap();
    assert_eq!(config.profile(), "prod");
    std::env::remove_var("HOLONET_PROFILE");
}
