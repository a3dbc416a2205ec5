use herald_kernel::config::{ConfigError, load_config, load_config_with_env};
use herald_kernel::domain::config::ApiConfig;
use herald_kernel::domain::constants::SMS_SENDER;
use std::fs;
use std::path::{Path, PathBuf};

fn write_config(dir: &Path) -> PathBuf {
    let file = dir.join("server.toml");
    fs::write(&file, "[server]\nport = 9100\n\n[messaging]\nqualifier = \"sMSService\"\n")
        .expect("write config");
    file
}

fn env(vars: &[(&str, &str)]) -> config::Map<String, String> {
    vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn loads_toml_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("server.toml");
    fs::write(
        &file,
        "[server]\naddress = \"127.0.0.1\"\nport = 9100\n\n[messaging]\nqualifier = \"emailService\"\n",
    )
    .expect("write config");

    let cfg: ApiConfig = load_config(Some(&file)).expect("config should load");
    assert_eq!(cfg.server.port, 9100);
    assert_eq!(cfg.messaging.qualifier, "emailService");
}

#[test]
fn extension_may_be_omitted() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("server.toml"), "[server]\nport = 9200\n").expect("write config");

    let cfg: ApiConfig = load_config(Some(dir.path().join("server"))).expect("config should load");
    assert_eq!(cfg.server.port, 9200);
    assert_eq!(cfg.messaging.qualifier, SMS_SENDER);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_config::<ApiConfig>(Some(dir.path().join("absent.toml")))
        .expect_err("missing file must fail");

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn numeric_env_override_replaces_file_value() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_config(dir.path());

    let cfg: ApiConfig = load_config_with_env(Some(&file), env(&[("HERALD__SERVER__PORT", "9000")]))
        .expect("numeric override should deserialize");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.messaging.qualifier, SMS_SENDER);
}

#[test]
fn string_and_numeric_overrides_combine() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_config(dir.path());

    let cfg: ApiConfig = load_config_with_env(
        Some(&file),
        env(&[("HERALD__SERVER__PORT", "9000"), ("HERALD__MESSAGING__QUALIFIER", "emailService")]),
    )
    .expect("overrides should deserialize");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.messaging.qualifier, "emailService");
}

#[test]
fn unprefixed_variables_are_ignored() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_config(dir.path());

    let cfg: ApiConfig = load_config_with_env(Some(&file), env(&[("SERVER__PORT", "1234")]))
        .expect("config should load");
    assert_eq!(cfg.server.port, 9100);
}

#[test]
fn out_of_range_port_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_config(dir.path());

    let err = load_config_with_env::<ApiConfig>(Some(&file), env(&[("HERALD__SERVER__PORT", "70000")]))
        .expect_err("port does not fit in u16");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}
