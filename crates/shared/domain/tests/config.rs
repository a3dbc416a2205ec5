use herald_domain::config::{ApiConfig, MessagingConfig, ServerConfig};
use herald_domain::constants::SMS_SENDER;
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8080);
    assert_eq!(server.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    let messaging = MessagingConfig::default();
    assert_eq!(messaging.qualifier, SMS_SENDER);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "127.0.0.1", "port": 9090 },
        "messaging": { "qualifier": "emailService" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.server.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(cfg.messaging.qualifier, "emailService");
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let cfg: ApiConfig =
        serde_json::from_value(json!({ "server": { "port": 7000 } })).expect("config deserialize");
    assert_eq!(cfg.server.port, 7000);
    assert_eq!(cfg.messaging.qualifier, SMS_SENDER);
}

#[test]
fn mutation_does_not_leak_into_clones() {
    let original = ApiConfig::default();
    let mut edited = original.clone();
    edited.server.port = 1234;

    assert_eq!(original.server.port, 8080);
    assert_eq!(edited.server.port, 1234);
}
