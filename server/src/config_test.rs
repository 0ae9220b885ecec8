use std::collections::HashMap;
use std::net::Ipv4Addr;

use super::*;

fn fallback() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000)
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_to_fallback_address() {
    let cfg = ServerConfig::from_lookup(fallback(), lookup(&[])).unwrap();
    assert_eq!(cfg.addr(), fallback());
}

#[test]
fn host_and_port_override_fallback() {
    let cfg = ServerConfig::from_lookup(fallback(), lookup(&[("HOST", "0.0.0.0"), ("PORT", "8080")])).unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn blank_values_fall_back() {
    let cfg = ServerConfig::from_lookup(fallback(), lookup(&[("HOST", "  "), ("PORT", "")])).unwrap();
    assert_eq!(cfg, ServerConfig { host: fallback().ip(), port: 3000 });
}

#[test]
fn invalid_port_names_the_variable() {
    let err = ServerConfig::from_lookup(fallback(), lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert_eq!(err.to_string(), r#"invalid PORT: "eighty""#);
}

#[test]
fn invalid_host_is_rejected() {
    let err = ServerConfig::from_lookup(fallback(), lookup(&[("HOST", "not-an-ip")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HOST", .. }));
}
