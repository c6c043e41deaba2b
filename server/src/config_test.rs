use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.public_origin, "http://localhost:3000");
    assert_eq!(cfg.assets_dir, None);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn default_origin_follows_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(cfg.public_origin, "http://localhost:8080");
}

#[test]
fn explicit_values_are_used() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", " 4000 "),
        ("PUBLIC_ORIGIN", "https://vorrenti.com/"),
        ("ASSETS_DIR", "/srv/vorrenti/assets"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 4000);
    assert_eq!(cfg.public_origin, "https://vorrenti.com");
    assert_eq!(cfg.assets_dir, Some(PathBuf::from("/srv/vorrenti/assets")));
}

#[test]
fn blank_assets_dir_is_ignored() {
    let cfg = ServerConfig::from_lookup(lookup(&[("ASSETS_DIR", "  ")])).unwrap();
    assert_eq!(cfg.assets_dir, None);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn invalid_origin_is_rejected() {
    for raw in ["vorrenti.com", "ftp://vorrenti.com", "https://", "https://vorrenti.com/launch"] {
        let err = ServerConfig::from_lookup(lookup(&[("PUBLIC_ORIGIN", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidOrigin(raw.to_owned()), "{raw}");
    }
}
