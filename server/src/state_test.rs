use vorrenti_client::util::seo::{MetaAttr, ORG_SCRIPT_ID};

use super::*;

fn config(origin: &str) -> ServerConfig {
    ServerConfig { port: 3000, public_origin: origin.to_owned(), assets_dir: None }
}

#[test]
fn head_canonical_uses_public_origin() {
    let state = AppState::new(config("https://vorrenti.com"));
    assert_eq!(state.head.link("canonical"), Some("https://vorrenti.com/"));
}

#[test]
fn head_carries_page_metadata() {
    let state = AppState::new(config("https://vorrenti.com"));
    assert_eq!(state.head.title(), Some("Vorrenti | Luxury Mattress – Coming Soon"));
    assert_eq!(state.head.meta(MetaAttr::Property, "og:type"), Some("website"));
    let json_ld = state.head.script(ORG_SCRIPT_ID).unwrap();
    assert!(json_ld.contains(r#""url":"https://vorrenti.com""#));
}
