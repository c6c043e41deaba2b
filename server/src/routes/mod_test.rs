use std::path::Path;

use super::*;
use crate::config::ServerConfig;

fn state(assets_dir: Option<&str>) -> AppState {
    AppState::new(ServerConfig {
        port: 3000,
        public_origin: "http://localhost:3000".to_owned(),
        assets_dir: assets_dir.map(PathBuf::from),
    })
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn assets_dir_defaults_under_site_root() {
    let dir = assets_dir(&state(None), Path::new("target/site"));
    assert_eq!(dir, PathBuf::from("target/site/assets"));
}

#[test]
fn assets_dir_prefers_configured_path() {
    let dir = assets_dir(&state(Some("/srv/assets")), Path::new("target/site"));
    assert_eq!(dir, PathBuf::from("/srv/assets"));
}

#[test]
fn brand_images_referenced_by_page_are_checked_in() {
    let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("../public");
    for src in [vorrenti_client::content::LOGO_SRC, vorrenti_client::content::HERO_SRC] {
        assert!(public.join(src.trim_start_matches('/')).is_file(), "missing {src}");
    }
}
