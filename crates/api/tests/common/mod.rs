#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use folio_core::block::{ContentBlock, ImageRef};
use folio_core::profile::{SiteProfile, SocialLink};
use folio_core::project::Project;
use folio_core::store::ProjectStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and the embedded content.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        projects_path: None,
        profile_path: None,
    }
}

pub fn project(slug: &str, date: Option<&str>, draft: bool) -> Project {
    Project {
        slug: slug.to_string(),
        title: slug.to_uppercase(),
        tags: "Product Design, Interaction".to_string(),
        cover: format!("/images/projects/{slug}/cover.png"),
        card_image: None,
        alt: format!("{slug} cover"),
        date: date.map(String::from),
        draft,
        blocks: vec![
            ContentBlock::Text {
                heading: Some("What it is".to_string()),
                body: format!("About {slug}."),
            },
            ContentBlock::Spacer,
        ],
    }
}

/// Five published projects, E (newest) to A (oldest), plus a draft dated
/// in the future so it would sort first if it leaked.
pub fn fixture_projects() -> Vec<Project> {
    vec![
        project("a", Some("2022-05"), false),
        project("b", Some("2022-10"), false),
        project("c", Some("2023-01"), false),
        project("d", Some("2024-11"), false),
        project("e", Some("2025-11"), false),
        project("hidden", Some("2030-01"), true),
    ]
}

pub fn fixture_profile() -> SiteProfile {
    SiteProfile {
        name: "Test Person".to_string(),
        headline: "Designer".to_string(),
        tagline: "Research to interface.".to_string(),
        about: vec!["Paragraph one.".to_string()],
        portrait: ImageRef {
            src: "/images/about/me.jpg".to_string(),
            alt: "Portrait".to_string(),
            w: None,
            h: None,
        },
        skills: vec!["UX/UI".to_string()],
        links: vec![SocialLink {
            label: "GitHub".to_string(),
            href: "https://github.com/example".to_string(),
            external: true,
        }],
    }
}

/// Build the full application router over the fixture catalog.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app() -> Router {
    let store = ProjectStore::new(fixture_projects()).unwrap();
    let state = AppState::new(store, fixture_profile());
    build_app_router(state, &test_config()).unwrap()
}

/// Build the application router over the content embedded in the binary.
pub fn build_builtin_app() -> Router {
    let config = test_config();
    let state = AppState::load(&config).unwrap();
    build_app_router(state, &config).unwrap()
}

/// Send a GET request to the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract the `slug` of every item in a `{ "data": [...] }` body.
pub fn data_slugs(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["slug"].as_str().unwrap().to_string())
        .collect()
}
