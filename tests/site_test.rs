//! HTTP surface and static export integration tests

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use growth_diagnosis::config::Config;
use growth_diagnosis::registry::Registry;
use growth_diagnosis::site::{create_router, export::export_site, SiteState};

/// Three sections of three components each, total 63.7
fn acme_json() -> String {
    let mut components = Vec::new();
    for (section, scores) in [("A", [7.5, 7.8, 8.7]), ("B", [6.0, 6.4, 6.9]), ("C", [5.8, 7.8, 6.8])] {
        for (n, score) in scores.iter().enumerate() {
            let id = format!("{}{}", section.to_lowercase(), n + 1);
            components.push(format!(
                r#"{{ "id": "{id}", "name": "Component {id}", "section": "{section}", "score": {score},
                     "tier": "Tier", "wsn": {{ "headline": "Headline {id}", "subline": "", "what": "What {id}",
                     "evidence": "", "soWhat": "So {id}", "nowWhat": "Now {id}" }} }}"#
            ));
        }
    }
    components.push(
        r#"{ "id": "a9", "name": "Unscored", "section": "A", "strengths": ["never shown"] }"#.to_string(),
    );

    format!(
        r##"{{
            "brand": {{ "id": "acme", "name": "Acme Corp", "market": "USA", "category": "Anvils",
                       "date": "January 2026", "accentColor": "#123456", "password": "acme2026" }},
            "totalScore": 63.7,
            "growthSummary": {{ "headline": "X", "sequence": "Position → Unlock" }},
            "growthProfile": {{ "id": "p", "name": "Y", "sequence": "", "definition": "",
                               "implications": "", "shortDefinition": "" }},
            "sections": [
                {{ "id": "A", "name": "Alignment", "score": 24.0, "tier": "Strong" }},
                {{ "id": "B", "name": "Connection", "score": 19.3, "tier": "Moderate" }},
                {{ "id": "C", "name": "Transformation", "score": 20.4, "tier": "Moderate" }}
            ],
            "components": [ {} ]
        }}"##,
        components.join(",\n")
    )
}

const PLAIN: &str = r##"{
    "brand": { "id": "plain", "name": "Plain Goods", "market": "EU", "category": "Basics",
               "date": "2026", "accentColor": "#000000" },
    "totalScore": 27.0,
    "sections": [ { "id": "A", "name": "Alignment", "score": 3.0 } ],
    "components": [
        { "id": "a1", "name": "Brand Positioning", "section": "A", "score": 3.0,
          "competitorScores": [ { "name": "Rival", "score": 8.0 } ], "categoryAverage": 5.0 }
    ]
}"##;

fn state_with(config: Config) -> SiteState {
    let acme = acme_json();
    let registry = Registry::from_sources([("acme.json", acme.as_str()), ("plain.json", PLAIN)])
        .expect("fixture records are valid");
    SiteState::new(registry, config)
}

fn config_with_assets(asset_dir: &Path) -> Config {
    let mut config = Config::default();
    config.site.asset_dir = asset_dir.to_path_buf();
    config
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn test_listing_page() {
    let assets = tempfile::tempdir().unwrap();
    let app = create_router(state_with(config_with_assets(assets.path())));

    let (status, html) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("2 Brand Analyses"));
    // 63.7 / 9 is 7.08, high tier
    assert!(html.contains("score-high\">7.1</span>"));
    // 27 / 9 is 3.0, low tier
    assert!(html.contains("score-low\">3.0</span>"));
    assert!(html.contains("Y</span>"));
    assert!(html.contains("data-gate-key=\"gdt-hub-auth\""));
}

#[tokio::test]
async fn test_report_page_end_to_end() {
    let assets = tempfile::tempdir().unwrap();
    let app = create_router(state_with(config_with_assets(assets.path())));

    let (status, html) = get(app, "/acme").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Acme Corp Growth Diagnosis</title>"));
    assert!(html.contains("Strategic growth analysis for Acme Corp - Y"));
    assert!(html.contains("data-gate-key=\"gdt-auth-acme\""));

    // Summary wins over profile
    assert!(html.contains("<h2 class=\"gdt-display\">X</h2>"));
    assert!(!html.contains("Growth Profile"));

    for id in ["a1", "a2", "a3", "b1", "b2", "b3", "c1", "c2", "c3"] {
        assert!(html.contains(&format!("id=\"{}\"", id)), "missing {}", id);
    }
    assert!(!html.contains("Unscored"));
    assert!(!html.contains("never shown"));
    // No enrichment on any acme component
    assert!(!html.contains("Expand Analysis"));
}

#[tokio::test]
async fn test_open_report_has_no_gate() {
    let assets = tempfile::tempdir().unwrap();
    let app = create_router(state_with(config_with_assets(assets.path())));

    let (status, html) = get(app, "/plain").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("data-gate-key"));
    assert!(html.contains("Expand Analysis"));
    assert!(html.contains("Category Average"));
}

#[tokio::test]
async fn test_gates_disabled_by_config() {
    let assets = tempfile::tempdir().unwrap();
    let mut config = config_with_assets(assets.path());
    config.gate.enabled = false;
    let app = create_router(state_with(config));

    let (_, listing) = get(app.clone(), "/").await;
    assert!(!listing.contains("data-gate-key"));
    let (_, report) = get(app, "/acme").await;
    assert!(!report.contains("data-gate-key"));
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let assets = tempfile::tempdir().unwrap();
    let app = create_router(state_with(config_with_assets(assets.path())));

    let (status, html) = get(app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Brand Not Found"));
}

#[tokio::test]
async fn test_assets_served_next_to_report_routes() {
    let assets = tempfile::tempdir().unwrap();
    std::fs::write(assets.path().join("acme-cover.png"), b"not really a png").unwrap();
    let app = create_router(state_with(config_with_assets(assets.path())));

    let (status, body) = get(app, "/acme-cover.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "not really a png");
}

#[tokio::test]
async fn test_api_endpoints() {
    let assets = tempfile::tempdir().unwrap();
    let app = create_router(state_with(config_with_assets(assets.path())));

    let (status, body) = get(app.clone(), "/api/reports").await;
    assert_eq!(status, StatusCode::OK);
    let summaries: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(summaries.as_array().unwrap().len(), 2);
    assert_eq!(summaries[0]["id"], "acme");
    assert_eq!(summaries[0]["average_tier"], "high");
    assert_eq!(summaries[0]["gated"], true);

    let (status, body) = get(app.clone(), "/api/reports/acme").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("acme2026"));
    let report: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(report["total_score"], 63.7);
    assert_eq!(report["components"].as_array().unwrap().len(), 9);

    let (status, body) = get(app.clone(), "/api/reports/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("error"));

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[test]
fn test_static_export() {
    let assets = tempfile::tempdir().unwrap();
    std::fs::create_dir(assets.path().join("growth-systems")).unwrap();
    std::fs::write(assets.path().join("acme-cover.png"), b"cover").unwrap();
    std::fs::write(assets.path().join("growth-systems").join("acme-summary.png"), b"summary").unwrap();
    let out = tempfile::tempdir().unwrap();

    let state = state_with(config_with_assets(assets.path()));
    let summary = export_site(&state, out.path()).unwrap();

    assert_eq!(summary.pages, 4);
    assert_eq!(summary.assets, 2);
    assert!(out.path().join("index.html").is_file());
    assert!(out.path().join("404.html").is_file());
    assert!(out.path().join("growth-systems").join("acme-summary.png").is_file());

    let acme = std::fs::read_to_string(out.path().join("acme").join("index.html")).unwrap();
    assert!(acme.contains("<title>Acme Corp Growth Diagnosis</title>"));
    let plain = std::fs::read_to_string(out.path().join("plain").join("index.html")).unwrap();
    assert!(plain.contains("Plain Goods"));
}
