//! Built-in registry integration tests

use growth_diagnosis::model::{NarrativeOverview, SectionBody};
use growth_diagnosis::registry::{Lookup, Registry};
use growth_diagnosis::score::{format_score, ScoreTier};

fn builtin() -> Registry {
    Registry::builtin().expect("built-in data is valid")
}

#[test]
fn test_builtin_ids_in_registration_order() {
    let registry = builtin();
    assert_eq!(
        registry.ids(),
        vec![
            "zyn",
            "espolon",
            "cava",
            "geico",
            "ripple",
            "adobe-creative-cloud",
            "hogwarts-legacy",
            "survodutide",
        ]
    );
    assert_eq!(registry.len(), 8);
}

/// Every component references a declared section, across all record shapes.
#[test]
fn test_every_component_belongs_to_a_declared_section() {
    let registry = builtin();
    for report in registry.reports() {
        assert_eq!(report.sections.len(), 3, "{}", report.id());
        for component in &report.components {
            assert!(
                report.section(&component.section).is_some(),
                "{} / {}",
                report.id(),
                component.id
            );
        }
    }
}

#[test]
fn test_lookup_is_pure() {
    let registry = builtin();
    let first = registry.get("cava");
    let second = registry.get("cava");
    assert_eq!(first, second);
    assert!(matches!(first, Lookup::Found(r) if r.identity.name == "CAVA"));
    assert!(registry.get("not-a-brand").is_not_found());
}

#[test]
fn test_cava_listing_record() {
    let registry = builtin();
    let summaries = registry.summaries();
    let cava = summaries.iter().find(|s| s.id == "cava").unwrap();

    assert_eq!(cava.total_score, 63.7);
    assert_eq!(format_score(cava.average_score), "7.1");
    assert_eq!(cava.average_tier, ScoreTier::High);
    assert_eq!(cava.profile_label, "Position → Unlock → Connect");
    assert_eq!(cava.cover_image, "/cava-cover.png");
    assert!(cava.gated);
}

/// Listing label prefers the profile name even when the summary is shown.
#[test]
fn test_geico_label_and_overview_precedence() {
    let registry = builtin();
    let geico = registry.find("geico").unwrap();

    assert!(matches!(
        &geico.overview,
        Some(NarrativeOverview::Summary(s)) if s.headline == "Gecko Genius Meets Innovation Desert"
    ));
    assert_eq!(geico.profile_label(), "Experience Transformation");
}

#[test]
fn test_profile_only_records() {
    let registry = builtin();
    let survodutide = registry.find("survodutide").unwrap();
    match &survodutide.overview {
        Some(NarrativeOverview::Profile(p)) => {
            assert_eq!(p.id, "cultural-entry");
            assert_eq!(p.sequence, vec!["Position", "Unlock", "Connect"]);
        }
        other => panic!("expected profile overview, got {:?}", other),
    }
    assert!(survodutide.visibility.token().is_none());
}

/// Explicit zero scores are kept; they are authored, not missing.
#[test]
fn test_zero_scores_kept() {
    let registry = builtin();
    let hogwarts = registry.find("hogwarts-legacy").unwrap();
    assert_eq!(hogwarts.components.len(), 9);
    let a1 = hogwarts.component("a1").unwrap();
    assert_eq!(a1.score, 0.0);
    assert!(a1.tier_label.is_empty());
    assert!(a1.narrative.headline.is_none());
    assert!(a1.narrative.what.is_empty());
}

#[test]
fn test_legacy_records_normalized() {
    let registry = builtin();
    let zyn = registry.find("zyn").unwrap();

    assert_eq!(zyn.components.len(), 9);
    assert!(zyn.component("a1").is_some());
    assert!(zyn.component("A1").is_some());
    assert!(zyn
        .sections
        .iter()
        .all(|s| matches!(s.body, SectionBody::Summary { .. })));

    let factors = zyn.factors.as_ref().unwrap();
    assert_eq!(factors.opportunities.len(), 2);
    assert_eq!(factors.challenges.len(), 3);
    assert_eq!(factors.strengths.len(), 3);
}

#[test]
fn test_open_reports() {
    let registry = builtin();
    let open: Vec<String> = registry
        .summaries()
        .into_iter()
        .filter(|s| !s.gated)
        .map(|s| s.id)
        .collect();
    assert_eq!(open, vec!["ripple", "survodutide"]);
}
