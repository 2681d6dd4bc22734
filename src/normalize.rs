//! Adapters from authored records to the canonical model
//!
//! Each historical shape has one adapter here. The precedence rule is the
//! same everywhere: the newer field names win, the older ones fill in, and a
//! record that has neither is dropped locally instead of failing the report.

use thiserror::Error;
use tracing::debug;

use crate::model::raw::{
    RawBarrierItem, RawComponent, RawFactorItem, RawGrowthBarrier, RawGrowthFactors,
    RawGrowthProfile, RawGrowthSolution, RawGrowthSummary, RawGrowthSystem, RawReport,
    RawSection, RawSystemOutput, RawSystemPhase,
};
use crate::model::{
    BarrierItem, CompetitorScore, Component, ContentVisibility, Enrichment, FactorItem,
    GrowthBarrier, GrowthFactors, GrowthProfile, GrowthSolution, GrowthSummary, GrowthSystem,
    Narrative, NarrativeOverview, Report, ReportIdentity, Section, SectionBody, SolutionAction,
    SystemOutput, SystemPhase,
};

const SEQUENCE_SEPARATOR: char = '→';

/// Normalize one authored record into the canonical shape
pub fn normalize_report(raw: RawReport) -> Report {
    let report_id = raw.brand.id.trim().to_string();

    let visibility = match non_blank(raw.brand.password) {
        Some(token) => ContentVisibility::Gated { token },
        None => ContentVisibility::Open,
    };

    let identity = ReportIdentity {
        id: report_id.clone(),
        name: raw.brand.name.trim().to_string(),
        market: raw.brand.market,
        category: raw.brand.category,
        date: raw.brand.date,
        accent_color: raw.brand.accent_color,
    };

    let profile_name = raw
        .growth_profile
        .as_ref()
        .and_then(|p| non_blank(Some(p.name.clone())));
    let overview = select_overview(raw.growth_summary, raw.growth_profile);

    let components: Vec<Component> = raw
        .components
        .into_iter()
        .filter_map(|c| {
            let name = c.name.clone();
            match normalize_component(c) {
                Ok(component) => Some(component),
                Err(reason) => {
                    debug!(report = %report_id, component = %name, %reason, "Skipping component");
                    None
                }
            }
        })
        .collect();

    let sections: Vec<Section> = raw
        .sections
        .into_iter()
        .filter_map(|s| {
            let id = s.id.clone();
            let normalized = normalize_section(s);
            if normalized.is_none() {
                debug!(report = %report_id, section = %id, "Skipping section without a score");
            }
            normalized
        })
        .collect();

    let factors = raw
        .growth_factors
        .map(|f| normalize_factors(f, &components))
        .filter(|f| !f.is_empty());

    Report {
        identity,
        visibility,
        total_score: raw.total_score,
        overview,
        profile_name,
        sections,
        components,
        barrier: raw.growth_barrier.map(normalize_barrier),
        solution: raw.growth_solution.map(normalize_solution),
        system: raw.growth_system.map(normalize_system),
        factors,
    }
}

/// Summary wins over profile; the two are never merged
pub fn select_overview(
    summary: Option<RawGrowthSummary>,
    profile: Option<RawGrowthProfile>,
) -> Option<NarrativeOverview> {
    if let Some(summary) = summary {
        return Some(NarrativeOverview::Summary(normalize_summary(summary)));
    }
    profile.map(|p| NarrativeOverview::Profile(normalize_profile(p)))
}

fn normalize_summary(raw: RawGrowthSummary) -> GrowthSummary {
    GrowthSummary {
        headline: raw.headline.trim().to_string(),
        sequence: split_sequence(raw.sequence.as_deref().unwrap_or_default()),
        situation: non_blank(raw.summary).or_else(|| non_blank(raw.strategic_narrative)),
        tension: non_blank(raw.paradox).or_else(|| non_blank(raw.key_insight)),
        path_forward: non_blank(raw.path).or_else(|| non_blank(raw.strategic_imperative)),
        timeline: non_blank(raw.timeline_context),
        image: non_blank(raw.image),
    }
}

fn normalize_profile(raw: RawGrowthProfile) -> GrowthProfile {
    GrowthProfile {
        id: raw.id.trim().to_string(),
        name: raw.name.trim().to_string(),
        sequence: split_sequence(&raw.sequence),
        definition: non_blank(Some(raw.definition)),
        implications: non_blank(Some(raw.implications)),
        short_definition: non_blank(Some(raw.short_definition)),
    }
}

/// Reconcile a section. Returns `None` when neither shape supplies a score.
pub fn normalize_section(raw: RawSection) -> Option<Section> {
    let id = raw.id.trim().to_uppercase();
    let tier_label = non_blank(raw.tier)
        .or_else(|| non_blank(raw.descriptor))
        .unwrap_or_default();

    if let Some(score) = raw.score {
        let ids = raw
            .components
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| non_blank(Some(c.id)).map(|id| id.to_lowercase()))
            .collect();
        return Some(Section {
            id,
            name: raw.name,
            score,
            tier_label,
            body: SectionBody::Components { ids },
        });
    }

    let score = raw.total_score?;
    Some(Section {
        id,
        name: raw.name,
        score,
        tier_label,
        body: SectionBody::Summary {
            headline: non_blank(raw.headline),
            summary: non_blank(raw.summary),
        },
    })
}

/// Why a component was left out of its report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComponentSkip {
    #[error("no id or code")]
    MissingId,
    #[error("no section tag")]
    MissingSection,
    #[error("no score or rating")]
    MissingScore,
}

/// Reconcile a component, or say why it cannot be placed in the report
pub fn normalize_component(raw: RawComponent) -> Result<Component, ComponentSkip> {
    let code = non_blank(raw.code);
    let id = non_blank(raw.id)
        .or_else(|| code.clone())
        .ok_or(ComponentSkip::MissingId)?
        .to_lowercase();
    let section = non_blank(raw.section)
        .or_else(|| code.as_deref().and_then(section_from_code))
        .or_else(|| section_from_code(&id))
        .ok_or(ComponentSkip::MissingSection)?
        .to_uppercase();
    let score = raw
        .score
        .or(raw.rating)
        .ok_or(ComponentSkip::MissingScore)?;
    let tier_label = non_blank(raw.tier).or_else(|| non_blank(raw.descriptor));
    let narrative = match raw.wsn {
        Some(wsn) => narrative_from_wsn(wsn),
        None => legacy_narrative(raw.headline, raw.summary_bullets),
    };

    let enrichment = Enrichment::new(
        non_blank_list(raw.strengths),
        non_blank_list(raw.weaknesses),
        non_blank(raw.competitive_context),
        raw.score_breakdown.unwrap_or_default(),
        raw.competitor_scores
            .unwrap_or_default()
            .into_iter()
            .filter(|c| !c.name.trim().is_empty())
            .map(|c| CompetitorScore {
                name: c.name,
                score: c.score,
            })
            .collect(),
        raw.category_average,
    );

    Ok(Component {
        id,
        name: raw.name,
        section,
        score,
        tier_label: tier_label.unwrap_or_default(),
        narrative,
        enrichment,
    })
}

fn narrative_from_wsn(wsn: crate::model::raw::RawWsn) -> Narrative {
    Narrative {
        headline: non_blank(Some(wsn.headline)),
        subline: non_blank(Some(wsn.subline)),
        what: non_blank(Some(wsn.what)).into_iter().collect(),
        evidence: non_blank(Some(wsn.evidence)),
        so_what: non_blank(Some(wsn.so_what)),
        now_what: non_blank(Some(wsn.now_what)),
    }
}

/// Older records carry a headline and a bullet list; the bullets become the
/// descriptive body and the remaining slots stay empty.
fn legacy_narrative(headline: Option<String>, bullets: Option<Vec<String>>) -> Narrative {
    Narrative {
        headline: non_blank(headline),
        what: non_blank_list(bullets),
        ..Narrative::default()
    }
}

fn normalize_barrier(raw: RawGrowthBarrier) -> GrowthBarrier {
    let items = raw
        .items
        .or(raw.constraints)
        .unwrap_or_default()
        .into_iter()
        .map(normalize_barrier_item)
        .collect();

    GrowthBarrier {
        headline: raw.headline,
        description: non_blank(raw.description).or_else(|| non_blank(raw.problem_statement)),
        items,
    }
}

fn normalize_barrier_item(raw: RawBarrierItem) -> BarrierItem {
    BarrierItem {
        constraint: raw.constraint,
        component: non_blank(raw.component).or_else(|| non_blank(raw.component_code)),
        score: raw.score,
        evidence: non_blank(raw.evidence),
    }
}

fn normalize_solution(raw: RawGrowthSolution) -> GrowthSolution {
    let actions = match (raw.actions, raw.unlocks) {
        (Some(actions), _) => actions
            .iter()
            .filter_map(|a| split_action(a.as_str()))
            .collect(),
        (None, Some(unlocks)) => unlocks
            .into_iter()
            .filter(|u| !u.name.trim().is_empty())
            .map(|u| SolutionAction {
                title: u.name,
                description: non_blank(Some(u.description)),
            })
            .collect(),
        (None, None) => Vec::new(),
    };

    GrowthSolution {
        headline: raw.headline,
        description: non_blank(raw.description).or_else(|| non_blank(raw.solution_statement)),
        actions,
    }
}

/// Split `"Title: description"` on the first colon. An action without a
/// colon is all title.
pub fn split_action(action: &str) -> Option<SolutionAction> {
    let action = action.trim();
    if action.is_empty() {
        return None;
    }
    match action.split_once(':') {
        Some((title, rest)) => Some(SolutionAction {
            title: title.trim().to_string(),
            description: non_blank(Some(rest.to_string())),
        }),
        None => Some(SolutionAction {
            title: action.to_string(),
            description: None,
        }),
    }
}

fn normalize_system(raw: RawGrowthSystem) -> GrowthSystem {
    GrowthSystem {
        headline: raw.headline,
        description: non_blank(raw.description).or_else(|| non_blank(raw.system_description)),
        critical_path: non_blank(raw.critical_path),
        implementation_notes: non_blank(raw.implementation_notes),
        phases: raw.phases.into_iter().map(normalize_phase).collect(),
    }
}

fn normalize_phase(raw: RawSystemPhase) -> SystemPhase {
    SystemPhase {
        name: raw.phase,
        description: non_blank(raw.description).or_else(|| non_blank(raw.focus)),
        outputs: raw
            .outputs
            .or(raw.products)
            .unwrap_or_default()
            .into_iter()
            .map(normalize_output)
            .collect(),
    }
}

fn normalize_output(raw: RawSystemOutput) -> SystemOutput {
    SystemOutput {
        name: raw.name,
        purpose: non_blank(raw.purpose),
        score: raw.score.or(raw.relevance_score),
        components: non_blank_list(raw.components_addressed.or(raw.critical_components)),
        deliverables: non_blank_list(raw.deliverables.or(raw.key_deliverables)),
    }
}

fn normalize_factors(raw: RawGrowthFactors, components: &[Component]) -> GrowthFactors {
    let convert = |items: Vec<RawFactorItem>| -> Vec<FactorItem> {
        items
            .into_iter()
            .filter_map(|item| normalize_factor(item, components))
            .collect()
    };

    GrowthFactors {
        opportunities: convert(raw.opportunities),
        challenges: convert(raw.challenges),
        strengths: convert(raw.strengths.unwrap_or_default()),
    }
}

/// Reconcile a factor. Older factors carry no score of their own and borrow
/// the referenced component's score.
fn normalize_factor(raw: RawFactorItem, components: &[Component]) -> Option<FactorItem> {
    let name = non_blank(raw.name).or_else(|| non_blank(raw.factor))?;
    let component = non_blank(raw.component).or_else(|| non_blank(raw.component_code));
    let score = raw.score.or_else(|| {
        let code = component.as_deref()?;
        components
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(code))
            .map(|c| c.score)
    });

    Some(FactorItem {
        headline: non_blank(raw.headline).unwrap_or_else(|| name.clone()),
        name,
        component,
        score,
        summary: non_blank(raw.summary).or_else(|| non_blank(raw.evidence)),
    })
}

/// `"A1"` -> `"A"`
fn section_from_code(code: &str) -> Option<String> {
    code.trim()
        .chars()
        .next()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase().to_string())
}

/// `"Position → Unlock → Connect"` -> stage labels
pub fn split_sequence(sequence: &str) -> Vec<String> {
    sequence
        .split(SEQUENCE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn non_blank_list(values: Option<Vec<String>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| non_blank(Some(v)))
        .collect()
}
