//! Serialized report records as authored
//!
//! Records were written by hand over several months and the field names
//! drifted. Every shape that appears in the data is accepted here; nothing in
//! this module decides which variant wins. That is the job of
//! [`crate::normalize`].

use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReport {
    pub brand: RawBrand,
    pub total_score: f64,

    /// Legacy overview shape
    #[serde(default)]
    pub growth_profile: Option<RawGrowthProfile>,

    /// Preferred overview shape
    #[serde(default)]
    pub growth_summary: Option<RawGrowthSummary>,

    #[serde(default)]
    pub sections: Vec<RawSection>,

    #[serde(default)]
    pub components: Vec<RawComponent>,

    #[serde(default)]
    pub growth_barrier: Option<RawGrowthBarrier>,

    #[serde(default)]
    pub growth_solution: Option<RawGrowthSolution>,

    #[serde(default)]
    pub growth_system: Option<RawGrowthSystem>,

    #[serde(default)]
    pub growth_factors: Option<RawGrowthFactors>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBrand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub accent_color: String,
    /// Display gate token; present means the report is gated
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGrowthProfile {
    pub id: String,
    pub name: String,
    pub sequence: String,
    pub definition: String,
    pub implications: String,
    pub short_definition: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGrowthSummary {
    pub headline: String,
    pub sequence: Option<String>,
    pub summary: Option<String>,
    pub paradox: Option<String>,
    pub path: Option<String>,
    pub image: Option<String>,
    pub strategic_narrative: Option<String>,
    pub key_insight: Option<String>,
    pub strategic_imperative: Option<String>,
    pub timeline_context: Option<String>,
}

/// Section aggregate in either the `score`/`tier`/`components` layout or the
/// older `totalScore`/`descriptor`/`summary` layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSection {
    pub id: String,
    pub name: String,
    pub score: Option<f64>,
    pub tier: Option<String>,
    pub components: Option<Vec<RawSectionComponent>>,
    pub total_score: Option<f64>,
    pub descriptor: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSectionComponent {
    pub id: String,
    pub name: String,
    pub score: Option<f64>,
    pub tier: Option<String>,
    pub section: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawWsn {
    pub headline: String,
    pub subline: String,
    pub what: String,
    pub evidence: String,
    pub so_what: String,
    pub now_what: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCompetitorScore {
    pub name: String,
    pub score: f64,
}

/// Component deep dive in either the `id`/`score`/`wsn` layout or the older
/// `code`/`rating`/`summaryBullets` layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawComponent {
    pub name: String,

    pub id: Option<String>,
    pub section: Option<String>,
    pub score: Option<f64>,
    pub tier: Option<String>,
    pub wsn: Option<RawWsn>,
    pub strengths: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub competitive_context: Option<String>,
    pub score_breakdown: Option<IndexMap<String, f64>>,
    pub competitor_scores: Option<Vec<RawCompetitorScore>>,
    pub category_average: Option<f64>,

    pub code: Option<String>,
    pub rating: Option<f64>,
    pub descriptor: Option<String>,
    pub headline: Option<String>,
    pub summary_bullets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBarrierItem {
    pub constraint: String,
    pub score: Option<f64>,
    pub evidence: Option<String>,
    pub component: Option<String>,
    pub component_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGrowthBarrier {
    pub headline: String,
    pub description: Option<String>,
    pub items: Option<Vec<RawBarrierItem>>,
    pub problem_statement: Option<String>,
    pub constraints: Option<Vec<RawBarrierItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSolutionUnlock {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGrowthSolution {
    pub headline: String,
    pub description: Option<String>,
    pub actions: Option<Vec<String>>,
    pub solution_statement: Option<String>,
    pub unlocks: Option<Vec<RawSolutionUnlock>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSystemOutput {
    pub name: String,
    pub purpose: Option<String>,
    pub score: Option<f64>,
    pub components_addressed: Option<Vec<String>>,
    pub deliverables: Option<Vec<String>>,
    pub relevance_score: Option<f64>,
    pub critical_components: Option<Vec<String>>,
    pub key_deliverables: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSystemPhase {
    pub phase: String,
    pub description: Option<String>,
    pub outputs: Option<Vec<RawSystemOutput>>,
    pub focus: Option<String>,
    pub products: Option<Vec<RawSystemOutput>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGrowthSystem {
    pub headline: String,
    pub phases: Vec<RawSystemPhase>,
    pub description: Option<String>,
    pub critical_path: Option<String>,
    pub implementation_notes: Option<String>,
    pub system_description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFactorItem {
    pub component: Option<String>,
    pub name: Option<String>,
    pub score: Option<f64>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub factor: Option<String>,
    pub component_code: Option<String>,
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGrowthFactors {
    pub opportunities: Vec<RawFactorItem>,
    pub challenges: Vec<RawFactorItem>,
    pub strengths: Option<Vec<RawFactorItem>>,
}
