//! Canonical report model
//!
//! Everything outside [`crate::normalize`] sees only these types. Optional
//! content is `Option`/empty collections; blank strings never survive
//! normalization.

pub mod raw;

use indexmap::IndexMap;
use serde::Serialize;

/// One subject's full diagnostic record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub identity: ReportIdentity,

    /// Never serialized; the gate token must not leak through the JSON API
    #[serde(skip)]
    pub visibility: ContentVisibility,

    /// Authoritative aggregate, computed upstream and never re-derived
    pub total_score: f64,

    pub overview: Option<NarrativeOverview>,

    /// Name of the legacy profile, kept for listing labels even when the
    /// summary wins overview precedence
    pub profile_name: Option<String>,

    pub sections: Vec<Section>,
    pub components: Vec<Component>,
    pub barrier: Option<GrowthBarrier>,
    pub solution: Option<GrowthSolution>,
    pub system: Option<GrowthSystem>,
    pub factors: Option<GrowthFactors>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportIdentity {
    /// Slug used as registry key and route parameter
    pub id: String,
    pub name: String,
    pub market: String,
    pub category: String,
    /// Free text, displayed as authored
    pub date: String,
    pub accent_color: String,
}

/// Whether a page is hidden behind the display gate.
///
/// This obscures content on screen. It is not access control: the token
/// ships inside the rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContentVisibility {
    #[default]
    Open,
    Gated { token: String },
}

impl ContentVisibility {
    pub fn token(&self) -> Option<&str> {
        match self {
            ContentVisibility::Open => None,
            ContentVisibility::Gated { token } => Some(token),
        }
    }
}

/// Report-level headline narrative, in whichever shape won precedence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NarrativeOverview {
    Summary(GrowthSummary),
    Profile(GrowthProfile),
}

impl NarrativeOverview {
    /// Stage labels, e.g. `["Position", "Unlock", "Connect"]`
    pub fn sequence(&self) -> &[String] {
        match self {
            NarrativeOverview::Summary(s) => &s.sequence,
            NarrativeOverview::Profile(p) => &p.sequence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSummary {
    pub headline: String,
    pub sequence: Vec<String>,
    pub situation: Option<String>,
    pub tension: Option<String>,
    pub path_forward: Option<String>,
    pub timeline: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthProfile {
    /// Matches the illustration filename
    pub id: String,
    pub name: String,
    pub sequence: Vec<String>,
    pub definition: Option<String>,
    pub implications: Option<String>,
    pub short_definition: Option<String>,
}

/// One of the three fixed groupings of components
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Short code, `A`/`B`/`C`
    pub id: String,
    pub name: String,
    pub score: f64,
    pub tier_label: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    /// Ordered component ids belonging to the section
    Components { ids: Vec<String> },
    /// Older records describe the section in prose instead
    Summary {
        headline: Option<String>,
        summary: Option<String>,
    },
}

/// Finest-grained scored evaluation dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    /// Lowercase id, `a1` .. `c3`
    pub id: String,
    pub name: String,
    /// Section code this component belongs to
    pub section: String,
    pub score: f64,
    pub tier_label: String,
    pub narrative: Narrative,
    pub enrichment: Enrichment,
}

/// What / so-what / now-what write-up of a component
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Narrative {
    pub headline: Option<String>,
    pub subline: Option<String>,
    /// Descriptive body, one entry per paragraph
    pub what: Vec<String>,
    pub evidence: Option<String>,
    pub so_what: Option<String>,
    pub now_what: Option<String>,
}

impl Narrative {
    pub fn is_empty(&self) -> bool {
        self.headline.is_none()
            && self.subline.is_none()
            && self.what.is_empty()
            && self.evidence.is_none()
            && self.so_what.is_none()
            && self.now_what.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorScore {
    pub name: String,
    pub score: f64,
}

/// Optional detail shown behind the "Expand Analysis" toggle
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Enrichment {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub competitive_context: Option<String>,
    pub score_breakdown: IndexMap<String, f64>,
    pub competitor_scores: Vec<CompetitorScore>,
    pub category_average: Option<f64>,
    has_content: bool,
}

impl Enrichment {
    pub fn new(
        strengths: Vec<String>,
        weaknesses: Vec<String>,
        competitive_context: Option<String>,
        score_breakdown: IndexMap<String, f64>,
        competitor_scores: Vec<CompetitorScore>,
        category_average: Option<f64>,
    ) -> Self {
        // Category average only annotates the comparison; alone it is not content
        let has_content = !strengths.is_empty()
            || !weaknesses.is_empty()
            || competitive_context.is_some()
            || !score_breakdown.is_empty()
            || !competitor_scores.is_empty();

        Self {
            strengths,
            weaknesses,
            competitive_context,
            score_breakdown,
            competitor_scores,
            category_average,
            has_content,
        }
    }

    /// True when any enrichment field carries content
    pub fn has_content(&self) -> bool {
        self.has_content
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthBarrier {
    pub headline: String,
    pub description: Option<String>,
    pub items: Vec<BarrierItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarrierItem {
    pub constraint: String,
    /// Referenced component code, as authored (`C1`)
    pub component: Option<String>,
    pub score: Option<f64>,
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSolution {
    pub headline: String,
    pub description: Option<String>,
    pub actions: Vec<SolutionAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionAction {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSystem {
    pub headline: String,
    pub description: Option<String>,
    pub critical_path: Option<String>,
    pub implementation_notes: Option<String>,
    pub phases: Vec<SystemPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemPhase {
    pub name: String,
    pub description: Option<String>,
    pub outputs: Vec<SystemOutput>,
}

/// Named initiative within a phase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemOutput {
    pub name: String,
    pub purpose: Option<String>,
    /// Relevance on the 0-10 scale
    pub score: Option<f64>,
    pub components: Vec<String>,
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GrowthFactors {
    pub opportunities: Vec<FactorItem>,
    pub challenges: Vec<FactorItem>,
    pub strengths: Vec<FactorItem>,
}

impl GrowthFactors {
    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty() && self.challenges.is_empty() && self.strengths.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorItem {
    pub name: String,
    pub component: Option<String>,
    pub score: Option<f64>,
    pub headline: String,
    pub summary: Option<String>,
}

impl Report {
    pub fn id(&self) -> &str {
        &self.identity.id
    }

    /// Components tagged with `section_id`, ordered by component id
    pub fn components_in(&self, section_id: &str) -> Vec<&Component> {
        let mut components: Vec<&Component> = self
            .components
            .iter()
            .filter(|c| c.section == section_id)
            .collect();
        components.sort_by(|a, b| a.id.cmp(&b.id));
        components
    }

    /// Component by id or authored code, ignoring case (`C1` finds `c1`)
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Label for the narrative profile shown on listing cards.
    ///
    /// Falls back from the profile name to the summary's stage sequence, then
    /// to the summary headline.
    pub fn profile_label(&self) -> String {
        if let Some(name) = &self.profile_name {
            return name.clone();
        }
        match &self.overview {
            Some(NarrativeOverview::Summary(s)) if !s.sequence.is_empty() => {
                s.sequence.join(" → ")
            }
            Some(NarrativeOverview::Summary(s)) => s.headline.clone(),
            Some(NarrativeOverview::Profile(p)) => p.name.clone(),
            None => DEFAULT_PROFILE_LABEL.to_string(),
        }
    }
}

pub const DEFAULT_PROFILE_LABEL: &str = "Growth Diagnosis";
