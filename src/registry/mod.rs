//! Report registry
//!
//! Fixed mapping from report id to its normalized record. Built once at
//! startup from the records compiled into the binary and shared read-only
//! afterwards; there is no insert or remove.

mod builtin;

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::model::raw::RawReport;
use crate::model::{NarrativeOverview, Report};
use crate::normalize::normalize_report;
use crate::score::{self, ScoreTier};

pub use builtin::BUILTIN_SOURCES;

/// Illustration used when a report-specific overview image is missing
pub const FALLBACK_OVERVIEW_IMAGE: &str = "/growth-systems/foundation-reinforcement.png";

/// Registry errors. All of them are data-authoring defects caught at load.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to parse report source {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Report source {0} has an empty id")]
    EmptyId(String),

    #[error("Duplicate report id: {0}")]
    DuplicateId(String),

    #[error("Component {component} of report {report} references undeclared section {section}")]
    UnknownSection {
        report: String,
        component: String,
        section: String,
    },
}

/// Outcome of a lookup by id. Not-found is its own variant, distinct from a
/// report that was found but has little content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Report),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<&'a Report> {
        match self {
            Lookup::Found(report) => Some(report),
            Lookup::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound)
    }
}

/// Lightweight listing record for the index page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub market: String,
    pub date: String,
    pub accent_color: String,
    pub total_score: f64,
    /// `total_score / 9`
    pub average_score: f64,
    pub average_tier: ScoreTier,
    pub profile_label: String,
    pub cover_image: String,
    pub gated: bool,
}

impl ReportSummary {
    pub fn from_report(report: &Report) -> Self {
        let average_score = score::headline_average(report.total_score);
        Self {
            id: report.identity.id.clone(),
            name: report.identity.name.clone(),
            category: report.identity.category.clone(),
            market: report.identity.market.clone(),
            date: report.identity.date.clone(),
            accent_color: report.identity.accent_color.clone(),
            total_score: report.total_score,
            average_score,
            average_tier: score::classify_default(average_score),
            profile_label: report.profile_label(),
            cover_image: cover_image_path(&report.identity.id),
            gated: report.visibility.token().is_some(),
        }
    }
}

/// `/{id}-cover.png`
pub fn cover_image_path(report_id: &str) -> String {
    format!("/{}-cover.png", report_id)
}

/// Illustration path and fallback for the narrative overview block
pub fn overview_image_paths(report_id: &str, overview: &NarrativeOverview) -> (String, String) {
    match overview {
        NarrativeOverview::Summary(_) => (
            format!("/growth-systems/{}-summary.png", report_id),
            FALLBACK_OVERVIEW_IMAGE.to_string(),
        ),
        NarrativeOverview::Profile(profile) => (
            format!("/growth-systems/{}-{}.png", report_id, profile.id),
            format!("/growth-systems/{}.png", profile.id),
        ),
    }
}

/// Immutable id -> report mapping
#[derive(Debug, Clone)]
pub struct Registry {
    reports: Vec<Report>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Registry of the records compiled into the binary
    pub fn builtin() -> Result<Self, RegistryError> {
        let registry = Self::from_sources(BUILTIN_SOURCES.iter().copied())?;
        info!(reports = registry.len(), "Loaded built-in reports");
        Ok(registry)
    }

    /// Parse, normalize and validate `(source name, JSON)` pairs, keeping
    /// their order as registration order.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut reports = Vec::new();
        for (source_name, json) in sources {
            let raw: RawReport =
                serde_json::from_str(json).map_err(|e| RegistryError::Parse {
                    source_name: source_name.to_string(),
                    message: e.to_string(),
                })?;
            if raw.brand.id.trim().is_empty() {
                return Err(RegistryError::EmptyId(source_name.to_string()));
            }
            let report = normalize_report(raw);
            debug!(
                source = source_name,
                report = %report.identity.id,
                components = report.components.len(),
                "Normalized report"
            );
            reports.push(report);
        }
        Self::from_reports(reports)
    }

    /// Build from already-normalized reports, checking the invariants
    pub fn from_reports(reports: Vec<Report>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(reports.len());
        for (position, report) in reports.iter().enumerate() {
            validate_sections(report)?;
            if index.insert(report.identity.id.clone(), position).is_some() {
                return Err(RegistryError::DuplicateId(report.identity.id.clone()));
            }
        }
        Ok(Self { reports, index })
    }

    /// Look up a report by id
    pub fn get(&self, id: &str) -> Lookup<'_> {
        match self.index.get(id) {
            Some(&position) => Lookup::Found(&self.reports[position]),
            None => Lookup::NotFound,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Report> {
        self.get(id).found()
    }

    /// All ids, in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.reports.iter().map(|r| r.identity.id.as_str()).collect()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Listing records for every report, in registration order
    pub fn summaries(&self) -> Vec<ReportSummary> {
        self.reports.iter().map(ReportSummary::from_report).collect()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Every component must belong to one of the report's declared sections
fn validate_sections(report: &Report) -> Result<(), RegistryError> {
    for component in &report.components {
        if report.section(&component.section).is_none() {
            return Err(RegistryError::UnknownSection {
                report: report.identity.id.clone(),
                component: component.id.clone(),
                section: component.section.clone(),
            });
        }
    }
    Ok(())
}
