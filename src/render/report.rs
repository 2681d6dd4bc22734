//! Report detail page

use super::enrichment::render_enrichment;
use super::gate::{wrap_in_gate, REPORT_GATE_COPY};
use super::{capitalize_first, esc, fallback_image, page_shell, paragraph, PageMeta};
use crate::gate::report_storage_key;
use crate::model::{
    Component, FactorItem, GrowthBarrier, GrowthFactors, GrowthSolution, GrowthSystem,
    NarrativeOverview, Report, Section, SectionBody,
};
use crate::registry::{cover_image_path, overview_image_paths};
use crate::score::{self, classify_default, format_score, relevance_percent};

/// Fixed display sections, in page order
const SECTION_ORDER: [&str; 3] = ["A", "B", "C"];

fn section_title(section_id: &str) -> Option<&'static str> {
    match section_id {
        "A" => Some("Brand & Business Alignment"),
        "B" => Some("Audience Connection"),
        "C" => Some("Degree of Transformation"),
        _ => None,
    }
}

fn section_description(section_id: &str) -> Option<&'static str> {
    match section_id {
        "A" => Some("Evaluates how effectively your brand positioning creates financial value"),
        "B" => Some("Evaluates the strength of connection between your brand and audience"),
        "C" => Some("Evaluates how much change is needed and your readiness for transformation"),
        _ => None,
    }
}

fn component_subtitle(component_id: &str) -> Option<&'static str> {
    match component_id {
        "a1" => Some("Measures your brand's Meaningful Difference vs. competitors"),
        "a2" => Some("Evaluates your ability to command premium prices"),
        "a3" => Some("Assesses revenue and market share trajectory"),
        "b1" => Some("Measures the depth of emotional bonds with consumers"),
        "b2" => Some("Evaluates your brand's role in cultural conversations"),
        "b3" => Some("Assesses quality and consistency of brand touchpoints"),
        "c1" => Some("Measures recognizability of your brand assets"),
        "c2" => Some("Evaluates your track record of meaningful innovation"),
        "c3" => Some("Assesses external pressures requiring brand response"),
        _ => None,
    }
}

fn component_icon(component_id: &str) -> Option<&'static str> {
    match component_id {
        "a1" => Some("Target"),
        "a2" => Some("Tag"),
        "a3" => Some("TrendingUp"),
        "b1" => Some("Heart"),
        "b2" => Some("Globe"),
        "b3" => Some("Hand"),
        "c1" => Some("Fingerprint"),
        "c2" => Some("Lightbulb"),
        "c3" => Some("Zap"),
        _ => None,
    }
}

/// `<title>` of a report page
pub fn report_title(report: &Report) -> String {
    format!("{} Growth Diagnosis", report.identity.name)
}

/// Meta description of a report page
pub fn report_description(report: &Report) -> String {
    format!(
        "Strategic growth analysis for {} - {}",
        report.identity.name,
        report.profile_label()
    )
}

/// Full report page. The gate wraps the page when `gate_enabled` and the
/// report carries a token.
pub fn render_report_page(report: &Report, gate_enabled: bool) -> String {
    let main = render_report_main(report);
    let body = match report.visibility.token() {
        Some(token) if gate_enabled => wrap_in_gate(
            &report_storage_key(report.id()),
            token,
            &REPORT_GATE_COPY,
            &main,
        ),
        _ => main,
    };

    let title = report_title(report);
    let description = report_description(report);
    page_shell(
        &PageMeta {
            title: &title,
            description: Some(description.as_str()),
        },
        &body,
    )
}

/// Page for an id that is not in the registry
pub fn render_not_found_page() -> String {
    let body = "<main class=\"gdt-gate\">\n<div class=\"gdt-card\" style=\"text-align:center\">\n\
                <h1 class=\"gdt-display\">Brand Not Found</h1>\n\
                <p class=\"gdt-secondary\">No growth diagnosis exists for this brand.</p>\n\
                <p><a class=\"gdt-accent-text\" href=\"/\">Back to all brands</a></p>\n\
                </div>\n</main>\n";
    page_shell(
        &PageMeta {
            title: "Brand Not Found",
            description: None,
        },
        body,
    )
}

fn render_report_main(report: &Report) -> String {
    let identity = &report.identity;
    let mut html = String::with_capacity(32 * 1024);

    html.push_str(&format!(
        "<main data-brand=\"{id}\" style=\"--gdt-accent:{accent};--gdt-accent-soft:{accent}26;--gdt-accent-text:{accent}\">\n",
        id = esc(&identity.id),
        accent = esc(&identity.accent_color),
    ));

    html.push_str(&render_hero(report));
    html.push_str(DIVIDER_ALT);

    if let Some(overview) = &report.overview {
        html.push_str(&render_overview(report, overview));
        html.push_str(DIVIDER_ALT);
    }

    html.push_str(&render_overview_grid(report));

    if let Some(factors) = &report.factors {
        html.push_str(DIVIDER);
        html.push_str(&render_factors(factors));
    }
    if let Some(barrier) = &report.barrier {
        html.push_str(DIVIDER);
        html.push_str(&render_barrier(barrier));
    }
    if let Some(solution) = &report.solution {
        html.push_str(DIVIDER);
        html.push_str(&render_solution(solution));
    }
    if let Some(system) = &report.system {
        html.push_str(DIVIDER);
        html.push_str(&render_system(system));
    }

    html.push_str(
        "<div class=\"gdt-band\" style=\"padding-bottom:0\"><div class=\"gdt-section-divider\"></div>\
         <p class=\"gdt-muted\" style=\"text-align:center\">Detailed Component Analysis</p></div>\n",
    );
    for section in &report.sections {
        html.push_str(&render_deep_dive(report, section));
    }

    html.push_str(&format!(
        "<footer class=\"gdt-footer\"><div class=\"gdt-footer-row\">\
         <a href=\"/\">Growth Diagnosis Tool</a><span>Generated {}</span></div></footer>\n",
        esc(&identity.date)
    ));
    html.push_str("</main>\n");
    html
}

const DIVIDER: &str = "<div class=\"gdt-section-divider\"></div>\n";
const DIVIDER_ALT: &str = "<div class=\"gdt-band-alt\"><div class=\"gdt-section-divider\"></div></div>\n";

fn render_hero(report: &Report) -> String {
    let identity = &report.identity;
    let first_word = identity.name.split(' ').next().unwrap_or_default();
    let mut html = String::new();
    html.push_str("<section class=\"gdt-band-alt\">\n<div class=\"gdt-hero\">\n<div class=\"gdt-hero-text\">\n");
    html.push_str(&format!(
        "<h1 class=\"gdt-display\"><span class=\"gdt-accent-text\">{}</span><br>Growth Diagnosis</h1>\n",
        esc(first_word)
    ));
    html.push_str("<div>");
    html.push_str(&format!("<span class=\"gdt-pill gdt-pill-accent\">{}</span>", esc(&identity.category)));
    html.push_str(&format!("<span class=\"gdt-pill gdt-pill-accent\">{}</span>", esc(&identity.market)));
    html.push_str(&format!("<span class=\"gdt-pill gdt-muted\">{}</span>", esc(&identity.date)));
    html.push_str("</div>\n</div>\n");
    html.push_str(&format!(
        "<div class=\"gdt-hero-image\"><img src=\"{}\" alt=\"{} Growth Diagnosis Cover\"></div>\n",
        esc(&cover_image_path(&identity.id)),
        esc(&identity.name)
    ));
    html.push_str("</div>\n</section>\n");
    html
}

fn render_overview(report: &Report, overview: &NarrativeOverview) -> String {
    let (src, fallback) = overview_image_paths(report.id(), overview);
    let mut html = String::new();
    html.push_str("<section class=\"gdt-band gdt-band-alt\">\n<div class=\"gdt-wrap gdt-grid-2\">\n");

    match overview {
        NarrativeOverview::Summary(summary) => {
            let alt = format!("{} Growth Summary", report.identity.name);
            html.push_str(&format!(
                "<div class=\"gdt-illustration\">{}</div>\n",
                fallback_image(&src, &fallback, &alt)
            ));
            html.push_str("<div>\n<p class=\"gdt-eyebrow\">Growth Summary</p>\n");
            html.push_str(&format!("<h2 class=\"gdt-display\">{}</h2>\n", esc(&summary.headline)));
            if !summary.sequence.is_empty() {
                html.push_str(&sequence_pills(&summary.sequence));
            }
            html.push_str(&paragraph("gdt-lead", summary.situation.as_deref()));
            html.push_str(&paragraph("gdt-body", summary.tension.as_deref()));
            html.push_str(&paragraph("gdt-body gdt-strong", summary.path_forward.as_deref()));
            html.push_str(&paragraph("gdt-muted", summary.timeline.as_deref()));
            html.push_str("</div>\n");
        }
        NarrativeOverview::Profile(profile) => {
            let alt = format!("{} Growth Profile", profile.name);
            html.push_str(&format!(
                "<div class=\"gdt-illustration\">{}</div>\n",
                fallback_image(&src, &fallback, &alt)
            ));
            html.push_str("<div>\n<p class=\"gdt-eyebrow\">Growth Profile</p>\n");
            html.push_str(&format!("<h2 class=\"gdt-display\">{}</h2>\n", esc(&profile.name)));
            if !profile.sequence.is_empty() {
                html.push_str(&sequence_pills(&profile.sequence));
            }
            html.push_str(&paragraph("gdt-lead", profile.definition.as_deref()));
            html.push_str(&paragraph("gdt-body", profile.implications.as_deref()));
            if let Some(short) = &profile.short_definition {
                html.push_str(&format!(
                    "<p class=\"gdt-muted\"><em>*{}: {}</em></p>\n",
                    esc(&profile.name),
                    esc(short)
                ));
            }
            html.push_str("</div>\n");
        }
    }

    html.push_str("</div>\n</section>\n");
    html
}

fn sequence_pills(sequence: &[String]) -> String {
    let mut html = String::from("<div>");
    for stage in sequence {
        html.push_str(&format!("<span class=\"gdt-pill\">{}</span>", esc(stage)));
    }
    html.push_str("</div>\n");
    html
}

fn score_badge(score: f64, tier_label: &str) -> String {
    let tier = classify_default(score);
    format!(
        "<div><span class=\"gdt-mono gdt-score score-{tier}\">{}</span><span class=\"gdt-muted\">/10</span></div>\
         <span class=\"tier-badge-{tier}\">{}</span>",
        format_score(score),
        esc(tier_label),
        tier = tier.as_str(),
    )
}

fn icon(component_id: &str) -> String {
    match component_icon(component_id) {
        Some(name) => format!("<span class=\"gdt-icon\" data-icon=\"{}\">{}</span>", name, name),
        None => String::new(),
    }
}

fn render_overview_grid(report: &Report) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"gdt-band\">\n<div class=\"gdt-wrap-wide gdt-grid-3\">\n");

    for section_id in SECTION_ORDER {
        let components = report.components_in(section_id);
        html.push_str("<div>\n");
        html.push_str(&format!("<p class=\"gdt-eyebrow\">Section {}</p>\n", section_id));
        if let Some(title) = section_title(section_id) {
            html.push_str(&format!("<h3 class=\"gdt-display\">{}</h3>\n", esc(title)));
        }
        html.push_str(&paragraph("gdt-secondary", section_description(section_id)));
        html.push_str("<div class=\"gdt-card\" style=\"padding:0\">\n");
        for component in components {
            html.push_str(&format!(
                "<div class=\"gdt-overview-item\"><div style=\"background-color:{}\"></div>\n",
                score::score_color(component.score, score::DEFAULT_MAX)
            ));
            html.push_str(&format!("<a class=\"gdt-overview-link\" href=\"#{}\">\n", esc(&component.id)));
            html.push_str("<div class=\"gdt-score-row\"><div>");
            html.push_str(&icon(&component.id));
            html.push_str(&format!("<h3 class=\"gdt-display\">{}</h3></div>", esc(&component.name)));
            html.push_str("<div style=\"text-align:right\">");
            html.push_str(&score_badge(component.score, &component.tier_label));
            html.push_str("</div></div>\n");
            html.push_str(&paragraph("gdt-strong", component.narrative.headline.as_deref()));
            html.push_str(&paragraph("gdt-secondary", component.narrative.subline.as_deref()));
            html.push_str("</a>\n</div>\n");
        }
        html.push_str("</div>\n</div>\n");
    }

    html.push_str("</div>\n</section>\n");
    html
}

fn render_factor_column(title: &str, marker_class: &str, items: &[FactorItem]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut html = format!(
        "<div>\n<h2 class=\"gdt-display\"><span class=\"{}\">&#9679;</span> {}</h2>\n",
        marker_class, title
    );
    for item in items {
        let color = item
            .score
            .map(|s| score::score_color(s, score::DEFAULT_MAX))
            .unwrap_or("var(--gdt-border)");
        html.push_str(&format!(
            "<div class=\"gdt-card\" style=\"border-left:4px solid {};margin-bottom:1rem\">\n",
            color
        ));
        html.push_str("<div class=\"gdt-score-row\" style=\"margin-bottom:0.5rem\">");
        html.push_str(&format!(
            "<p class=\"gdt-eyebrow\" style=\"color:{}\">{}</p>",
            color,
            esc(&item.name)
        ));
        if let Some(s) = item.score {
            html.push_str(&format!(
                "<span class=\"gdt-mono score-{}\">{}</span>",
                classify_default(s).as_str(),
                format_score(s)
            ));
        }
        html.push_str("</div>\n");
        html.push_str(&format!("<h3 class=\"gdt-display\">{}</h3>\n", esc(&item.headline)));
        html.push_str(&paragraph("gdt-secondary", item.summary.as_deref()));
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    html
}

fn render_factors(factors: &GrowthFactors) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"gdt-band gdt-band-alt\">\n<div class=\"gdt-wrap gdt-grid-2\">\n");
    html.push_str(&render_factor_column("Growth Opportunities", "score-high", &factors.opportunities));
    html.push_str(&render_factor_column("Growth Challenges", "score-low", &factors.challenges));
    html.push_str(&render_factor_column("Growth Strengths", "score-high", &factors.strengths));
    html.push_str("</div>\n</section>\n");
    html
}

fn section_heading(eyebrow: &str, headline: &str, description: Option<&str>) -> String {
    let mut html = format!(
        "<p class=\"gdt-eyebrow\">{}</p>\n<h2 class=\"gdt-display\">{}</h2>\n",
        eyebrow,
        esc(headline)
    );
    html.push_str(&paragraph("gdt-lead", description));
    html
}

fn render_barrier(barrier: &GrowthBarrier) -> String {
    let mut html = String::from("<section class=\"gdt-band gdt-band-alt\">\n<div class=\"gdt-wrap\">\n");
    html.push_str(&section_heading("Growth Barrier", &barrier.headline, barrier.description.as_deref()));
    if !barrier.items.is_empty() {
        html.push_str("<div class=\"gdt-grid-3\">\n");
        for item in &barrier.items {
            html.push_str("<div class=\"gdt-card gdt-card-barrier\">\n");
            html.push_str(&format!("<h3>{}</h3>\n", esc(&item.constraint)));
            if let Some(component) = &item.component {
                let score = item.score.map(|s| format!(" {}", format_score(s))).unwrap_or_default();
                html.push_str(&format!(
                    "<p class=\"gdt-mono gdt-muted\">{}{}</p>\n",
                    esc(component),
                    score
                ));
            }
            let evidence = item.evidence.as_deref().map(capitalize_first);
            html.push_str(&paragraph("gdt-secondary", evidence.as_deref()));
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn render_solution(solution: &GrowthSolution) -> String {
    let mut html = String::from("<section class=\"gdt-band\">\n<div class=\"gdt-wrap\">\n");
    html.push_str(&section_heading("Growth Solution", &solution.headline, solution.description.as_deref()));
    if !solution.actions.is_empty() {
        html.push_str("<div class=\"gdt-grid-3\">\n");
        for action in &solution.actions {
            html.push_str("<div class=\"gdt-card gdt-card-accent\">\n");
            html.push_str(&format!("<h3>{}</h3>\n", esc(&action.title)));
            html.push_str(&paragraph("gdt-secondary", action.description.as_deref()));
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn render_system(system: &GrowthSystem) -> String {
    let mut html = String::from("<section class=\"gdt-band gdt-band-alt\">\n<div class=\"gdt-wrap\">\n");
    html.push_str(&section_heading("Growth System", &system.headline, system.description.as_deref()));

    if !system.phases.is_empty() {
        html.push_str("<div class=\"gdt-grid-3\">\n");
        for (index, phase) in system.phases.iter().enumerate() {
            html.push_str("<div>\n");
            html.push_str(&format!(
                "<span class=\"gdt-display gdt-accent-text\">{}. {}</span>\n",
                index + 1,
                esc(&phase.name)
            ));
            html.push_str(&paragraph("gdt-secondary", phase.description.as_deref()));
            for output in &phase.outputs {
                html.push_str("<div class=\"gdt-card gdt-card-accent\" style=\"margin-bottom:1rem\">\n");
                html.push_str("<div class=\"gdt-score-row\" style=\"margin-bottom:0.5rem\">");
                html.push_str(&format!("<h4>{}</h4>", esc(&output.name)));
                if let Some(s) = output.score {
                    html.push_str(&format!(
                        "<span class=\"gdt-mono gdt-accent-text\">{}%</span>",
                        relevance_percent(s)
                    ));
                }
                html.push_str("</div>\n");
                html.push_str(&paragraph("gdt-secondary", output.purpose.as_deref()));
                if !output.components.is_empty() {
                    html.push_str("<div>");
                    for code in &output.components {
                        html.push_str(&format!("<span class=\"gdt-pill gdt-mono\">{}</span>", esc(code)));
                    }
                    html.push_str("</div>\n");
                }
                if !output.deliverables.is_empty() {
                    html.push_str("<ul class=\"gdt-secondary\">\n");
                    for deliverable in &output.deliverables {
                        html.push_str(&format!("<li>{}</li>\n", esc(deliverable)));
                    }
                    html.push_str("</ul>\n");
                }
                html.push_str("</div>\n");
            }
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");
    }

    if let Some(path) = &system.critical_path {
        html.push_str("<div class=\"gdt-card gdt-card-accent\" style=\"margin-top:2rem\">\n<p class=\"gdt-eyebrow\">Critical Path</p>\n");
        html.push_str(&paragraph("gdt-secondary", Some(path.as_str())));
        html.push_str("</div>\n");
    }
    if let Some(notes) = &system.implementation_notes {
        html.push_str("<div class=\"gdt-card\" style=\"margin-top:1rem\">\n<p class=\"gdt-eyebrow\">Implementation Notes</p>\n");
        html.push_str(&paragraph("gdt-secondary", Some(notes.as_str())));
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</section>\n");
    html
}

fn render_deep_dive(report: &Report, section: &Section) -> String {
    let mut html = format!(
        "<section class=\"gdt-band\" id=\"section-{}\">\n<div class=\"gdt-wrap\">\n",
        esc(&section.id.to_lowercase())
    );
    html.push_str(&format!("<p class=\"gdt-eyebrow\">Section {}</p>\n", esc(&section.id)));
    let title = section_title(&section.id).unwrap_or(section.name.as_str());
    html.push_str(&format!("<h2 class=\"gdt-display\">{}</h2>\n", esc(title)));
    html.push_str(&paragraph("gdt-secondary", section_description(&section.id)));

    if let SectionBody::Summary { headline, summary } = &section.body {
        html.push_str("<div class=\"gdt-card\" style=\"margin-bottom:2rem\">\n");
        html.push_str(&format!(
            "<div class=\"gdt-score-row\"><span></span><div style=\"text-align:right\">{}</div></div>\n",
            score_badge(section.score, &section.tier_label)
        ));
        html.push_str(&paragraph("gdt-strong", headline.as_deref()));
        html.push_str(&paragraph("gdt-secondary", summary.as_deref()));
        html.push_str("</div>\n");
    }

    for component in report.components_in(&section.id) {
        html.push_str(&render_component(report, component));
    }

    html.push_str("</div>\n</section>\n");
    html
}

fn render_component(report: &Report, component: &Component) -> String {
    let narrative = &component.narrative;
    let mut html = format!(
        "<article class=\"gdt-card\" id=\"{}\" style=\"margin-bottom:3rem\">\n",
        esc(&component.id)
    );

    html.push_str("<div class=\"gdt-score-row\">\n<div>");
    html.push_str(&icon(&component.id));
    html.push_str(&format!("<h3 class=\"gdt-display\">{}</h3>", esc(&component.name)));
    html.push_str(&paragraph("gdt-secondary", component_subtitle(&component.id)));
    html.push_str("</div>\n<div style=\"text-align:right\">");
    html.push_str(&score_badge(component.score, &component.tier_label));
    html.push_str("</div>\n</div>\n");

    if let Some(headline) = &narrative.headline {
        html.push_str(&format!("<h4 class=\"gdt-display\">{}</h4>\n", esc(headline)));
    }
    html.push_str(&paragraph("gdt-secondary", narrative.subline.as_deref()));

    if !narrative.what.is_empty() || narrative.evidence.is_some() || narrative.so_what.is_some() || narrative.now_what.is_some() {
        html.push_str("<div class=\"gdt-grid-3\">\n");
        html.push_str("<div class=\"gdt-card\">\n<p class=\"gdt-eyebrow\">What</p>\n");
        for paragraph_text in &narrative.what {
            html.push_str(&paragraph("gdt-body", Some(paragraph_text.as_str())));
        }
        html.push_str(&paragraph("gdt-secondary", narrative.evidence.as_deref()));
        html.push_str("</div>\n");
        html.push_str("<div class=\"gdt-card\">\n<p class=\"gdt-eyebrow\">So What</p>\n");
        html.push_str(&paragraph("gdt-body", narrative.so_what.as_deref()));
        html.push_str("</div>\n");
        html.push_str("<div class=\"gdt-card\">\n<p class=\"gdt-eyebrow\">Now What</p>\n");
        html.push_str(&paragraph("gdt-body", narrative.now_what.as_deref()));
        html.push_str("</div>\n</div>\n");
    }

    if let Some(enrichment) = render_enrichment(&report.identity.name, component.score, &component.enrichment) {
        html.push_str(&enrichment);
    }

    html.push_str("</article>\n");
    html
}
