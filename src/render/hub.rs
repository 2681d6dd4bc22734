//! Listing page

use super::gate::{wrap_in_gate, GateCopy};
use super::{esc, page_shell, PageMeta};
use crate::config::SiteConfig;
use crate::gate::HUB_STORAGE_KEY;
use crate::registry::ReportSummary;
use crate::score::format_score;

const HUB_PROMPT: &str = "Enter password to access brand analyses.";

/// `"8 Brand Analyses"`, `"1 Brand Analysis"`
pub fn analysis_count_label(count: usize) -> String {
    let noun = if count == 1 { "Analysis" } else { "Analyses" };
    format!("{} Brand {}", count, noun)
}

/// Listing page. `hub_token` gates the whole page when present.
pub fn render_hub_page(summaries: &[ReportSummary], site: &SiteConfig, hub_token: Option<&str>) -> String {
    let main = render_hub_main(summaries, site);
    let body = match hub_token {
        Some(token) => wrap_in_gate(
            HUB_STORAGE_KEY,
            token,
            &GateCopy {
                heading: &site.title,
                prompt: HUB_PROMPT,
                button: "Access Hub",
            },
            &main,
        ),
        None => main,
    };
    page_shell(
        &PageMeta {
            title: &site.title,
            description: Some(site.tagline.as_str()),
        },
        &body,
    )
}

fn render_hub_main(summaries: &[ReportSummary], site: &SiteConfig) -> String {
    let mut html = String::with_capacity(4096 + summaries.len() * 1024);
    html.push_str("<main>\n");

    html.push_str("<section class=\"gdt-band gdt-band-alt\" style=\"text-align:center;padding:6rem 2rem\">\n");
    html.push_str(&format!("<h1 class=\"gdt-display\">{}</h1>\n", esc(&site.title)));
    html.push_str(&format!(
        "<p class=\"gdt-lead\" style=\"margin:0 auto\">{}</p>\n",
        esc(&site.tagline)
    ));
    html.push_str("</section>\n");
    html.push_str("<div class=\"gdt-band-alt\"><div class=\"gdt-section-divider\"></div></div>\n");

    html.push_str("<section class=\"gdt-band\">\n<div class=\"gdt-wrap-wide\">\n");
    html.push_str(&format!(
        "<p class=\"gdt-eyebrow gdt-muted\">{}</p>\n",
        analysis_count_label(summaries.len())
    ));
    html.push_str("<div class=\"gdt-grid-2\">\n");
    for summary in summaries {
        html.push_str(&render_card(summary));
    }
    html.push_str("</div>\n</div>\n</section>\n");

    html.push_str(&format!(
        "<footer class=\"gdt-footer\"><p class=\"gdt-muted\" style=\"text-align:center\">{} &bull; Powered by AI</p></footer>\n",
        esc(&site.title)
    ));
    html.push_str("</main>\n");
    html
}

fn render_card(summary: &ReportSummary) -> String {
    let accent = esc(&summary.accent_color);
    let mut html = format!(
        "<a class=\"gdt-card gdt-brand-card\" href=\"/{}\" style=\"padding:0;--card-accent:{}\">\n",
        esc(&summary.id),
        accent
    );
    html.push_str(&format!(
        "<div class=\"gdt-brand-cover\"><img src=\"{}\" alt=\"{} cover\"></div>\n",
        esc(&summary.cover_image),
        esc(&summary.name)
    ));
    html.push_str("<div style=\"padding:1.5rem\">\n<div class=\"gdt-score-row\">\n<div>");
    html.push_str(&format!("<h2 class=\"gdt-display\">{}</h2>", esc(&summary.name)));
    html.push_str(&format!(
        "<p class=\"gdt-muted\">{} &bull; {}</p>",
        esc(&summary.category),
        esc(&summary.market)
    ));
    html.push_str("</div>\n<div style=\"text-align:right\">");
    html.push_str(&format!(
        "<div><span class=\"gdt-mono gdt-score score-{}\">{}</span><span class=\"gdt-muted\">/10</span></div>\
         <span class=\"gdt-muted\">avg score</span>",
        summary.average_tier.as_str(),
        format_score(summary.average_score)
    ));
    html.push_str("</div>\n</div>\n");
    html.push_str(&format!(
        "<span class=\"gdt-pill\" style=\"border-color:{accent};color:{accent}\">{}</span>\
         <span class=\"gdt-muted\">{}</span>\n",
        esc(&summary.profile_label),
        esc(&summary.date),
        accent = accent
    ));
    html.push_str("</div>\n");
    html.push_str(&format!(
        "<div class=\"gdt-accent-bar\" style=\"background-color:{}\"></div>\n",
        accent
    ));
    html.push_str("</a>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ScoreTier;

    fn summary(id: &str) -> ReportSummary {
        ReportSummary {
            id: id.to_string(),
            name: "Acme Corp".to_string(),
            category: "Anvils".to_string(),
            market: "USA".to_string(),
            date: "January 2026".to_string(),
            accent_color: "#123456".to_string(),
            total_score: 63.7,
            average_score: 63.7 / 9.0,
            average_tier: ScoreTier::High,
            profile_label: "Position → Unlock".to_string(),
            cover_image: format!("/{}-cover.png", id),
            gated: false,
        }
    }

    #[test]
    fn test_count_label() {
        assert_eq!(analysis_count_label(1), "1 Brand Analysis");
        assert_eq!(analysis_count_label(8), "8 Brand Analyses");
        assert_eq!(analysis_count_label(0), "0 Brand Analyses");
    }

    #[test]
    fn test_card_contents() {
        let html = render_hub_page(&[summary("acme")], &SiteConfig::default(), None);
        assert!(html.contains("href=\"/acme\""));
        assert!(html.contains("score-high\">7.1</span>"));
        assert!(html.contains("Position → Unlock"));
        assert!(html.contains("src=\"/acme-cover.png\""));
        assert!(!html.contains(HUB_STORAGE_KEY));
    }

    #[test]
    fn test_hub_gate() {
        let html = render_hub_page(&[], &SiteConfig::default(), Some("gdt2026"));
        assert!(html.contains("data-gate-key=\"gdt-hub-auth\""));
        assert!(html.contains(HUB_PROMPT));
        assert!(html.contains("Access Hub"));
    }
}
