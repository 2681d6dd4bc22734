//! Expandable per-component analysis

use super::{esc, paragraph};
use crate::model::Enrichment;
use crate::score::{bar_width_percent, format_score};

/// Collapsible enrichment region, or `None` when there is nothing to show
pub fn render_enrichment(brand_name: &str, brand_score: f64, enrichment: &Enrichment) -> Option<String> {
    if !enrichment.has_content() {
        return None;
    }

    let mut html = String::new();
    html.push_str("<details class=\"gdt-expandable\">\n");
    html.push_str(
        "<summary><span class=\"gdt-toggle-show\">Expand Analysis</span>\
         <span class=\"gdt-toggle-hide\">Hide Analysis</span></summary>\n",
    );

    if !enrichment.strengths.is_empty() || !enrichment.weaknesses.is_empty() {
        html.push_str("<div class=\"gdt-grid-2\" style=\"margin-top:1.5rem\">\n");
        html.push_str(&bullet_list("Strengths", "gdt-list-strengths", "score-high", &enrichment.strengths));
        html.push_str(&bullet_list("Weaknesses", "gdt-list-weaknesses", "score-low", &enrichment.weaknesses));
        html.push_str("</div>\n");
    }

    if let Some(context) = &enrichment.competitive_context {
        html.push_str("<div>\n<h5 class=\"gdt-eyebrow\">Competitive Context</h5>\n");
        html.push_str(&paragraph("gdt-secondary", Some(context.as_str())));
        html.push_str("</div>\n");
    }

    if !enrichment.competitor_scores.is_empty() {
        html.push_str("<div>\n<h5 class=\"gdt-eyebrow\">Competitive Comparison</h5>\n");
        html.push_str(&comparison_bar(brand_name, brand_score, "gdt-bar-brand"));
        for competitor in &enrichment.competitor_scores {
            html.push_str(&comparison_bar(&competitor.name, competitor.score, ""));
        }
        // Zero average is treated as unset
        if let Some(average) = enrichment.category_average.filter(|avg| *avg != 0.0) {
            html.push_str(&comparison_bar("Category Average", average, "gdt-bar-average"));
        }
        html.push_str("</div>\n");
    }

    if !enrichment.score_breakdown.is_empty() {
        html.push_str("<div>\n<h5 class=\"gdt-eyebrow\">Score Breakdown</h5>\n");
        html.push_str("<div class=\"gdt-breakdown\">\n");
        for (key, value) in &enrichment.score_breakdown {
            html.push_str(&format!(
                "<div class=\"gdt-card\" style=\"text-align:center\">\
                 <p class=\"gdt-muted\">{}</p><p class=\"gdt-mono gdt-accent-text\">{}</p></div>\n",
                esc(&key.replace('_', " ")).to_uppercase(),
                format_score(*value)
            ));
        }
        html.push_str("</div>\n</div>\n");
    }

    html.push_str("</details>\n");
    Some(html)
}

fn bullet_list(title: &str, list_class: &str, title_class: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut html = format!("<div>\n<h5 class=\"gdt-eyebrow {}\">{}</h5>\n<ul class=\"{}\">\n", title_class, title, list_class);
    for item in items {
        html.push_str(&format!("<li class=\"gdt-secondary\">{}</li>\n", esc(item)));
    }
    html.push_str("</ul>\n</div>\n");
    html
}

fn comparison_bar(label: &str, score: f64, fill_class: &str) -> String {
    format!(
        "<div class=\"gdt-comparison\">\
         <div class=\"gdt-score-row\" style=\"margin-bottom:0.25rem\"><span>{}</span><span class=\"gdt-mono\">{}</span></div>\
         <div class=\"gdt-bar\"><div class=\"gdt-bar-fill {}\" style=\"width:{:.1}%\"></div></div></div>\n",
        esc(label),
        format_score(score),
        fill_class,
        bar_width_percent(score)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CompetitorScore;
    use indexmap::IndexMap;

    #[test]
    fn test_no_content_renders_nothing() {
        let only_average = Enrichment::new(vec![], vec![], None, IndexMap::new(), vec![], Some(6.0));
        assert!(render_enrichment("Acme", 5.0, &only_average).is_none());
        assert!(render_enrichment("Acme", 5.0, &Enrichment::default()).is_none());
    }

    #[test]
    fn test_comparison_and_breakdown() {
        let mut breakdown = IndexMap::new();
        breakdown.insert("price_premium".to_string(), 6.5);
        breakdown.insert("awareness".to_string(), 8.0);
        let enrichment = Enrichment::new(
            vec!["Loyal base".to_string()],
            vec![],
            None,
            breakdown,
            vec![CompetitorScore { name: "Rival".to_string(), score: 7.25 }],
            Some(5.5),
        );
        let html = render_enrichment("Acme", 6.0, &enrichment).unwrap();
        assert!(html.contains("Expand Analysis"));
        assert!(html.contains("Loyal base"));
        assert!(!html.contains("Weaknesses"));
        assert!(html.contains("Category Average"));
        assert!(html.contains("width:60.0%"));
        let price = html.find("PRICE PREMIUM").unwrap();
        let awareness = html.find("AWARENESS").unwrap();
        assert!(price < awareness);
    }
}
