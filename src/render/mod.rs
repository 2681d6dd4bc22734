//! HTML rendering
//!
//! Pages are built as strings from the canonical model. Optional content is
//! rendered through the helpers here so that an absent field produces no
//! markup at all.

pub mod enrichment;
pub mod gate;
pub mod hub;
pub mod report;

pub use hub::render_hub_page;
pub use report::{render_not_found_page, render_report_page};

const STYLESHEET: &str = include_str!("../../static/site.css");

/// Page `<head>` metadata
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

/// Escape text for HTML element content and quoted attributes
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a body in the document shell with the inlined stylesheet
pub fn page_shell(meta: &PageMeta<'_>, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + STYLESHEET.len() + 512);
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("  <title>{}</title>\n", esc(meta.title)));
    if let Some(description) = meta.description {
        html.push_str(&format!(
            "  <meta name=\"description\" content=\"{}\">\n",
            esc(description)
        ));
    }
    html.push_str("  <style>\n");
    html.push_str(STYLESHEET);
    html.push_str("  </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str(body);
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

/// `<img>` that swaps to `fallback` once if `src` fails to load
pub fn fallback_image(src: &str, fallback: &str, alt: &str) -> String {
    format!(
        "<img src=\"{src}\" alt=\"{alt}\" onerror=\"this.onerror=null;this.src='{fallback}'\">",
        src = esc(src),
        alt = esc(alt),
        fallback = esc(&js_single_quoted(fallback)),
    )
}

/// `<p class=...>` for present text, nothing for absent text
pub fn paragraph(class: &str, text: Option<&str>) -> String {
    match text {
        Some(text) if !text.trim().is_empty() => {
            format!("<p class=\"{}\">{}</p>\n", class, esc(text))
        }
        _ => String::new(),
    }
}

/// Encode a value as a JavaScript string literal safe to inline in `<script>`
pub fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

fn js_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Uppercase the first character, as barrier evidence is displayed
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(esc("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;");
    }

    #[test]
    fn test_paragraph_omits_blank() {
        assert_eq!(paragraph("x", None), "");
        assert_eq!(paragraph("x", Some("  ")), "");
        assert_eq!(paragraph("x", Some("a<b")), "<p class=\"x\">a&lt;b</p>\n");
    }

    #[test]
    fn test_fallback_image() {
        let html = fallback_image("/growth-systems/cava-summary.png", "/growth-systems/f.png", "CAVA");
        assert!(html.contains("src=\"/growth-systems/cava-summary.png\""));
        assert!(html.contains("onerror=\"this.onerror=null;this.src='/growth-systems/f.png'\""));

        let quoted = fallback_image("/a.png", "/it's.png", "Brand");
        assert!(quoted.contains("this.src='/it\\&#x27;s.png'"));
    }

    #[test]
    fn test_js_string_cannot_close_script() {
        assert_eq!(js_string("a</script>"), "\"a<\\/script>\"");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("trails category"), "Trails category");
        assert_eq!(capitalize_first(""), "");
    }
}
