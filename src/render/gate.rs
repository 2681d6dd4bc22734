//! Display gate markup
//!
//! Renders the three gate states side by side and a small script that runs
//! the same transitions as [`crate::gate::AccessGate`] against
//! `window.sessionStorage`.

use super::{esc, js_string};
use crate::gate::UNLOCKED_FLAG;

/// Copy shown on the locked form
pub struct GateCopy<'a> {
    pub heading: &'a str,
    pub prompt: &'a str,
    pub button: &'a str,
}

pub const REPORT_GATE_COPY: GateCopy<'static> = GateCopy {
    heading: "Protected Content",
    prompt: "This diagnosis requires a password to access.",
    button: "Access Diagnosis",
};

pub const INCORRECT_TOKEN_MESSAGE: &str = "Incorrect password. Please try again.";

const GATE_SCRIPT: &str = r#"(function () {
  var gate = document.currentScript.previousElementSibling;
  var key = gate.getAttribute("data-gate-key");
  var loading = gate.querySelector(".gdt-gate-loading");
  var locked = gate.querySelector(".gdt-gate-locked");
  var content = gate.querySelector(".gdt-gate-content");
  var form = gate.querySelector("form");
  var input = form.querySelector("input");
  var error = gate.querySelector(".gdt-gate-error");
  function unlock() { loading.hidden = true; locked.hidden = true; content.hidden = false; }
  var stored = null;
  try { stored = window.sessionStorage.getItem(key); } catch (e) {}
  if (stored === FLAG) { unlock(); } else { loading.hidden = true; locked.hidden = false; input.focus(); }
  form.addEventListener("submit", function (event) {
    event.preventDefault();
    if (input.value === TOKEN) {
      try { window.sessionStorage.setItem(key, FLAG); } catch (e) {}
      error.hidden = true;
      unlock();
    } else {
      error.hidden = false;
      input.value = "";
    }
  });
})();"#;

/// Wrap `content` in a display gate keyed by `storage_key`
pub fn wrap_in_gate(storage_key: &str, token: &str, copy: &GateCopy<'_>, content: &str) -> String {
    let mut html = String::with_capacity(content.len() + 2048);
    html.push_str(&format!(
        "<div class=\"gdt-gate-root\" data-gate-key=\"{}\">\n",
        esc(storage_key)
    ));
    html.push_str("<div class=\"gdt-gate gdt-gate-loading\"><div class=\"gdt-muted\">Loading...</div></div>\n");
    html.push_str("<div class=\"gdt-gate gdt-gate-locked\" hidden>\n");
    html.push_str("<div class=\"gdt-card\" style=\"max-width:28rem;width:100%\">\n");
    html.push_str(&format!(
        "<h1 class=\"gdt-display\" style=\"text-align:center\">{}</h1>\n",
        esc(copy.heading)
    ));
    html.push_str(&format!(
        "<p class=\"gdt-secondary\" style=\"text-align:center\">{}</p>\n",
        esc(copy.prompt)
    ));
    html.push_str("<form class=\"gdt-gate-form\">\n");
    html.push_str("<input type=\"password\" placeholder=\"Enter password\" autocomplete=\"off\">\n");
    html.push_str(&format!(
        "<p class=\"gdt-gate-error\" hidden>{}</p>\n",
        esc(INCORRECT_TOKEN_MESSAGE)
    ));
    html.push_str(&format!("<button type=\"submit\">{}</button>\n", esc(copy.button)));
    html.push_str("</form>\n</div>\n</div>\n");
    html.push_str("<div class=\"gdt-gate-content\" hidden>\n");
    html.push_str(content);
    html.push_str("</div>\n</div>\n");
    html.push_str("<script>\n");
    html.push_str(&format!(
        "var TOKEN = {}, FLAG = {};\n",
        js_string(token),
        js_string(UNLOCKED_FLAG)
    ));
    html.push_str(GATE_SCRIPT);
    html.push_str("\n</script>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_markup_starts_loading_with_content_hidden() {
        let html = wrap_in_gate("gdt-auth-cava", "cava2026", &REPORT_GATE_COPY, "<main>secret</main>");
        assert!(html.contains("data-gate-key=\"gdt-auth-cava\""));
        assert!(html.contains("<div class=\"gdt-gate-content\" hidden>\n<main>secret</main>"));
        assert!(html.contains("var TOKEN = \"cava2026\", FLAG = \"true\";"));
        assert!(html.contains(INCORRECT_TOKEN_MESSAGE));
    }

    /// The script mirrors `AccessGate`: persisted flag on mount, store on match, clear on miss.
    #[test]
    fn test_gate_script_transitions() {
        let html = wrap_in_gate("gdt-hub-auth", "gdt2026", &REPORT_GATE_COPY, "");
        assert!(html.contains("window.sessionStorage.getItem(key)"));
        assert!(html.contains("if (stored === FLAG) { unlock(); }"));
        assert!(html.contains("if (input.value === TOKEN) {"));
        assert!(html.contains("window.sessionStorage.setItem(key, FLAG)"));
        assert!(html.contains("error.hidden = false;\n      input.value = \"\";"));
        assert!(html.find("setItem").unwrap() < html.find("input.value = \"\"").unwrap());
    }
}
