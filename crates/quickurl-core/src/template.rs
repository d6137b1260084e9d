//! URL templates and the placeholder they carry.

use serde::{Deserialize, Serialize};

/// Literal token replaced by the source URL. Matched verbatim, case-sensitive.
pub const PLACEHOLDER: &str = "[your-tunnel-url]";

/// One named URL template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Display name; blank labels get a positional name when rendered.
    #[serde(default)]
    pub label: String,
    /// Pattern containing zero or more occurrences of [`PLACEHOLDER`].
    pub pattern: String,
}

impl Template {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }

    pub fn has_placeholder(&self) -> bool {
        self.pattern.contains(PLACEHOLDER)
    }

    /// Label to show for the template at 1-based `position`.
    /// Blank (empty or whitespace-only) labels become `Template N`.
    pub fn display_label(&self, position: usize) -> String {
        if self.label.trim().is_empty() {
            fallback_label(position)
        } else {
            self.label.clone()
        }
    }
}

/// Name used for a blank label; `position` is 1-based.
fn fallback_label(position: usize) -> String {
    format!("Template {position}")
}

const RUN_PREVIEW_PATH: &str = concat!(
    "/preview?code=import%20SwiftUI%0A%0Astruct%20ContentView%3A%20View%20%7B%0A",
    "%20%20%20%20var%20body%3A%20some%20View%20%7B%0A",
    "%20%20%20%20%20%20%20%20Text(%22Hello!%22)%0A",
    "%20%20%20%20%7D%0A%7D&device=iPhone%2016%20Pro",
);

/// Templates the store starts with when the config names none.
pub fn default_templates() -> Vec<Template> {
    vec![
        Template::new("Health Check", format!("{PLACEHOLDER}/health")),
        Template::new("Run Preview", format!("{PLACEHOLDER}{RUN_PREVIEW_PATH}")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_non_empty_and_use_placeholder() {
        let defaults = default_templates();
        assert!(!defaults.is_empty());
        assert!(defaults.iter().all(Template::has_placeholder));
        assert_eq!(defaults[0].label, "Health Check");
        assert_eq!(defaults[0].pattern, "[your-tunnel-url]/health");
    }

    #[test]
    fn display_label_falls_back_on_blank() {
        assert_eq!(Template::new("Docs", "p").display_label(4), "Docs");
        assert_eq!(Template::new("", "p").display_label(2), "Template 2");
        assert_eq!(Template::new(" \t", "p").display_label(3), "Template 3");
    }

    #[test]
    fn placeholder_match_is_case_sensitive() {
        let t = Template::new("x", "[YOUR-TUNNEL-URL]/health");
        assert!(!t.has_placeholder());
    }
}
