//! URL rendering: placeholder substitution and display formatting.
//!
//! Rendering is a pure function of the source URL and the ordered templates.
//! Substitution is literal and single-pass, so a source URL that itself
//! contains the placeholder is never re-expanded.

mod format;

pub use format::format_results;

use crate::template::{Template, PLACEHOLDER};

/// One generated URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUrl {
    pub label: String,
    pub url: String,
}

/// Replaces every occurrence of the placeholder in `pattern` with `source_url`.
pub fn substitute(pattern: &str, source_url: &str) -> String {
    pattern.replace(PLACEHOLDER, source_url)
}

/// Renders each template in order.
///
/// # Examples
///
/// - `("https://x.test", [("A", "[your-tunnel-url]/a")])` → `[("A", "https://x.test/a")]`
/// - a pattern without the placeholder is returned unchanged
pub fn render(source_url: &str, templates: &[Template]) -> Vec<RenderedUrl> {
    templates
        .iter()
        .enumerate()
        .map(|(i, t)| RenderedUrl {
            label: t.display_label(i + 1),
            url: substitute(&t.pattern, source_url),
        })
        .collect()
}
