//! Display text for rendered URLs. This text is also what gets copied.

use super::RenderedUrl;

/// Formats results as `[label]\nurl` blocks separated by one blank line.
/// No trailing newline.
pub fn format_results(results: &[RenderedUrl]) -> String {
    results
        .iter()
        .map(|r| format!("[{}]\n{}", r.label, r.url))
        .collect::<Vec<_>>()
        .join("\n\n")
}
