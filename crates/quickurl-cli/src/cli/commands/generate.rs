//! `quickurl generate <source-url>` – render once and print.

use anyhow::Result;
use quickurl_core::app::{Action, AppState, Notice, Outcome};
use quickurl_core::clipboard::{Clipboard, SystemClipboard};
use quickurl_core::config::QuickurlConfig;
use quickurl_core::store::TemplateStore;
use quickurl_core::template::Template;
use std::io::{self, Write};

/// Templates given on the command line replace the configured ones.
pub fn run_generate(
    cfg: &QuickurlConfig,
    source_url: &str,
    templates: Vec<Template>,
    copy: bool,
) -> Result<()> {
    let store = if templates.is_empty() {
        cfg.template_store()
    } else {
        TemplateStore::from_templates(templates)
    };
    let mut app = AppState::new(store).with_copy_on_generate(cfg.copy_on_generate || copy);
    let mut clipboard = SystemClipboard::new();
    generate_to(
        &mut app,
        &mut clipboard,
        source_url,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Writes the formatted output to `out` and any clipboard notice to `err`.
pub fn generate_to(
    app: &mut AppState,
    clipboard: &mut dyn Clipboard,
    source_url: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    app.dispatch(Action::SetSourceUrl(source_url.trim().to_string()), clipboard);
    if let Outcome::Rendered { text, notice, .. } = app.dispatch(Action::Generate, clipboard) {
        writeln!(out, "{text}")?;
        match notice {
            Some(Notice::Info(msg)) => writeln!(err, "{msg}")?,
            Some(Notice::Warning(msg)) => writeln!(err, "warning: {msg}")?,
            None => {}
        }
    }
    Ok(())
}
