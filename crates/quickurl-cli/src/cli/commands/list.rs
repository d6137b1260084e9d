//! `quickurl list` – show the templates a session starts with.

use anyhow::Result;
use quickurl_core::config::QuickurlConfig;
use quickurl_core::template::Template;
use std::io::{self, Write};

pub fn run_list(cfg: &QuickurlConfig) -> Result<()> {
    let store = cfg.template_store();
    write_templates(&mut io::stdout().lock(), store.list())?;
    Ok(())
}

/// Numbered listing (1-based, as `remove` and `edit` take it).
pub fn write_templates(out: &mut dyn Write, templates: &[Template]) -> io::Result<()> {
    for (i, t) in templates.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, t.display_label(i + 1))?;
        writeln!(out, "   {}", t.pattern)?;
    }
    Ok(())
}
