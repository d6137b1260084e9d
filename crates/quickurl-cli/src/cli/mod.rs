//! CLI for the QuickURL template generator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use quickurl_core::config;
use quickurl_core::template::Template;
use std::path::PathBuf;

use commands::{run_completions, run_generate, run_interactive, run_list, run_man};

/// Top-level CLI for QuickURL.
#[derive(Debug, Parser)]
#[command(name = "quickurl")]
#[command(
    about = "QuickURL: generate URLs by substituting a base URL into templates",
    long_about = None
)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/quickurl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Defaults to the interactive session when omitted.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Edit the source URL and templates, generate and copy in an interactive session.
    Interactive,

    /// Generate URLs for a source URL and print them.
    Generate {
        /// Base URL substituted for [your-tunnel-url].
        source_url: String,

        /// Template as LABEL=PATTERN (repeatable). Replaces the configured templates.
        #[arg(
            short = 't',
            long = "template",
            value_name = "LABEL=PATTERN",
            value_parser = parse_template_arg
        )]
        templates: Vec<Template>,

        /// Copy the generated output to the clipboard.
        #[arg(long)]
        copy: bool,
    },

    /// List the templates a session starts with.
    List,

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

/// Parses `LABEL=PATTERN`. Splits on the first `=`, so patterns may carry query strings.
/// A value without `=` is a pattern with a blank label.
fn parse_template_arg(s: &str) -> Result<Template, String> {
    let template = match s.split_once('=') {
        Some((label, pattern)) => Template::new(label.trim(), pattern.trim()),
        None => Template::new("", s.trim()),
    };
    if template.pattern.is_empty() {
        return Err("template pattern must not be empty".to_string());
    }
    Ok(template)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            Some(CliCommand::Completions { shell }) => return run_completions(shell),
            Some(CliCommand::Man) => return run_man(),
            _ => {}
        }

        let cfg = match cli.config.as_deref() {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or(CliCommand::Interactive) {
            CliCommand::Interactive => run_interactive(&cfg)?,
            CliCommand::Generate {
                source_url,
                templates,
                copy,
            } => run_generate(&cfg, &source_url, templates, copy)?,
            CliCommand::List => run_list(&cfg)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
