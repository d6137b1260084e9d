//! `quickurl` / `quickurl interactive` – line-driven form over the app state.
//!
//! Each command maps onto one control of the form: the source URL field,
//! the template rows with their remove buttons, "add template", "generate",
//! "copy all" and "clear results".

use anyhow::Result;
use quickurl_core::app::{Action, AppState, Notice, Outcome};
use quickurl_core::clipboard::{Clipboard, SystemClipboard};
use quickurl_core::config::QuickurlConfig;
use quickurl_core::template::{Template, PLACEHOLDER};
use std::io::{self, BufRead, Lines, Write};

use super::list::write_templates;

const HELP: &str = "\
commands:
  url <source-url>   set the source URL (no argument shows it, `-` clears it)
  add                add a template (prompts for label and pattern)
  edit <N>           edit template N (blank keeps the current value, `-` clears it)
  remove <N>         remove template N
  list               show templates
  generate           generate URLs
  copy               copy generated URLs to the clipboard
  clear              clear generated URLs
  help               show this help
  quit               leave";

/// Input that empties a field instead of keeping it.
const CLEAR: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Url(Option<String>),
    Add,
    /// 1-based position; `None` when the argument is missing or not a number.
    Edit(Option<usize>),
    Remove(Option<usize>),
    List,
    Generate,
    Copy,
    Clear,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let position = || rest.parse::<usize>().ok();
    match verb {
        "" => SessionCommand::Empty,
        "url" | "u" => SessionCommand::Url(match rest {
            "" => None,
            CLEAR => Some(String::new()),
            url => Some(url.to_string()),
        }),
        "add" | "a" => SessionCommand::Add,
        "edit" | "e" => SessionCommand::Edit(position()),
        "remove" | "rm" => SessionCommand::Remove(position()),
        "list" | "ls" => SessionCommand::List,
        "generate" | "gen" | "g" => SessionCommand::Generate,
        "copy" | "c" => SessionCommand::Copy,
        "clear" => SessionCommand::Clear,
        "help" | "h" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => SessionCommand::Unknown(other.to_string()),
    }
}

pub fn run_interactive(cfg: &QuickurlConfig) -> Result<()> {
    let mut session = Session::new(AppState::from_config(cfg), SystemClipboard::new());
    let stdin = io::stdin();
    session.run(stdin.lock(), &mut io::stdout().lock())
}

/// Owns the app state and clipboard for one interactive run.
pub struct Session<C> {
    state: AppState,
    clipboard: C,
}

impl<C: Clipboard> Session<C> {
    pub fn new(state: AppState, clipboard: C) -> Self {
        Self { state, clipboard }
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "QuickURL - URL Template Generator")?;
        writeln!(
            out,
            "Templates use {PLACEHOLDER} for the source URL. Type `help` for commands."
        )?;
        writeln!(out)?;
        write_templates(out, self.state.templates())?;

        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                writeln!(out)?;
                break;
            };
            match parse_command(&line) {
                SessionCommand::Quit => break,
                cmd => self.handle(cmd, &mut lines, out)?,
            }
        }
        tracing::debug!("interactive session ended");
        Ok(())
    }

    fn handle<R: BufRead>(
        &mut self,
        cmd: SessionCommand,
        lines: &mut Lines<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        match cmd {
            SessionCommand::Empty | SessionCommand::Quit => {}
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Unknown(verb) => {
                writeln!(out, "unknown command `{verb}`; type `help` for commands")?
            }
            SessionCommand::Url(None) => {
                let url = self.state.source_url();
                if url.is_empty() {
                    writeln!(out, "source URL is not set")?;
                } else {
                    writeln!(out, "source URL: {url}")?;
                }
            }
            SessionCommand::Url(Some(url)) => {
                self.apply(Action::SetSourceUrl(url), out)?;
            }
            SessionCommand::List => write_templates(out, self.state.templates())?,
            SessionCommand::Add => {
                let label = read_field(lines, out, "label: ")?;
                let pattern = read_field(lines, out, "pattern: ")?;
                self.apply(Action::AddTemplate { label, pattern }, out)?;
                write_templates(out, self.state.templates())?;
                let index = self.state.templates().len() - 1;
                self.note_missing_placeholder(index, out)?;
            }
            SessionCommand::Edit(position) => {
                let index = position.and_then(|n| n.checked_sub(1));
                let Some((index, current)) =
                    index.and_then(|i| self.state.template(i).cloned().map(|t| (i, t)))
                else {
                    writeln!(out, "usage: edit <N> with N from `list`")?;
                    return Ok(());
                };
                let template = Template {
                    label: edit_field(lines, out, "label", current.label)?,
                    pattern: edit_field(lines, out, "pattern", current.pattern)?,
                };
                self.apply(Action::UpdateTemplate { index, template }, out)?;
                write_templates(out, self.state.templates())?;
                self.note_missing_placeholder(index, out)?;
            }
            SessionCommand::Remove(None) => writeln!(out, "usage: remove <N>")?,
            SessionCommand::Remove(Some(position)) => {
                if let Some(index) = position.checked_sub(1) {
                    self.apply(Action::RemoveTemplate(index), out)?;
                }
                write_templates(out, self.state.templates())?;
            }
            SessionCommand::Generate => self.apply(Action::Generate, out)?,
            SessionCommand::Copy => self.apply(Action::CopyAll, out)?,
            SessionCommand::Clear => self.apply(Action::ClearResults, out)?,
        }
        Ok(())
    }

    /// Patterns without the placeholder are valid, but usually a typo.
    fn note_missing_placeholder(&self, index: usize, out: &mut dyn Write) -> io::Result<()> {
        match self.state.template(index) {
            Some(t) if !t.has_placeholder() => writeln!(
                out,
                "note: template {} has no {PLACEHOLDER} and renders unchanged",
                index + 1
            ),
            _ => Ok(()),
        }
    }

    fn apply(&mut self, action: Action, out: &mut dyn Write) -> Result<()> {
        match self.state.dispatch(action, &mut self.clipboard) {
            Outcome::Updated | Outcome::Unchanged => {}
            Outcome::Rendered {
                text,
                count,
                notice,
            } => {
                writeln!(out)?;
                writeln!(out, "{text}")?;
                writeln!(out)?;
                writeln!(out, "generated {count} URL(s)")?;
                if let Some(notice) = notice {
                    write_notice(out, &notice)?;
                }
            }
            Outcome::Notice(notice) => write_notice(out, &notice)?,
        }
        Ok(())
    }
}

/// Prompts for one value; blank input or end of input yields `None`.
fn read_field<R: BufRead>(
    lines: &mut Lines<R>,
    out: &mut dyn Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let value = lines.next().transpose()?.unwrap_or_default();
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

/// Prompts with the current value; blank keeps it, `-` clears it.
fn edit_field<R: BufRead>(
    lines: &mut Lines<R>,
    out: &mut dyn Write,
    name: &str,
    current: String,
) -> Result<String> {
    Ok(match read_field(lines, out, &format!("{name} [{current}]: "))? {
        None => current,
        Some(value) if value == CLEAR => String::new(),
        Some(value) => value,
    })
}

fn write_notice(out: &mut dyn Write, notice: &Notice) -> io::Result<()> {
    match notice {
        Notice::Info(msg) => writeln!(out, "{msg}"),
        Notice::Warning(msg) => writeln!(out, "warning: {msg}"),
    }
}
