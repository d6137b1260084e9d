//! CLI tests: argument parsing, one-shot generate and the interactive session.

use super::Cli;
use clap::Parser;
use quickurl_core::clipboard::{Clipboard, ClipboardError};

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

/// In-memory clipboard; `broken` simulates a missing display server.
#[derive(Default)]
pub(super) struct FakeClipboard {
    pub text: Option<String>,
    pub broken: bool,
}

impl Clipboard for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.broken {
            return Err(ClipboardError::Unavailable("no display".into()));
        }
        self.text = Some(text.to_owned());
        Ok(())
    }
}
