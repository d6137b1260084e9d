//! CLI command handlers. Each command is in its own file.

mod completions;
mod generate;
mod interactive;
mod list;

pub use completions::{run_completions, run_man};
pub use generate::run_generate;
pub use interactive::run_interactive;
pub use list::run_list;

#[cfg(test)]
pub(crate) use generate::generate_to;
#[cfg(test)]
pub(crate) use interactive::{parse_command, Session, SessionCommand};
#[cfg(test)]
pub(crate) use list::write_templates;
