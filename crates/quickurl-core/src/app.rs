//! Application state and the action dispatch that mutates it.
//!
//! The front end owns one [`AppState`] for the life of the process and turns
//! every user action into a single synchronous [`AppState::dispatch`] call.

use crate::clipboard::{copy_all, Clipboard};
use crate::config::QuickurlConfig;
use crate::render::{format_results, render, RenderedUrl};
use crate::store::TemplateStore;
use crate::template::Template;

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSourceUrl(String),
    AddTemplate {
        label: Option<String>,
        pattern: Option<String>,
    },
    UpdateTemplate {
        index: usize,
        template: Template,
    },
    RemoveTemplate(usize),
    Generate,
    CopyAll,
    ClearResults,
}

/// Message for the user; never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; nothing to show.
    Updated,
    /// The action was not applicable; state is as before.
    Unchanged,
    /// A render happened. `notice` is set when `copy_on_generate` also copied.
    Rendered {
        text: String,
        count: usize,
        notice: Option<Notice>,
    },
    Notice(Notice),
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    source_url: String,
    store: TemplateStore,
    results: Option<Vec<RenderedUrl>>,
    copy_on_generate: bool,
}

impl AppState {
    pub fn new(store: TemplateStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn from_config(cfg: &QuickurlConfig) -> Self {
        Self::new(cfg.template_store()).with_copy_on_generate(cfg.copy_on_generate)
    }

    /// Also copy the output after every generate.
    pub fn with_copy_on_generate(mut self, on: bool) -> Self {
        self.copy_on_generate = on;
        self
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn templates(&self) -> &[Template] {
        self.store.list()
    }

    pub fn template(&self, index: usize) -> Option<&Template> {
        self.store.get(index)
    }

    pub fn results(&self) -> Option<&[RenderedUrl]> {
        self.results.as_deref()
    }

    /// Formatted text of the last render, if any.
    pub fn output(&self) -> Option<String> {
        self.results().map(format_results)
    }

    pub fn dispatch(&mut self, action: Action, clipboard: &mut dyn Clipboard) -> Outcome {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::SetSourceUrl(url) => {
                self.source_url = url;
                Outcome::Updated
            }
            Action::AddTemplate { label, pattern } => {
                self.store.add(label, pattern);
                Outcome::Updated
            }
            Action::UpdateTemplate { index, template } => {
                if self.store.update(index, template) {
                    Outcome::Updated
                } else {
                    Outcome::Unchanged
                }
            }
            Action::RemoveTemplate(index) => match self.store.remove(index) {
                Some(_) => Outcome::Updated,
                None => Outcome::Unchanged,
            },
            Action::Generate => self.generate(clipboard),
            Action::CopyAll => match self.output() {
                Some(text) => Outcome::Notice(self.copy(clipboard, &text)),
                None => Outcome::Notice(Notice::Warning("no results to copy".into())),
            },
            Action::ClearResults => {
                if self.results.take().is_some() {
                    Outcome::Updated
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }

    fn generate(&mut self, clipboard: &mut dyn Clipboard) -> Outcome {
        let results = render(&self.source_url, self.store.list());
        let text = format_results(&results);
        let count = results.len();
        tracing::info!(count, source_url = %self.source_url, "generated urls");
        self.results = Some(results);
        let notice = self
            .copy_on_generate
            .then(|| self.copy(clipboard, &text));
        Outcome::Rendered {
            text,
            count,
            notice,
        }
    }

    fn copy(&self, clipboard: &mut dyn Clipboard, text: &str) -> Notice {
        match copy_all(clipboard, text) {
            Ok(()) => Notice::Info("all URLs copied to clipboard".into()),
            Err(e) => {
                tracing::warn!("copy failed: {}", e);
                Notice::Warning(format!("failed to copy to clipboard: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;

    #[derive(Default)]
    struct FakeClipboard {
        text: Option<String>,
        broken: bool,
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

    fn state() -> AppState {
        AppState::new(TemplateStore::from_templates(vec![Template::new(
            "Health Check",
            "[your-tunnel-url]/health",
        )]))
    }

    #[test]
    fn generate_renders_and_stores_result() {
        let mut app = state();
        let mut cb = FakeClipboard::default();
        app.dispatch(
            Action::SetSourceUrl("https://abc.trycloudflare.com".into()),
            &mut cb,
        );
        let out = app.dispatch(Action::Generate, &mut cb);
        assert_eq!(
            out,
            Outcome::Rendered {
                text: "[Health Check]\nhttps://abc.trycloudflare.com/health".into(),
                count: 1,
                notice: None,
            }
        );
        assert_eq!(app.results().map(<[_]>::len), Some(1));
        assert!(cb.text.is_none());
    }

    #[test]
    fn copy_without_results_warns() {
        let mut app = state();
        let mut cb = FakeClipboard::default();
        let out = app.dispatch(Action::CopyAll, &mut cb);
        assert!(matches!(out, Outcome::Notice(Notice::Warning(_))));
        assert!(cb.text.is_none());
    }

    #[test]
    fn copy_all_writes_formatted_output() {
        let mut app = state();
        let mut cb = FakeClipboard::default();
        app.dispatch(Action::SetSourceUrl("https://x.test".into()), &mut cb);
        app.dispatch(Action::Generate, &mut cb);
        let out = app.dispatch(Action::CopyAll, &mut cb);
        assert!(matches!(out, Outcome::Notice(Notice::Info(_))));
        assert_eq!(cb.text.as_deref(), Some("[Health Check]\nhttps://x.test/health"));
    }

    #[test]
    fn clipboard_failure_is_a_warning_and_keeps_state() {
        let mut app = state();
        let mut cb = FakeClipboard {
            broken: true,
            ..Default::default()
        };
        app.dispatch(Action::Generate, &mut cb);
        let before = app.output();
        let out = app.dispatch(Action::CopyAll, &mut cb);
        match out {
            Outcome::Notice(Notice::Warning(msg)) => assert!(msg.contains("no display")),
            other => panic!("expected warning, got {other:?}"),
        }
        assert_eq!(app.output(), before);
        assert_eq!(app.templates().len(), 1);
    }

    #[test]
    fn copy_on_generate_copies() {
        let cfg = QuickurlConfig {
            copy_on_generate: true,
            templates: vec![Template::new("A", "[your-tunnel-url]/a")],
        };
        let mut app = AppState::from_config(&cfg);
        let mut cb = FakeClipboard::default();
        app.dispatch(Action::SetSourceUrl("https://x.test".into()), &mut cb);
        let out = app.dispatch(Action::Generate, &mut cb);
        assert!(matches!(
            out,
            Outcome::Rendered {
                notice: Some(Notice::Info(_)),
                ..
            }
        ));
        assert_eq!(cb.text.as_deref(), Some("[A]\nhttps://x.test/a"));
    }

    #[test]
    fn removing_last_template_is_unchanged() {
        let mut app = state();
        let mut cb = FakeClipboard::default();
        assert_eq!(app.dispatch(Action::RemoveTemplate(0), &mut cb), Outcome::Unchanged);
        assert_eq!(app.templates().len(), 1);
    }

    #[test]
    fn update_out_of_range_is_unchanged() {
        let mut app = state();
        let mut cb = FakeClipboard::default();
        let out = app.dispatch(
            Action::UpdateTemplate {
                index: 3,
                template: Template::new("x", "y"),
            },
            &mut cb,
        );
        assert_eq!(out, Outcome::Unchanged);
    }

    #[test]
    fn template_lookup_by_index() {
        let app = state();
        assert_eq!(app.template(0).map(|t| t.label.as_str()), Some("Health Check"));
        assert!(app.template(1).is_none());
    }

    #[test]
    fn clear_drops_results() {
        let mut app = state();
        let mut cb = FakeClipboard::default();
        app.dispatch(Action::Generate, &mut cb);
        assert_eq!(app.dispatch(Action::ClearResults, &mut cb), Outcome::Updated);
        assert!(app.output().is_none());
        assert_eq!(app.dispatch(Action::ClearResults, &mut cb), Outcome::Unchanged);
    }

    #[test]
    fn render_uses_current_store_positions() {
        let mut app = state();
        let mut cb = FakeClipboard::default();
        app.dispatch(
            Action::AddTemplate {
                label: None,
                pattern: Some("[your-tunnel-url]/x".into()),
            },
            &mut cb,
        );
        app.dispatch(Action::SetSourceUrl("s".into()), &mut cb);
        app.dispatch(Action::Generate, &mut cb);
        let labels: Vec<&str> = app
            .results()
            .unwrap()
            .iter()
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(labels, ["Health Check", "Template 2"]);
    }
}
