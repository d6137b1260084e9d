//! Ordered, never-empty collection of templates.

use crate::template::{default_templates, Template};

/// Templates in insertion order. Always holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TemplateStore {
    /// Store seeded with the built-in default templates.
    pub fn with_defaults() -> Self {
        Self {
            templates: default_templates(),
        }
    }

    /// Store seeded with `templates`, or the built-in defaults if the list is empty.
    pub fn from_templates(templates: Vec<Template>) -> Self {
        if templates.is_empty() {
            return Self::with_defaults();
        }
        Self { templates }
    }

    /// Appends a template; missing fields become blank.
    pub fn add(&mut self, label: Option<String>, pattern: Option<String>) {
        self.templates.push(Template {
            label: label.unwrap_or_default(),
            pattern: pattern.unwrap_or_default(),
        });
    }

    /// Removes the template at `index`. Out-of-range indices and removal of the
    /// last remaining template leave the store unchanged and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<Template> {
        if self.templates.len() <= 1 || index >= self.templates.len() {
            tracing::debug!(index, len = self.templates.len(), "ignored template removal");
            return None;
        }
        Some(self.templates.remove(index))
    }

    /// Replaces the template at `index`. Returns false (and changes nothing) if out of range.
    pub fn update(&mut self, index: usize, template: Template) -> bool {
        match self.templates.get_mut(index) {
            Some(slot) => {
                *slot = template;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
