use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use super::{
    ARIA_DESCRIBED_BY, ARIA_INVALID, Feedback, FieldBinding, INVALID_CLASS, VALID_CLASS,
};
use crate::config::THEME_CLASS_PREFIX;
use crate::rule::Trigger;

/// Internal state for a [`MemoryField`].
#[derive(Debug, Default)]
struct MemoryFieldInner {
    /// Current text value
    value: String,
    /// Class names, like a DOM class list
    classes: BTreeSet<String>,
    /// Attributes, like DOM attributes
    attributes: BTreeMap<String, String>,
    /// Text of the error element (if any)
    error_text: Option<String>,
    /// Events currently subscribed to
    listeners: Vec<Trigger>,
    /// Number of `render_feedback` calls
    renders: usize,
}

/// A text field kept entirely in memory.
///
/// `MemoryField` records what a DOM or terminal field would show: a class
/// list, ARIA-style attributes and the error text. Clones share state, so a
/// caller can keep a handle after moving one into a
/// [`Validator`](crate::Validator).
///
/// # Example
///
/// ```
/// use fieldguard::{ConfigOptions, MemoryField, Validator, rules};
///
/// let field = MemoryField::with_value("email", "not-an-email");
/// let mut validator = Validator::new(field.clone(), ConfigOptions::default())?;
/// validator.add_rule(rules::email())?;
/// validator.validate()?;
///
/// assert!(field.has_class("is-invalid"));
/// assert_eq!(field.attribute("aria-describedby").as_deref(), Some("email-error"));
/// # Ok::<(), fieldguard::ValidatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MemoryField {
    id: String,
    inner: Arc<RwLock<MemoryFieldInner>>,
}

impl MemoryField {
    /// Create an empty field.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner: Arc::new(RwLock::new(MemoryFieldInner::default())),
        }
    }

    /// Create a field with an initial value.
    pub fn with_value(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner: Arc::new(RwLock::new(MemoryFieldInner {
                value: value.into(),
                ..Default::default()
            })),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Check whether `class` is in the class list
    pub fn has_class(&self, class: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.classes.contains(class))
            .unwrap_or(false)
    }

    /// Get the class list, sorted
    pub fn classes(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.attributes.get(name).cloned())
    }

    /// Get the text of the error element
    pub fn error_text(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.error_text.clone())
    }

    /// Get the subscribed events
    pub fn listeners(&self) -> Vec<Trigger> {
        self.inner
            .read()
            .map(|guard| guard.listeners.clone())
            .unwrap_or_default()
    }

    /// Check if any event is subscribed
    pub fn is_listening(&self) -> bool {
        self.inner
            .read()
            .map(|guard| !guard.listeners.is_empty())
            .unwrap_or(false)
    }

    /// How many times feedback was rendered
    pub fn render_count(&self) -> usize {
        self.inner.read().map(|guard| guard.renders).unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value, as if the user typed it
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
    }

    /// Clear the text value
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
        }
    }

    fn update(&self, f: impl FnOnce(&mut MemoryFieldInner)) {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut *guard);
        }
    }
}

impl FieldBinding for MemoryField {
    type Value = String;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> String {
        MemoryField::value(self)
    }

    fn set_value(&mut self, value: String) {
        MemoryField::set_value(self, value);
    }

    fn listen(&mut self, triggers: &[Trigger]) {
        self.update(|inner| {
            for trigger in triggers {
                if !inner.listeners.contains(trigger) {
                    inner.listeners.push(*trigger);
                }
            }
        });
    }

    fn unlisten(&mut self) {
        self.update(|inner| inner.listeners.clear());
    }

    fn render_feedback(&mut self, feedback: &Feedback<'_>) {
        self.update(|inner| {
            inner.renders += 1;
            inner.classes.remove(VALID_CLASS);
            inner.classes.remove(INVALID_CLASS);
            inner.classes.insert(feedback.status_class().to_string());
            inner.error_text = feedback.visible_error().map(str::to_string);

            match feedback.aria_invalid() {
                Some(value) => {
                    inner
                        .attributes
                        .insert(ARIA_INVALID.to_string(), value.to_string());
                }
                None => {
                    inner.attributes.remove(ARIA_INVALID);
                }
            }
            match feedback.described_by() {
                Some(id) => {
                    inner.attributes.insert(ARIA_DESCRIBED_BY.to_string(), id);
                }
                None => {
                    inner.attributes.remove(ARIA_DESCRIBED_BY);
                }
            }
        });
    }

    fn clear_feedback(&mut self) {
        self.update(|inner| {
            inner.classes.remove(VALID_CLASS);
            inner.classes.remove(INVALID_CLASS);
            inner.error_text = None;
            inner.attributes.remove(ARIA_INVALID);
            inner.attributes.remove(ARIA_DESCRIBED_BY);
        });
    }

    fn apply_theme(&mut self, class: &str) {
        self.update(|inner| {
            inner.classes.retain(|c| !c.starts_with(THEME_CLASS_PREFIX));
            inner.classes.insert(class.to_string());
        });
    }

    fn remove_theme(&mut self, class: &str) {
        self.update(|inner| {
            inner.classes.remove(class);
        });
    }
}
