//! The boundary between a validator and the field it validates.
//!
//! A validator never touches a UI directly. It reads and clears the value,
//! subscribes to events and hands rendered feedback to a [`FieldBinding`].

mod error_display;
mod memory;

pub use error_display::ErrorDisplay;
pub use memory::MemoryField;

use crate::result::ValidationResult;
use crate::rule::Trigger;

/// Class set on a field whose last validation passed.
pub const VALID_CLASS: &str = "is-valid";

/// Class set on a field whose last validation failed.
pub const INVALID_CLASS: &str = "is-invalid";

/// Attribute flagging the field as invalid.
pub const ARIA_INVALID: &str = "aria-invalid";

/// Attribute pointing at the element holding the error text.
pub const ARIA_DESCRIBED_BY: &str = "aria-describedby";

/// Trait for fields that can be validated.
///
/// Each binding belongs to exactly one validator. Implementations render
/// whatever `render_feedback` gives them and must not call back into the
/// validator.
pub trait FieldBinding {
    /// The value type passed to rule predicates.
    type Value: Default;

    /// Identifier of the field. Used to derive related ids such as the error
    /// element (`{id}-error`).
    fn id(&self) -> &str;

    /// Extract the current value for validation.
    fn value(&self) -> Self::Value;

    /// Replace the current value.
    fn set_value(&mut self, value: Self::Value);

    /// Start delivering the given events for real-time validation.
    fn listen(&mut self, triggers: &[Trigger]);

    /// Stop delivering events.
    fn unlisten(&mut self);

    /// Show the outcome of a validation.
    fn render_feedback(&mut self, feedback: &Feedback<'_>);

    /// Remove all validation styling and error text.
    fn clear_feedback(&mut self);

    /// Apply the theme class.
    fn apply_theme(&mut self, _class: &str) {}

    /// Remove a previously applied theme class.
    fn remove_theme(&mut self, _class: &str) {}
}

/// Everything a binding needs to render one validation outcome.
#[derive(Debug, Clone, Copy)]
pub struct Feedback<'a> {
    /// The result being rendered.
    pub result: &'a ValidationResult,
    /// Id of the field the result belongs to.
    pub field_id: &'a str,
    /// Whether to expose state to assistive surfaces.
    pub accessibility: bool,
    /// Where the error text goes.
    pub error_display: ErrorDisplay,
}

impl<'a> Feedback<'a> {
    /// [`VALID_CLASS`] or [`INVALID_CLASS`].
    pub fn status_class(&self) -> &'static str {
        if self.result.has_errors() {
            INVALID_CLASS
        } else {
            VALID_CLASS
        }
    }

    /// Value for an `aria-invalid` style attribute, or `None` when
    /// accessibility is off and the attribute should be absent.
    pub fn aria_invalid(&self) -> Option<&'static str> {
        if !self.accessibility {
            return None;
        }
        Some(if self.result.has_errors() { "true" } else { "false" })
    }

    /// Id of the element describing the error, only present for an invalid
    /// result with accessibility on.
    pub fn described_by(&self) -> Option<String> {
        (self.accessibility && self.result.has_errors()).then(|| error_element_id(self.field_id))
    }

    /// The error text to show, respecting [`ErrorDisplay::None`].
    pub fn visible_error(&self) -> Option<&'a str> {
        match self.error_display {
            ErrorDisplay::None => None,
            ErrorDisplay::Below | ErrorDisplay::Inline => self.result.first_error(),
        }
    }
}

/// Id of the element holding the error text for `field_id`.
pub fn error_element_id(field_id: &str) -> String {
    format!("{field_id}-error")
}

/// Check that `id` can identify a field and derive related ids.
pub(crate) fn check_binding_id(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("field id must not be empty".to_string());
    }
    if let Some(c) = id
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')))
    {
        return Err(format!("field id '{id}' contains invalid character {c:?}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_binding_id_accepts_html_like_ids() {
        assert!(check_binding_id("user-email_2").is_ok());
        assert!(check_binding_id("form:field.name").is_ok());
    }

    #[test]
    fn test_check_binding_id_rejects_bad_ids() {
        assert!(check_binding_id("").is_err());
        assert!(check_binding_id("has space").is_err());
        assert!(check_binding_id("quote\"").is_err());
    }
}
