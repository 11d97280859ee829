use fieldguard::binding::{ARIA_DESCRIBED_BY, ARIA_INVALID, error_element_id};
use fieldguard::{
    ConfigOptions, ErrorDisplay, Feedback, FieldBinding, MemoryField, ValidationResult, Validator,
    rules,
};

fn feedback(result: &ValidationResult, accessibility: bool) -> Feedback<'_> {
    Feedback {
        result,
        field_id: "email",
        accessibility,
        error_display: ErrorDisplay::Below,
    }
}

// ============================================================================
// Feedback
// ============================================================================

#[test]
fn test_feedback_for_invalid_result() {
    let result = ValidationResult::new(vec!["bad".to_string()], Vec::new());
    let feedback = feedback(&result, true);

    assert_eq!(feedback.status_class(), "is-invalid");
    assert_eq!(feedback.aria_invalid(), Some("true"));
    assert_eq!(feedback.described_by().as_deref(), Some("email-error"));
    assert_eq!(feedback.visible_error(), Some("bad"));
}

#[test]
fn test_feedback_for_valid_result() {
    let result = ValidationResult::valid();
    let feedback = feedback(&result, true);

    assert_eq!(feedback.status_class(), "is-valid");
    assert_eq!(feedback.aria_invalid(), Some("false"));
    assert_eq!(feedback.described_by(), None);
    assert_eq!(feedback.visible_error(), None);
}

#[test]
fn test_feedback_without_accessibility() {
    let result = ValidationResult::new(vec!["bad".to_string()], Vec::new());
    let feedback = feedback(&result, false);

    assert_eq!(feedback.aria_invalid(), None);
    assert_eq!(feedback.described_by(), None);
    assert_eq!(feedback.visible_error(), Some("bad"));
}

#[test]
fn test_feedback_hidden_error_display() {
    let result = ValidationResult::new(vec!["bad".to_string()], Vec::new());
    let feedback = Feedback {
        error_display: ErrorDisplay::None,
        ..feedback(&result, true)
    };

    assert_eq!(feedback.status_class(), "is-invalid");
    assert_eq!(feedback.visible_error(), None);
}

// ============================================================================
// MemoryField through a validator
// ============================================================================

#[test]
fn test_memory_field_renders_invalid_state() {
    let field = MemoryField::with_value("email", "nope");
    let mut validator = Validator::new(field.clone(), ConfigOptions::default()).expect("valid");
    validator.add_rule(rules::email()).expect("valid rule");

    validator.validate().expect("not destroyed");

    assert!(field.has_class("is-invalid"));
    assert!(!field.has_class("is-valid"));
    assert_eq!(field.attribute(ARIA_INVALID).as_deref(), Some("true"));
    assert_eq!(
        field.attribute(ARIA_DESCRIBED_BY),
        Some(error_element_id("email"))
    );
    assert_eq!(
        field.error_text().as_deref(),
        Some("Please enter a valid email address")
    );
}

#[test]
fn test_memory_field_switches_to_valid_state() {
    let field = MemoryField::with_value("email", "nope");
    let mut validator = Validator::new(field.clone(), ConfigOptions::default()).expect("valid");
    validator.add_rule(rules::email()).expect("valid rule");
    validator.validate().expect("not destroyed");

    field.set_value("jonas@example.com");
    validator.validate().expect("not destroyed");

    assert!(field.has_class("is-valid"));
    assert!(!field.has_class("is-invalid"));
    assert_eq!(field.attribute(ARIA_INVALID).as_deref(), Some("false"));
    assert_eq!(field.attribute(ARIA_DESCRIBED_BY), None);
    assert_eq!(field.error_text(), None);
}

#[test]
fn test_memory_field_without_accessibility_has_no_aria() {
    let field = MemoryField::new("email");
    let options = ConfigOptions::new().accessibility(false);
    let mut validator = Validator::new(field.clone(), options).expect("valid");
    validator.add_rule(rules::required()).expect("valid rule");

    validator.validate().expect("not destroyed");

    assert!(field.has_class("is-invalid"));
    assert_eq!(field.attribute(ARIA_INVALID), None);
    assert_eq!(field.attribute(ARIA_DESCRIBED_BY), None);
    assert_eq!(field.error_text().as_deref(), Some("This field is required"));
}

#[test]
fn test_memory_field_theme_is_replaced() {
    let mut field = MemoryField::new("email");
    field.apply_theme("fieldguard-theme-minimal");
    field.apply_theme("fieldguard-theme-material");

    assert_eq!(field.classes(), vec!["fieldguard-theme-material".to_string()]);

    field.remove_theme("fieldguard-theme-material");
    assert!(field.classes().is_empty());
}
