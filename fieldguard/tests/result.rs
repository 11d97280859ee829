use fieldguard::ValidationResult;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_valid_result() {
    let result = ValidationResult::valid();

    assert!(result.is_valid());
    assert!(!result.has_errors());
    assert_eq!(result.first_error(), None);
    assert!(result.all_messages().is_empty());
    assert_eq!(result, ValidationResult::default());
}

#[test]
fn test_validity_follows_errors() {
    let result = ValidationResult::new(strings(&["bad"]), Vec::new());
    assert!(result.is_invalid());
    assert!(result.has_errors());

    let result = ValidationResult::new(Vec::new(), strings(&["careful"]));
    assert!(result.is_valid());
    assert!(!result.has_errors());
}

#[test]
fn test_first_error() {
    let result = ValidationResult::new(strings(&["first", "second"]), Vec::new());
    assert_eq!(result.first_error(), Some("first"));
}

#[test]
fn test_all_messages_lists_errors_then_warnings() {
    let result = ValidationResult::new(strings(&["e1", "e2"]), strings(&["w1"]));

    assert_eq!(result.all_messages(), vec!["e1", "e2", "w1"]);
    assert_eq!(
        result.all_messages().len(),
        result.errors().len() + result.warnings().len()
    );
}

#[test]
fn test_serializes_camel_case() {
    let result = ValidationResult::new(strings(&["bad"]), Vec::new());
    let json = serde_json::to_value(&result).expect("serializable");

    assert_eq!(
        json,
        serde_json::json!({ "isValid": false, "errors": ["bad"], "warnings": [] })
    );
}
