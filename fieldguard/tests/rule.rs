use fieldguard::{MessageMode, Predicate, Rule, RuleSpec, Trigger, ValidatorError};

struct NotEmpty;

impl Predicate<String> for NotEmpty {
    fn test(&self, value: &String) -> bool {
        !value.is_empty()
    }
}

#[test]
fn test_rule_validates_with_predicate() {
    let rule =
        Rule::<String>::new("required", NotEmpty, "required", Trigger::Input).expect("valid rule");

    assert!(rule.validate(&"x".to_string()));
    assert!(!rule.validate(&String::new()));
}

#[test]
fn test_rule_message_is_verbatim() {
    let rule = Rule::<String>::new(
        "minLength",
        |v: &String| v.len() >= 5,
        "Minimum length is {min} characters",
        Trigger::Blur,
    )
    .expect("valid rule");

    assert_eq!(rule.name(), "minLength");
    assert_eq!(rule.message(), "Minimum length is {min} characters");
    assert_eq!(rule.mode(), MessageMode::ResolveByKey);
    assert_eq!(rule.trigger(), Trigger::Blur);
}

#[test]
fn test_rule_rejects_empty_name() {
    let err = Rule::<String>::new("", NotEmpty, "required", Trigger::Input).unwrap_err();
    assert!(matches!(err, ValidatorError::InvalidRule { .. }));
}

#[test]
fn test_spec_defaults() {
    let rule = RuleSpec::<String>::new("custom")
        .with_predicate(NotEmpty)
        .build()
        .expect("complete spec");

    assert_eq!(rule.message(), "custom");
    assert_eq!(rule.fallback(), Some("Validation failed for custom"));
    assert_eq!(rule.mode(), MessageMode::ResolveByKey);
    assert_eq!(rule.trigger(), Trigger::Input);
    assert!(rule.placeholders().is_empty());
}

#[test]
fn test_spec_literal_then_message_switches_mode() {
    let rule = RuleSpec::<String>::new("custom")
        .with_predicate(NotEmpty)
        .literal("Literal text")
        .message("required")
        .build()
        .expect("complete spec");

    assert_eq!(rule.message(), "required");
    assert_eq!(rule.fallback(), None);
    assert_eq!(rule.mode(), MessageMode::ResolveByKey);
}

#[test]
fn test_spec_keeps_placeholders() {
    let rule = RuleSpec::<String>::new("range")
        .with_predicate(NotEmpty)
        .placeholder("min", 1)
        .placeholder("max", 10)
        .build()
        .expect("complete spec");

    assert_eq!(rule.placeholders().get("min"), Some("1"));
    assert_eq!(rule.placeholders().get("max"), Some("10"));
}

#[test]
fn test_spec_missing_parts() {
    let err = RuleSpec::<String>::new("nothing").build().unwrap_err();
    assert!(matches!(err, ValidatorError::InvalidRuleSpec { .. }));

    let err = RuleSpec::<String>::default()
        .with_predicate(NotEmpty)
        .build()
        .unwrap_err();
    assert!(matches!(err, ValidatorError::InvalidRuleSpec { .. }));
}

#[test]
fn test_trigger_names() {
    let names: Vec<_> = Trigger::ALL.iter().map(Trigger::to_string).collect();
    assert_eq!(names, ["input", "change", "blur"]);
}
