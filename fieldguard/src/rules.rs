//! Built-in rules for text values.
//!
//! Each constructor returns a complete [`RuleSpec`] whose message is a key in
//! the built-in locale tables, so the error text follows the validator's
//! locale. Override the message with [`RuleSpec::message`] or
//! [`RuleSpec::literal`] when needed.
//!
//! Rules other than [`required`] treat an empty value as passing, so an
//! optional field can still be format-checked.

use regex::Regex;

use crate::rule::RuleSpec;

/// Require the field to be non-blank.
pub fn required<V: AsRef<str> + 'static>() -> RuleSpec<V> {
    RuleSpec::new("required").predicate(|v: &V| !v.as_ref().trim().is_empty())
}

/// Require at least `min` characters.
pub fn min_length<V: AsRef<str> + 'static>(min: usize) -> RuleSpec<V> {
    RuleSpec::new("minLength")
        .predicate(move |v: &V| v.as_ref().chars().count() >= min)
        .placeholder("min", min)
}

/// Require at most `max` characters.
pub fn max_length<V: AsRef<str> + 'static>(max: usize) -> RuleSpec<V> {
    RuleSpec::new("maxLength")
        .predicate(move |v: &V| v.as_ref().chars().count() <= max)
        .placeholder("max", max)
}

/// Require a valid email address.
pub fn email<V: AsRef<str> + 'static>() -> RuleSpec<V> {
    RuleSpec::new("email").predicate(|v: &V| optional(v, is_email))
}

/// Require an absolute URL.
pub fn url<V: AsRef<str> + 'static>() -> RuleSpec<V> {
    RuleSpec::new("url").predicate(|v: &V| optional(v, |s| ::url::Url::parse(s).is_ok()))
}

/// Require a finite number.
pub fn number<V: AsRef<str> + 'static>() -> RuleSpec<V> {
    RuleSpec::new("number").predicate(|v: &V| {
        optional(v, |s| s.trim().parse::<f64>().is_ok_and(f64::is_finite))
    })
}

/// Require at least one uppercase letter.
pub fn uppercase<V: AsRef<str> + 'static>() -> RuleSpec<V> {
    RuleSpec::new("uppercase")
        .predicate(|v: &V| optional(v, |s| s.chars().any(char::is_uppercase)))
}

/// Require the value to match `re`.
///
/// The pattern is matched as given; anchor it with `^...$` to match the full
/// value.
pub fn pattern<V: AsRef<str> + 'static>(re: Regex) -> RuleSpec<V> {
    RuleSpec::new("pattern")
        .placeholder("pattern", re.as_str())
        .predicate(move |v: &V| optional(v, |s| re.is_match(s)))
}

/// Require an email address in `domain`, e.g. `company.com`.
pub fn domain<V: AsRef<str> + 'static>(domain: impl Into<String>) -> RuleSpec<V> {
    let domain = domain.into();
    let suffix = format!("@{}", domain.to_lowercase());
    RuleSpec::new("domain")
        .placeholder("domain", &domain)
        .predicate(move |v: &V| {
            optional(v, |s| is_email(s) && s.to_lowercase().ends_with(&suffix))
        })
}

/// Require the value to contain `needle`.
pub fn contains<V: AsRef<str> + 'static>(needle: impl Into<String>) -> RuleSpec<V> {
    let needle = needle.into();
    RuleSpec::new("contains")
        .literal("Must contain \"{needle}\"")
        .placeholder("needle", &needle)
        .predicate(move |v: &V| v.as_ref().contains(needle.as_str()))
}

/// Require the value to equal `expected`.
pub fn equals<V: AsRef<str> + 'static>(expected: impl Into<String>) -> RuleSpec<V> {
    let expected = expected.into();
    RuleSpec::new("equals")
        .literal("Values do not match")
        .predicate(move |v: &V| v.as_ref() == expected)
}

fn optional<V: AsRef<str>>(value: &V, check: impl FnOnce(&str) -> bool) -> bool {
    let value = value.as_ref();
    value.is_empty() || check(value)
}

fn is_email(value: &str) -> bool {
    email_address::EmailAddress::is_valid(value)
}
