//! Validation rules: a named predicate plus the message shown when it fails.

use std::fmt;

use crate::config::Placeholders;
use crate::error::ValidatorError;

/// The kind of field event a rule is associated with.
///
/// Triggers are advisory. The validator evaluates every rule on each
/// validation regardless of which event caused it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The value changed while typing.
    #[default]
    Input,
    /// The field lost focus.
    Blur,
    /// The value was committed.
    Change,
}

impl Trigger {
    /// Every trigger, in the order bindings subscribe to them.
    pub const ALL: [Trigger; 3] = [Trigger::Input, Trigger::Change, Trigger::Blur];

    /// Lowercase event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Blur => "blur",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rule's message text becomes the error string in a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageMode {
    /// Treat the message as a locale key. Unknown keys resolve to themselves,
    /// so plain text also passes through unchanged.
    #[default]
    ResolveByKey,
    /// Use the message text as the template directly, skipping the locale
    /// table. Placeholders are still substituted.
    LiteralTemplate,
}

/// A check applied to a field value.
pub trait Predicate<V>: Send + Sync {
    /// Returns `true` when the value passes.
    fn test(&self, value: &V) -> bool;
}

impl<V, F> Predicate<V> for F
where
    F: Fn(&V) -> bool + Send + Sync,
{
    fn test(&self, value: &V) -> bool {
        self(value)
    }
}

/// A single registered rule. Immutable once built.
pub struct Rule<V> {
    name: String,
    predicate: Box<dyn Predicate<V>>,
    message: String,
    mode: MessageMode,
    fallback: Option<String>,
    placeholders: Placeholders,
    trigger: Trigger,
}

impl<V> Rule<V> {
    /// Create a rule whose message is resolved by key.
    ///
    /// Fails with [`ValidatorError::InvalidRule`] when `name` is blank.
    pub fn new<P>(
        name: impl Into<String>,
        predicate: P,
        message: impl Into<String>,
        trigger: Trigger,
    ) -> Result<Self, ValidatorError>
    where
        P: Predicate<V> + 'static,
    {
        Self::from_parts(
            name.into(),
            Box::new(predicate),
            message.into(),
            MessageMode::default(),
            None,
            Placeholders::new(),
            trigger,
        )
    }

    fn from_parts(
        name: String,
        predicate: Box<dyn Predicate<V>>,
        message: String,
        mode: MessageMode,
        fallback: Option<String>,
        placeholders: Placeholders,
        trigger: Trigger,
    ) -> Result<Self, ValidatorError> {
        if name.trim().is_empty() {
            return Err(ValidatorError::invalid_rule("rule name must not be empty"));
        }
        Ok(Self {
            name,
            predicate,
            message,
            mode,
            fallback,
            placeholders,
            trigger,
        })
    }

    /// Run the predicate against `value`.
    pub fn validate(&self, value: &V) -> bool {
        self.predicate.test(value)
    }

    /// The rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The message text exactly as registered. Localization happens in the
    /// config, not here.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How the message is resolved.
    pub fn mode(&self) -> MessageMode {
        self.mode
    }

    /// Template used when the message key is missing from the locale table.
    /// Only set for rules registered without a message.
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Values substituted into the message template.
    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// The trigger this rule is associated with.
    pub fn trigger(&self) -> Trigger {
        self.trigger
    }
}

impl<V> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .field("mode", &self.mode)
            .field("fallback", &self.fallback)
            .field("placeholders", &self.placeholders)
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}

/// A possibly incomplete rule description, turned into a [`Rule`] by
/// [`Validator::add_rule`](crate::Validator::add_rule).
///
/// # Example
///
/// ```
/// use fieldguard::{RuleSpec, Trigger};
///
/// let spec = RuleSpec::new("noSpaces")
///     .predicate(|v: &String| !v.contains(' '))
///     .literal("{field} must not contain spaces")
///     .placeholder("field", "Username")
///     .trigger(Trigger::Blur);
/// # let _ = spec;
/// ```
pub struct RuleSpec<V> {
    name: Option<String>,
    predicate: Option<Box<dyn Predicate<V>>>,
    message: Option<String>,
    mode: MessageMode,
    placeholders: Placeholders,
    trigger: Trigger,
}

impl<V> RuleSpec<V> {
    /// Start a spec for a rule called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the predicate from a closure.
    pub fn predicate<F>(mut self, f: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(f));
        self
    }

    /// Set the predicate from any [`Predicate`] implementation.
    pub fn with_predicate<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<V> + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Set a message resolved through the locale table.
    pub fn message(mut self, key: impl Into<String>) -> Self {
        self.message = Some(key.into());
        self.mode = MessageMode::ResolveByKey;
        self
    }

    /// Set a message used verbatim as a template.
    pub fn literal(mut self, template: impl Into<String>) -> Self {
        self.message = Some(template.into());
        self.mode = MessageMode::LiteralTemplate;
        self
    }

    /// Add a placeholder value for the message template.
    pub fn placeholder(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.placeholders = self.placeholders.with(key, value);
        self
    }

    /// Set the trigger.
    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// The name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Build the rule.
    ///
    /// A missing message makes the rule name the locale key, with
    /// `Validation failed for {name}` used when the key is not in the table.
    pub fn build(self) -> Result<Rule<V>, ValidatorError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ValidatorError::invalid_rule_spec("rule must have a name")),
        };
        let Some(predicate) = self.predicate else {
            return Err(ValidatorError::invalid_rule_spec(format!(
                "rule '{name}' must have a predicate"
            )));
        };
        let (message, mode, fallback) = match self.message {
            Some(message) => (message, self.mode, None),
            None => (
                name.clone(),
                MessageMode::ResolveByKey,
                Some(format!("Validation failed for {name}")),
            ),
        };

        Rule::from_parts(
            name,
            predicate,
            message,
            mode,
            fallback,
            self.placeholders,
            self.trigger,
        )
    }
}

impl<V> Default for RuleSpec<V> {
    fn default() -> Self {
        Self {
            name: None,
            predicate: None,
            message: None,
            mode: MessageMode::default(),
            placeholders: Placeholders::new(),
            trigger: Trigger::default(),
        }
    }
}

impl<V> fmt::Debug for RuleSpec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSpec")
            .field("name", &self.name)
            .field("has_predicate", &self.predicate.is_some())
            .field("message", &self.message)
            .field("mode", &self.mode)
            .field("trigger", &self.trigger)
            .finish()
    }
}
