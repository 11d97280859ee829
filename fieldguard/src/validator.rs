//! The validation engine bound to one field.

use std::fmt;

use crate::binding::{Feedback, FieldBinding, check_binding_id};
use crate::config::{ConfigOptions, ValidatorConfig, substitute};
use crate::error::ValidatorError;
use crate::result::ValidationResult;
use crate::rule::{MessageMode, Rule, RuleSpec, Trigger};

/// Lifecycle state of a [`Validator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// Constructed or reset, not validated since.
    #[default]
    Idle,
    /// The last validation passed.
    Valid,
    /// The last validation failed.
    Invalid,
    /// Torn down. Terminal.
    Destroyed,
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Destroyed => "destroyed",
        })
    }
}

/// Validates a single field against an ordered list of rules.
///
/// ```text
/// idle --validate--> valid | invalid --validate--> valid | invalid
/// valid | invalid --reset--> idle
/// any --destroy--> destroyed (terminal)
/// ```
///
/// # Example
///
/// ```
/// use fieldguard::{ConfigOptions, MemoryField, RuleSpec, Validator, rules};
///
/// let field = MemoryField::new("code");
/// let mut validator = Validator::new(field.clone(), ConfigOptions::new().locale("lt"))?;
/// validator
///     .add_rule(rules::required())?
///     .add_rule(
///         RuleSpec::new("digits")
///             .predicate(|v: &String| v.chars().all(|c| c.is_ascii_digit()))
///             .literal("Only digits are allowed"),
///     )?;
///
/// let result = validator.validate()?;
/// assert_eq!(result.errors(), ["Šis laukas yra privalomas"]);
///
/// field.set_value("12a");
/// let result = validator.validate()?;
/// assert_eq!(result.errors(), ["Only digits are allowed"]);
/// # Ok::<(), fieldguard::ValidatorError>(())
/// ```
pub struct Validator<B: FieldBinding> {
    binding: B,
    config: ValidatorConfig,
    rules: Vec<Rule<B::Value>>,
    state: FieldState,
    last_result: Option<ValidationResult>,
    listening: bool,
}

impl<B: FieldBinding> Validator<B> {
    /// Bind a validator to `binding`.
    ///
    /// Fails with [`ValidatorError::InvalidBinding`] when the binding's id
    /// cannot identify a field. Applies the theme class and, with real-time
    /// validation enabled, subscribes to every [`Trigger`].
    pub fn new(mut binding: B, options: ConfigOptions) -> Result<Self, ValidatorError> {
        check_binding_id(binding.id()).map_err(ValidatorError::invalid_binding)?;

        let config = ValidatorConfig::new(options);
        binding.apply_theme(&config.theme_class_name());

        let listening = config.real_time();
        if listening {
            binding.listen(&Trigger::ALL);
        }

        log::debug!(
            "Validator bound to '{}' (locale: {}, theme: {}, real-time: {})",
            binding.id(),
            config.locale(),
            config.theme(),
            listening
        );

        Ok(Self {
            binding,
            config,
            rules: Vec::new(),
            state: FieldState::Idle,
            last_result: None,
            listening,
        })
    }

    /// Register a rule. Rules run in registration order.
    ///
    /// Fails with [`ValidatorError::InvalidRuleSpec`] when the spec has no
    /// name or predicate, and with [`ValidatorError::AlreadyDestroyed`] after
    /// [`destroy`](Self::destroy). The current state is untouched until the
    /// next validation.
    pub fn add_rule(&mut self, spec: RuleSpec<B::Value>) -> Result<&mut Self, ValidatorError> {
        if self.is_destroyed() {
            return Err(ValidatorError::AlreadyDestroyed);
        }
        let rule = spec.build()?;
        log::trace!("Rule '{}' added to '{}'", rule.name(), self.binding.id());
        self.rules.push(rule);
        Ok(self)
    }

    /// Validate the field's current value against every rule.
    ///
    /// A failing validation is a normal result, not an error. The only error
    /// is [`ValidatorError::AlreadyDestroyed`].
    pub fn validate(&mut self) -> Result<ValidationResult, ValidatorError> {
        if self.is_destroyed() {
            return Err(ValidatorError::AlreadyDestroyed);
        }

        let value = self.binding.value();
        let mut errors = Vec::new();

        for rule in &self.rules {
            if !rule.validate(&value) {
                log::trace!("Rule '{}' failed on '{}'", rule.name(), self.binding.id());
                errors.push(self.resolve_message(rule));
            }
        }

        let result = ValidationResult::new(errors, Vec::new());
        self.state = if result.is_valid() {
            FieldState::Valid
        } else {
            FieldState::Invalid
        };
        log::debug!(
            "Validated '{}': {} ({} of {} rules failed)",
            self.binding.id(),
            self.state,
            result.errors().len(),
            self.rules.len()
        );

        let field_id = self.binding.id().to_string();
        self.binding.render_feedback(&Feedback {
            result: &result,
            field_id: &field_id,
            accessibility: self.config.accessibility(),
            error_display: self.config.error_display(),
        });

        self.last_result = Some(result.clone());
        Ok(result)
    }

    /// Handle a real-time event from the binding.
    ///
    /// Each event runs exactly one validation, in arrival order. Returns
    /// `Ok(None)` when the validator is not listening (real time disabled or
    /// destroyed).
    pub fn handle_event(
        &mut self,
        trigger: Trigger,
    ) -> Result<Option<ValidationResult>, ValidatorError> {
        if !self.listening {
            log::trace!(
                "Ignoring {} event on '{}': not listening",
                trigger,
                self.binding.id()
            );
            return Ok(None);
        }
        self.validate().map(Some)
    }

    /// Clear the value and feedback and return to [`FieldState::Idle`].
    ///
    /// Does nothing once destroyed.
    pub fn reset(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.binding.set_value(Default::default());
        self.binding.clear_feedback();
        self.last_result = None;
        self.state = FieldState::Idle;
        log::debug!("Validator for '{}' reset", self.binding.id());
    }

    /// Tear the validator down for good.
    ///
    /// Unsubscribes from events, clears feedback and the theme class, and
    /// drops every rule. Calling it again has no effect.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }
        if self.listening {
            self.binding.unlisten();
            self.listening = false;
        }
        self.binding.clear_feedback();
        self.binding.remove_theme(&self.config.theme_class_name());
        self.rules.clear();
        self.last_result = None;
        self.state = FieldState::Destroyed;
        log::debug!("Validator for '{}' destroyed", self.binding.id());
    }

    fn resolve_message(&self, rule: &Rule<B::Value>) -> String {
        match rule.mode() {
            MessageMode::ResolveByKey => match rule.fallback() {
                Some(fallback) => {
                    let template = self
                        .config
                        .message_template(rule.message())
                        .unwrap_or(fallback);
                    substitute(template, rule.placeholders())
                }
                None => self.config.locale_message(rule.message(), rule.placeholders()),
            },
            MessageMode::LiteralTemplate => substitute(rule.message(), rule.placeholders()),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == FieldState::Destroyed
    }

    /// Whether real-time events are being handled.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Registered rules, in evaluation order.
    pub fn rules(&self) -> &[Rule<B::Value>] {
        &self.rules
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    /// Mutable access for hosts that feed input into their own field.
    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    /// The result of the last validation, cleared by `reset` and `destroy`.
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }
}

impl<B: FieldBinding + fmt::Debug> fmt::Debug for Validator<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("binding", &self.binding)
            .field("config", &self.config)
            .field("rules", &self.rules.len())
            .field("state", &self.state)
            .field("listening", &self.listening)
            .finish()
    }
}
