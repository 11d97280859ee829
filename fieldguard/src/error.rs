//! Error types for validator construction and lifecycle misuse.
//!
//! A failed validation is not an error: it is a [`ValidationResult`] with
//! `is_valid() == false`. These errors only describe programmer mistakes that
//! the caller should surface.
//!
//! [`ValidationResult`]: crate::ValidationResult

use thiserror::Error;

/// Errors raised synchronously by [`Validator`](crate::Validator) and
/// [`Rule`](crate::Rule).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    /// The binding handed to the validator does not identify a usable field.
    #[error("invalid binding: {reason}")]
    InvalidBinding {
        /// Why the binding was rejected.
        reason: String,
    },

    /// A rule spec passed to `add_rule` is missing its name or predicate.
    #[error("invalid rule spec: {reason}")]
    InvalidRuleSpec {
        /// What the spec was missing.
        reason: String,
    },

    /// A rule could not be constructed.
    #[error("invalid rule: {reason}")]
    InvalidRule {
        /// Why the rule was rejected.
        reason: String,
    },

    /// The validator was destroyed and can no longer be used.
    #[error("validator has been destroyed")]
    AlreadyDestroyed,
}

impl ValidatorError {
    pub(crate) fn invalid_binding(reason: impl Into<String>) -> Self {
        Self::InvalidBinding {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_rule_spec(reason: impl Into<String>) -> Self {
        Self::InvalidRuleSpec {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_rule(reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            reason: reason.into(),
        }
    }
}
