//! Rule-based validation for a single input field.
//!
//! A [`Validator`] owns a [`FieldBinding`] (the thing that holds the value and
//! shows feedback), an ordered list of [`Rule`]s and a small state machine.
//! Each call to [`Validator::validate`] reads the current value, runs every
//! rule in registration order and returns an immutable [`ValidationResult`].
//!
//! # Example
//!
//! ```
//! use fieldguard::{rules, ConfigOptions, FieldState, MemoryField, Validator};
//!
//! let field = MemoryField::new("username");
//! let mut validator = Validator::new(field.clone(), ConfigOptions::new().locale("en"))?;
//!
//! validator
//!     .add_rule(rules::required())?
//!     .add_rule(rules::min_length(5))?;
//!
//! field.set_value("abc");
//! let result = validator.validate()?;
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.first_error(), Some("Minimum length is 5 characters"));
//! assert_eq!(validator.state(), FieldState::Invalid);
//! # Ok::<(), fieldguard::ValidatorError>(())
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod result;
pub mod rule;
pub mod rules;
pub mod validator;

pub use binding::{ErrorDisplay, Feedback, FieldBinding, MemoryField};
pub use config::{ConfigOptions, Placeholders, ValidatorConfig};
pub use error::ValidatorError;
pub use result::ValidationResult;
pub use rule::{MessageMode, Predicate, Rule, RuleSpec, Trigger};
pub use validator::{FieldState, Validator};
