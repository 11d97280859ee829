use serde::Serialize;

/// Outcome of a single validation.
///
/// Built fresh for every validation and never mutated afterwards. Validity is
/// derived from the error list, so `is_valid() == errors().is_empty()` holds
/// for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a result from its messages.
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// A passing result with no messages.
    pub fn valid() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Check if validation passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Check if validation failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages, in rule registration order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get the first error message (if any).
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// Errors followed by warnings.
    pub fn all_messages(&self) -> Vec<&str> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .map(String::as_str)
            .collect()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
