use serde::Deserialize;

/// Placement of the first error message relative to the validated field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisplay {
    /// In its own element after the field.
    #[default]
    Below,
    /// Beside the field, on the same line.
    Inline,
    /// Nowhere. Validity is conveyed by status classes and attributes alone.
    None,
}
