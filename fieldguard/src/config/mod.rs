//! Validator configuration: theme, locale, behavior flags and messages.

pub mod locale;
mod template;

use std::collections::HashMap;

use serde::Deserialize;

use crate::binding::ErrorDisplay;

pub use locale::DEFAULT_LOCALE;
pub use template::{Placeholders, substitute};

/// Theme used when none is given.
pub const DEFAULT_THEME: &str = "default";

/// Prefix of the class name a binding applies for the active theme.
pub const THEME_CLASS_PREFIX: &str = "fieldguard-theme-";

/// Options accepted when constructing a validator.
///
/// Every field has a default, so a partial JSON object deserializes:
///
/// ```
/// use fieldguard::ConfigOptions;
///
/// let options: ConfigOptions = serde_json::from_str(r#"{"locale": "lt", "realTime": false}"#)?;
/// assert_eq!(options.locale, "lt");
/// assert!(!options.real_time);
/// assert!(options.accessibility);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOptions {
    /// Visual theme name.
    pub theme: String,
    /// Message locale code.
    pub locale: String,
    /// Validate on every input/change/blur event.
    pub real_time: bool,
    /// Expose validity and error text to assistive surfaces.
    pub accessibility: bool,
    /// Where the binding shows the error text.
    pub error_display: ErrorDisplay,
    /// Message overrides, merged over the locale table.
    pub messages: HashMap<String, String>,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            real_time: true,
            accessibility: true,
            error_display: ErrorDisplay::default(),
            messages: HashMap::new(),
        }
    }
}

impl ConfigOptions {
    /// Options with every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Set the locale.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Enable or disable real-time validation.
    pub fn real_time(mut self, enabled: bool) -> Self {
        self.real_time = enabled;
        self
    }

    /// Enable or disable accessibility feedback.
    pub fn accessibility(mut self, enabled: bool) -> Self {
        self.accessibility = enabled;
        self
    }

    /// Set where errors are displayed.
    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }

    /// Override a single message.
    pub fn message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(key.into(), template.into());
        self
    }
}

/// Resolved, immutable configuration owned by one validator.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    theme: String,
    locale: String,
    real_time: bool,
    accessibility: bool,
    error_display: ErrorDisplay,
    messages: HashMap<String, String>,
}

impl ValidatorConfig {
    /// Resolve `options` into a config.
    ///
    /// An unknown locale falls back to [`DEFAULT_LOCALE`]. The message table
    /// is that locale's built-in table with `options.messages` laid over it.
    pub fn new(options: ConfigOptions) -> Self {
        let theme = if options.theme.trim().is_empty() {
            DEFAULT_THEME.to_string()
        } else {
            options.theme
        };

        let locale = if options.locale.trim().is_empty() {
            DEFAULT_LOCALE.to_string()
        } else if locale::is_supported(&options.locale) {
            options.locale
        } else {
            log::warn!(
                "Unknown locale '{}', falling back to '{}'",
                options.locale,
                DEFAULT_LOCALE
            );
            DEFAULT_LOCALE.to_string()
        };

        let mut messages: HashMap<String, String> = locale::table(&locale)
            .or_else(|| locale::table(DEFAULT_LOCALE))
            .map(|table| {
                table
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default();
        messages.extend(options.messages);

        Self {
            theme,
            locale,
            real_time: options.real_time,
            accessibility: options.accessibility,
            error_display: options.error_display,
            messages,
        }
    }

    /// Look up `key` and substitute `placeholders` into the template.
    ///
    /// A missing key is not an error: the key itself is used as the template.
    pub fn locale_message(&self, key: &str, placeholders: &Placeholders) -> String {
        let template = self.message_template(key).unwrap_or(key);
        substitute(template, placeholders)
    }

    /// The template registered for `key`, if any.
    pub fn message_template(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Class name identifying the active theme, e.g. `fieldguard-theme-default`.
    pub fn theme_class_name(&self) -> String {
        format!("{THEME_CLASS_PREFIX}{}", self.theme)
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The resolved locale. Never an unsupported code.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn real_time(&self) -> bool {
        self.real_time
    }

    pub fn accessibility(&self) -> bool {
        self.accessibility
    }

    pub fn error_display(&self) -> ErrorDisplay {
        self.error_display
    }

    /// The merged message table.
    pub fn messages(&self) -> &HashMap<String, String> {
        &self.messages
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new(ConfigOptions::default())
    }
}
