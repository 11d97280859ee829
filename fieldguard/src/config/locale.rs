//! Built-in message tables.
//!
//! Tables are process-wide constants, built on first use and never mutated.
//! Per-validator overrides are merged on top in [`ValidatorConfig::new`].
//!
//! [`ValidatorConfig::new`]: super::ValidatorConfig::new

use std::collections::HashMap;
use std::sync::LazyLock;

/// Locale used when none is given or the requested one is unknown.
pub const DEFAULT_LOCALE: &str = "en";

/// Key-to-template mapping for one locale.
pub type LocaleTable = HashMap<&'static str, &'static str>;

const EN: &[(&str, &str)] = &[
    ("required", "This field is required"),
    ("email", "Please enter a valid email address"),
    ("minlength", "Please enter more characters"),
    ("maxlength", "Please enter less characters"),
    ("minLength", "Minimum length is {min} characters"),
    ("maxLength", "Maximum length is {max} characters"),
    ("number", "Please enter a valid number"),
    ("url", "Please enter a valid URL"),
    ("minAge", "Age is too small"),
    ("uppercase", "Must contain at least one uppercase letter"),
    ("domain", "Email must be in @{domain} domain"),
    ("pattern", "Please match the requested format"),
];

const LT: &[(&str, &str)] = &[
    ("required", "Šis laukas yra privalomas"),
    ("email", "Įveskite teisingą el. pašto adresą"),
    ("minlength", "Per mažai simbolių"),
    ("maxlength", "Per daug simbolių"),
    ("minLength", "Minimalus ilgis yra {min} simboliai"),
    ("maxLength", "Maksimalus ilgis yra {max} simboliai"),
    ("number", "Įveskite teisingą skaičių"),
    ("url", "Įveskite teisingą URL adresą"),
    ("minAge", "Per mažas amžius"),
    ("uppercase", "Turi būti bent viena didžioji raidė"),
    ("domain", "El. paštas turi būti @{domain} domene"),
    ("pattern", "Įveskite reikiamo formato reikšmę"),
];

static LOCALES: LazyLock<HashMap<&'static str, LocaleTable>> = LazyLock::new(|| {
    HashMap::from([
        ("en", EN.iter().copied().collect()),
        ("lt", LT.iter().copied().collect()),
    ])
});

/// The built-in table for `locale`, if there is one.
pub fn table(locale: &str) -> Option<&'static LocaleTable> {
    LOCALES.get(locale)
}

/// Whether a built-in table exists for `locale`.
pub fn is_supported(locale: &str) -> bool {
    LOCALES.contains_key(locale)
}

/// Codes of every built-in locale, sorted.
pub fn supported_locales() -> Vec<&'static str> {
    let mut codes: Vec<_> = LOCALES.keys().copied().collect();
    codes.sort_unstable();
    codes
}
