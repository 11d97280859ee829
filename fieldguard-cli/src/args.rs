//! Command line arguments and their translation into validator options.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fieldguard::{ConfigOptions, ErrorDisplay, RuleSpec, rules};
use regex::Regex;

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "fieldguard",
    version,
    about = "Validate field values against a set of rules"
)]
pub struct Cli {
    /// Values to validate. Without values, lines are read from stdin.
    pub values: Vec<String>,

    /// Field id shown in feedback.
    #[arg(long, default_value = "field")]
    pub field: String,

    /// JSON file with validator options.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Message locale (en, lt).
    #[arg(long)]
    pub locale: Option<String>,

    /// Visual theme (default, minimal, material).
    #[arg(long)]
    pub theme: Option<String>,

    /// Only validate at end of input instead of on every line.
    #[arg(long)]
    pub no_real_time: bool,

    /// Do not print the plain-text error listing.
    #[arg(long)]
    pub no_accessibility: bool,

    /// Where the first error is shown.
    #[arg(long, value_enum)]
    pub error_display: Option<DisplayArg>,

    /// Override a message template.
    #[arg(long = "message", value_name = "KEY=TEMPLATE", value_parser = parse_key_value)]
    pub messages: Vec<(String, String)>,

    /// The value must not be blank.
    #[arg(long)]
    pub required: bool,

    /// Minimum number of characters.
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum number of characters.
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// The value must be an email address.
    #[arg(long)]
    pub email: bool,

    /// The value must be an absolute URL.
    #[arg(long)]
    pub url: bool,

    /// The value must be a number.
    #[arg(long)]
    pub number: bool,

    /// The value must contain an uppercase letter.
    #[arg(long)]
    pub uppercase: bool,

    /// The value must be an email address in this domain.
    #[arg(long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// The value must match this regular expression.
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Print each result as a JSON line instead of styled feedback.
    #[arg(long)]
    pub json: bool,

    /// Write debug logs to this file.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DisplayArg {
    Below,
    Inline,
    None,
}

impl From<DisplayArg> for ErrorDisplay {
    fn from(arg: DisplayArg) -> Self {
        match arg {
            DisplayArg::Below => ErrorDisplay::Below,
            DisplayArg::Inline => ErrorDisplay::Inline,
            DisplayArg::None => ErrorDisplay::None,
        }
    }
}

impl Cli {
    /// Options from `--config`, with command line flags taking precedence.
    pub fn config_options(&self) -> Result<ConfigOptions, CliError> {
        let mut options = match &self.config {
            Some(path) => {
                let file = File::open(path).map_err(|source| CliError::ConfigRead {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                    CliError::ConfigParse {
                        path: path.clone(),
                        source,
                    }
                })?
            }
            None => ConfigOptions::default(),
        };

        if let Some(locale) = &self.locale {
            options = options.locale(locale);
        }
        if let Some(theme) = &self.theme {
            options = options.theme(theme);
        }
        if self.no_real_time {
            options = options.real_time(false);
        }
        if self.no_accessibility {
            options = options.accessibility(false);
        }
        if let Some(display) = self.error_display {
            options = options.error_display(display.into());
        }
        for (key, template) in &self.messages {
            options = options.message(key, template);
        }

        Ok(options)
    }

    /// Rules selected by flags, in a fixed order.
    pub fn rule_specs(&self) -> Result<Vec<RuleSpec<String>>, CliError> {
        let mut specs = Vec::new();

        if self.required {
            specs.push(rules::required());
        }
        if let Some(min) = self.min_length {
            specs.push(rules::min_length(min));
        }
        if let Some(max) = self.max_length {
            specs.push(rules::max_length(max));
        }
        if self.email {
            specs.push(rules::email());
        }
        if self.url {
            specs.push(rules::url());
        }
        if self.number {
            specs.push(rules::number());
        }
        if self.uppercase {
            specs.push(rules::uppercase());
        }
        if let Some(domain) = &self.domain {
            specs.push(rules::domain(domain));
        }
        if let Some(pattern) = &self.pattern {
            specs.push(rules::pattern(Regex::new(pattern)?));
        }

        Ok(specs)
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=TEMPLATE, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "fieldguard",
            "--locale",
            "lt",
            "--no-real-time",
            "--error-display",
            "inline",
            "--message",
            "required=Privaloma",
            "value",
        ]);
        let options = cli.config_options().expect("no config file");

        assert_eq!(options.locale, "lt");
        assert!(!options.real_time);
        assert!(options.accessibility);
        assert_eq!(options.error_display, ErrorDisplay::Inline);
        assert_eq!(options.messages["required"], "Privaloma");
        assert_eq!(cli.values, vec!["value".to_string()]);
    }

    #[test]
    fn test_rule_specs_follow_flag_order() {
        let cli = Cli::parse_from([
            "fieldguard",
            "--pattern",
            "^a",
            "--min-length",
            "3",
            "--required",
        ]);
        let names: Vec<_> = cli
            .rule_specs()
            .expect("valid pattern")
            .iter()
            .map(|spec| spec.name().unwrap_or_default().to_string())
            .collect();

        assert_eq!(names, ["required", "minLength", "pattern"]);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let cli = Cli::parse_from(["fieldguard", "--pattern", "("]);
        assert!(matches!(cli.rule_specs(), Err(CliError::Pattern(_))));
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("minLength=At least {min}"),
            Ok(("minLength".to_string(), "At least {min}".to_string()))
        );
        assert!(parse_key_value("=x").is_err());
        assert!(parse_key_value("novalue").is_err());
    }
}
