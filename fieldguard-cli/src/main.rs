mod args;
mod error;
mod terminal;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use fieldguard::{FieldBinding, Trigger, ValidationResult, Validator};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use crate::args::Cli;
use crate::error::CliError;
use crate::terminal::TerminalField;

const RESET_COMMAND: &str = ":reset";
const QUIT_COMMAND: &str = ":quit";

const EXIT_VALID: u8 = 0;
const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    let outcome = run(&cli);
    if let Err(e) = &outcome {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
    }
    ExitCode::from(exit_status(&outcome))
}

fn exit_status(outcome: &Result<bool, CliError>) -> u8 {
    match outcome {
        Ok(true) => EXIT_VALID,
        Ok(false) => EXIT_INVALID,
        Err(_) => EXIT_ERROR,
    }
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
        }
        None => TermLogger::init(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }
    Ok(())
}

/// Returns whether every validated value passed.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let options = cli.config_options()?;
    let field = TerminalField::new(&cli.field, io::stdout()).quiet(cli.json);
    let mut validator = Validator::new(field, options)?;
    for spec in cli.rule_specs()? {
        validator.add_rule(spec)?;
    }
    log::info!(
        "Validating '{}' with {} rules",
        cli.field,
        validator.rules().len()
    );
    log::debug!(
        "Events: {:?}, palette: {:?}",
        validator.binding().listeners(),
        validator.binding().palette()
    );

    let mut out = io::stdout();
    let all_valid = if cli.values.is_empty() {
        run_interactive(io::stdin().lock(), cli.json, &mut validator, &mut out)?
    } else {
        run_batch(&cli.values, cli.json, &mut validator, &mut out)?
    };

    validator.destroy();
    Ok(all_valid)
}

fn run_batch<W: Write>(
    values: &[String],
    json: bool,
    validator: &mut Validator<TerminalField<W>>,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    let mut all_valid = true;
    for value in values {
        validator.binding_mut().set_value(value.clone());
        let result = validator.validate()?;
        all_valid &= result.is_valid();
        if json {
            write_json(out, validator.binding().id(), value, &result)?;
        }
    }
    Ok(all_valid)
}

/// Reads values line by line from `input`.
///
/// With real-time validation every line is an input event. Otherwise the
/// last line is validated once input ends. Returns whether every validated
/// value passed, including values validated before a `:reset`.
fn run_interactive<W: Write>(
    input: impl BufRead,
    json: bool,
    validator: &mut Validator<TerminalField<W>>,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    let mut all_valid = true;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            QUIT_COMMAND => break,
            RESET_COMMAND => {
                validator.reset();
                continue;
            }
            _ => {}
        }

        validator.binding_mut().set_value(line.clone());
        if let Some(result) = validator.handle_event(Trigger::Input)? {
            all_valid &= result.is_valid();
            if json {
                write_json(out, validator.binding().id(), &line, &result)?;
            }
        }
    }

    if !validator.is_listening() {
        log::debug!("Input ended, validating final value");
        let value = validator.binding().value();
        let result = validator.validate()?;
        all_valid &= result.is_valid();
        if json {
            write_json(out, validator.binding().id(), &value, &result)?;
        }
    }

    Ok(all_valid)
}

fn write_json(
    out: &mut impl Write,
    field: &str,
    value: &str,
    result: &ValidationResult,
) -> Result<(), CliError> {
    let line = serde_json::json!({
        "field": field,
        "value": value,
        "result": result,
    });
    serde_json::to_writer(&mut *out, &line)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
