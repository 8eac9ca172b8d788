use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::config::InsightConfig;
use crate::errors::CliError;

pub const USAGE: &str = "Usage: expense_core_cli <command> [options]\n\
     Commands:\n  \
     sample                 report on the bundled sample expenses\n  \
     report <file.json>     report on a JSON array of expenses\n  \
     config                 print the effective configuration\n  \
     version                print build metadata\n\
     Options:\n  \
     --json                 print the report as JSON\n  \
     --plain                disable colored output\n  \
     --days <n>             days used for the daily average\n  \
     --threshold <amount>   budget threshold";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Sample,
    Report(PathBuf),
    Config,
    Version,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub json: bool,
    pub plain: bool,
    pub days_in_period: Option<u32>,
    pub budget_threshold: Option<Decimal>,
}

impl Invocation {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn insight_config(&self, base: InsightConfig) -> InsightConfig {
        InsightConfig {
            days_in_period: self.days_in_period.unwrap_or(base.days_in_period),
            budget_threshold: self.budget_threshold.unwrap_or(base.budget_threshold),
        }
    }
}

fn option_value(flag: &str, value: Option<String>) -> Result<String, CliError> {
    value.ok_or_else(|| CliError::Input(format!("`{flag}` expects a value")))
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut positional = Vec::new();
    let mut json = false;
    let mut plain = false;
    let mut days_in_period = None;
    let mut budget_threshold = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--plain" => plain = true,
            "--days" => {
                let raw = option_value("--days", args.next())?;
                let days = raw
                    .parse::<u32>()
                    .map_err(|_| CliError::Input(format!("invalid day count `{raw}`")))?;
                days_in_period = Some(days);
            }
            "--threshold" => {
                let raw = option_value("--threshold", args.next())?;
                let threshold = raw
                    .parse::<Decimal>()
                    .map_err(|_| CliError::Input(format!("invalid threshold `{raw}`")))?;
                budget_threshold = Some(threshold);
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::Input(format!("unknown option `{flag}`")));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("sample") => Command::Sample,
        Some("report") => {
            let path = positional
                .next()
                .ok_or_else(|| CliError::Input("`report` expects a file path".into()))?;
            Command::Report(PathBuf::from(path))
        }
        Some("config") => Command::Config,
        Some("version") => Command::Version,
        Some(other) => return Err(CliError::Input(format!("unknown command `{other}`"))),
        None => return Err(CliError::Input("missing command".into())),
    };
    if let Some(extra) = positional.next() {
        return Err(CliError::Input(format!("unexpected argument `{extra}`")));
    }

    Ok(Invocation {
        command,
        json,
        plain,
        days_in_period,
        budget_threshold,
    })
}
