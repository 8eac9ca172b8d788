use std::{env, process};

use expense_core::{
    cli::{
        output::{self, OutputPreferences},
        parse_args,
        report::print_report,
        Command, Invocation, USAGE,
    },
    config::{Config, ConfigManager},
    core::{sample::sample_expenses, services::ReportService},
    domain::Expense,
    errors::CliError,
    init,
    utils::{build_info, snapshot},
};

fn main() {
    init();

    let invocation = match parse_args(env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(err) = run(&invocation) {
        output::error(format!("Error: {err}"));
        process::exit(1);
    }
}

fn run(invocation: &Invocation) -> Result<(), CliError> {
    output::set_preferences(OutputPreferences {
        plain: invocation.plain,
    });

    match &invocation.command {
        Command::Version => {
            println!("{}", build_info::current());
        }
        Command::Config => {
            let mut config = load_config()?;
            config.insights = invocation.insight_config(config.insights);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Sample => report(invocation, &sample_expenses())?,
        Command::Report(path) => {
            let expenses = snapshot::load_expenses_from_path(path)?;
            report(invocation, &expenses)?;
        }
    }

    Ok(())
}

fn load_config() -> Result<Config, CliError> {
    Ok(ConfigManager::from_env().load()?)
}

fn report(invocation: &Invocation, expenses: &[Expense]) -> Result<(), CliError> {
    let config = load_config()?;
    let insight_config = invocation.insight_config(config.insights);

    let Some(report) = ReportService::build(expenses, &insight_config)? else {
        if invocation.json {
            println!("null");
        } else {
            output::warning("No expenses recorded yet. Add some to see your statistics.");
        }
        return Ok(());
    };

    if invocation.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &config.currency_symbol);
    }
    Ok(())
}
