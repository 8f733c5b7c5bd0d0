//! `minargs`, tokenize a string of arguments and print the result as JSON.

mod cli;
mod usage;

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::Cli;

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    if cli.help {
        print!("{}", usage::render());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(Some(json)) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("Usage error: no args passed");
            println!();
            print!("{}", usage::render());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse the input and render the result, or `None` when there is no input at all.
fn run(cli: &Cli) -> Result<Option<String>> {
    let Some(input) = read_input(cli)? else {
        return Ok(None);
    };

    let options = cli.options();

    let parsed = if cli.json {
        let value: serde_json::Value =
            serde_json::from_str(&input).context("input is not a valid JSON document")?;
        minargs::parse_value(&value, &options)?
    } else {
        let argv = minargs::split(&input);
        tracing::debug!(tokens = argv.len(), "split input");
        minargs::parse(&argv, &options)?
    };

    let json = serde_json::to_string_pretty(&parsed).context("failed to serialize result")?;
    Ok(Some(json))
}

fn read_input(cli: &Cli) -> Result<Option<String>> {
    if let Some(args) = &cli.args {
        return Ok(Some(args.clone()));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut data = String::new();
    stdin
        .read_to_string(&mut data)
        .context("failed to read standard input")?;

    Ok(Some(data))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
