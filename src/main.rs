mod cli;
mod config;
mod engine;
mod error;
mod logger;
mod matcher;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::Cli;
use engine::ReplacementEngine;
use error::Error;
use matcher::Matcher;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose();

    if let Err(e) = logger::init(verbose) {
        eprintln!("{} {:#}", "Warning:".yellow(), e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            report_fatal(err, verbose);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = cli.into_config()?;

    let pattern = config.load_pattern()?;
    let replacement = config.load_replacement()?;

    let matcher = Matcher::compile(&pattern, config.mode, config.defaults)?;
    let engine = ReplacementEngine::new(&matcher, &replacement, config.verbose);
    engine.run(&config.targets)?;

    Ok(())
}

/// Print a short diagnostic, the full cause chain when verbose, then the
/// usage text. The exit code has already been chosen from the error kind.
fn report_fatal(err: Error, verbose: bool) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    if verbose {
        eprintln!("\n{:?}", anyhow::Error::new(err));
    }
    eprintln!();
    let _ = Cli::command().print_help();
}
