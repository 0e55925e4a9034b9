//! Corten literal resolver CLI
//!
//! Entry point for `corten-lit`. Parses CLI arguments, collects lexemes and
//! delegates to the Inspector.

use clap::Parser as ClapParser;
use literal_cli::{read_lexemes, Cli, CliError, Inspector};
use std::io;
use std::process;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(CliError::NoInput) => {
            eprintln!("Error: {}", CliError::NoInput);
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  corten-lit '\"a\\x41\"' 0x1F null   Resolve literals given as arguments");
            eprintln!("  corten-lit --file <FILE>          Resolve one literal per line");
            eprintln!("  corten-lit --json --file -        Read stdin, print JSON lines");
            eprintln!();
            eprintln!("Run 'corten-lit --help' for more options.");
            process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

/// Returns whether every literal resolved
fn run(cli: &Cli) -> Result<bool, CliError> {
    let mut lexemes = cli.literals.clone();
    if let Some(path) = &cli.file {
        lexemes.extend(read_lexemes(path)?);
    }
    if lexemes.is_empty() {
        return Err(CliError::NoInput);
    }

    let inspector = Inspector::new()
        .with_kind(cli.kind.map(Into::into))
        .with_json(cli.json);

    let stdout = io::stdout();
    let report = inspector.inspect(&lexemes, &mut stdout.lock())?;
    Ok(report.is_success())
}
