// src/cli.rs
use thiserror::Error;

use crate::config::RunOptions;
use crate::core::HttpFetcher;
use crate::error::Result;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Run,
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Unknown arg: {0} (try --help)")]
    UnknownArg(String),
}

/// The tool takes no options; anything other than a help flag is rejected.
pub fn parse_args<I>(args: I) -> std::result::Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut cmd = Command::Run;
    for a in args {
        match a.as_str() {
            "-h" | "--help" => cmd = Command::Help,
            _ => return Err(CliError::UnknownArg(a)),
        }
    }
    Ok(cmd)
}

/// One full scrape with the built-in source and output path; prints the report.
pub fn run() -> Result<()> {
    crate::log::init();

    let fetcher = HttpFetcher::new()?;
    let report = crate::runner::run(&RunOptions::default(), &fetcher)?;
    println!("{report}");
    Ok(())
}
