// src/bin/cli.rs
use coronav::cli::{self, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => eprintln!("{}", cli::HELP),
        Command::Run => cli::run()?,
    }
    Ok(())
}
