// src/bin/cli.rs
use color_eyre::eyre::{Result, eyre};
use pos_tables::cli::{self, Command};

fn main() -> Result<()> {
    color_eyre::install()?;
    pos_tables::log::init();

    match cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))? {
        Command::Help => {
            eprintln!("{}", cli::HELP);
            Ok(())
        }
        Command::Print(args) => cli::run(&args).map_err(|e| eyre!("{e}")),
    }
}
