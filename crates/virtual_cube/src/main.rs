//! Headless front end for Virtual Cube, a 3x3x3 twisty puzzle simulator.

#[macro_use]
extern crate lazy_static;

mod cli;
mod paths;
mod prefs;

use eyre::Context;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;

    // Initialize logging.
    env_logger::builder()
        .filter_level(match args.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Info,
        })
        .parse_default_env()
        .init();

    let prefs = prefs::Preferences::load(args.prefs.as_deref())
        .context("error loading preferences")?;

    cli::exec(args.subcommand, &prefs)
}
