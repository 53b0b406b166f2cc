mod animation;
mod app;
mod chrome;
mod cli;
mod commands;
mod config;
mod deck;
mod dialogs;
mod input;
mod logging;
mod page;
mod parser;
mod platform;
mod theme;

use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = cli.run() {
        tracing::error!("{e:#}");
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
