#![forbid(unsafe_code)]

//! slidedeck: present a slide deck in the terminal.

use std::process::ExitCode;

use clap::Parser;

mod app;
mod cli;
mod deck_file;
mod logging;
mod render;
mod sample;
mod session;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("slidedeck: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(cli.log_file.as_deref())?;

    let deck = match &cli.deck {
        Some(path) => deck_file::load_deck(path)?,
        None => sample::sample_deck(),
    };
    tracing::info!(slides = deck.len(), "deck loaded");

    app::run(deck)?;
    Ok(())
}
