//! Appscreen CLI - LLM relevance screening for scraped app metadata.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::screen::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
