//! # tod-gen - truth-or-dare challenge generator
//!
//! Builds numbered challenge records from lists of truth and dare prompts and
//! writes them as a pretty-printed JSON array.
//!
//! ## Features
//! - Default run writes `truth_or_dare_questions_simple_MY.json`
//! - Id origin and tags configurable by flag or environment
//! - `inspect` to summarize and filter an existing record file
//! - Shell completions

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

fn main() {
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    if let Err(e) = run::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
