//! Application run modes: logger init, generate, inspect, completions.

use std::io::{self, Write};

use clap::CommandFactory;

use crate::cli::{self, Args, GenerateArgs};
use crate::core;
use crate::core::builder::build_records;
use crate::core::config::Config;
use crate::core::inspect::{RecordFilter, Summary, filter_records};
use crate::core::sources;
use crate::core::writer;

type RunResult = Result<(), Box<dyn std::error::Error>>;

/// Initialize env_logger on stderr so JSON on stdout stays clean.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Dispatch to the selected subcommand; no subcommand means `generate`.
pub fn run(args: Args) -> RunResult {
    log::debug!("{} {}", core::app::NAME, core::app::VERSION);
    match args.command {
        None => run_generate(&args.generate),
        Some(cli::Commands::Generate(generate)) => run_generate(&generate),
        Some(cli::Commands::Inspect {
            file,
            kind,
            difficulty,
            language,
            query,
            list,
        }) => {
            let filter = RecordFilter {
                kind,
                difficulty,
                language,
                query,
            };
            run_inspect(&file, &filter, list)
        }
        Some(cli::Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
            Ok(())
        }
    }
}

/// Merge CLI flags over the environment-derived config.
fn resolve_config(generate: &GenerateArgs) -> Result<Config, core::config::ConfigError> {
    let mut config = core::config::load()?;
    if let Some(output) = &generate.output {
        config.output = output.clone();
    }
    if let Some(id_start) = generate.id_start {
        config.build.id_start = id_start;
    }
    if let Some(difficulty) = generate.difficulty {
        config.build.difficulty = difficulty;
    }
    if let Some(language) = generate.language {
        config.build.language = language;
    }
    Ok(config)
}

/// Build records from the configured prompt lists and write them out.
pub fn run_generate(generate: &GenerateArgs) -> RunResult {
    let config = resolve_config(generate)?;
    let defaults = sources::default_prompts();

    let truths = match &generate.truths {
        Some(path) => sources::load_prompt_list(path)?,
        None => defaults.truths.clone(),
    };
    let dares = match &generate.dares {
        Some(path) => sources::load_prompt_list(path)?,
        None => defaults.dares.clone(),
    };
    log::debug!("{} truths, {} dares", truths.len(), dares.len());

    let records = build_records(&truths, &dares, &config.build)?;

    if generate.stdout {
        let json = writer::to_json(&records)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        stdout.flush()?;
    } else {
        writer::write_records(&config.output, &records)?;
    }
    Ok(())
}

/// Read a record file, print its summary and optionally the matching records.
pub fn run_inspect(file: &std::path::Path, filter: &RecordFilter, list: bool) -> RunResult {
    let records = writer::read_records(file)?;
    let selected = filter_records(&records, filter);
    log::info!(
        "{} of {} records match in {}",
        selected.len(),
        records.len(),
        file.display()
    );

    let summary = Summary::from_records(selected.iter().copied());
    if !summary.duplicate_ids.is_empty() {
        log::warn!(
            "{} duplicate id(s) in {}",
            summary.duplicate_ids.len(),
            file.display()
        );
    }
    println!("{}", summary.render());

    if list {
        for r in &selected {
            println!(
                "{:>6}  {:<5}  {:<7}  {:<2}  {}",
                r.id, r.kind, r.difficulty, r.language, r.content
            );
        }
    }
    Ok(())
}
