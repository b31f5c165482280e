//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::record::{ChallengeType, Difficulty, Language};

const AFTER_HELP: &str = "\
EXAMPLES:
  tod-gen                                 Write truth_or_dare_questions_simple_MY.json
  tod-gen --id-start 1 --language en      Number from 1, tag records EN
  tod-gen --truths t.json --dares d.json  Use prompt lists from JSON arrays
  tod-gen --stdout                        Print the JSON instead of writing a file
  tod-gen inspect out.json --type dare    Summarize and filter an existing file
  tod-gen completions bash                Generate bash completions

ENVIRONMENT:
  TOD_OUTPUT, TOD_ID_START, TOD_DIFFICULTY, TOD_LANGUAGE set defaults (flags win).
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate truth-or-dare challenge records as JSON",
    after_help = AFTER_HELP,
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the default `generate` action when no subcommand is given
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(ClapArgs, Clone, Debug, Default)]
pub struct GenerateArgs {
    /// Output file (default: truth_or_dare_questions_simple_MY.json)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// First id to assign
    #[arg(long)]
    pub id_start: Option<u64>,

    /// Difficulty tag stamped on every record
    #[arg(long, value_enum, ignore_case = true)]
    pub difficulty: Option<Difficulty>,

    /// Language tag stamped on every record
    #[arg(long, value_enum, ignore_case = true)]
    pub language: Option<Language>,

    /// JSON array of truth prompts (replaces the built-in list)
    #[arg(long, value_name = "FILE")]
    pub truths: Option<PathBuf>,

    /// JSON array of dare prompts (replaces the built-in list)
    #[arg(long, value_name = "FILE")]
    pub dares: Option<PathBuf>,

    /// Print the JSON to stdout instead of writing the output file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build records and write the JSON file (the default action)
    Generate(GenerateArgs),
    /// Summarize an existing record file
    Inspect {
        /// Record file to read
        file: PathBuf,
        /// Only records of this type
        #[arg(long = "type", value_enum, ignore_case = true)]
        kind: Option<ChallengeType>,
        /// Only records with this difficulty
        #[arg(long, value_enum, ignore_case = true)]
        difficulty: Option<Difficulty>,
        /// Only records with this language
        #[arg(long, value_enum, ignore_case = true)]
        language: Option<Language>,
        /// Case-insensitive match on id or content
        #[arg(long)]
        query: Option<String>,
        /// Print each matching record after the summary
        #[arg(long)]
        list: bool,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_default_generate() {
        let args = Args::try_parse_from(["tod-gen"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.generate.output.is_none());
        assert!(!args.generate.stdout);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn parses_generate_flags_case_insensitively() {
        let args = Args::try_parse_from([
            "tod-gen",
            "generate",
            "--id-start",
            "10",
            "--difficulty",
            "EXTREME",
            "--language",
            "cn",
            "-vv",
        ])
        .unwrap();
        let Some(Commands::Generate(generate)) = args.command else {
            panic!("expected generate subcommand");
        };
        assert_eq!(generate.id_start, Some(10));
        assert_eq!(generate.difficulty, Some(Difficulty::Extreme));
        assert_eq!(generate.language, Some(Language::Cn));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn stdout_conflicts_with_output() {
        assert!(Args::try_parse_from(["tod-gen", "--stdout", "-o", "x.json"]).is_err());
    }

    #[test]
    fn top_level_generate_flags_reject_subcommand() {
        assert!(Args::try_parse_from(["tod-gen", "-o", "custom.json", "generate"]).is_err());
        assert!(Args::try_parse_from(["tod-gen", "--stdout", "inspect", "f.json"]).is_err());
    }

    #[test]
    fn subcommand_keeps_its_own_output_flag() {
        let args =
            Args::try_parse_from(["tod-gen", "generate", "-o", "custom.json", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);
        match args.command {
            Some(Commands::Generate(generate)) => {
                assert_eq!(generate.output, Some(PathBuf::from("custom.json")))
            }
            _ => panic!("expected generate subcommand"),
        }
    }

    #[test]
    fn inspect_takes_type_filter() {
        let args =
            Args::try_parse_from(["tod-gen", "inspect", "f.json", "--type", "dare", "-q"]).unwrap();
        match args.command {
            Some(Commands::Inspect { kind, .. }) => assert_eq!(kind, Some(ChallengeType::Dare)),
            _ => panic!("expected inspect subcommand"),
        }
        assert_eq!(args.log_level(), "error");
    }
}
