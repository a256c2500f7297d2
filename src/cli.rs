//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::app;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  groq-probe list                         Save every available model id to groq_models.txt
  groq-probe list -o models.txt           Save the id list elsewhere
  groq-probe test                         Test every known model with a fixed prompt
  groq-probe test --model qwen/qwen3-32b  Test selected models only
  groq-probe test --models my.json        Test models from a JSON list
  groq-probe dropdown                     Print the front-end dropdown markup
  groq-probe recommend                    Print model recommendations
  groq-probe completions bash             Generate bash completions

ENVIRONMENT:
  GROQ_API_KEY    API key (read from .env.local or the environment)
  GROQ_BASE_URL   API base URL (default https://api.groq.com/openai/v1)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "List and smoke-test the models served by the Groq API",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Env file loaded before the process environment
    #[arg(long, global = true, default_value = app::DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the model catalog and write one id per line to a file
    List {
        /// Output file (overwritten)
        #[arg(short, long, default_value = app::DEFAULT_CATALOG_OUTPUT)]
        output: PathBuf,
    },
    /// Send a fixed prompt to each known model and report which ones work
    Test {
        /// JSON file with the models to test (defaults to the built-in list)
        #[arg(long, value_name = "FILE")]
        models: Option<PathBuf>,
        /// Only test this model id (repeatable)
        #[arg(short = 'm', long = "model", value_name = "ID")]
        only: Vec<String>,
        /// Skip the dropdown, recommendations, and next steps after the summary
        #[arg(long)]
        skip_extras: bool,
    },
    /// Print the front-end dropdown markup for the curated models
    Dropdown,
    /// Print the model recommendations
    Recommend,
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
