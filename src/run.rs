//! Process setup: logger and environment, then dispatch to a subcommand.

use std::io;

use clap::CommandFactory;

use crate::cli::{self, Args, Commands};
use crate::core;

/// Initialize env_logger on stderr so it never mixes with report output.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Run the selected subcommand to completion.
pub async fn dispatch(args: Args) {
    if !matches!(args.command, Commands::Completions { .. }) {
        core::config::load_env_file(&args.env_file);
    }

    match args.command {
        Commands::List { output } => core::cli::run_list(&output).await,
        Commands::Test {
            models,
            only,
            skip_extras,
        } => {
            core::cli::run_test(core::cli::TestOptions {
                models_file: models.as_deref(),
                only: &only,
                skip_extras,
            })
            .await
        }
        Commands::Dropdown => core::cli::run_dropdown(),
        Commands::Recommend => core::cli::run_recommend(),
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
        }
    }
}
