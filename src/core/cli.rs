//! Subcommand bodies: `list`, `test`, `dropdown`, `recommend`.
//!
//! Report text goes to stdout; diagnostics go to stderr.

use std::io::{self, Write};
use std::path::Path;

use crate::core::api::GroqClient;
use crate::core::catalog;
use crate::core::config;
use crate::core::dropdown;
use crate::core::models;
use crate::core::probe;
use crate::core::recommendations;
use crate::core::report;

/// Options for the `test` command.
pub struct TestOptions<'a> {
    pub models_file: Option<&'a Path>,
    pub only: &'a [String],
    pub skip_extras: bool,
}

/// Run the `list` command. API and write failures are printed, not turned into an exit code.
pub async fn run_list(output: &Path) {
    let config = config::load_lenient();
    let client = GroqClient::new(&config);
    let mut stdout = io::stdout().lock();

    if let Err(e) = catalog::list_models(&client, output, &mut stdout).await {
        log::error!("Listing models failed: {}", e);
        let _ = writeln!(stdout, "❌ Error: {}", e);
    }
}

/// Run the `test` command. Exits with status 1 when the API key is missing,
/// before any request is sent.
pub async fn run_test(options: TestOptions<'_>) {
    let config = config::load().unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    });

    let descriptors = models::load_descriptors(options.models_file).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let descriptors = models::select_models(descriptors, options.only);
    if descriptors.is_empty() {
        eprintln!("Error: no models selected");
        std::process::exit(1);
    }

    let client = GroqClient::new(&config);
    if let Err(e) = test_and_report(&client, &descriptors, options.skip_extras).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn test_and_report(
    client: &GroqClient,
    descriptors: &[models::ModelDescriptor],
    skip_extras: bool,
) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    report::write_run_header(&mut stdout)?;

    let mut console_error = None;
    let summary = probe::run_all(client, descriptors, |descriptor, outcome| {
        if console_error.is_none()
            && let Err(e) = report::write_outcome(&mut stdout, descriptor, outcome)
        {
            console_error = Some(e);
        }
    })
    .await;
    if let Some(e) = console_error {
        return Err(e);
    }

    report::write_summary(&mut stdout, &summary)?;
    if !skip_extras {
        dropdown::write_dropdown(&mut stdout, dropdown::dropdown_entries())?;
        recommendations::write_recommendations(
            &mut stdout,
            recommendations::recommendation_sheet(),
        )?;
        report::write_next_steps(&mut stdout)?;
    }
    stdout.flush()
}

/// Run the `dropdown` command.
pub fn run_dropdown() {
    let mut stdout = io::stdout().lock();
    if let Err(e) = dropdown::write_dropdown(&mut stdout, dropdown::dropdown_entries()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Run the `recommend` command.
pub fn run_recommend() {
    let mut stdout = io::stdout().lock();
    if let Err(e) =
        recommendations::write_recommendations(&mut stdout, recommendations::recommendation_sheet())
    {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
