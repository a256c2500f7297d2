//! # groq-probe
//!
//! Lists the models served by the Groq API and smoke-tests each known model
//! with a fixed prompt.
//!
//! ## Commands
//! - `list`: save the provider's model catalog to `groq_models.txt`
//! - `test`: probe every known model, then print a summary, dropdown markup and recommendations
//! - `dropdown` / `recommend`: print the static front-end text on its own

mod cli;
mod core;
mod run;

use clap::Parser;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    run::init_logger(&args);
    run::dispatch(args).await;
}
