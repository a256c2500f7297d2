//! Application identity from Cargo.toml.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Environment file loaded before the process environment (Next.js style).
pub const DEFAULT_ENV_FILE: &str = ".env.local";

/// Default destination of the `list` command.
pub const DEFAULT_CATALOG_OUTPUT: &str = "groq_models.txt";
