//! Build script: validates the embedded JSON tables under `config/` at compile time.

use std::path::PathBuf;

#[derive(serde::Deserialize)]
#[allow(dead_code)]
struct DescriptorEntry {
    id: String,
    name: String,
    context_window: String,
    free_tier_limit: String,
    description: String,
}

#[derive(serde::Deserialize)]
#[allow(dead_code)]
struct DropdownEntry {
    id: String,
    emoji: String,
    label: String,
    limit: String,
}

#[derive(serde::Deserialize)]
#[allow(dead_code)]
struct RecommendationEntry {
    emoji: String,
    title: String,
    model: String,
    highlights: Vec<String>,
}

#[derive(serde::Deserialize)]
#[allow(dead_code)]
struct RecommendationSheet {
    picks: Vec<RecommendationEntry>,
    setup: Vec<String>,
}

fn read_config(manifest_dir: &str, name: &str) -> String {
    let path: PathBuf = [manifest_dir, "config", name].iter().collect();
    println!("cargo:rerun-if-changed={}", path.display());
    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. {} must exist and be valid.",
            path.display(),
            e,
            name
        )
    })
}

fn validate<T: serde::de::DeserializeOwned>(name: &str, json: &str) -> T {
    serde_json::from_str(json).unwrap_or_else(|e| {
        panic!("{} is invalid JSON: {}. Fix the file and rebuild.", name, e)
    })
}

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");

    let models: Vec<DescriptorEntry> =
        validate("models.json", &read_config(&manifest_dir, "models.json"));
    if models.is_empty() {
        panic!("models.json must list at least one model");
    }

    let _: Vec<DropdownEntry> =
        validate("dropdown.json", &read_config(&manifest_dir, "dropdown.json"));
    let _: RecommendationSheet = validate(
        "recommendations.json",
        &read_config(&manifest_dir, "recommendations.json"),
    );
}
