//! Model descriptors, loaded from `config/models.json` (embedded at compile time)
//! or from a user-supplied JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// One model to test. The limit and context strings are declared metadata,
/// shown as-is and never checked against the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub context_window: String,
    pub free_tier_limit: String,
    pub description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("Failed to read model list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Model list {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Model list {0} is empty")]
    Empty(PathBuf),
}

fn parse_builtin() -> Vec<ModelDescriptor> {
    let json = include_str!("../../../config/models.json");
    serde_json::from_str(json).expect("models.json is validated by build.rs")
}

static BUILTIN: OnceLock<Vec<ModelDescriptor>> = OnceLock::new();

/// The embedded model list, in declaration order.
pub fn builtin_descriptors() -> &'static [ModelDescriptor] {
    BUILTIN.get_or_init(parse_builtin)
}

/// Load descriptors from `path`, or the embedded list when `path` is None.
pub fn load_descriptors(path: Option<&Path>) -> Result<Vec<ModelDescriptor>, DescriptorError> {
    let Some(path) = path else {
        return Ok(builtin_descriptors().to_vec());
    };
    let data = fs::read_to_string(path).map_err(|source| DescriptorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let descriptors: Vec<ModelDescriptor> =
        serde_json::from_str(&data).map_err(|source| DescriptorError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if descriptors.is_empty() {
        return Err(DescriptorError::Empty(path.to_path_buf()));
    }
    log::info!("Loaded {} model(s) from {}", descriptors.len(), path.display());
    Ok(descriptors)
}

/// Keep only descriptors whose id is in `ids`, preserving list order.
/// An empty `ids` keeps everything. Unknown ids are logged and ignored.
pub fn select_models(descriptors: Vec<ModelDescriptor>, ids: &[String]) -> Vec<ModelDescriptor> {
    if ids.is_empty() {
        return descriptors;
    }
    for id in ids {
        if !descriptors.iter().any(|d| &d.id == id) {
            log::warn!("Model {} is not in the model list; skipping", id);
        }
    }
    descriptors
        .into_iter()
        .filter(|d| ids.contains(&d.id))
        .collect()
}
