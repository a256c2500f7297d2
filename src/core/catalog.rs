//! Model lister: fetch the provider catalog once, print it, and dump the ids to a file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::api::{ApiError, CatalogModel, ModelApi};
use crate::core::util::heavy_rule;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] ApiError),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write output: {0}")]
    Console(#[from] io::Error),
}

/// File contents: one id per line, catalog order, duplicates kept.
pub fn render_id_list(models: &[CatalogModel]) -> String {
    models.iter().map(|m| format!("{}\n", m.id)).collect()
}

fn write_model(out: &mut impl Write, model: &CatalogModel) -> io::Result<()> {
    writeln!(out, "✅ {}", model.id)?;
    if let Some(ctx) = model.context_window {
        writeln!(out, "   Context: {}", ctx)?;
    }
    if let Some(owner) = &model.owned_by {
        writeln!(out, "   Owned by: {}", owner)?;
    }
    writeln!(out)
}

/// Fetch the catalog, print every model, then overwrite `output` with the id list.
/// The file is only touched after a successful fetch. Returns the number of models.
pub async fn list_models<A: ModelApi>(
    api: &A,
    output: &Path,
    out: &mut impl Write,
) -> Result<usize, CatalogError> {
    writeln!(out, "\n🔍 Fetching all available Groq models...\n")?;
    writeln!(out, "{}", heavy_rule())?;

    let models = api.list_models().await?;

    writeln!(out, "📊 Total Models Available: {}\n", models.len())?;
    for model in &models {
        write_model(out, model)?;
    }
    writeln!(out, "{}", heavy_rule())?;

    writeln!(out, "\n💾 Saving model list to {}...", output.display())?;
    fs::write(output, render_id_list(&models)).map_err(|source| CatalogError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} model id(s) to {}", models.len(), output.display());
    writeln!(out, "✅ Model list saved to {}", output.display())?;

    Ok(models.len())
}
