//! Output artifact writing.

use std::fs;
use std::path::{Path, PathBuf};

use loupe_meta::MetaDocument;

use crate::registry::registry_module;

/// Paths of the artifacts written by [`write_outputs`].
#[derive(Debug)]
pub struct WrittenArtifacts {
    pub document_path: PathBuf,
    pub registry_path: PathBuf,
}

/// Errors that make the output location unusable.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("output directory {path} is not writable: {message}")]
    OutputDir { path: String, message: String },

    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("failed to serialize metadata document: {0}")]
    Serialize(String),
}

/// Write the metadata document and the registry module into `output_dir`.
pub fn write_outputs(
    output_dir: &Path,
    document: &MetaDocument,
) -> Result<WrittenArtifacts, EmitError> {
    fs::create_dir_all(output_dir).map_err(|e| EmitError::OutputDir {
        path: output_dir.display().to_string(),
        message: e.to_string(),
    })?;

    let document_path = output_dir.join("components.json");
    let json =
        serde_json::to_string_pretty(document).map_err(|e| EmitError::Serialize(e.to_string()))?;
    fs::write(&document_path, json).map_err(|e| EmitError::Write {
        path: document_path.display().to_string(),
        message: e.to_string(),
    })?;

    let registry_path = output_dir.join("registry.ts");
    let module = registry_module(&document.components, &document.path_alias);
    fs::write(&registry_path, module).map_err(|e| EmitError::Write {
        path: registry_path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(WrittenArtifacts {
        document_path,
        registry_path,
    })
}
