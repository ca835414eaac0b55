use crate::models::StagedFile;
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Builds a staging candidate from a file on disk.
///
/// The MIME type is sniffed from the content; unknown content gives an empty type,
/// leaving admission to the extension check.
pub fn stage_path(path: &Path) -> Result<StagedFile> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

    if !metadata.is_file() {
        bail!("{} is not a regular file", path.display());
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;

    let mime_type = sniff_mime_type(path)?;
    tracing::debug!(
        "Sniffed '{}' as '{}' ({} bytes)",
        name,
        mime_type,
        metadata.len()
    );

    Ok(StagedFile::new(name, metadata.len(), mime_type))
}

/// Stages each path in order. Unreadable paths are logged and skipped.
pub fn stage_paths(paths: &[PathBuf]) -> Vec<StagedFile> {
    paths
        .iter()
        .filter_map(|path| match stage_path(path) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!("Skipping {}: {:#}", path.display(), e);
                None
            }
        })
        .collect()
}

fn sniff_mime_type(path: &Path) -> Result<String> {
    let kind = infer::get_from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(kind
        .and_then(|k| k.mime_type().parse::<mime::Mime>().ok())
        .map(|m| m.essence_str().to_string())
        .unwrap_or_default())
}
