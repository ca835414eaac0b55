use crate::config::IntakeConfig;
use crate::error::Rejection;
use crate::models::StagedFile;

/// Checks the declared MIME type against the allowlist, falling back to the file name suffix.
///
/// Browsers report unreliable (often empty) MIME types for Word documents on some platforms,
/// so a matching extension is enough on its own.
pub fn is_acceptable(file: &StagedFile, config: &IntakeConfig) -> bool {
    if config
        .allowed_mime_types
        .iter()
        .any(|allowed| *allowed == file.mime_type)
    {
        return true;
    }

    let name = file.name.to_lowercase();
    config
        .allowed_extensions
        .iter()
        .any(|ext| name.ends_with(ext.as_str()))
}

/// Size ceiling is inclusive: a file of exactly `max_file_size` bytes passes
pub fn is_within_size_limit(file: &StagedFile, config: &IntakeConfig) -> bool {
    file.size <= config.max_file_size
}

/// Full admission check. Type is checked before size.
pub fn validate_candidate(file: &StagedFile, config: &IntakeConfig) -> Result<(), Rejection> {
    if !is_acceptable(file, config) {
        return Err(Rejection::InvalidType {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        });
    }

    if !is_within_size_limit(file, config) {
        return Err(Rejection::TooLarge {
            name: file.name.clone(),
            size: file.size,
            limit: config.max_file_size,
        });
    }

    Ok(())
}
