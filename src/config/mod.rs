use std::env;

/// Default maximum file size: 10 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Admission configuration for staged files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Maximum file size in bytes, inclusive (default: 10 MiB)
    pub max_file_size: u64,

    /// Declared MIME types that are accepted as-is
    pub allowed_mime_types: Vec<String>,

    /// Lowercase name suffixes, with leading dot, accepted regardless of MIME type
    pub allowed_extensions: Vec<String>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_mime_types: vec![
                "application/pdf".to_string(),
                "application/msword".to_string(),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .to_string(),
            ],
            allowed_extensions: vec![".pdf".to_string(), ".doc".to_string(), ".docx".to_string()],
        }
    }
}

impl IntakeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; missing, unparseable or empty values keep the default
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        Self {
            max_file_size: get("INTAKE_MAX_FILE_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default.max_file_size),

            allowed_mime_types: get("INTAKE_ALLOWED_MIME_TYPES")
                .map(|v| parse_list(&v, normalize_mime))
                .filter(|list| !list.is_empty())
                .unwrap_or(default.allowed_mime_types),

            allowed_extensions: get("INTAKE_ALLOWED_EXTENSIONS")
                .map(|v| parse_list(&v, normalize_extension))
                .filter(|list| !list.is_empty())
                .unwrap_or(default.allowed_extensions),
        }
    }
}

fn parse_list(raw: &str, normalize: fn(&str) -> String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(normalize)
        .collect()
}

fn normalize_mime(raw: &str) -> String {
    raw.to_lowercase()
}

/// "PDF" and ".pdf" both become ".pdf"
pub fn normalize_extension(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}
