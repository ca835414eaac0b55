use serde::{Deserialize, Serialize};

/// A file picked by the user and held client-side before submission.
///
/// Equality for staging purposes is `name` + `size` only, see [`StagedFile::is_duplicate_of`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFile {
    pub name: String,
    pub size: u64,
    /// Platform-reported MIME type. May be empty or wrong.
    #[serde(rename = "type", default)]
    pub mime_type: String,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    pub fn is_duplicate_of(&self, other: &StagedFile) -> bool {
        self.name == other.name && self.size == other.size
    }
}

/// One rendered row of the staged-file list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntryView {
    pub index: usize,
    pub name: String,
    pub size_label: String,
}
