use thiserror::Error;

/// Why a candidate file was kept out of the selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("File type of '{name}' is not allowed (reported type: '{mime_type}')")]
    InvalidType { name: String, mime_type: String },

    #[error("File '{name}' is {size} bytes, exceeding the maximum of {limit} bytes")]
    TooLarge { name: String, size: u64, limit: u64 },
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::InvalidType { .. } => "INVALID_TYPE",
            Rejection::TooLarge { .. } => "FILE_TOO_LARGE",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Index {index} is out of range for a selection of {len} files")]
    IndexOutOfRange { index: usize, len: usize },
}
