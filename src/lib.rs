pub mod config;
pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

pub use config::IntakeConfig;
pub use error::{Rejection, SelectionError};
pub use handlers::upload_area::{Effect, UploadArea, UploadEvent, WidgetView};
pub use models::StagedFile;
pub use services::selection::{AdmissionReport, FileSelectionManager, SelectionObserver};
