pub mod effects;
pub mod machines;
pub mod models;

// Re-export models
pub use models::{ContactForm, PhotoFile, UploadItem, VehicleForm};

// Re-export machines
pub use machines::photos::{PhotoEvent, PhotoSet, MAX_PHOTOS};
pub use machines::{Step, SubmissionWizard, ValidationError};

// Re-export effects
pub use effects::{publish, PublishError, PublishReceipt};
