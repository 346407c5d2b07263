//! Listing submission wizard
//! Pure decision logic - NO IO, only step transitions and validation gates
//!
//! Four linear steps with forward navigation gated per step; backward
//! navigation is always permitted. Publishing happens in `effects` and
//! re-validates everything first.

pub mod photos;

use std::sync::{Arc, Mutex};

use chrono::{Datelike, Utc};
use thiserror::Error;

use crate::common::utils::looks_like_uk_postcode;
use crate::domains::submission::models::{ContactForm, PhotoFile, UploadItem, VehicleForm};
use photos::{PhotoEvent, PhotoSet};

/// Wizard steps, linear: Vehicle -> Photos -> Contact -> Review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Vehicle,
    Photos,
    Contact,
    Review,
}

impl Step {
    /// 1-based step number for display.
    pub fn number(self) -> u8 {
        match self {
            Step::Vehicle => 1,
            Step::Photos => 2,
            Step::Contact => 3,
            Step::Review => 4,
        }
    }

    fn forward(self) -> Step {
        match self {
            Step::Vehicle => Step::Photos,
            Step::Photos => Step::Contact,
            Step::Contact | Step::Review => Step::Review,
        }
    }

    fn backward(self) -> Step {
        match self {
            Step::Vehicle | Step::Photos => Step::Vehicle,
            Step::Contact => Step::Photos,
            Step::Review => Step::Contact,
        }
    }
}

/// A failed validation gate. `Display` carries the message shown to the
/// user; rules are checked in a fixed order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Add make and model.")]
    MakeModelMissing,
    #[error("Enter a valid year.")]
    InvalidYear,
    #[error("Enter a valid price.")]
    InvalidPrice,
    #[error("Add at least one photo.")]
    NoPhotos,
    #[error("Add a contact name.")]
    ContactNameMissing,
    #[error("Add a phone number.")]
    PhoneMissing,
    #[error("Add a postcode.")]
    PostcodeMissing,
    #[error("Enter a valid UK postcode (e.g. SW1A 1AA).")]
    InvalidPostcode,
}

/// The four-step submission wizard.
///
/// Forms are plain fields the caller edits directly; the photo list sits
/// behind its own lock so upload-progress callbacks and user reorders
/// serialise against the same state.
pub struct SubmissionWizard {
    step: Step,
    pub vehicle: VehicleForm,
    pub contact: ContactForm,
    photos: Arc<Mutex<PhotoSet>>,
}

impl SubmissionWizard {
    pub fn new() -> Self {
        Self {
            step: Step::Vehicle,
            vehicle: VehicleForm::default(),
            contact: ContactForm::default(),
            photos: Arc::new(Mutex::new(PhotoSet::new())),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Advance past the current step if its gate passes.
    pub fn next(&mut self) -> Result<Step, ValidationError> {
        self.validate_step(self.step)?;
        self.step = self.step.forward();
        Ok(self.step)
    }

    /// Go back one step; always permitted.
    pub fn back(&mut self) -> Step {
        self.step = self.step.backward();
        self.step
    }

    // -------------------------------------------------------------------------
    // Photo management (step 2 state, persists across step navigation)
    // -------------------------------------------------------------------------

    pub fn add_photos(&self, files: Vec<PhotoFile>) {
        self.photos.lock().unwrap().apply(PhotoEvent::Append(files));
    }

    pub fn move_photo(&self, from: usize, to: usize) {
        self.photos
            .lock()
            .unwrap()
            .apply(PhotoEvent::Move { from, to });
    }

    pub fn set_cover(&self, index: usize) {
        self.photos
            .lock()
            .unwrap()
            .apply(PhotoEvent::SetCover { index });
    }

    /// Snapshot of the pending uploads.
    pub fn photos(&self) -> Vec<UploadItem> {
        self.photos.lock().unwrap().items().to_vec()
    }

    /// Shared handle for the publish effect's progress callbacks.
    pub(crate) fn photos_handle(&self) -> Arc<Mutex<PhotoSet>> {
        Arc::clone(&self.photos)
    }

    // -------------------------------------------------------------------------
    // Validation gates
    // -------------------------------------------------------------------------

    /// Check one step's gate. Rules run in a fixed order; the first
    /// failure is returned. (The step-1 category rule holds by
    /// construction: the form's category is a non-optional enum.)
    pub fn validate_step(&self, step: Step) -> Result<(), ValidationError> {
        match step {
            Step::Vehicle => {
                if self.vehicle.make.trim().is_empty() || self.vehicle.model.trim().is_empty() {
                    return Err(ValidationError::MakeModelMissing);
                }
                let current_year = Utc::now().year();
                match self.vehicle.year_value() {
                    Some(year) if (1900..=current_year + 1).contains(&year) => {}
                    _ => return Err(ValidationError::InvalidYear),
                }
                match self.vehicle.price_value() {
                    Some(price) if price > 0.0 => {}
                    _ => return Err(ValidationError::InvalidPrice),
                }
                Ok(())
            }
            Step::Photos => {
                if self.photos.lock().unwrap().is_empty() {
                    return Err(ValidationError::NoPhotos);
                }
                Ok(())
            }
            Step::Contact => {
                if self.contact.name.trim().is_empty() {
                    return Err(ValidationError::ContactNameMissing);
                }
                if self.contact.phone.trim().is_empty() {
                    return Err(ValidationError::PhoneMissing);
                }
                if self.contact.postcode.trim().is_empty() {
                    return Err(ValidationError::PostcodeMissing);
                }
                if !looks_like_uk_postcode(&self.contact.postcode) {
                    return Err(ValidationError::InvalidPostcode);
                }
                Ok(())
            }
            Step::Review => Ok(()),
        }
    }

    /// Re-validate steps 1-3 in order; first failure wins.
    pub fn validate_all(&self) -> Result<(), ValidationError> {
        self.validate_step(Step::Vehicle)?;
        self.validate_step(Step::Photos)?;
        self.validate_step(Step::Contact)?;
        Ok(())
    }

    /// Reset everything to initial values (after a successful publish).
    pub fn reset(&mut self) {
        self.step = Step::Vehicle;
        self.vehicle = VehicleForm::default();
        self.contact = ContactForm::default();
        self.photos.lock().unwrap().clear();
    }
}

impl Default for SubmissionWizard {
    fn default() -> Self {
        Self::new()
    }
}
