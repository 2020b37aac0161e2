use chrono::NaiveDate;
use thiserror::Error;

use crate::services::image::DecodeError;

/// Rejected form input. The user can fix the field and submit again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing name")]
    MissingName,
    #[error("missing photo")]
    MissingPhoto,
    #[error("date of birth {date} must be between {min} and {max}")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}

/// Why a countdown could not be added.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl SubmitError {
    /// Message shown next to the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(ValidationError::MissingName) => {
                "Please enter a name".to_string()
            }
            SubmitError::Validation(ValidationError::MissingPhoto) => {
                "Please upload a photo".to_string()
            }
            SubmitError::Validation(err @ ValidationError::DateOutOfRange { .. }) => {
                err.to_string()
            }
            SubmitError::Decode(err) => format!("Could not read that photo: {err}"),
        }
    }
}
