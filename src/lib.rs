pub mod config;
pub mod dto;
pub mod error;
pub mod i18n;
pub mod models;
pub mod services;
pub mod utils;

pub use crate::error::{Error, Result};
pub use crate::services::application_service::{
    ApplicationForm, FormErrors, Notice, SubmissionState, SubmitOutcome,
};
pub use crate::services::submission_service::{ApplicationSubmitter, Submitter};
