use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

mod forms;
mod submitter;
pub use forms::*;
pub use submitter::*;

pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const INVALID_MESSAGE: &str = "Please correct the highlighted fields.";

/// Field name to the message shown under that field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),
}

pub trait Form {
    const SUCCESS_MESSAGE: &'static str;

    fn validate(&self) -> Result<(), FieldErrors>;

    fn submission(&self) -> Submission;
}

/// Validates and submits `form`. The form is only borrowed so the caller
/// keeps its data when the submission fails.
pub async fn submit<F, S>(submitter: &S, form: &F) -> Result<Receipt, Error>
where
    F: Form,
    S: Submitter + Sync,
{
    form.validate().map_err(Error::Invalid)?;
    submitter.submit(form.submission()).await
}

/// The banner shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub fields: FieldErrors,
}

impl Status {
    pub fn from_outcome<F: Form>(outcome: &Result<Receipt, Error>) -> Self {
        match outcome {
            Ok(receipt) => Self {
                ok: true,
                message: F::SUCCESS_MESSAGE.into(),
                reference: Some(receipt.reference.clone()),
                fields: FieldErrors::new(),
            },
            Err(Error::Invalid(fields)) => Self {
                ok: false,
                message: INVALID_MESSAGE.into(),
                reference: None,
                fields: fields.clone(),
            },
            Err(Error::SubmissionFailed(_)) => Self {
                ok: false,
                message: FAILURE_MESSAGE.into(),
                reference: None,
                fields: FieldErrors::new(),
            },
        }
    }
}
