use std::{future::Future, time::Duration};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::enquiry::{ContactEnquiry, Error, SupplierApplication};

/// A validated form on its way to the notification service.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Contact(ContactEnquiry),
    SupplierApplication(SupplierApplication),
}

impl Submission {
    pub fn reference_prefix(&self) -> &'static str {
        match self {
            Submission::Contact(_) => "ENQ",
            Submission::SupplierApplication(_) => "SUP",
        }
    }

    /// Subject line for the notification email.
    pub fn subject(&self) -> &'static str {
        match self {
            Submission::Contact(form) => form.enquiry_type.label(),
            Submission::SupplierApplication(_) => "Supplier application",
        }
    }

    pub fn reply_to(&self) -> &str {
        match self {
            Submission::Contact(form) => form.email.trim(),
            Submission::SupplierApplication(form) => form.email.trim(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub reference: String,
    pub received_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(submission: &Submission) -> Self {
        let received_at = Utc::now();
        let reference = format!(
            "{}-{}",
            submission.reference_prefix(),
            received_at.format("%Y%m%d%H%M%S%3f")
        );
        Self {
            reference,
            received_at,
        }
    }
}

/// Delivers submissions to whoever handles them, e.g. a transactional email API.
pub trait Submitter {
    fn submit(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<Receipt, Error>> + Send;
}

/// Stands in for the email service: waits, then reports success or the
/// configured failure.
#[derive(Debug, Clone)]
pub struct StubSubmitter {
    pub contact_delay: Duration,
    pub application_delay: Duration,
    pub failure: Option<String>,
}

impl Default for StubSubmitter {
    fn default() -> Self {
        Self {
            contact_delay: Duration::from_millis(700),
            application_delay: Duration::from_millis(600),
            failure: None,
        }
    }
}

impl StubSubmitter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn without_delay(mut self) -> Self {
        self.contact_delay = Duration::ZERO;
        self.application_delay = Duration::ZERO;
        self
    }

    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }
}

impl Submitter for StubSubmitter {
    async fn submit(&self, submission: Submission) -> Result<Receipt, Error> {
        let delay = match submission {
            Submission::Contact(_) => self.contact_delay,
            Submission::SupplierApplication(_) => self.application_delay,
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if let Some(reason) = &self.failure {
            warn!(reply_to = submission.reply_to(), "Submission failed: {reason}");
            return Err(Error::SubmissionFailed(reason.clone()));
        }

        let receipt = Receipt::new(&submission);
        info!(
            reference = %receipt.reference,
            subject = submission.subject(),
            "Submission received"
        );
        Ok(receipt)
    }
}
