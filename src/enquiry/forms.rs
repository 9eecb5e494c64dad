use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::enquiry::{FieldErrors, Form, Submission};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryType {
    #[default]
    Sales,
    Technical,
    Training,
    Supplier,
    Other,
}

impl EnquiryType {
    pub fn label(&self) -> &'static str {
        match self {
            EnquiryType::Sales => "Sales enquiry",
            EnquiryType::Technical => "Technical support",
            EnquiryType::Training => "Training booking",
            EnquiryType::Supplier => "Become a supplier",
            EnquiryType::Other => "Other",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Individual,
    #[default]
    Company,
}

/// The general contact form.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactEnquiry {
    pub enquiry_type: EnquiryType,
    pub customer_type: CustomerType,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub postcode: String,
    pub message: String,
}

impl Form for ContactEnquiry {
    const SUCCESS_MESSAGE: &'static str =
        "Thanks. We’ve received your message and will get back to you shortly.";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if is_blank(&self.first_name) {
            errors.insert("first_name", "First name is required.");
        }
        if is_blank(&self.last_name) {
            errors.insert("last_name", "Last name is required.");
        }
        if is_blank(&self.phone) {
            errors.insert("phone", "Phone is required.");
        }
        if !is_email(&self.email) {
            errors.insert("email", "Enter a valid email.");
        }
        if is_blank(&self.message) {
            errors.insert("message", "Message is required.");
        }
        // Optional, but a present postcode must look like one.
        let postcode = self.postcode.trim();
        if !postcode.is_empty() && postcode.chars().count() < 3 {
            errors.insert("postcode", "Enter a valid postcode.");
        }
        errors.into_result()
    }

    fn submission(&self) -> Submission {
        Submission::Contact(self.clone())
    }
}

/// The "become a supplier" application.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierApplication {
    pub company: String,
    pub address: String,
    pub phone: String,
    pub contact_first: String,
    pub contact_last: String,
    pub email: String,
    pub email_confirmation: String,
}

impl Form for SupplierApplication {
    const SUCCESS_MESSAGE: &'static str =
        "Thanks. Your request has been received and will be reviewed.";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if is_blank(&self.company) {
            errors.insert("company", "Company name is required.");
        }
        if is_blank(&self.address) {
            errors.insert("address", "Address is required.");
        }
        if is_blank(&self.phone) {
            errors.insert("phone", "Phone is required.");
        }
        if is_blank(&self.contact_first) {
            errors.insert("contact_first", "First name is required.");
        }
        if is_blank(&self.contact_last) {
            errors.insert("contact_last", "Last name is required.");
        }
        let email_ok = is_email(&self.email);
        let confirmation_ok = is_email(&self.email_confirmation);
        if !email_ok {
            errors.insert("email", "Enter a valid email.");
        }
        if !confirmation_ok {
            errors.insert("email_confirmation", "Confirm your email.");
        } else if email_ok
            && self.email.trim().to_lowercase() != self.email_confirmation.trim().to_lowercase()
        {
            errors.insert("email_confirmation", "Emails do not match.");
        }
        errors.into_result()
    }

    fn submission(&self) -> Submission {
        Submission::SupplierApplication(self.clone())
    }
}

#[test]
fn is_email_test() {
    assert!(is_email("info@grflex.co.uk"));
    assert!(is_email("  a@b.c "));
    assert!(!is_email("info@grflex"));
    assert!(!is_email("in fo@grflex.co.uk"));
    assert!(!is_email(""));
}
