use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::models::{ContactRequest, PartnershipRequest};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields before submitting.")]
    MissingFields(Vec<&'static str>),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid product URL.")]
    InvalidUrl,
}

/// A form record that knows which of its fields must be filled in.
pub trait RequiredFields {
    fn required_fields(&self) -> Vec<(&'static str, &str)>;
}

impl RequiredFields for ContactRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

impl RequiredFields for PartnershipRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("companyName", self.company_name.as_str()),
            ("productUrl", self.product_url.as_str()),
            ("pricingSet", self.pricing_label()),
            ("videoType", self.video_label()),
            ("message", self.message.as_str()),
        ]
    }
}

pub fn missing_fields<R: RequiredFields>(record: &R) -> Vec<&'static str> {
    record
        .required_fields()
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

pub fn all_fields_present<R: RequiredFields>(record: &R) -> bool {
    missing_fields(record).is_empty()
}

/// Checked as typed: surrounding whitespace makes the address invalid.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Absolute URL with a host. Anything the parser rejects is just invalid.
pub fn is_valid_url(s: &str) -> bool {
    match Url::parse(s.trim()) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

fn require_all<R: RequiredFields>(record: &R) -> Result<(), ValidationError> {
    if all_fields_present(record) {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing_fields(record)))
    }
}

pub fn validate_contact(request: &ContactRequest) -> Result<(), ValidationError> {
    require_all(request)?;
    if !is_valid_email(&request.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Checks run in order and the first failure wins.
pub fn validate_partnership(request: &PartnershipRequest) -> Result<(), ValidationError> {
    require_all(request)?;
    if !is_valid_email(&request.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_url(&request.product_url) {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(())
}
