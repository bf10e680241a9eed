use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest value accepted for any single text field.
pub const MAX_FIELD_LEN: usize = 200;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.][^@\s]*\.[^@\s.]{2,}$").expect("email regex is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().-]+$").expect("phone regex is valid"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be at most 200 characters")]
    TooLong(&'static str),
    #[error("Please enter a valid business email")]
    InvalidEmail,
    #[error("Phone number may only contain digits, spaces, dashes, dots, parentheses and a leading +")]
    InvalidPhone,
    #[error("Please agree to the Privacy Policy to continue.")]
    ConsentRequired,
}

#[derive(Debug, Deserialize)]
pub struct DemoRequestPayload {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub job_title: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub country: String,
    pub email: String,
    #[serde(default)]
    pub agree_privacy: bool,
    #[serde(default)]
    pub subscribe: bool,
}

/// A demo request that passed validation, trimmed and normalized.
#[derive(Debug, PartialEq)]
pub struct ValidDemoRequest {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub job_title: String,
    pub phone: Option<String>,
    pub country: String,
    pub email: String,
    pub subscribe: bool,
}

#[derive(Debug, Deserialize)]
pub struct NewsletterPayload {
    pub email: String,
    #[serde(default)]
    pub agree_privacy: bool,
}

#[derive(Serialize)]
pub struct DemoRequestCreatedResponse {
    pub reference: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

fn required(value: &str, label: &'static str) -> Result<String, LeadValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LeadValidationError::Missing(label));
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(LeadValidationError::TooLong(label));
    }
    Ok(value.to_string())
}

pub fn normalize_email(email: &str) -> Result<String, LeadValidationError> {
    let email = required(email, "Business email")?.to_lowercase();
    if !EMAIL_RE.is_match(&email) {
        return Err(LeadValidationError::InvalidEmail);
    }
    Ok(email)
}

fn normalize_phone(phone: Option<&str>) -> Result<Option<String>, LeadValidationError> {
    let Some(phone) = phone.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits < 6 || !PHONE_RE.is_match(phone) {
        return Err(LeadValidationError::InvalidPhone);
    }
    if phone.chars().count() > MAX_FIELD_LEN {
        return Err(LeadValidationError::TooLong("Phone"));
    }
    Ok(Some(phone.to_string()))
}

impl DemoRequestPayload {
    pub fn validate(&self) -> Result<ValidDemoRequest, LeadValidationError> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let company = required(&self.company, "Company")?;
        let job_title = required(&self.job_title, "Job title")?;
        let country = required(&self.country, "Country")?;
        let email = normalize_email(&self.email)?;
        let phone = normalize_phone(self.phone.as_deref())?;
        if !self.agree_privacy {
            return Err(LeadValidationError::ConsentRequired);
        }

        Ok(ValidDemoRequest {
            first_name,
            last_name,
            company,
            job_title,
            phone,
            country,
            email,
            subscribe: self.subscribe,
        })
    }
}

impl NewsletterPayload {
    pub fn validate(&self) -> Result<String, LeadValidationError> {
        let email = normalize_email(&self.email)?;
        if !self.agree_privacy {
            return Err(LeadValidationError::ConsentRequired);
        }
        Ok(email)
    }
}
