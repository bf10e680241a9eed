use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

/// Longest value the backend accepts for any single text field.
pub const MAX_FIELD_LEN: usize = 200;

fn too_long(value: &str) -> bool {
    value.trim().chars().count() > MAX_FIELD_LEN
}

fn too_long_message(label: &str) -> String {
    format!("{} must be at most {} characters", label, MAX_FIELD_LEN)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DemoRequestForm {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub job_title: String,
    pub phone: String,
    pub country: String,
    pub email: String,
    pub agree_privacy: bool,
    pub subscribe: bool,
}

impl DemoRequestForm {
    /// Same rules the backend enforces, so most mistakes never leave the browser.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            (&self.first_name, "First name"),
            (&self.last_name, "Last name"),
            (&self.company, "Company"),
            (&self.job_title, "Job title"),
            (&self.country, "Country"),
            (&self.email, "Business email"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(format!("{} is required", label));
            }
            if too_long(value) {
                return Err(too_long_message(label));
            }
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid business email".to_string());
        }
        if !self.phone.trim().is_empty() && !is_plausible_phone(&self.phone) {
            return Err("Phone number may only contain digits, spaces, dashes, dots, parentheses and a leading +".to_string());
        }
        if too_long(&self.phone) {
            return Err(too_long_message("Phone"));
        }
        if !self.agree_privacy {
            return Err("Please agree to the Privacy Policy to continue.".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewsletterForm {
    pub email: String,
    pub agree_privacy: bool,
}

impl NewsletterForm {
    pub fn validate(&self) -> Result<(), String> {
        if too_long(&self.email) {
            return Err(too_long_message("Business email"));
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid business email".to_string());
        }
        if !self.agree_privacy {
            return Err("Please agree to the Privacy Policy to subscribe.".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DemoRequestCreated {
    pub reference: String,
    pub message: String,
}

#[derive(Deserialize)]
struct MessageResponse {
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !host.starts_with('.') && tld.len() >= 2,
        None => false,
    }
}

fn is_plausible_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let body = phone.strip_prefix('+').unwrap_or(phone);
    digits >= 6
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'))
}

async fn error_message(response: gloo_net::http::Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(err) => err.error,
        Err(_) if response.status() == 429 => "Too many requests, please try again in a minute.".to_string(),
        Err(_) => format!("Request failed with status {}", response.status()),
    }
}

pub async fn submit_demo_request(form: &DemoRequestForm) -> Result<DemoRequestCreated, String> {
    let request = Request::post(&config::api_url("demo-requests"))
        .json(form)
        .map_err(|e| e.to_string())?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<DemoRequestCreated>()
        .await
        .map_err(|_| "Failed to parse response".to_string())
}

pub async fn subscribe_newsletter(form: &NewsletterForm) -> Result<String, String> {
    let request = Request::post(&config::api_url("newsletter"))
        .json(form)
        .map_err(|e| e.to_string())?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<MessageResponse>()
        .await
        .map(|r| r.message)
        .map_err(|_| "Failed to parse response".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> DemoRequestForm {
        DemoRequestForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            company: "Analytical Engines".into(),
            job_title: "CISO".into(),
            phone: "+44 20 7946 0958".into(),
            country: "United Kingdom".into(),
            email: "ada@engines.co.uk".into(),
            agree_privacy: true,
            subscribe: false,
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn phone_is_optional() {
        let mut form = filled_form();
        form.phone.clear();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn missing_required_field_is_named() {
        let mut form = filled_form();
        form.job_title = "   ".into();
        assert_eq!(form.validate(), Err("Job title is required".to_string()));
    }

    #[test]
    fn overlong_fields_are_rejected_like_the_server_does() {
        let mut form = filled_form();
        form.company = "x".repeat(MAX_FIELD_LEN);
        assert_eq!(form.validate(), Ok(()));
        form.company.push('x');
        assert_eq!(form.validate(), Err("Company must be at most 200 characters".to_string()));

        let mut form = filled_form();
        form.phone = format!("+1 {}", "5".repeat(MAX_FIELD_LEN));
        assert_eq!(form.validate(), Err("Phone must be at most 200 characters".to_string()));

        let newsletter = NewsletterForm {
            email: format!("{}@example.com", "a".repeat(MAX_FIELD_LEN)),
            agree_privacy: true,
        };
        assert!(newsletter.validate().unwrap_err().contains("at most 200"));
    }

    #[test]
    fn privacy_consent_is_required() {
        let mut form = filled_form();
        form.agree_privacy = false;
        assert!(form.validate().unwrap_err().contains("Privacy Policy"));
    }

    #[test]
    fn bad_phone_is_rejected() {
        let mut form = filled_form();
        form.phone = "call me maybe".into();
        assert!(form.validate().is_err());
        form.phone = "12".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("soc@example.com"));
        assert!(is_valid_email("  first.last+tag@sub.example.io "));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("a@example"));
        assert!(!is_valid_email("a@example.c"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn newsletter_needs_email_and_consent() {
        let mut form = NewsletterForm {
            email: "analyst@example.com".into(),
            agree_privacy: true,
        };
        assert_eq!(form.validate(), Ok(()));
        form.agree_privacy = false;
        assert!(form.validate().is_err());
        form.agree_privacy = true;
        form.email = "nope".into();
        assert!(form.validate().is_err());
    }
}
