//! RSVP form validation and dispatch through EmailJS.
//!
//! A submission is validated in full (all field errors at once), turned
//! into EmailJS template parameters and sent with a single request. There
//! is no automatic retry and no local queue: a failure goes back to the
//! guest, who can submit again.

use crate::config::Config;
use crate::metrics::SiteMetrics;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;
const EMAIL_MAX_CHARS: usize = 255;
const DIETARY_MAX_CHARS: usize = 500;
const MESSAGE_MAX_CHARS: usize = 1000;
const MAX_GUESTS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Yes,
    No,
}

impl Attendance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attendance::Yes => "yes",
            Attendance::No => "no",
        }
    }
}

/// Raw form fields as posted by the page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RsvpForm {
    pub name: String,
    pub email: String,
    pub attendance: Option<String>,
    pub guest_count: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub message: Option<String>,
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("RSVP form has {} invalid field(s)", .0.len())]
pub struct InvalidForm(pub Vec<FieldError>);

#[derive(Debug, Error)]
pub enum RsvpError {
    #[error("Failed to send RSVP: {0}")]
    SubmissionFailure(String),
}

/// A validated RSVP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpSubmission {
    pub name: String,
    pub email: String,
    pub attendance: Attendance,
    pub guest_count: Option<u8>,
    pub dietary_restrictions: Option<String>,
    pub message: Option<String>,
}

/// Parameters for the EmailJS template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub attendance: String,
    pub guest_count: String,
    pub dietary_restrictions: String,
    pub message: String,
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn is_valid_email(email: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    });
    regex.is_match(email)
}

/// Trimmed value, or `None` when blank.
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl RsvpForm {
    /// Check every field and build a submission.
    ///
    /// Guest count and dietary notes only apply to guests who accept; they
    /// are dropped for a declined RSVP.
    pub fn validate(&self) -> Result<RsvpSubmission, InvalidForm> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        let name_len = name.chars().count();
        if name_len < NAME_MIN_CHARS {
            errors.push(FieldError {
                field: "name",
                message: "Please enter your full name",
            });
        } else if name_len > NAME_MAX_CHARS {
            errors.push(FieldError {
                field: "name",
                message: "Name must be at most 100 characters",
            });
        }

        let email = self.email.trim();
        if email.chars().count() > EMAIL_MAX_CHARS || !is_valid_email(email) {
            errors.push(FieldError {
                field: "email",
                message: "Please enter a valid email address",
            });
        }

        let attendance = match self.attendance.as_deref().map(str::trim) {
            Some("yes") => Some(Attendance::Yes),
            Some("no") => Some(Attendance::No),
            _ => {
                errors.push(FieldError {
                    field: "attendance",
                    message: "Please select your attendance",
                });
                None
            }
        };

        let guest_count = match non_blank(&self.guest_count) {
            Some(raw) => match raw.parse::<u8>() {
                Ok(count) if (1..=MAX_GUESTS).contains(&count) => Some(count),
                _ => {
                    errors.push(FieldError {
                        field: "guestCount",
                        message: "Please choose 1 or 2 guests",
                    });
                    None
                }
            },
            None => None,
        };

        let dietary_restrictions = non_blank(&self.dietary_restrictions);
        if dietary_restrictions
            .as_ref()
            .is_some_and(|d| d.chars().count() > DIETARY_MAX_CHARS)
        {
            errors.push(FieldError {
                field: "dietaryRestrictions",
                message: "Dietary restrictions must be at most 500 characters",
            });
        }

        let message = non_blank(&self.message);
        if message
            .as_ref()
            .is_some_and(|m| m.chars().count() > MESSAGE_MAX_CHARS)
        {
            errors.push(FieldError {
                field: "message",
                message: "Message must be at most 1000 characters",
            });
        }

        let attendance = match attendance {
            Some(attendance) if errors.is_empty() => attendance,
            _ => return Err(InvalidForm(errors)),
        };

        let attending = attendance == Attendance::Yes;
        Ok(RsvpSubmission {
            name: name.to_string(),
            email: email.to_string(),
            attendance,
            guest_count: guest_count.filter(|_| attending),
            dietary_restrictions: dietary_restrictions.filter(|_| attending),
            message,
        })
    }
}

impl RsvpSubmission {
    /// Template parameters with the placeholders the email template expects
    /// for optional fields.
    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            name: self.name.clone(),
            email: self.email.clone(),
            attendance: self.attendance.as_str().to_string(),
            guest_count: self
                .guest_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            dietary_restrictions: self
                .dietary_restrictions
                .clone()
                .unwrap_or_else(|| "None".to_string()),
            message: self
                .message
                .clone()
                .unwrap_or_else(|| "No message".to_string()),
        }
    }
}

// ==================== EmailJS Client ====================

/// EmailJS account identifiers and transport settings.
#[derive(Debug, Clone)]
pub struct EmailJsSettings {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub timeout: Duration,
}

impl EmailJsSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_url: config.emailjs_api_url.clone(),
            service_id: config.emailjs_service_id.clone(),
            template_id: config.emailjs_template_id.clone(),
            public_key: config.emailjs_public_key.clone(),
            private_key: config.emailjs_private_key.clone(),
            timeout: Duration::from_secs(config.rsvp_timeout_secs),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams,
}

/// Sends RSVPs through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    settings: EmailJsSettings,
}

impl EmailJsClient {
    pub fn new(settings: EmailJsSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build EmailJS HTTP client")?;

        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/v1.0/email/send",
            self.settings.api_url.trim_end_matches('/')
        )
    }

    /// Send one RSVP. Any transport error, timeout or non-2xx status is a
    /// `SubmissionFailure`.
    pub async fn send(&self, submission: &RsvpSubmission) -> Result<(), RsvpError> {
        let request = SendRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            access_token: self.settings.private_key.as_deref(),
            template_params: submission.template_params(),
        };

        let result = self.dispatch(&request).await;
        match &result {
            Ok(()) => {
                SiteMetrics::global().record_rsvp_sent();
                info!(
                    "RSVP sent for {} (attendance: {})",
                    submission.name,
                    submission.attendance.as_str()
                );
            }
            Err(e) => {
                SiteMetrics::global().record_rsvp_failed();
                warn!("{}", e);
            }
        }
        result
    }

    async fn dispatch(&self, request: &SendRequest<'_>) -> Result<(), RsvpError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(|e| RsvpError::SubmissionFailure(format!("request error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RsvpError::SubmissionFailure(format!(
                "EmailJS API error ({}): {}",
                status, body
            )));
        }

        Ok(())
    }
}
