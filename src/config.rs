use crate::content;
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub assets_dir: String,

    // Countdown
    pub wedding_date: DateTime<FixedOffset>,

    // EmailJS
    pub emailjs_api_url: String,
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,
    pub emailjs_private_key: Option<String>,
    pub rsvp_timeout_secs: u64,

    // Preferences (terminal preview)
    pub preferences_path: String,

    // Admin endpoints (optional; metrics are open when unset)
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let wedding_date = match std::env::var("WEDDING_DATE") {
            Ok(raw) => content::parse_wedding_date(&raw)
                .with_context(|| format!("WEDDING_DATE is not a valid date: {}", raw))?,
            Err(_) => content::wedding_target().context("Built-in wedding date is invalid")?,
        };

        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            assets_dir: std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),

            wedding_date,

            // EmailJS
            emailjs_api_url: std::env::var("EMAILJS_API_URL")
                .unwrap_or_else(|_| "https://api.emailjs.com".to_string()),
            emailjs_service_id: std::env::var("EMAILJS_SERVICE_ID")
                .context("EMAILJS_SERVICE_ID not set")?,
            emailjs_template_id: std::env::var("EMAILJS_TEMPLATE_ID")
                .context("EMAILJS_TEMPLATE_ID not set")?,
            emailjs_public_key: std::env::var("EMAILJS_PUBLIC_KEY")
                .context("EMAILJS_PUBLIC_KEY not set")?,
            emailjs_private_key: std::env::var("EMAILJS_PRIVATE_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            rsvp_timeout_secs: std::env::var("RSVP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            preferences_path: std::env::var("PREFERENCES_PATH")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),

            api_key: std::env::var("API_KEY").ok().filter(|v| !v.is_empty()),
        })
    }
}
