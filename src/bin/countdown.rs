//! Terminal countdown - prints the localized countdown once per second
//!
//! Usage:
//!   cargo run --bin countdown                 # Use the saved language
//!   cargo run --bin countdown -- --lang ar    # Switch to Arabic and remember it
//!   cargo run --bin countdown -- --toggle     # Flip the saved language
//!
//! Optional environment variables:
//! - WEDDING_DATE (defaults to 2026-09-22T16:00:00 venue time)
//! - PREFERENCES_PATH (defaults to data/preferences.json)
//!
//! Stops on Ctrl-C or when the target is reached.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset};
use std::time::Duration;
use tracing::info;
use wedding_site::content;
use wedding_site::countdown::{Countdown, CountdownTicker, SystemClock};
use wedding_site::i18n::{Dictionary, LocaleResolver};
use wedding_site::preferences::FilePreferenceStore;

/// Minimal config for the preview (no EmailJS required)
struct PreviewConfig {
    wedding_date: DateTime<FixedOffset>,
    preferences_path: String,
}

impl PreviewConfig {
    fn from_env() -> Result<Self> {
        let wedding_date = match std::env::var("WEDDING_DATE") {
            Ok(raw) => content::parse_wedding_date(&raw)
                .with_context(|| format!("WEDDING_DATE is not a valid date: {}", raw))?,
            Err(_) => content::wedding_target().context("Built-in wedding date is invalid")?,
        };

        Ok(Self {
            wedding_date,
            preferences_path: std::env::var("PREFERENCES_PATH")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),
        })
    }
}

enum LanguageArg {
    Keep,
    Set(String),
    Toggle,
}

fn parse_args() -> Result<LanguageArg> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(LanguageArg::Keep),
        [flag] if flag == "--toggle" => Ok(LanguageArg::Toggle),
        [flag, code] if flag == "--lang" => Ok(LanguageArg::Set(code.clone())),
        _ => bail!("Usage: countdown [--lang <en|ar> | --toggle]"),
    }
}

fn render(countdown: &Countdown, strings: &Dictionary) -> String {
    let units = countdown.display_units();
    format!(
        "{:02} {}  {:02} {}  {:02} {}  {:02} {}",
        units.days,
        strings.countdown.days,
        units.hours,
        strings.countdown.hours,
        units.minutes,
        strings.countdown.minutes,
        units.seconds,
        strings.countdown.seconds
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wedding_site=info".parse()?),
        )
        .init();

    let config = PreviewConfig::from_env()?;
    let mut resolver =
        LocaleResolver::initialize(FilePreferenceStore::new(&config.preferences_path));

    match parse_args()? {
        LanguageArg::Keep => {}
        LanguageArg::Set(code) => {
            resolver.set_locale(&code)?;
        }
        LanguageArg::Toggle => {
            resolver.toggle();
        }
    }
    info!(
        "Language: {} ({})",
        resolver.locale().native_name(),
        resolver.direction().as_str()
    );

    let strings = resolver.strings();
    println!("{}", resolver.resolve("hero.saveTheDate"));

    let mut ticker = CountdownTicker::start(config.wedding_date, SystemClock, Duration::from_secs(1));
    let mut updates = ticker.subscribe();
    println!("{}", render(&ticker.current(), strings));

    while !ticker.current().is_expired() {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = *updates.borrow_and_update();
                println!("{}", render(&current, strings));
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    ticker.cancel();
    Ok(())
}
