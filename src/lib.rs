//! Bilingual (English/Arabic) wedding website.
//!
//! The core is two independent pieces: [`countdown`] derives the time left
//! until the ceremony, and [`i18n`] resolves localized text and direction
//! for the visitor's locale. [`server`] exposes both, plus the static
//! [`content`] and the [`rsvp`] relay to EmailJS, over HTTP.

pub mod config;
pub mod content;
pub mod countdown;
pub mod i18n;
pub mod metrics;
pub mod preferences;
pub mod rsvp;
pub mod security;
pub mod server;
