//! Site metrics and observability.
//!
//! Counters for translation lookups, locale switches and RSVP dispatch.
//! Production code records into the process-wide instance from `global()`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

#[derive(Debug, Default)]
pub struct SiteMetrics {
    /// Dot-path lookups that resolved to a translation
    lookups_resolved: AtomicUsize,

    /// Dot-path lookups that fell back to the key itself
    lookups_missing: AtomicUsize,

    /// Successful locale changes
    locale_changes: AtomicUsize,

    /// Locale changes rejected as unsupported
    locale_rejections: AtomicUsize,

    /// RSVPs handed to the email service successfully
    rsvp_sent: AtomicUsize,

    /// RSVPs the email service failed to accept
    rsvp_failed: AtomicUsize,
}

static METRICS: OnceLock<SiteMetrics> = OnceLock::new();

impl SiteMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide metrics instance.
    pub fn global() -> &'static SiteMetrics {
        METRICS.get_or_init(SiteMetrics::new)
    }

    pub fn record_lookup_resolved(&self) {
        self.lookups_resolved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup_missing(&self) {
        self.lookups_missing.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_change(&self) {
        self.locale_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_rejection(&self) {
        self.locale_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rsvp_sent(&self) {
        self.rsvp_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rsvp_failed(&self) {
        self.rsvp_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolved = self.lookups_resolved.load(Ordering::Relaxed);
        let missing = self.lookups_missing.load(Ordering::Relaxed);
        let total_lookups = resolved + missing;
        let lookup_hit_rate = if total_lookups > 0 {
            (resolved as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        let sent = self.rsvp_sent.load(Ordering::Relaxed);
        let failed = self.rsvp_failed.load(Ordering::Relaxed);
        let attempts = sent + failed;
        let rsvp_success_rate = if attempts > 0 {
            (sent as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups_resolved: resolved,
            lookups_missing: missing,
            lookup_hit_rate,
            locale_changes: self.locale_changes.load(Ordering::Relaxed),
            locale_rejections: self.locale_rejections.load(Ordering::Relaxed),
            rsvp_sent: sent,
            rsvp_failed: failed,
            rsvp_success_rate,
        }
    }
}

/// Snapshot of the site counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups_resolved: usize,
    pub lookups_missing: usize,

    /// Percentage (0-100) of lookups that found a translation
    pub lookup_hit_rate: f64,

    pub locale_changes: usize,
    pub locale_rejections: usize,
    pub rsvp_sent: usize,
    pub rsvp_failed: usize,

    /// Percentage (0-100) of RSVP submissions accepted by the email service
    pub rsvp_success_rate: f64,
}
