//! Locale resolver: owns the current locale and answers text lookups.
//!
//! A resolver is an explicit context object. The server builds one per
//! request from the visitor's cookies; the terminal preview builds one from
//! a preferences file.

use crate::i18n::strings::{dictionary, dictionary_tree, Dictionary};
use crate::i18n::{DocumentAttributes, Locale, LocaleError, TextDirection};
use crate::metrics::SiteMetrics;
use crate::preferences::{PreferenceStore, LOCALE_PREFERENCE_KEY};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Locale stored in `store`, or the default when absent or unsupported.
pub fn initial_locale<S: PreferenceStore + ?Sized>(store: &S) -> Locale {
    match store.load(LOCALE_PREFERENCE_KEY) {
        Some(code) => Locale::from_code(&code).unwrap_or_else(|_| {
            debug!("Ignoring unsupported stored locale '{}'", code);
            Locale::default_locale()
        }),
        None => Locale::default_locale(),
    }
}

/// Walk `tree` along a dot-separated path.
///
/// Objects are indexed by name and arrays by position. Returns `None` when
/// a segment is missing or the leaf is not a non-empty string.
pub fn lookup<'a>(tree: &'a Value, key: &str) -> Option<&'a str> {
    let mut node = tree;
    for segment in key.split('.') {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(array_index(segment)?)?,
            _ => return None,
        };
    }

    node.as_str().filter(|text| !text.is_empty())
}

/// Position named by `segment`, only in the plain decimal form `flatten`
/// produces (`1`, not `01` or `+1`).
fn array_index(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == segment)
}

pub struct LocaleResolver<S: PreferenceStore> {
    store: S,
    locale: Locale,
    metrics: &'static SiteMetrics,
}

impl<S: PreferenceStore> LocaleResolver<S> {
    /// Build a resolver from the persisted preference in `store`.
    pub fn initialize(store: S) -> Self {
        let locale = initial_locale(&store);
        Self {
            store,
            locale,
            metrics: SiteMetrics::global(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch to the locale with `code` and persist the choice.
    ///
    /// Unsupported codes leave both the current locale and the stored
    /// preference untouched. A failed write is logged; the in-memory
    /// locale still changes.
    pub fn set_locale(&mut self, code: &str) -> Result<DocumentAttributes, LocaleError> {
        let locale = match Locale::from_code(code) {
            Ok(locale) => locale,
            Err(e) => {
                self.metrics.record_locale_rejection();
                warn!("Rejected locale change: {}", e);
                return Err(e);
            }
        };

        let previous = self.locale;
        self.locale = locale;
        if let Err(e) = self.store.store(LOCALE_PREFERENCE_KEY, locale.code()) {
            warn!("Failed to persist locale preference: {}", e);
        }
        self.metrics.record_locale_change();

        if previous.direction() != locale.direction() {
            info!(
                "Locale changed {} -> {} (direction now {})",
                previous,
                locale,
                locale.direction().as_str()
            );
        } else {
            debug!("Locale set to {}", locale);
        }

        Ok(self.document_attributes())
    }

    /// Switch to the other locale, as the language switcher does.
    pub fn toggle(&mut self) -> DocumentAttributes {
        let next = self.locale.other();
        // `other()` always yields a supported code
        self.set_locale(next.code())
            .unwrap_or_else(|_| self.document_attributes())
    }

    /// Text for a dot-separated key, or the key itself when missing.
    pub fn resolve(&self, key: &str) -> String {
        match lookup(dictionary_tree(self.locale), key) {
            Some(text) => {
                self.metrics.record_lookup_resolved();
                text.to_string()
            }
            None => {
                self.metrics.record_lookup_missing();
                debug!("Missing translation for '{}' in {}", key, self.locale);
                key.to_string()
            }
        }
    }

    /// Typed strings for the current locale.
    pub fn strings(&self) -> &'static Dictionary {
        dictionary(self.locale)
    }

    pub fn direction(&self) -> TextDirection {
        self.locale.direction()
    }

    pub fn is_right_to_left(&self) -> bool {
        self.locale.is_right_to_left()
    }

    pub fn document_attributes(&self) -> DocumentAttributes {
        DocumentAttributes::from(self.locale)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
