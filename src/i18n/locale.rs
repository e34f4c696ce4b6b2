//! Locale type: the closed set of site languages.

use crate::i18n::registry::{LocaleConfig, LocaleRegistry, TextDirection};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when selecting a locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Unsupported locale: '{0}'")]
    UnsupportedLocale(String),
}

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    Arabic,
}

impl Locale {
    /// All locales, in switcher order.
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Arabic];

    /// Parse a locale code ("en", "ar").
    pub fn from_code(code: &str) -> Result<Locale, LocaleError> {
        match code {
            "en" => Ok(Locale::English),
            "ar" => Ok(Locale::Arabic),
            other => Err(LocaleError::UnsupportedLocale(other.to_string())),
        }
    }

    /// Locale used when no valid preference exists.
    pub fn default_locale() -> Locale {
        let code = LocaleRegistry::get().default_locale().code;
        Locale::from_code(code).unwrap_or(Locale::English)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Arabic => "ar",
        }
    }

    /// Registry entry for this locale.
    ///
    /// # Panics
    /// Panics if the registry lacks an entry for a `Locale` variant, which
    /// would mean the enum and `default_locales` have drifted apart.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code())
            .expect("Every Locale variant has a registry entry")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    pub fn is_right_to_left(&self) -> bool {
        self.direction() == TextDirection::RightToLeft
    }

    /// The other locale, as flipped by the language switcher.
    pub fn other(&self) -> Locale {
        match self {
            Locale::English => Locale::Arabic,
            Locale::Arabic => Locale::English,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

/// Document-level `dir` and `lang` attributes for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentAttributes {
    pub dir: &'static str,
    pub lang: &'static str,
}

impl From<Locale> for DocumentAttributes {
    fn from(locale: Locale) -> Self {
        Self {
            dir: locale.direction().as_str(),
            lang: locale.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        assert_eq!(Locale::from_code("en"), Ok(Locale::English));
    }

    #[test]
    fn test_from_code_arabic() {
        assert_eq!(Locale::from_code("ar"), Ok(Locale::Arabic));
    }

    #[test]
    fn test_from_code_invalid() {
        let err = Locale::from_code("fr").unwrap_err();
        assert_eq!(err, LocaleError::UnsupportedLocale("fr".to_string()));
        assert!(err.to_string().contains("Unsupported"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Locale::from_code("AR").is_err());
        assert!(Locale::from_code(" en").is_err());
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn test_from_str() {
        let locale: Locale = "ar".parse().unwrap();
        assert_eq!(locale, Locale::Arabic);
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }

    #[test]
    fn test_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Ok(locale));
            assert_eq!(locale.config().code, locale.code());
        }
    }

    #[test]
    fn test_direction() {
        assert!(!Locale::English.is_right_to_left());
        assert!(Locale::Arabic.is_right_to_left());
    }

    #[test]
    fn test_other_flips() {
        assert_eq!(Locale::English.other(), Locale::Arabic);
        assert_eq!(Locale::Arabic.other(), Locale::English);
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::Arabic.to_string(), "ar");
    }

    #[test]
    fn test_document_attributes() {
        assert_eq!(
            DocumentAttributes::from(Locale::Arabic),
            DocumentAttributes {
                dir: "rtl",
                lang: "ar"
            }
        );
        assert_eq!(DocumentAttributes::from(Locale::English).dir, "ltr");
    }
}
