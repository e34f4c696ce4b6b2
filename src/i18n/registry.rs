//! Locale registry: Single source of truth for the supported locales.
//!
//! The registry is immutable data, initialized once on first access with
//! `OnceLock`. It holds no selection state; the current locale lives in
//! each `LocaleResolver`.

use std::sync::OnceLock;

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        }
    }
}

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code ("en", "ar")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language, shown on the language switcher
    pub native_name: &'static str,

    /// Writing direction
    pub direction: TextDirection,

    /// Whether this locale is used when no valid preference is stored
    /// (exactly one should be true)
    pub is_default: bool,
}

/// Global locale registry.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all supported locales in switcher order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default locale
    /// (a programming error in `default_locales`).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            direction: TextDirection::LeftToRight,
            is_default: true,
        },
        LocaleConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            direction: TextDirection::RightToLeft,
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LocaleRegistry::get().get_by_code("en").unwrap();

        assert_eq!(config.name, "English");
        assert_eq!(config.direction, TextDirection::LeftToRight);
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_arabic() {
        let config = LocaleRegistry::get().get_by_code("ar").unwrap();

        assert_eq!(config.name, "Arabic");
        assert_eq!(config.native_name, "العربية");
        assert_eq!(config.direction, TextDirection::RightToLeft);
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("fr").is_none());
        assert!(registry.get_by_code("EN").is_none());
        assert!(!registry.is_supported(""));
    }

    #[test]
    fn test_list_all_has_exactly_two_locales() {
        let all = LocaleRegistry::get().list_all();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].code, "en");
        assert_eq!(all[1].code, "ar");
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(LocaleRegistry::get().default_locale().code, "en");
    }

    #[test]
    fn test_direction_attribute_values() {
        assert_eq!(TextDirection::LeftToRight.as_str(), "ltr");
        assert_eq!(TextDirection::RightToLeft.as_str(), "rtl");
    }
}
