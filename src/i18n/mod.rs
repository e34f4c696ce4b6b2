//! Internationalization (i18n) for the two site locales.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales and their metadata
//! - `locale`: Closed `Locale` type and document `dir`/`lang` attributes
//! - `strings`: Typed per-locale dictionaries and their serialized trees
//! - `resolver`: `LocaleResolver` context object (current locale, persistence, lookups)
//! - `validator`: Cross-locale key consistency checks
//!
//! # Example
//!
//! ```rust,ignore
//! use wedding_site::i18n::LocaleResolver;
//! use wedding_site::preferences::MemoryPreferenceStore;
//!
//! let mut resolver = LocaleResolver::initialize(MemoryPreferenceStore::new());
//! resolver.set_locale("ar")?;
//! assert!(resolver.is_right_to_left());
//! let title = resolver.resolve("details.title");
//! ```

mod locale;
mod registry;
mod resolver;
pub mod strings;
mod validator;

pub use locale::{DocumentAttributes, Locale, LocaleError};
pub use registry::{LocaleConfig, LocaleRegistry, TextDirection};
pub use resolver::{initial_locale, lookup, LocaleResolver};
pub use strings::Dictionary;
pub use validator::{flatten, DictionaryValidator, ValidationReport};
