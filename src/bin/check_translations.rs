//! Dictionary consistency check
//!
//! Usage:
//!   cargo run --bin check-translations
//!
//! Compares every locale's dictionary against the default locale and exits
//! non-zero when keys drift or translations are empty.

use anyhow::{bail, Result};
use wedding_site::i18n::{flatten, strings::dictionary_tree, DictionaryValidator, Locale};

fn main() -> Result<()> {
    let reference = Locale::default_locale();
    let key_count = flatten(dictionary_tree(reference)).len();
    println!("Reference locale: {} ({} keys)", reference.code(), key_count);

    let mut failed = false;
    for (locale, report) in DictionaryValidator::validate_shipped() {
        if report.is_clean() {
            println!("✓ {}: consistent", locale.code());
            continue;
        }

        for warning in &report.warnings {
            println!("⚠ {}: {}", locale.code(), warning);
        }
        for error in &report.errors {
            println!("✗ {}: {}", locale.code(), error);
        }
        failed |= report.has_errors();
    }

    if failed {
        bail!("Dictionary consistency check failed");
    }
    Ok(())
}
