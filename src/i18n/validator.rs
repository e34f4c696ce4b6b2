//! Dictionary consistency validation.
//!
//! Every locale must expose the same key paths. This module flattens
//! dictionary trees into `dot.path -> text` maps and reports drift between
//! a reference locale and a translation: keys present on one side only,
//! empty leaves, and `{placeholder}` tokens that were lost or invented.

use crate::i18n::strings::dictionary_tree;
use crate::i18n::Locale;
use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural problems (missing or extra keys, empty leaves)
    pub errors: Vec<String>,

    /// Content problems that do not break lookups
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten a dictionary tree into leaf paths.
///
/// Array elements use their index as the segment, matching what
/// `resolver::lookup` accepts.
pub fn flatten(tree: &Value) -> BTreeMap<String, String> {
    let mut leaves = BTreeMap::new();
    flatten_into(tree, String::new(), &mut leaves);
    leaves
}

fn flatten_into(node: &Value, prefix: String, leaves: &mut BTreeMap<String, String>) {
    match node {
        Value::Object(map) => {
            for (name, child) in map {
                flatten_into(child, child_path(&prefix, name), leaves);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(child, child_path(&prefix, &index.to_string()), leaves);
            }
        }
        Value::String(text) => {
            leaves.insert(prefix, text.clone());
        }
        other => {
            leaves.insert(prefix, other.to_string());
        }
    }
}

fn child_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

/// Validator for dictionary consistency across locales.
pub struct DictionaryValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Compare a translation tree against a reference tree.
    pub fn validate(reference: &Value, translated: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = flatten(reference);
        let translated = flatten(translated);

        for key in reference.keys().filter(|k| !translated.contains_key(*k)) {
            report.errors.push(format!("Missing key in translation: {}", key));
        }
        for key in translated.keys().filter(|k| !reference.contains_key(*k)) {
            report.errors.push(format!("Extra key in translation: {}", key));
        }

        for (key, text) in &translated {
            if text.trim().is_empty() {
                report.errors.push(format!("Empty translation: {}", key));
            }
        }
        for (key, text) in &reference {
            if text.trim().is_empty() {
                report.errors.push(format!("Empty reference text: {}", key));
            }
        }

        for (key, original) in &reference {
            let Some(text) = translated.get(key) else {
                continue;
            };
            let expected = Self::extract_placeholders(original);
            let actual = Self::extract_placeholders(text);
            if expected != actual {
                report.warnings.push(format!(
                    "Placeholder mismatch at {}: reference has {:?}, translation has {:?}",
                    key, expected, actual
                ));
            }
        }

        report
    }

    /// Validate every shipped locale against the default locale.
    pub fn validate_shipped() -> Vec<(Locale, ValidationReport)> {
        let reference_locale = Locale::default_locale();
        let reference = dictionary_tree(reference_locale);

        Locale::ALL
            .into_iter()
            .filter(|locale| *locale != reference_locale)
            .map(|locale| (locale, Self::validate(reference, dictionary_tree(locale))))
            .collect()
    }

    /// Extract `{name}` placeholders from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("placeholder regex is valid")
        });

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
