//! Caption translation for merge controls.
//!
//! The engine only ever asks for the three captions below. Tables are plain JSON
//! objects keyed by locale, then by English caption:
//!
//! ```json
//! { "de": { "Insert left line before right line": "Linke Zeile davor einfügen" } }
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::config::Config;
use crate::error::DiffMergeError;
use crate::utils::debug_log;

pub const INSERT_BEFORE_CAPTION: &str = "Insert left line before right line";
pub const REPLACE_CAPTION: &str = "Replace right line with left line";
pub const INSERT_AFTER_CAPTION: &str = "Append left line after right line";

/// The `translate(text, locale)` collaborator. Implementations must be safe to share
/// between concurrent renders.
pub trait Translator: Send + Sync {
    fn translate<'a>(&'a self, text: &'a str, locale: &str) -> Cow<'a, str>;
}

/// Returns every caption unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate<'a>(&'a self, text: &'a str, _locale: &str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Locale -> caption -> translation. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    locales: HashMap<String, HashMap<String, String>>,
}

impl TranslationTable {
    pub fn from_json(json: &str) -> Result<Self, DiffMergeError> {
        let locales: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        Ok(TranslationTable {
            locales: locales
                .into_iter()
                .map(|(locale, captions)| (normalize_locale(&locale), captions))
                .collect(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, DiffMergeError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Looks the caption up for `locale`, then for its language (`de-CH` -> `de`).
    fn lookup(&self, text: &str, locale: &str) -> Option<&str> {
        let locale = normalize_locale(locale);
        let language = locale.split('-').next().unwrap_or_default();
        [locale.as_str(), language]
            .into_iter()
            .filter_map(|key| self.locales.get(key))
            .find_map(|captions| captions.get(text))
            .map(String::as_str)
    }
}

impl Translator for TranslationTable {
    fn translate<'a>(&'a self, text: &'a str, locale: &str) -> Cow<'a, str> {
        match self.lookup(text, locale) {
            Some(translated) => Cow::Borrowed(translated),
            None => Cow::Borrowed(text),
        }
    }
}

fn normalize_locale(locale: &str) -> String {
    locale.trim().to_lowercase().replace('_', "-")
}

static DEFAULT_TABLE: OnceLock<TranslationTable> = OnceLock::new();

/// The translation table configured through `translations_path`, loaded once.
///
/// A missing or unreadable table degrades to untranslated captions.
pub fn default_translator() -> &'static TranslationTable {
    DEFAULT_TABLE.get_or_init(|| {
        let Some(path) = Config::get().translations_path() else {
            return TranslationTable::default();
        };
        match TranslationTable::load(path) {
            Ok(table) => table,
            Err(e) => {
                debug_log(&format!(
                    "failed to load translations from {}: {}",
                    path.display(),
                    e
                ));
                TranslationTable::default()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{
        "de": {
            "Insert left line before right line": "Linke Zeile davor einfügen",
            "Replace right line with left line": "Rechte Zeile ersetzen"
        },
        "de-CH": {
            "Replace right line with left line": "Rechte Zeile ersetze"
        }
    }"#;

    #[test]
    fn test_identity_translator() {
        assert_eq!(IdentityTranslator.translate(REPLACE_CAPTION, "fr"), REPLACE_CAPTION);
    }

    #[test]
    fn test_table_exact_locale() {
        let table = TranslationTable::from_json(TABLE).unwrap();
        assert_eq!(table.translate(REPLACE_CAPTION, "de-CH"), "Rechte Zeile ersetze");
        assert_eq!(table.translate(REPLACE_CAPTION, "de_ch"), "Rechte Zeile ersetze");
    }

    #[test]
    fn test_table_falls_back_to_language() {
        let table = TranslationTable::from_json(TABLE).unwrap();
        assert_eq!(
            table.translate(INSERT_BEFORE_CAPTION, "de-CH"),
            "Linke Zeile davor einfügen"
        );
    }

    #[test]
    fn test_table_falls_back_to_caption() {
        let table = TranslationTable::from_json(TABLE).unwrap();
        assert_eq!(table.translate(INSERT_AFTER_CAPTION, "de"), INSERT_AFTER_CAPTION);
        assert_eq!(table.translate(REPLACE_CAPTION, "fr"), REPLACE_CAPTION);
    }

    #[test]
    fn test_table_rejects_invalid_json() {
        assert!(matches!(
            TranslationTable::from_json("[1, 2]"),
            Err(DiffMergeError::JsonError(_))
        ));
    }
}
