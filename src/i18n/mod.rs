//! Display-string lookup with locale fallback
//!
//! Lookup order is fixed: active locale table, then the default locale table,
//! then the raw key. A lookup never fails.

mod tables;

use crate::error::ConfigError;
use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_LOCALE: &str = "en";

/// Locales with built-in string tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English, complete
    En,
    /// Hindi, partial
    Hi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Hi];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Locale::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Key to display string, for one locale
pub type StringTable = HashMap<String, String>;

/// Locale-keyed string lookup service, injected where display text is needed
#[derive(Debug, Clone)]
pub struct Translator {
    tables: HashMap<String, StringTable>,
    default_locale: String,
    active: String,
}

impl Translator {
    /// Build from explicit tables. The default locale must have a table; this is
    /// a startup configuration error, not a lookup-time one.
    pub fn new(
        tables: HashMap<String, StringTable>,
        default_locale: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let default_locale = default_locale.into();
        if !tables.contains_key(&default_locale) {
            return Err(ConfigError::MissingDefaultLocale(default_locale));
        }
        Ok(Self {
            active: default_locale.clone(),
            tables,
            default_locale,
        })
    }

    /// English and Hindi tables, English default
    pub fn builtin() -> Self {
        let mut tables = HashMap::new();
        tables.insert(Locale::En.code().to_string(), to_table(tables::EN));
        tables.insert(Locale::Hi.code().to_string(), to_table(tables::HI));
        Self {
            tables,
            default_locale: DEFAULT_LOCALE.to_string(),
            active: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Select the active locale. Unknown codes are accepted and behave like the
    /// default locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.active = locale.into();
        if !self.tables.contains_key(&self.active) {
            log::debug!("no string table for locale '{}', using '{}'", self.active, self.default_locale);
        }
    }

    pub fn locale(&self) -> &str {
        &self.active
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Translate using the active locale
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.translate_in(key, &self.active)
    }

    /// Translate using an explicit locale
    pub fn translate_in<'a>(&'a self, key: &'a str, locale: &str) -> &'a str {
        if let Some(text) = self.tables.get(locale).and_then(|t| t.get(key)) {
            return text;
        }
        if let Some(text) = self.tables.get(&self.default_locale).and_then(|t| t.get(key)) {
            return text;
        }
        log::debug!("missing translation for '{}' in '{}'", key, locale);
        key
    }

    /// Whether the key exists in the given locale's own table
    pub fn has_key(&self, key: &str, locale: &str) -> bool {
        self.tables.get(locale).is_some_and(|t| t.contains_key(key))
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_table(entries: &[(&str, &str)]) -> StringTable {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
