// src/domain/slug/transliteration.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::value_objects::Locale;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// Locale-specific overrides applied before the generic ASCII transliteration.
///
/// Keys are non-ASCII characters and values are ASCII, which keeps slug output
/// stable when it is fed back through the slugifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, String>")]
pub struct TransliterationTable {
    entries: HashMap<char, String>,
}

impl TransliterationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: char, to: impl Into<String>) -> DomainResult<()> {
        let to = to.into();
        if from.is_ascii() {
            return Err(DomainError::Validation(format!(
                "transliteration key {from:?} must be non-ascii"
            )));
        }
        if !to.is_ascii() {
            return Err(DomainError::Validation(format!(
                "transliteration for {from:?} must be ascii, got {to:?}"
            )));
        }
        self.entries.insert(from, to);
        Ok(())
    }

    pub fn from_pairs<I, S>(pairs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (from, to) in pairs {
            table.insert(from, to)?;
        }
        Ok(table)
    }

    #[must_use]
    pub fn get(&self, ch: char) -> Option<&str> {
        self.entries.get(&ch).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<HashMap<String, String>> for TransliterationTable {
    type Error = DomainError;

    fn try_from(raw: HashMap<String, String>) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for (key, value) in raw {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(DomainError::Validation(format!(
                        "transliteration key {key:?} must be a single character"
                    )));
                }
            };
            table.insert(ch, value)?;
        }
        Ok(table)
    }
}

/// Transliteration tables keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleTables {
    tables: HashMap<String, TransliterationTable>,
}

impl LocaleTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// German and Danish/Norwegian conventions that differ from plain
    /// diacritic stripping.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Registers `table` for `locale`, merging into any table already present.
    pub fn insert(&mut self, locale: &Locale, table: TransliterationTable) {
        let entry = self.tables.entry(locale.as_str().to_owned()).or_default();
        entry.entries.extend(table.entries);
    }

    pub fn merge(&mut self, other: Self) {
        for (locale, table) in other.tables {
            self.tables
                .entry(locale)
                .or_default()
                .entries
                .extend(table.entries);
        }
    }

    /// Exact tag first, then the primary language subtag.
    #[must_use]
    pub fn lookup(&self, locale: &Locale) -> Option<&TransliterationTable> {
        self.tables
            .get(locale.as_str())
            .or_else(|| self.tables.get(locale.primary()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

fn static_table(pairs: &[(char, &str)]) -> TransliterationTable {
    TransliterationTable {
        entries: pairs.iter().map(|(k, v)| (*k, (*v).to_owned())).collect(),
    }
}

static BUILTIN: Lazy<LocaleTables> = Lazy::new(|| {
    let german = static_table(&[
        ('ä', "ae"),
        ('ö', "oe"),
        ('ü', "ue"),
        ('ß', "ss"),
        ('Ä', "Ae"),
        ('Ö', "Oe"),
        ('Ü', "Ue"),
        ('ẞ', "SS"),
    ]);
    let nordic = static_table(&[
        ('æ', "ae"),
        ('ø', "oe"),
        ('å', "aa"),
        ('Æ', "Ae"),
        ('Ø', "Oe"),
        ('Å', "Aa"),
    ]);

    let mut tables = HashMap::new();
    tables.insert("de".to_owned(), german);
    for locale in ["da", "nb", "nn", "no"] {
        tables.insert(locale.to_owned(), nordic.clone());
    }
    LocaleTables { tables }
});
