// src/infrastructure/slugifier.rs
use crate::config::{ConfigError, SlugConfig};
use crate::domain::slug::{Locale, LocaleTables, Separator, Slug, TransliterationTable};

/// Slug with the default `-` separator and no locale overrides.
///
/// Never fails: input without any alphanumeric content yields `""`.
#[must_use]
pub fn slugify(input: &str) -> String {
    normalize(input, None, Separator::HYPHEN)
}

/// Same as [`slugify`] with `separator` between words.
#[must_use]
pub fn slugify_with_separator(input: &str, separator: Separator) -> String {
    normalize(input, None, separator)
}

/// Reusable slugifier carrying a separator and optional per-locale
/// transliteration tables.
#[derive(Debug, Clone, Default)]
pub struct Slugifier {
    separator: Separator,
    tables: LocaleTables,
}

impl Slugifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_locale_table(mut self, locale: &Locale, table: TransliterationTable) -> Self {
        tracing::debug!(locale = %locale, entries = table.len(), "registering transliteration table");
        self.tables.insert(locale, table);
        self
    }

    #[must_use]
    pub fn with_builtin_tables(mut self) -> Self {
        self.tables.merge(LocaleTables::builtin());
        self
    }

    #[must_use]
    pub fn with_tables(mut self, tables: LocaleTables) -> Self {
        self.tables.merge(tables);
        self
    }

    pub fn from_config(config: &SlugConfig) -> Result<Self, ConfigError> {
        let mut slugifier = Self::new().with_separator(config.separator());
        if config.builtin_tables() {
            slugifier = slugifier.with_builtin_tables();
        }
        let custom = config.load_locale_tables()?;
        tracing::debug!(
            separator = %config.separator(),
            builtin = config.builtin_tables(),
            custom_locales = custom.len(),
            "slugifier configured"
        );
        Ok(slugifier.with_tables(custom))
    }

    #[must_use]
    pub fn separator(&self) -> Separator {
        self.separator
    }

    #[must_use]
    pub fn slugify(&self, input: &str) -> Slug {
        Slug::from_normalized(normalize(input, None, self.separator))
    }

    /// Falls back to [`Slugifier::slugify`] when no table is registered for
    /// the locale or its primary subtag.
    #[must_use]
    pub fn slugify_for_locale(&self, input: &str, locale: &Locale) -> Slug {
        let table = self.tables.lookup(locale);
        if table.is_none() {
            tracing::trace!(locale = %locale, "no transliteration table for locale");
        }
        Slug::from_normalized(normalize(input, table, self.separator))
    }
}

fn normalize(input: &str, table: Option<&TransliterationTable>, separator: Separator) -> String {
    let mut ascii = String::with_capacity(input.len());
    for ch in input.chars() {
        if is_pictograph(ch) {
            continue;
        }
        if ch.is_ascii() {
            ascii.push(ch);
        } else if let Some(replacement) = table.and_then(|t| t.get(ch)) {
            ascii.push_str(replacement);
        } else if let Some(replacement) = deunicode::deunicode_char(ch) {
            ascii.push_str(replacement);
        }
        // Characters without any ASCII mapping are dropped.
    }

    let slug = slug::slugify(&ascii);
    tracing::trace!(input_len = input.len(), slug = %slug, "slugified");

    match separator.as_char() {
        '-' => slug,
        sep => slug.chars().map(|c| if c == '-' { sep } else { c }).collect(),
    }
}

/// Emoji, dingbats and other symbol blocks. `deunicode` spells these out as
/// English words, which do not belong in a slug.
fn is_pictograph(ch: char) -> bool {
    matches!(
        ch,
        '\u{200D}'
            | '\u{20E3}'
            | '\u{2190}'..='\u{21FF}'
            | '\u{2200}'..='\u{23FF}'
            | '\u{25A0}'..='\u{27BF}'
            | '\u{2900}'..='\u{2BFF}'
            | '\u{FE00}'..='\u{FE0F}'
            | '\u{1F000}'..='\u{1FAFF}'
            | '\u{E0000}'..='\u{E007F}'
    )
}
