// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

/// Character placed between the alphanumeric runs of a slug.
///
/// Limited to the URL-unreserved punctuation `-`, `_`, `.` and `~`, so a slug
/// stays a single path segment without percent-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separator(char);

impl Separator {
    pub const HYPHEN: Self = Self('-');

    pub fn new(ch: char) -> DomainResult<Self> {
        if matches!(ch, '-' | '_' | '.' | '~') {
            Ok(Self(ch))
        } else {
            Err(DomainError::Validation(format!(
                "separator must be one of - _ . ~, got {ch:?}"
            )))
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::HYPHEN
    }
}

impl TryFrom<char> for Separator {
    type Error = DomainError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Separator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(DomainError::Validation(format!(
                "separator must be a single character, got {s:?}"
            ))),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized URL-safe identifier: lowercase ASCII letters and digits joined by
/// single separators. The empty slug is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn parse(value: impl Into<String>, separator: Separator) -> DomainResult<Self> {
        let value = value.into();
        let sep = separator.as_char();

        if value.starts_with(sep) || value.ends_with(sep) {
            return Err(DomainError::Validation(format!(
                "slug must not start or end with {sep:?}"
            )));
        }

        let mut previous_was_sep = false;
        for ch in value.chars() {
            if ch == sep {
                if previous_was_sep {
                    return Err(DomainError::Validation(format!(
                        "slug must not contain consecutive {sep:?}"
                    )));
                }
                previous_was_sep = true;
            } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                previous_was_sep = false;
            } else {
                return Err(DomainError::Validation(format!(
                    "slug contains invalid character {ch:?}"
                )));
            }
        }

        Ok(Self(value))
    }

    /// Wraps output already produced by the slugifier.
    pub(crate) fn from_normalized(value: String) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Language tag used to pick a transliteration table, e.g. `de` or `pt-BR`.
///
/// Stored lowercase with `-` between subtags; `_` is accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn parse(value: impl AsRef<str>) -> DomainResult<Self> {
        let raw = value.as_ref().trim();
        if raw.is_empty() {
            return Err(DomainError::Validation("locale cannot be empty".into()));
        }

        let normalized = raw.replace('_', "-").to_ascii_lowercase();
        let valid = normalized
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        if !valid {
            return Err(DomainError::Validation(format!("invalid locale {raw:?}")));
        }

        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language subtag, `de` for `de-at`.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
