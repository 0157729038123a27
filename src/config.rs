// src/config.rs
use crate::domain::errors::DomainError;
use crate::domain::slug::{Locale, LocaleTables, Separator, TransliterationTable};
use std::{collections::HashMap, env, fs, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct SlugConfig {
    separator: Separator,
    default_locale: Option<Locale>,
    builtin_tables: bool,
    transliterations_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse transliteration tables: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    fn invalid(key: &str, err: &DomainError) -> Self {
        Self::Invalid(format!("{key}: {err}"))
    }
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            separator: Separator::HYPHEN,
            default_locale: None,
            builtin_tables: true,
            transliterations_path: None,
        }
    }
}

impl SlugConfig {
    /// Build configuration from environment variables. Callers load any
    /// `.env` file beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SlugConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let separator = match lookup("SLUG_SEPARATOR") {
            Some(raw) => raw
                .parse::<Separator>()
                .map_err(|err| ConfigError::invalid("SLUG_SEPARATOR", &err))?,
            None => Separator::HYPHEN,
        };

        let default_locale = lookup("SLUG_LOCALE")
            .filter(|v| !v.trim().is_empty())
            .map(Locale::parse)
            .transpose()
            .map_err(|err| ConfigError::invalid("SLUG_LOCALE", &err))?;

        let builtin_tables = match lookup("SLUG_BUILTIN_TABLES") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!("SLUG_BUILTIN_TABLES: expected boolean, got {raw:?}"))
            })?,
            None => true,
        };

        let transliterations_path = lookup("SLUG_TRANSLITERATIONS_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            separator,
            default_locale,
            builtin_tables,
            transliterations_path,
        })
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn default_locale(&self) -> Option<&Locale> {
        self.default_locale.as_ref()
    }

    pub fn builtin_tables(&self) -> bool {
        self.builtin_tables
    }

    pub fn transliterations_path(&self) -> Option<&PathBuf> {
        self.transliterations_path.as_ref()
    }

    /// Reads the JSON file named by `SLUG_TRANSLITERATIONS_PATH`, shaped as
    /// `{ "<locale>": { "<char>": "<ascii>" } }`. Empty when unset.
    pub fn load_locale_tables(&self) -> Result<LocaleTables, ConfigError> {
        let Some(path) = &self.transliterations_path else {
            return Ok(LocaleTables::new());
        };

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let parsed: HashMap<String, TransliterationTable> = serde_json::from_str(&raw)?;

        let mut tables = LocaleTables::new();
        for (tag, table) in parsed {
            let locale = Locale::parse(&tag)
                .map_err(|err| ConfigError::invalid("SLUG_TRANSLITERATIONS_PATH", &err))?;
            tables.insert(&locale, table);
        }
        Ok(tables)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
