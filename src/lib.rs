//! URL-safe slug generation for named models.
//!
//! [`slugify`] is the plain entry point. [`Slugifier`] adds a configurable
//! separator and per-locale transliteration tables, and [`domain::slug::HasSlug`]
//! lets a model refresh its slug explicitly right before it is persisted.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use domain::slug::{HasSlug, Locale, Separator, Slug};
pub use infrastructure::slugifier::{Slugifier, slugify, slugify_with_separator};
