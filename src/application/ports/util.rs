// src/application/ports/util.rs
use crate::domain::slug::{Locale, Slug};

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> Slug;

    fn slugify_for_locale(&self, input: &str, locale: &Locale) -> Slug;
}
