// src/domain/slug/has_slug.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::value_objects::{Locale, Slug};

/// A model whose slug is derived from its human-readable name.
///
/// Nothing calls these hooks implicitly. Whoever persists the model calls
/// [`HasSlug::refresh_slug`] right before the write.
pub trait HasSlug {
    fn slug_source(&self) -> &str;

    fn assign_slug(&mut self, slug: Slug);

    /// Locale whose transliteration table applies when the slug is refreshed.
    fn slug_locale(&self) -> Option<&Locale> {
        None
    }

    fn refresh_slug(&mut self, generator: &dyn SlugGenerator) {
        let slug = match self.slug_locale() {
            Some(locale) => generator.slugify_for_locale(self.slug_source(), locale),
            None => generator.slugify(self.slug_source()),
        };
        self.assign_slug(slug);
    }

    /// Locale-aware slug for the current name. Does not touch the stored slug.
    fn generate_slug(&self, generator: &dyn SlugGenerator, locale: &Locale) -> Slug {
        generator.slugify_for_locale(self.slug_source(), locale)
    }
}
