use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::{Locale, Slug};
use crate::infrastructure::slugifier::Slugifier;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator {
    slugifier: Slugifier,
}

impl DefaultSlugGenerator {
    #[must_use]
    pub fn new(slugifier: Slugifier) -> Self {
        Self { slugifier }
    }
}

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> Slug {
        self.slugifier.slugify(input)
    }

    fn slugify_for_locale(&self, input: &str, locale: &Locale) -> Slug {
        self.slugifier.slugify_for_locale(input, locale)
    }
}
