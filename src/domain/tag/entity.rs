// src/domain/tag/entity.rs
use crate::domain::slug::{HasSlug, Locale, Slug};
use crate::domain::tag::value_objects::{TagId, TagName};

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub slug: Slug,
    pub locale: Option<Locale>,
}

impl Tag {
    /// Changes the name only. The slug is stale until `refresh_slug` runs.
    pub fn rename(&mut self, name: TagName) {
        self.name = name;
    }
}

impl HasSlug for Tag {
    fn slug_source(&self) -> &str {
        self.name.as_str()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = slug;
    }

    fn slug_locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
    pub slug: Slug,
    pub locale: Option<Locale>,
}

impl NewTag {
    #[must_use]
    pub fn new(name: TagName) -> Self {
        Self {
            name,
            slug: Slug::default(),
            locale: None,
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }
}

impl HasSlug for NewTag {
    fn slug_source(&self) -> &str {
        self.name.as_str()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = slug;
    }

    fn slug_locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }
}
