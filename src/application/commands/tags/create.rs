// src/application/commands/tags/create.rs
use super::TagCommandService;
use crate::{
    application::{dto::TagDto, error::ApplicationResult},
    domain::{
        slug::{HasSlug, Locale},
        tag::{NewTag, TagName},
    },
};

pub struct CreateTagCommand {
    pub name: String,
    pub locale: Option<String>,
}

impl CreateTagCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locale: None,
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

impl TagCommandService {
    pub async fn create_tag(&self, command: CreateTagCommand) -> ApplicationResult<TagDto> {
        let name = TagName::new(command.name)?;
        let locale = command.locale.map(Locale::parse).transpose()?;

        let mut new_tag = NewTag::new(name);
        if let Some(locale) = locale {
            new_tag = new_tag.with_locale(locale);
        }
        new_tag.refresh_slug(self.slugger.as_ref());

        let created = self.repo.insert(new_tag).await?;
        tracing::info!(tag_id = created.id.0, slug = %created.slug, "tag created");
        Ok(created.into())
    }
}
