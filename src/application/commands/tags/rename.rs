// src/application/commands/tags/rename.rs
use super::TagCommandService;
use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        slug::HasSlug,
        tag::{TagId, TagName},
    },
};

pub struct RenameTagCommand {
    pub id: i64,
    pub name: String,
}

impl TagCommandService {
    pub async fn rename_tag(&self, command: RenameTagCommand) -> ApplicationResult<TagDto> {
        let id = TagId::new(command.id)?;
        let name = TagName::new(command.name)?;

        let mut tag = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        tag.rename(name);
        tag.refresh_slug(self.slugger.as_ref());

        let updated = self.repo.update(tag).await?;
        tracing::info!(tag_id = updated.id.0, slug = %updated.slug, "tag renamed");
        Ok(updated.into())
    }
}
