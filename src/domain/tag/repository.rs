use crate::domain::errors::DomainResult;
use crate::domain::tag::{
    entity::{NewTag, Tag},
    value_objects::TagId,
};
use async_trait::async_trait;

/// Persistence boundary for tags. Implementations store the slug they are
/// given and never derive it themselves.
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;

    async fn update(&self, tag: Tag) -> DomainResult<Tag>;

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
}
