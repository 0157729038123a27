// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tag_slug::domain::errors::{DomainError, DomainResult};
use tag_slug::domain::tag::{NewTag, Tag, TagId, TagRepository};

/// Stores whatever it is handed, including the slug, so tests can check what
/// reached the persistence boundary.
#[derive(Default)]
pub struct InMemoryTagRepo {
    inner: Mutex<HashMap<i64, Tag>>,
    next_id: Mutex<i64>,
}

impl InMemoryTagRepo {
    pub fn stored(&self, id: i64) -> Option<Tag> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let stored = Tag {
            id: TagId::new(id)?,
            name: tag.name,
            slug: tag.slug,
            locale: tag.locale,
        };
        self.inner.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, tag: Tag) -> DomainResult<Tag> {
        let mut map = self.inner.lock().unwrap();
        let id = i64::from(tag.id);
        if !map.contains_key(&id) {
            return Err(DomainError::NotFound(format!("tag {id}")));
        }
        map.insert(id, tag.clone());
        Ok(tag)
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }
}

/// Repository that refuses every write.
pub struct FailingTagRepo;

#[async_trait]
impl TagRepository for FailingTagRepo {
    async fn insert(&self, _tag: NewTag) -> DomainResult<Tag> {
        Err(DomainError::Persistence("disk full".into()))
    }

    async fn update(&self, _tag: Tag) -> DomainResult<Tag> {
        Err(DomainError::Persistence("disk full".into()))
    }

    async fn find_by_id(&self, _id: TagId) -> DomainResult<Option<Tag>> {
        Ok(None)
    }
}
