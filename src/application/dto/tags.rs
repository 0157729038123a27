use crate::domain::tag::Tag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub locale: Option<String>,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into_inner(),
            slug: tag.slug.into_inner(),
            locale: tag.locale.map(|locale| locale.to_string()),
        }
    }
}
