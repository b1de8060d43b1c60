//! Photo gallery domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::photo::{PhotoDto, PhotoFieldsDto},
    server::{error::validation::ValidationError, util::validate::require_http_url},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: i32,
    pub event_id: i32,
    pub url: String,
    pub caption: Option<String>,
    pub tags: Vec<String>,
    pub is_cover: bool,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    /// Converts a photo row and its tag rows into the domain model.
    pub fn from_entity(
        entity: entity::photo::Model,
        mut tags: Vec<entity::photo_tag::Model>,
    ) -> Self {
        tags.sort_by_key(|t| t.id);

        Self {
            id: entity.id,
            event_id: entity.event_id,
            url: entity.url,
            caption: entity.caption,
            tags: tags.into_iter().map(|t| t.tag).collect(),
            is_cover: entity.is_cover,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PhotoDto {
        PhotoDto {
            id: self.id,
            event_id: self.event_id,
            url: self.url,
            caption: self.caption,
            tags: self.tags,
            is_cover: self.is_cover,
            created_at: self.created_at,
        }
    }
}

/// Fields for creating or replacing a photo.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoParam {
    pub event_id: i32,
    pub url: String,
    pub caption: Option<String>,
    /// Tags with blank entries removed.
    pub tags: Vec<String>,
    pub is_cover: bool,
}

impl PhotoParam {
    pub fn from_dto(dto: PhotoFieldsDto) -> Self {
        Self {
            event_id: dto.event_id,
            url: dto.url.trim().to_string(),
            caption: dto.caption.filter(|c| !c.trim().is_empty()),
            tags: dto
                .tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            is_cover: dto.is_cover,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_http_url("url", &self.url)
    }
}
