//! Announcement domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::announcement::{AnnouncementDto, AnnouncementFieldsDto},
    server::{
        error::validation::ValidationError,
        util::validate::{require_http_url, require_text},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn from_entity(entity: entity::announcement::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            image: entity.image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            title: self.title,
            body: self.body,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fields for creating or replacing an announcement.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementParam {
    pub title: String,
    pub body: String,
    pub image: Option<String>,
}

impl AnnouncementParam {
    pub fn from_dto(dto: AnnouncementFieldsDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            body: dto.body,
            image: dto
                .image
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("body", &self.body)?;
        if let Some(image) = &self.image {
            require_http_url("image", image)?;
        }
        Ok(())
    }
}
