use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image path stored when a breed is created without one.
pub const DEFAULT_IMAGE: &str = "/images/test.jpg";

/// A dog breed as persisted in the `dogs` table and returned by `GET /api/breeds`.
///
/// `id`, `created_at` and `updated_at` are assigned by the store on insert and
/// serialized as `createdAt` / `updatedAt` so the frontend sees the same keys the
/// API has always exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    pub id: i64,
    pub title: String,
    pub origin: String,
    pub image: String,
    pub description: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a breed.
///
/// Every field is optional so that an absent value can be told apart from an
/// empty one: `image: None` picks up [`DEFAULT_IMAGE`], `image: Some("")` is
/// rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBreed {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl NewBreed {
    /// Builds an input with all required fields set and no image.
    pub fn new(
        title: impl Into<String>,
        origin: impl Into<String>,
        description: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: Some(title.into()),
            origin: Some(origin.into()),
            image: None,
            description: Some(description.into()),
            year: Some(year),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// A breed that passed validation and can be written to the store.
///
/// Only `NewBreed::validate` produces this type, so holding one means every
/// field constraint was satisfied at the time of the check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBreed {
    pub(crate) title: String,
    pub(crate) origin: String,
    pub(crate) image: String,
    pub(crate) description: String,
    pub(crate) year: i32,
}

impl ValidBreed {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}
