// src/models/photo.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row of the `"Photos"` table
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i32,
    pub pseudonyme: Option<String>,
    #[serde(serialize_with = "crate::models::blob::serialize")]
    pub photo: Vec<u8>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new photo
#[derive(Debug, Clone, Validate)]
pub struct CreatePhotoRequest {
    #[validate(length(max = 255))]
    pub pseudonyme: Option<String>,
    pub photo: Vec<u8>,
}
