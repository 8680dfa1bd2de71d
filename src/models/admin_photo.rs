// src/models/admin_photo.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row of the `admin_photos` table
/// DOCUMENTATION: `photo` is nullable in storage; only the create handler
/// insists on a file
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdminPhoto {
    pub id: i32,
    pub location: Option<String>,
    #[serde(serialize_with = "crate::models::blob::optional::serialize")]
    pub photo: Option<Vec<u8>>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new admin photo
#[derive(Debug, Clone, Validate)]
pub struct CreateAdminPhotoRequest {
    #[validate(length(max = 255))]
    pub location: Option<String>,
    pub photo: Vec<u8>,
}

/// Request to update an admin photo
/// DOCUMENTATION: `location: None` keeps the stored value, while
/// `photo: None` clears the stored blob
#[derive(Debug, Clone, Validate)]
pub struct UpdateAdminPhotoRequest {
    #[validate(length(max = 255))]
    pub location: Option<String>,
    pub photo: Option<Vec<u8>>,
}
