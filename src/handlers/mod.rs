// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod admin_photos;
pub mod health;
pub mod photos;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

pub use admin_photos::config as admin_photos_config;
pub use health::config as health_config;
pub use photos::config as photos_config;

use crate::errors::ApiError;

/// Parse a `{id}` path segment into an integer key
/// DOCUMENTATION: Rejections carry the same message Postgres gives for an
/// integer column, and surface as a store error (500)
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| {
        let message = if raw.trim().parse::<i128>().is_ok() {
            format!("value \"{}\" is out of range for type integer", raw)
        } else {
            format!("invalid input syntax for type integer: \"{}\"", raw)
        };
        log::error!("Invalid photo id: {}", message);
        ApiError::StoreError(message)
    })
}
