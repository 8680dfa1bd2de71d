// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod admin_photo_service;
pub mod photo_service;

pub use admin_photo_service::AdminPhotoService;
pub use photo_service::PhotoService;
