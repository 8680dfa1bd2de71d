// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod admin_photo;
pub mod blob;
pub mod pagination;
pub mod photo;

pub use admin_photo::*;
pub use pagination::*;
pub use photo::*;
