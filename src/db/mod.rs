// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod admin_photo_repository;
pub mod memory;
pub mod photo_repository;
pub mod schema;
pub mod store;

pub use admin_photo_repository::*;
pub use memory::*;
pub use photo_repository::*;
pub use schema::ensure_schema;
pub use store::*;
