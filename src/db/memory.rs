// src/db/memory.rs
// DOCUMENTATION: In-process implementation of both stores
// PURPOSE: Run the service without Postgres (STORE_BACKEND=memory) and
// back the handler tests

use crate::db::{AdminPhotoStore, PhotoStore};
use crate::errors::ApiError;
use crate::models::{
    AdminPhoto, CreateAdminPhotoRequest, CreatePhotoRequest, Photo, UpdateAdminPhotoRequest,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    photos: BTreeMap<i32, Photo>,
    admin_photos: BTreeMap<i32, AdminPhoto>,
    next_photo_id: i32,
    next_admin_photo_id: i32,
}

/// Both tables behind one lock; ids are sequential per table and never reused
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(counter: &mut i32) -> Result<i32, ApiError> {
    *counter = counter
        .checked_add(1)
        .ok_or_else(|| ApiError::StoreError("id sequence exhausted".to_string()))?;
    Ok(*counter)
}

#[async_trait]
impl PhotoStore for MemoryStore {
    async fn create_photo(&self, req: &CreatePhotoRequest) -> Result<Photo, ApiError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.next_photo_id)?;
        let now = Utc::now();

        let photo = Photo {
            id,
            pseudonyme: req.pseudonyme.clone(),
            photo: req.photo.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.photos.insert(id, photo.clone());

        log::info!("Created photo with id: {}", id);
        Ok(photo)
    }

    async fn get_photo(&self, id: i32) -> Result<Option<Photo>, ApiError> {
        Ok(self.tables.read().await.photos.get(&id).cloned())
    }

    async fn list_photos(&self, limit: i64, offset: i64) -> Result<(Vec<Photo>, i64), ApiError> {
        let tables = self.tables.read().await;

        let mut rows: Vec<&Photo> = tables.photos.values().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let skip = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        let page = rows.into_iter().skip(skip).take(take).cloned().collect();

        Ok((page, tables.photos.len() as i64))
    }

    async fn delete_photo(&self, id: i32) -> Result<u64, ApiError> {
        let removed = self.tables.write().await.photos.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

#[async_trait]
impl AdminPhotoStore for MemoryStore {
    async fn create_admin_photo(
        &self,
        req: &CreateAdminPhotoRequest,
    ) -> Result<AdminPhoto, ApiError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.next_admin_photo_id)?;
        let now = Utc::now();

        let photo = AdminPhoto {
            id,
            location: req.location.clone(),
            photo: Some(req.photo.clone()),
            created_at: now,
            updated_at: now,
        };
        tables.admin_photos.insert(id, photo.clone());

        log::info!("Created admin photo with id: {}", id);
        Ok(photo)
    }

    async fn list_admin_photos(&self) -> Result<Vec<AdminPhoto>, ApiError> {
        Ok(self
            .tables
            .read()
            .await
            .admin_photos
            .values()
            .cloned()
            .collect())
    }

    async fn get_admin_photo(&self, id: i32) -> Result<Option<AdminPhoto>, ApiError> {
        Ok(self.tables.read().await.admin_photos.get(&id).cloned())
    }

    async fn update_admin_photo(
        &self,
        id: i32,
        req: &UpdateAdminPhotoRequest,
    ) -> Result<Option<AdminPhoto>, ApiError> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.admin_photos.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(location) = &req.location {
            row.location = Some(location.clone());
        }
        row.photo = req.photo.clone();
        row.updated_at = Utc::now();

        Ok(Some(row.clone()))
    }

    async fn delete_admin_photo(&self, id: i32) -> Result<u64, ApiError> {
        let removed = self.tables.write().await.admin_photos.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn new_photo(bytes: &[u8]) -> CreatePhotoRequest {
        CreatePhotoRequest {
            pseudonyme: None,
            photo: bytes.to_vec(),
        }
    }

    #[test]
    fn test_ids_are_sequential_and_not_reused() {
        block_on(async {
            let store = MemoryStore::new();
            let first = store.create_photo(&new_photo(b"a")).await.unwrap();
            let second = store.create_photo(&new_photo(b"b")).await.unwrap();
            assert_eq!((first.id, second.id), (1, 2));

            assert_eq!(store.delete_photo(second.id).await.unwrap(), 1);
            let third = store.create_photo(&new_photo(b"c")).await.unwrap();
            assert_eq!(third.id, 3);
        });
    }

    #[test]
    fn test_tables_are_independent() {
        block_on(async {
            let store = MemoryStore::new();
            store.create_photo(&new_photo(b"a")).await.unwrap();
            let admin = store
                .create_admin_photo(&CreateAdminPhotoRequest {
                    location: Some("Lyon".to_string()),
                    photo: b"x".to_vec(),
                })
                .await
                .unwrap();

            assert_eq!(admin.id, 1);
            assert_eq!(store.list_admin_photos().await.unwrap().len(), 1);
            assert_eq!(store.list_photos(10, 0).await.unwrap().1, 1);
        });
    }

    #[test]
    fn test_list_photos_newest_first() {
        block_on(async {
            let store = MemoryStore::new();
            for i in 0..5u8 {
                store.create_photo(&new_photo(&[i])).await.unwrap();
            }

            let (page, total) = store.list_photos(2, 1).await.unwrap();
            assert_eq!(total, 5);
            assert_eq!(page.iter().map(|p| p.id).collect::<Vec<_>>(), vec![4, 3]);

            let (page, _) = store.list_photos(10, 100).await.unwrap();
            assert!(page.is_empty());
        });
    }

    #[test]
    fn test_update_keeps_location_and_clears_photo() {
        block_on(async {
            let store = MemoryStore::new();
            let created = store
                .create_admin_photo(&CreateAdminPhotoRequest {
                    location: Some("Paris".to_string()),
                    photo: b"jpeg".to_vec(),
                })
                .await
                .unwrap();

            let updated = store
                .update_admin_photo(
                    created.id,
                    &UpdateAdminPhotoRequest {
                        location: None,
                        photo: None,
                    },
                )
                .await
                .unwrap()
                .unwrap();

            assert_eq!(updated.location.as_deref(), Some("Paris"));
            assert_eq!(updated.photo, None);
            assert!(updated.updated_at >= created.updated_at);

            let missing = store
                .update_admin_photo(
                    99,
                    &UpdateAdminPhotoRequest {
                        location: None,
                        photo: None,
                    },
                )
                .await
                .unwrap();
            assert!(missing.is_none());
        });
    }

    #[test]
    fn test_delete_missing_row() {
        block_on(async {
            let store = MemoryStore::new();
            assert_eq!(store.delete_photo(1).await.unwrap(), 0);
            assert_eq!(store.delete_admin_photo(1).await.unwrap(), 0);
        });
    }
}
