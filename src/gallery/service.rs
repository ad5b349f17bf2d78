//! Gallery service for recuerdos.
//!
//! High-level photo operations: upload with blob storage, listing with
//! category filter, and owner-gated deletion.

use tracing::{info, warn};

use crate::auth::Identity;
use crate::db::Database;
use crate::file::FileStorage;
use crate::{RecuerdosError, Result};

use super::photo::{Category, NewPhoto, Photo};
use super::repository::PhotoRepository;

/// Default maximum upload size (10 MB).
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;

/// Request data for a photo upload.
#[derive(Debug, Clone)]
pub struct UploadPhotoRequest {
    /// Original filename (used for the stored extension).
    pub filename: String,
    /// Image bytes.
    pub content: Vec<u8>,
    /// Caption / story.
    pub caption: String,
    /// Category.
    pub category: Category,
}

impl UploadPhotoRequest {
    /// Create a new upload request.
    pub fn new(filename: impl Into<String>, content: Vec<u8>, caption: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content,
            caption: caption.into(),
            category: Category::default(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

/// Service for gallery operations.
pub struct GalleryService<'a> {
    db: &'a Database,
    storage: &'a FileStorage,
    max_upload_size: u64,
}

impl<'a> GalleryService<'a> {
    /// Create a new GalleryService.
    pub fn new(db: &'a Database, storage: &'a FileStorage) -> Self {
        Self {
            db,
            storage,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }

    /// Create a GalleryService with a custom max upload size.
    pub fn with_max_upload_size(mut self, max_size: u64) -> Self {
        self.max_upload_size = max_size;
        self
    }

    /// Upload a photo on behalf of `identity`.
    ///
    /// Presence checks only: the image and caption must be non-empty, and
    /// the image must fit the configured size limit. The blob is stored
    /// first; the record points at its public URL.
    pub async fn upload(&self, request: &UploadPhotoRequest, identity: &Identity) -> Result<Photo> {
        if request.content.is_empty() {
            return Err(RecuerdosError::Validation(
                "selecciona una foto".to_string(),
            ));
        }

        if request.caption.trim().is_empty() {
            return Err(RecuerdosError::Validation(
                "la foto necesita una historia".to_string(),
            ));
        }

        if request.content.len() as u64 > self.max_upload_size {
            let max_mb = self.max_upload_size / 1024 / 1024;
            return Err(RecuerdosError::Validation(format!(
                "la foto es demasiado grande (máximo {max_mb}MB)"
            )));
        }

        let stored_name = self.storage.save(&request.content, &request.filename)?;
        let image_url = FileStorage::public_url(&stored_name);

        let repo = PhotoRepository::new(self.db.pool());
        let photo = repo
            .create(&NewPhoto::new(
                identity.id,
                image_url,
                request.caption.clone(),
                request.category,
            ))
            .await;

        // Remove the orphaned blob if the record could not be created
        let photo = match photo {
            Ok(photo) => photo,
            Err(e) => {
                let _ = self.storage.delete(&stored_name);
                return Err(e);
            }
        };

        info!(
            photo_id = photo.id,
            user_id = identity.id,
            category = %photo.category,
            "Photo uploaded"
        );

        Ok(photo)
    }

    /// List all photos, newest first.
    pub async fn list(&self) -> Result<Vec<Photo>> {
        PhotoRepository::new(self.db.pool()).list_all().await
    }

    /// List photos in one category, newest first.
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Photo>> {
        PhotoRepository::new(self.db.pool())
            .list_by_category(category)
            .await
    }

    /// Delete a photo. Only the uploading user may delete it.
    ///
    /// The stored blob is removed best-effort after the record.
    pub async fn delete(&self, photo_id: i64, identity: &Identity) -> Result<()> {
        let repo = PhotoRepository::new(self.db.pool());

        let photo = repo
            .get_by_id(photo_id)
            .await?
            .ok_or_else(|| RecuerdosError::NotFound("photo".to_string()))?;

        if photo.user_id != identity.id {
            return Err(RecuerdosError::Permission(
                "solo quien subió la foto puede eliminarla".to_string(),
            ));
        }

        repo.delete(photo_id).await?;

        if let Some(stored_name) = FileStorage::stored_name_from_url(&photo.image_url) {
            if let Err(e) = self.storage.delete(stored_name) {
                warn!(photo_id, error = %e, "Failed to delete stored image");
            }
        }

        info!(photo_id, user_id = identity.id, "Photo deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::register;
    use crate::db::UserRepository;

    async fn setup() -> (tempfile::TempDir, Database, FileStorage, Identity) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        let db = Database::open_in_memory().await.unwrap();
        let identity = register(&UserRepository::new(db.pool()), "a@x.com", "secret1")
            .await
            .unwrap();
        (dir, db, storage, identity)
    }

    #[tokio::test]
    async fn test_upload_stores_blob_and_record() {
        let (_dir, db, storage, identity) = setup().await;
        let service = GalleryService::new(&db, &storage);

        let request = UploadPhotoRequest::new("playa.jpg", b"jpegbytes".to_vec(), "La playa")
            .with_category(Category::Viajes);
        let photo = service.upload(&request, &identity).await.unwrap();

        assert_eq!(photo.user_id, identity.id);
        assert!(photo.image_url.starts_with("/files/"));

        let stored = FileStorage::stored_name_from_url(&photo.image_url).unwrap();
        assert_eq!(storage.load(stored).unwrap(), b"jpegbytes");
    }

    #[tokio::test]
    async fn test_upload_requires_content() {
        let (_dir, db, storage, identity) = setup().await;
        let service = GalleryService::new(&db, &storage);

        let request = UploadPhotoRequest::new("a.jpg", vec![], "caption");
        let result = service.upload(&request, &identity).await;
        assert!(matches!(result, Err(RecuerdosError::Validation(_))));
    }

    #[tokio::test]
    async fn test_upload_requires_caption() {
        let (_dir, db, storage, identity) = setup().await;
        let service = GalleryService::new(&db, &storage);

        let request = UploadPhotoRequest::new("a.jpg", b"x".to_vec(), "   ");
        let result = service.upload(&request, &identity).await;
        assert!(matches!(result, Err(RecuerdosError::Validation(_))));
    }

    #[tokio::test]
    async fn test_upload_size_limit() {
        let (_dir, db, storage, identity) = setup().await;
        let service = GalleryService::new(&db, &storage).with_max_upload_size(4);

        let request = UploadPhotoRequest::new("a.jpg", b"too big".to_vec(), "caption");
        let result = service.upload(&request, &identity).await;
        assert!(matches!(result, Err(RecuerdosError::Validation(_))));
    }

    #[tokio::test]
    async fn test_owner_can_delete() {
        let (_dir, db, storage, identity) = setup().await;
        let service = GalleryService::new(&db, &storage);

        let request = UploadPhotoRequest::new("a.jpg", b"x".to_vec(), "caption");
        let photo = service.upload(&request, &identity).await.unwrap();
        let stored = FileStorage::stored_name_from_url(&photo.image_url)
            .unwrap()
            .to_string();

        service.delete(photo.id, &identity).await.unwrap();

        assert!(service.list().await.unwrap().is_empty());
        assert!(!storage.exists(&stored));
    }

    #[tokio::test]
    async fn test_non_owner_cannot_delete() {
        let (_dir, db, storage, identity) = setup().await;
        let service = GalleryService::new(&db, &storage);

        let other = register(&UserRepository::new(db.pool()), "b@x.com", "secret2")
            .await
            .unwrap();

        let request = UploadPhotoRequest::new("a.jpg", b"x".to_vec(), "caption");
        let photo = service.upload(&request, &identity).await.unwrap();

        let result = service.delete(photo.id, &other).await;
        assert!(matches!(result, Err(RecuerdosError::Permission(_))));

        // The photo is still there
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_photo() {
        let (_dir, db, storage, identity) = setup().await;
        let service = GalleryService::new(&db, &storage);

        let result = service.delete(999, &identity).await;
        assert!(matches!(result, Err(RecuerdosError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_by_category_filters() {
        let (_dir, db, storage, identity) = setup().await;
        let service = GalleryService::new(&db, &storage);

        let viaje = UploadPhotoRequest::new("a.jpg", b"x".to_vec(), "uno")
            .with_category(Category::Viajes);
        let diario = UploadPhotoRequest::new("b.jpg", b"y".to_vec(), "dos")
            .with_category(Category::Cotidiano);
        service.upload(&viaje, &identity).await.unwrap();
        service.upload(&diario, &identity).await.unwrap();

        assert_eq!(service.list().await.unwrap().len(), 2);
        let filtered = service.list_by_category(Category::Viajes).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].caption, "uno");
    }
}
