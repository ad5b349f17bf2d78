//! Shared photo gallery for recuerdos.

mod photo;
mod repository;
mod service;

pub use photo::{Category, NewPhoto, Photo};
pub use repository::PhotoRepository;
pub use service::{GalleryService, UploadPhotoRequest, DEFAULT_MAX_UPLOAD_SIZE};
