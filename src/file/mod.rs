//! Photo blob storage for recuerdos.

mod storage;

pub use storage::{FileStorage, PUBLIC_URL_PREFIX};
