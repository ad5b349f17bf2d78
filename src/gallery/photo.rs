//! Photo model for the shared gallery.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// Photo category.
///
/// The storage ids are the original data format and must not change;
/// existing rows reference them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Trips together.
    Viajes,
    /// Special moments.
    #[default]
    MomentosEspeciales,
    /// Everyday life.
    Cotidiano,
    /// Adventures.
    Aventuras,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Viajes,
        Category::MomentosEspeciales,
        Category::Cotidiano,
        Category::Aventuras,
    ];

    /// Convert category to its database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Viajes => "viajes",
            Category::MomentosEspeciales => "momentos_especiales",
            Category::Cotidiano => "cotidiano",
            Category::Aventuras => "aventuras",
        }
    }

    /// Get the display name for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Viajes => "Viajes",
            Category::MomentosEspeciales => "Momentos Especiales",
            Category::Cotidiano => "Cotidiano",
            Category::Aventuras => "Aventuras",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viajes" => Ok(Category::Viajes),
            "momentos_especiales" => Ok(Category::MomentosEspeciales),
            "cotidiano" => Ok(Category::Cotidiano),
            "aventuras" => Ok(Category::Aventuras),
            _ => Err(format!("unknown category: {s}")),
        }
    }
}

/// Photo entity: one gallery entry.
#[derive(Debug, Clone, Serialize)]
pub struct Photo {
    /// Unique photo ID.
    pub id: i64,
    /// User who uploaded the photo.
    pub user_id: i64,
    /// Public URL of the stored image.
    pub image_url: String,
    /// Caption / story behind the photo.
    pub caption: String,
    /// Category.
    pub category: Category,
    /// Upload timestamp.
    pub created_at: String,
}

impl FromRow<'_, SqliteRow> for Photo {
    fn from_row(row: &SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        let category: String = row.try_get("category")?;
        let category = Category::from_str(&category).map_err(|e| sqlx::Error::ColumnDecode {
            index: "category".to_string(),
            source: e.into(),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            image_url: row.try_get("image_url")?,
            caption: row.try_get("caption")?,
            category,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Data for creating a new photo record.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    /// Uploading user.
    pub user_id: i64,
    /// Public URL of the stored image.
    pub image_url: String,
    /// Caption.
    pub caption: String,
    /// Category.
    pub category: Category,
}

impl NewPhoto {
    /// Create a new photo record.
    pub fn new(
        user_id: i64,
        image_url: impl Into<String>,
        caption: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            user_id,
            image_url: image_url.into(),
            caption: caption.into(),
            category,
        }
    }
}
