use serde::{Deserialize, Serialize};

/// Numeric identifier of a video, assigned sequentially from 1.
pub type VideoId = u32;

/// Numeric identifier of a customer, assigned sequentially from 1.
pub type CustomerId = u32;

/// An id no record ever holds, since assignment starts at 1.
pub const UNASSIGNED_ID: u32 = 0;

/// A rentable title held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for the video
    pub id: VideoId,
    /// Title of the video
    pub title: String,
    /// Genre of the video
    pub genre: String,
    /// Production company
    pub production: String,
    /// Copies on the shelf, never negative
    pub copies_available: u32,
    /// Opaque reference to a cover image
    pub image_filename: String,
}

impl Video {
    pub fn is_available(&self) -> bool {
        self.copies_available > 0
    }
}

/// Request model for inserting a new video.
///
/// `copies` is signed so that a negative count can be rejected as invalid
/// input instead of being silently wrapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVideo {
    pub title: String,
    pub genre: String,
    pub production: String,
    pub copies: i64,
    pub image_filename: String,
}

impl NewVideo {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        production: impl Into<String>,
        copies: i64,
        image_filename: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            production: production.into(),
            copies,
            image_filename: image_filename.into(),
        }
    }
}

/// A registered customer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the customer
    pub id: CustomerId,
    /// Customer's full name
    pub name: String,
    /// Customer's postal address
    pub address: String,
}
