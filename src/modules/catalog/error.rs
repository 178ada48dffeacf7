//! Error type for catalog operations

use thiserror::Error;

use super::models::{CustomerId, VideoId};

/// Failures reported by [`Catalog`](super::Catalog) operations.
///
/// Every variant is recoverable: a failed operation leaves the catalog
/// exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("video {0} not found")]
    VideoNotFound(VideoId),

    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    #[error("no copies of video {0} available")]
    NoCopiesAvailable(VideoId),

    #[error("no rental record for customer {0}")]
    NoRentalRecord(CustomerId),

    #[error("no {0} ids left to assign")]
    IdsExhausted(&'static str),

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl CatalogError {
    /// Create an invalid input error
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
