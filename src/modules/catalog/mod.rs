//! In-memory video rental catalog.
//!
//! [`Catalog`] owns the video registry, the customer registry and the rental
//! ledger. Everything outside refers to records by numeric id.

pub mod error;
pub mod ledger;
pub mod models;
mod seed;

pub use error::{CatalogError, Result};
pub use ledger::{RentalRecord, Rentals};
pub use models::{Customer, CustomerId, NewVideo, Video, VideoId, UNASSIGNED_ID};

use crate::utils;

/// Owner of all video, customer and rental state.
#[derive(Debug, Clone)]
pub struct Catalog {
    videos: Vec<Video>,
    customers: Vec<Customer>,
    rentals: Vec<RentalRecord>,
    next_video_id: VideoId,
    next_customer_id: CustomerId,
}

impl Catalog {
    /// Create an empty catalog. The first video and customer both get id 1.
    pub fn new() -> Self {
        Self {
            videos: Vec::new(),
            customers: Vec::new(),
            rentals: Vec::new(),
            next_video_id: 1,
            next_customer_id: 1,
        }
    }

    /// Register a new video under the next sequential id.
    ///
    /// A negative copy count is rejected and consumes no id.
    pub fn insert_video(&mut self, new: NewVideo) -> Result<&Video> {
        let copies_available = u32::try_from(new.copies).map_err(|_| {
            CatalogError::invalid_input(
                "copies",
                format!("expected a non-negative count, got {}", new.copies),
            )
        })?;

        let id = self.next_video_id;
        self.next_video_id = id
            .checked_add(1)
            .ok_or(CatalogError::IdsExhausted("video"))?;

        tracing::info!(
            prefix = %utils::log_prefix("catalog"),
            video_id = id,
            title = %new.title,
            copies = copies_available,
            "video inserted"
        );

        self.videos.push(Video {
            id,
            title: new.title,
            genre: new.genre,
            production: new.production,
            copies_available,
            image_filename: new.image_filename,
        });

        Ok(&self.videos[self.videos.len() - 1])
    }

    /// Register a new customer under the next sequential id.
    pub fn add_customer(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<&Customer> {
        let id = self.next_customer_id;
        self.next_customer_id = id
            .checked_add(1)
            .ok_or(CatalogError::IdsExhausted("customer"))?;

        let customer = Customer {
            id,
            name: name.into(),
            address: address.into(),
        };

        tracing::info!(
            prefix = %utils::log_prefix("catalog"),
            customer_id = id,
            name = %customer.name,
            "customer added"
        );

        self.customers.push(customer);
        Ok(&self.customers[self.customers.len() - 1])
    }

    pub fn find_video(&self, id: VideoId) -> Option<&Video> {
        self.videos.iter().find(|video| video.id == id)
    }

    pub fn find_customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    /// The customer's ledger entry, if they have ever rented anything.
    pub fn rental_record(&self, customer_id: CustomerId) -> Option<&RentalRecord> {
        self.rentals
            .iter()
            .find(|record| record.customer_id == customer_id)
    }

    /// All videos in insertion order.
    pub fn videos(&self) -> impl Iterator<Item = &Video> + '_ {
        self.videos.iter()
    }

    /// All customers in insertion order.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.customers.iter()
    }

    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Check out one copy of `video_id` to `customer_id`.
    ///
    /// Checks run in order: video exists, customer exists, a copy is on the
    /// shelf. On success the id is appended to the customer's queue, creating
    /// the queue on first rental.
    pub fn rent(&mut self, customer_id: CustomerId, video_id: VideoId) -> Result<()> {
        let video = self
            .videos
            .iter_mut()
            .find(|video| video.id == video_id)
            .ok_or(CatalogError::VideoNotFound(video_id))?;

        if !self.customers.iter().any(|c| c.id == customer_id) {
            return Err(CatalogError::CustomerNotFound(customer_id));
        }

        if video.copies_available == 0 {
            return Err(CatalogError::NoCopiesAvailable(video_id));
        }

        video.copies_available -= 1;
        let remaining = video.copies_available;

        let record = match self
            .rentals
            .iter()
            .position(|record| record.customer_id == customer_id)
        {
            Some(index) => &mut self.rentals[index],
            None => {
                self.rentals.push(RentalRecord::new(customer_id));
                let last = self.rentals.len() - 1;
                &mut self.rentals[last]
            }
        };
        record.push(video_id);

        tracing::debug!(customer_id, video_id, remaining, "video rented");
        Ok(())
    }

    /// Take back `video_id` from `customer_id`.
    ///
    /// Every occurrence of the id leaves the customer's queue, but the shelf
    /// is credited with exactly one copy, even when the queue held the id
    /// several times or not at all.
    pub fn return_video(&mut self, customer_id: CustomerId, video_id: VideoId) -> Result<()> {
        let video_index = self
            .videos
            .iter()
            .position(|video| video.id == video_id)
            .ok_or(CatalogError::VideoNotFound(video_id))?;

        let record = self
            .rentals
            .iter_mut()
            .find(|record| record.customer_id == customer_id)
            .ok_or(CatalogError::NoRentalRecord(customer_id))?;

        let removed = record.remove_all(video_id);
        let video = &mut self.videos[video_index];
        video.copies_available = video.copies_available.saturating_add(1);

        tracing::debug!(
            customer_id,
            video_id,
            removed,
            remaining = video.copies_available,
            "video returned"
        );
        Ok(())
    }

    /// Videos currently charged to `customer_id`, front of the queue first.
    ///
    /// A customer who rented and returned everything still has a (now empty)
    /// ledger entry and gets an empty sequence rather than an error.
    pub fn list_rentals(&self, customer_id: CustomerId) -> Result<Rentals<'_>> {
        let record = self
            .rental_record(customer_id)
            .ok_or(CatalogError::NoRentalRecord(customer_id))?;
        Ok(Rentals::new(record, &self.videos))
    }

    pub fn is_available(&self, video_id: VideoId) -> Result<bool> {
        self.find_video(video_id)
            .map(Video::is_available)
            .ok_or(CatalogError::VideoNotFound(video_id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
