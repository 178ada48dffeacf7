//! Per-customer rental queues.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::models::{CustomerId, Video, VideoId};

/// Videos currently charged to one customer, oldest rental first.
///
/// The same id may appear more than once. A record is created on the
/// customer's first rental and is kept even after its queue drains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub customer_id: CustomerId,
    queue: VecDeque<VideoId>,
}

impl RentalRecord {
    pub(super) fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            queue: VecDeque::new(),
        }
    }

    pub(super) fn push(&mut self, video_id: VideoId) {
        self.queue.push_back(video_id);
    }

    /// Drop every occurrence of `video_id`, returning how many were removed.
    pub(super) fn remove_all(&mut self, video_id: VideoId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|&id| id != video_id);
        before - self.queue.len()
    }

    /// Rented video ids, front to back.
    pub fn video_ids(&self) -> impl Iterator<Item = VideoId> + '_ {
        self.queue.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Lazy view over a customer's rentals resolved against the video registry.
///
/// Ids missing from the registry are skipped. Clone before iterating to walk
/// the sequence more than once.
#[derive(Debug, Clone)]
pub struct Rentals<'a> {
    ids: std::collections::vec_deque::Iter<'a, VideoId>,
    videos: &'a [Video],
}

impl<'a> Rentals<'a> {
    pub(super) fn new(record: &'a RentalRecord, videos: &'a [Video]) -> Self {
        Self {
            ids: record.queue.iter(),
            videos,
        }
    }
}

impl<'a> Iterator for Rentals<'a> {
    type Item = &'a Video;

    fn next(&mut self) -> Option<Self::Item> {
        let videos = self.videos;
        self.ids
            .by_ref()
            .find_map(|&id| videos.iter().find(|video| video.id == id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.ids.size_hint().1)
    }
}
