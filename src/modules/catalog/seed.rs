//! Demo inventory the store opens with.

use super::models::NewVideo;
use super::Catalog;

const DEMO_VIDEOS: &[(&str, &str, &str, i64, &str)] = &[
    (
        "The Shawshank Redemption",
        "Drama",
        "Castle Rock Entertainment",
        5,
        "shawshank.jpg",
    ),
    ("The Godfather", "Crime", "Paramount Pictures", 3, "godfather.jpg"),
    ("Pulp Fiction", "Crime", "Miramax Films", 4, "pulpfiction.jpg"),
    ("The Dark Knight", "Action", "Warner Bros.", 2, "darkknight.jpg"),
    ("Inception", "Sci-Fi", "Warner Bros.", 6, "inception.jpg"),
];

const DEMO_CUSTOMERS: &[(&str, &str)] = &[
    ("John Doe", "123 Main St"),
    ("Jane Smith", "456 Elm St"),
];

impl Catalog {
    /// A catalog pre-populated with the demo videos and customers.
    pub fn with_demo_data() -> Self {
        let mut catalog = Self::new();
        catalog.seed_demo_data();
        catalog
    }

    /// Append the demo videos and customers, taking the next free ids.
    pub fn seed_demo_data(&mut self) {
        for &(title, genre, production, copies, image) in DEMO_VIDEOS {
            let video = NewVideo::new(title, genre, production, copies, image);
            if let Err(err) = self.insert_video(video) {
                tracing::warn!(%err, title, "skipping demo video");
            }
        }
        for &(name, address) in DEMO_CUSTOMERS {
            if let Err(err) = self.add_customer(name, address) {
                tracing::warn!(%err, name, "skipping demo customer");
            }
        }

        tracing::info!(
            videos = self.video_count(),
            customers = self.customer_count(),
            "demo data seeded"
        );
    }
}
