pub mod catalog;

pub use catalog::{Catalog, CatalogError};

use rental_kernel::CatalogSettings;

/// Build the catalog the store opens with.
pub fn bootstrap(settings: &CatalogSettings) -> Catalog {
    if settings.seed {
        Catalog::with_demo_data()
    } else {
        tracing::info!("starting with an empty catalog");
        Catalog::new()
    }
}
