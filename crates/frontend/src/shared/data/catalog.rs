//! Offer repository backed by the catalog bundled into the wasm binary.

use contracts::domain::a001_offer::OfferCatalog;
use leptos::prelude::*;

const BUNDLED_OFFERS: &str = include_str!("../../../data/offers.json");

/// Parse the bundled catalog.
///
/// A broken catalog is logged and replaced by an empty one, so every lookup
/// ends up in the "not found" state instead of taking the page down.
pub fn load_bundled_catalog() -> OfferCatalog {
    match OfferCatalog::from_json(BUNDLED_OFFERS) {
        Ok(catalog) => {
            log::info!("Offer catalog loaded: {} offers", catalog.len());
            catalog
        }
        Err(e) => {
            log::error!("Failed to load offer catalog: {}", e);
            OfferCatalog::default()
        }
    }
}

/// Catalog provided by `App`, or an empty one when rendered outside of it.
pub fn use_offer_catalog() -> OfferCatalog {
    use_context::<OfferCatalog>().unwrap_or_else(|| {
        log::warn!("OfferCatalog context not found, using empty catalog");
        OfferCatalog::default()
    })
}
