pub mod aggregate;
pub mod catalog;

pub use aggregate::{
    Creative, CreativeCategory, CreativeKind, Creatives, LandingPage, LandingPageIntro, Offer,
    OfferId,
};
pub use catalog::{CatalogError, OfferCatalog};
