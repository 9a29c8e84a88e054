mod model;
mod view;
mod view_model;

pub use view::OfferDetails;
pub use view_model::OfferDetailsViewModel;
