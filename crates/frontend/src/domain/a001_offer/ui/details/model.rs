use contracts::domain::a001_offer::{Creative, CreativeCategory, Offer, OfferCatalog};
use serde::Serialize;

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Embedded player options
#[derive(Debug, Serialize)]
struct PlayerVars {
    autoplay: u8,
    modestbranding: u8,
    rel: u8,
}

/// Find the offer for the current route parameter
pub fn find_offer(catalog: &OfferCatalog, id: Option<&str>) -> Option<Offer> {
    let Some(id) = id else {
        log::debug!("No offer id in route");
        return None;
    };
    let offer = catalog.find(id).cloned();
    if offer.is_none() {
        log::debug!("Offer '{}' not found", id);
    }
    offer
}

/// What the details page shows for a route id
#[derive(Debug, Clone, PartialEq)]
pub enum OfferPage {
    NotFound,
    Details(Box<Offer>),
}

impl OfferPage {
    pub fn resolve(catalog: &OfferCatalog, id: Option<&str>) -> Self {
        match find_offer(catalog, id) {
            Some(offer) => OfferPage::Details(Box::new(offer)),
            None => OfferPage::NotFound,
        }
    }
}

/// Format a number the way a JS template literal prints it:
/// `25`, `12.5`, `0`, and exponent form outside `[1e-6, 1e21)` (`1e+21`, `1e-7`)
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp_form = format!("{:e}", value);
        return match exp_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exp_form,
        };
    }
    format!("{}", value)
}

pub fn show_recurring_badge(offer: &Offer) -> bool {
    offer.is_recurring
}

/// Destination of "Preview Landing Page"
pub fn preview_url(offer: &Offer) -> String {
    offer.landing_page.preview_url.clone()
}

/// Destination of "Duplicate to Webflow", `None` hides the action
pub fn duplicate_url(offer: &Offer) -> Option<String> {
    offer.landing_page.duplicate_url.clone()
}

/// `$25 Payout (40% Commission)`
pub fn payout_line(offer: &Offer) -> String {
    format!(
        "${} Payout ({}% Commission)",
        format_amount(offer.payout),
        format_amount(offer.commission)
    )
}

/// Creatives of one category in catalog order
pub fn creatives_for(offer: &Offer, category: CreativeCategory) -> Vec<Creative> {
    offer.creatives.for_category(category).to_vec()
}

/// Embed URL of the landing page tutorial
pub fn tutorial_embed_url(video_id: &str) -> String {
    let vars = PlayerVars {
        autoplay: 0,
        modestbranding: 1,
        rel: 0,
    };
    let query = serde_qs::to_string(&vars).unwrap_or_default();
    format!("{}/{}?{}", YOUTUBE_EMBED_BASE, video_id, query)
}
