use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Offer id from the current route (`/offers/:id`).
///
/// Empty or missing parameter resolves to `None`, which the details view
/// treats the same as an unknown id.
pub fn use_offer_id() -> Memo<Option<String>> {
    let params = use_params_map();
    Memo::new(move |_| offer_id_param(params.read().get("id")))
}

/// Ids are matched exactly against the catalog, only an empty value is dropped
fn offer_id_param(raw: Option<String>) -> Option<String> {
    raw.filter(|id| !id.is_empty())
}
