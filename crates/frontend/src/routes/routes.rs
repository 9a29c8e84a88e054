use crate::domain::a001_offer::ui::details::OfferDetails;
use crate::routes::params::use_offer_id;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn OfferDetailsPage() -> impl IntoView {
    let offer_id = use_offer_id();

    // Re-mount on id change so the local view state starts fresh for every offer.
    move || view! { <OfferDetails id=offer_id.get() /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page-not-found">"Page not found"</div> }>
                <Route path=path!("/offers/:id") view=OfferDetailsPage />
            </Routes>
        </Router>
    }
}
