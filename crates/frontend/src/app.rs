use crate::routes::routes::AppRoutes;
use crate::shared::data::catalog::load_bundled_catalog;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the offer catalog to the whole app via context.
    provide_context(load_bundled_catalog());

    view! {
        <AppRoutes />
    }
}
