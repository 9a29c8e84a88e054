use crate::shared::icons::icon;
use leptos::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct EarningsQuery<'a> {
    offer: &'a str,
}

/// In-app path of the earnings page filtered by offer
pub fn earnings_path(offer_id: &str) -> String {
    let query = serde_qs::to_string(&EarningsQuery { offer: offer_id }).unwrap_or_default();
    format!("/earnings?{}", query)
}

/// Link to the affiliate's earnings for one offer
#[component]
pub fn EarningsButton(#[prop(into)] offer_id: String) -> impl IntoView {
    let href = earnings_path(&offer_id);

    view! {
        <a class="button button--primary earnings-button" href=href>
            {icon("dollar")}
            <span>"View Earnings"</span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earnings_path() {
        assert_eq!(earnings_path("skore-ai"), "/earnings?offer=skore-ai");
        assert_eq!(earnings_path("a&b"), "/earnings?offer=a%26b");
    }
}
