use super::model;
use super::view_model::OfferDetailsViewModel;
use crate::domain::a001_offer::ui::earnings_button::EarningsButton;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::PageHeader;
use crate::shared::data::catalog::use_offer_catalog;
use crate::shared::icons::icon;
use crate::shared::markdown::Markdown;
use contracts::domain::a001_offer::{
    Creative, CreativeCategory, CreativeKind, LandingPage, LandingPageIntro,
};
use leptos::prelude::*;

#[component]
pub fn OfferDetails(id: Option<String>) -> impl IntoView {
    let catalog = use_offer_catalog();
    let offer = match model::OfferPage::resolve(&catalog, id.as_deref()) {
        model::OfferPage::Details(offer) => *offer,
        model::OfferPage::NotFound => {
            return view! { <div class="offer-not-found">"Offer not found"</div> }.into_any();
        }
    };

    let payout_line = model::payout_line(&offer);
    let landing_page = offer.landing_page.clone();
    let show_recurring_badge = model::show_recurring_badge(&offer);
    let vm = OfferDetailsViewModel::new(offer.clone());

    view! {
        <div class="details-container offer-details">
            <PageHeader title=offer.name.clone() subtitle=offer.description.clone()>
                <EarningsButton offer_id=offer.id.to_string() />
            </PageHeader>

            <section class="offer-details__section">
                <h2 class="offer-details__section-title">"Offer Guidelines"</h2>
                <div class="offer-details__guidelines">
                    {offer
                        .guidelines
                        .iter()
                        .map(|guideline| view! {
                            <Markdown source=guideline.clone() class="offer-details__guideline".to_string() />
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="offer-details__payout">
                <div>
                    <h3 class="offer-details__payout-title">"Payout Details"</h3>
                    <p class="offer-details__payout-line">{payout_line}</p>
                </div>
                {show_recurring_badge.then(|| view! {
                    <Badge variant="success".to_string()>"Recurring"</Badge>
                })}
            </section>

            <LandingPageSection vm=vm landing_page=landing_page />
            <CreativesSection vm=vm />
        </div>
    }
    .into_any()
}

#[component]
fn LandingPageSection(vm: OfferDetailsViewModel, landing_page: LandingPage) -> impl IntoView {
    let intro = match landing_page.intro {
        LandingPageIntro::Compliance { lead, rules } => view! {
            <p class="offer-details__text">{lead}</p>
            <ul class="offer-details__rules">
                {rules.into_iter().map(|rule| view! { <li>{rule}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        LandingPageIntro::Tutorial { text } => view! {
            <p class="offer-details__text">{text}</p>
        }
        .into_any(),
    };

    let duplicate_action = vm.duplicate_url().is_some().then(|| view! {
        <Button
            class="offer-details__action".to_string()
            on_click=Callback::new(move |_| vm.duplicate_command())
        >
            {icon("copy")}
            <span>"Duplicate to Webflow"</span>
        </Button>
    });

    let tutorial_video = landing_page.tutorial_video_id.map(|video_id| {
        let src = model::tutorial_embed_url(&video_id);
        view! {
            <div class="offer-details__video">
                <Show when=move || vm.is_video_loading()>
                    <div class="offer-details__video-overlay">{icon("loader")}</div>
                </Show>
                <iframe
                    class="offer-details__video-player"
                    src=src
                    title="Landing page tutorial"
                    allow="accelerometer; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                    on:load=move |_| vm.mark_video_ready()
                ></iframe>
            </div>
        }
    });

    view! {
        <section class="offer-details__section offer-details__landing">
            <h2 class="offer-details__section-title">"Landing Page"</h2>
            <div class="offer-details__landing-grid">
                <div class="offer-details__landing-copy">
                    {intro}
                    <div class="offer-details__actions">
                        <Button
                            variant="secondary".to_string()
                            class="offer-details__action".to_string()
                            on_click=Callback::new(move |_| vm.preview_command())
                        >
                            {icon("eye")}
                            <span>"Preview Landing Page"</span>
                        </Button>
                        {duplicate_action}
                    </div>
                </div>
                {tutorial_video}
            </div>
        </section>
    }
}

#[component]
fn CreativesSection(vm: OfferDetailsViewModel) -> impl IntoView {
    view! {
        <section class="offer-details__section">
            <h2 class="offer-details__section-title">"Creatives"</h2>
            <div class="offer-details__toggles">
                {CreativeCategory::all()
                    .into_iter()
                    .map(|category| view! {
                        <button
                            type="button"
                            class=move || {
                                if vm.active_category() == category {
                                    "offer-details__toggle offer-details__toggle--active"
                                } else {
                                    "offer-details__toggle"
                                }
                            }
                            on:click=move |_| vm.select_category(category)
                        >
                            {category.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            <div class="offer-details__creatives">
                {move || {
                    vm.visible_creatives()
                        .into_iter()
                        .map(|creative| view! { <CreativeCard creative=creative /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn CreativeCard(creative: Creative) -> impl IntoView {
    let media = match creative.kind {
        CreativeKind::Image => view! {
            <img class="creative-card__media" src=creative.url.clone() alt=creative.alt_text() />
        }
        .into_any(),
        CreativeKind::Video => view! {
            <video class="creative-card__media" src=creative.url.clone() controls=true></video>
        }
        .into_any(),
    };

    view! {
        <div class="creative-card">
            <div class="creative-card__header">
                <h3 class="creative-card__platform">{creative.platform.clone()}</h3>
                <a
                    class="button button--secondary creative-card__download"
                    href=creative.url.clone()
                    download=""
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {icon("download")}
                    "Download"
                </a>
            </div>
            {media}
        </div>
    }
}
