use super::model;
use crate::shared::navigation::open_in_new_tab;
use contracts::domain::a001_offer::{Creative, CreativeCategory, Offer};
use leptos::prelude::*;

/// Loading state of the embedded tutorial player. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoState {
    #[default]
    Loading,
    Ready,
}

impl VideoState {
    pub fn on_player_ready(self) -> Self {
        VideoState::Ready
    }

    pub fn is_loading(self) -> bool {
        self == VideoState::Loading
    }
}

/// ViewModel for the offer details page
#[derive(Clone, Copy)]
pub struct OfferDetailsViewModel {
    pub offer: StoredValue<Offer>,
    pub category: RwSignal<CreativeCategory>,
    pub video: RwSignal<VideoState>,
}

impl OfferDetailsViewModel {
    pub fn new(offer: Offer) -> Self {
        Self {
            offer: StoredValue::new(offer),
            category: RwSignal::new(CreativeCategory::default()),
            video: RwSignal::new(VideoState::default()),
        }
    }

    pub fn active_category(&self) -> CreativeCategory {
        self.category.get()
    }

    pub fn select_category(&self, category: CreativeCategory) {
        self.category.set(category);
    }

    /// Creatives of the active category; replaces the previous list entirely
    pub fn visible_creatives(&self) -> Vec<Creative> {
        let category = self.category.get();
        self.offer
            .with_value(|offer| model::creatives_for(offer, category))
    }

    pub fn is_video_loading(&self) -> bool {
        self.video.get().is_loading()
    }

    /// Player readiness callback
    pub fn mark_video_ready(&self) {
        let current = self.video.get_untracked();
        if current.is_loading() {
            log::debug!("Tutorial player ready");
            self.video.set(current.on_player_ready());
        }
    }

    pub fn preview_url(&self) -> String {
        self.offer.with_value(model::preview_url)
    }

    pub fn duplicate_url(&self) -> Option<String> {
        self.offer.with_value(model::duplicate_url)
    }

    pub fn preview_command(&self) {
        open_in_new_tab(&self.preview_url());
    }

    pub fn duplicate_command(&self) {
        if let Some(url) = self.duplicate_url() {
            open_in_new_tab(&url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_offer::{CreativeKind, Creatives, LandingPage, OfferId};

    fn offer() -> Offer {
        let creative = |platform: &str, url: &str, kind| Creative {
            platform: platform.into(),
            url: url.into(),
            kind,
        };
        Offer {
            id: OfferId::new("x"),
            name: "X".into(),
            description: "X offer".into(),
            guidelines: vec![],
            payout: 25.0,
            commission: 40.0,
            is_recurring: false,
            creatives: Creatives {
                organic: vec![
                    creative("Instagram", "1.png", CreativeKind::Image),
                    creative("YouTube", "2.mp4", CreativeKind::Video),
                ],
                paid: vec![creative("TikTok", "a.mp4", CreativeKind::Video)],
            },
            landing_page: LandingPage::default(),
        }
    }

    fn platforms(vm: &OfferDetailsViewModel) -> Vec<String> {
        vm.visible_creatives()
            .into_iter()
            .map(|c| c.platform)
            .collect()
    }

    #[test]
    fn test_video_state_is_one_way() {
        let state = VideoState::default();
        assert!(state.is_loading());
        let state = state.on_player_ready();
        assert!(!state.is_loading());
        assert_eq!(state.on_player_ready(), VideoState::Ready);
    }

    #[test]
    fn test_organic_is_default_category() {
        let vm = OfferDetailsViewModel::new(offer());
        assert_eq!(vm.active_category(), CreativeCategory::Organic);
        assert_eq!(platforms(&vm), vec!["Instagram", "YouTube"]);
    }

    #[test]
    fn test_toggle_replaces_creative_list() {
        let vm = OfferDetailsViewModel::new(offer());
        vm.select_category(CreativeCategory::Paid);
        assert_eq!(platforms(&vm), vec!["TikTok"]);

        vm.select_category(CreativeCategory::Organic);
        assert_eq!(platforms(&vm), vec!["Instagram", "YouTube"]);
    }

    #[test]
    fn test_landing_page_command_targets() {
        let vm = OfferDetailsViewModel::new(offer());
        assert_eq!(vm.preview_url(), "https://faceless-twitter.webflow.io/");
        assert_eq!(
            vm.duplicate_url().as_deref(),
            Some("https://webflow.com/made-in-webflow/website/faceless-twitter")
        );

        let mut compliance = offer();
        compliance.landing_page.preview_url = "https://whop.com/skore-ai/".into();
        compliance.landing_page.duplicate_url = None;
        let vm = OfferDetailsViewModel::new(compliance);
        assert_eq!(vm.preview_url(), "https://whop.com/skore-ai/");
        assert_eq!(vm.duplicate_url(), None);
    }

    #[test]
    fn test_player_ready_hides_overlay() {
        let vm = OfferDetailsViewModel::new(offer());
        assert!(vm.is_video_loading());
        vm.mark_video_ready();
        assert!(!vm.is_video_loading());
        vm.mark_video_ready();
        assert_eq!(vm.video.get_untracked(), VideoState::Ready);
    }
}
