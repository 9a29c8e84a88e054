use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор оффера (slug, например `skore-ai`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(pub String);

impl OfferId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Creatives
// ============================================================================

/// Канал распространения креатива
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreativeCategory {
    #[default]
    Organic,
    Paid,
}

impl CreativeCategory {
    /// Подпись переключателя
    pub fn label(&self) -> &'static str {
        match self {
            CreativeCategory::Organic => "Organic",
            CreativeCategory::Paid => "Paid Ads",
        }
    }

    /// Все категории в порядке отображения
    pub fn all() -> [CreativeCategory; 2] {
        [CreativeCategory::Organic, CreativeCategory::Paid]
    }
}

/// Тип ресурса креатива, определяет способ отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreativeKind {
    Image,
    Video,
}

/// Рекламный материал (картинка или видео) для одной площадки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creative {
    pub platform: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: CreativeKind,
}

impl Creative {
    pub fn alt_text(&self) -> String {
        format!("{} creative", self.platform)
    }
}

/// Креативы по категориям. Ровно две категории, каждая может быть пустой.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creatives {
    #[serde(default)]
    pub organic: Vec<Creative>,
    #[serde(default)]
    pub paid: Vec<Creative>,
}

impl Creatives {
    pub fn for_category(&self, category: CreativeCategory) -> &[Creative] {
        match category {
            CreativeCategory::Organic => &self.organic,
            CreativeCategory::Paid => &self.paid,
        }
    }
}

// ============================================================================
// Landing page configuration
// ============================================================================

pub const DEFAULT_PREVIEW_URL: &str = "https://faceless-twitter.webflow.io/";
pub const DEFAULT_DUPLICATE_URL: &str =
    "https://webflow.com/made-in-webflow/website/faceless-twitter";
pub const DEFAULT_TUTORIAL_VIDEO_ID: &str = "dQw4w9WgXcQ";
pub const DEFAULT_TUTORIAL_TEXT: &str = "Use our high-converting landing page template to maximize your earnings. \
     Watch the tutorial below to learn how to customize it for your needs.";

/// Вводный текст секции лендинга
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LandingPageIntro {
    /// Свой лендинг разрешён при соблюдении правил
    Compliance { lead: String, rules: Vec<String> },
    /// Готовый шаблон и видеоинструкция
    Tutorial { text: String },
}

/// Поведение секции лендинга для конкретного оффера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub intro: LandingPageIntro,
    pub preview_url: String,
    #[serde(default)]
    pub duplicate_url: Option<String>,
    #[serde(default)]
    pub tutorial_video_id: Option<String>,
}

impl Default for LandingPage {
    fn default() -> Self {
        Self {
            intro: LandingPageIntro::Tutorial {
                text: DEFAULT_TUTORIAL_TEXT.to_string(),
            },
            preview_url: DEFAULT_PREVIEW_URL.to_string(),
            duplicate_url: Some(DEFAULT_DUPLICATE_URL.to_string()),
            tutorial_video_id: Some(DEFAULT_TUTORIAL_VIDEO_ID.to_string()),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Оффер партнёрской программы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub guidelines: Vec<String>,
    pub payout: f64,
    pub commission: f64,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub creatives: Creatives,
    #[serde(default)]
    pub landing_page: LandingPage,
}

impl Offer {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        let id = self.id.as_str();
        if id.trim().is_empty() {
            return Err("id must not be empty".into());
        }
        if id.trim() != id {
            return Err(format!("id '{}' must not have leading or trailing whitespace", id));
        }
        if !self.payout.is_finite() || self.payout < 0.0 {
            return Err(format!("payout must be a non-negative number, got {}", self.payout));
        }
        if !self.commission.is_finite() || self.commission < 0.0 {
            return Err(format!(
                "commission must be a non-negative number, got {}",
                self.commission
            ));
        }
        if self.landing_page.preview_url.trim().is_empty() {
            return Err("landingPage.previewUrl must not be empty".into());
        }
        if let Some(url) = &self.landing_page.duplicate_url {
            if url.trim().is_empty() {
                return Err("landingPage.duplicateUrl must not be empty when set".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: &str) -> Offer {
        Offer {
            id: OfferId::new(id),
            name: "X".into(),
            description: "desc".into(),
            guidelines: vec![],
            payout: 10.0,
            commission: 30.0,
            is_recurring: false,
            creatives: Creatives::default(),
            landing_page: LandingPage::default(),
        }
    }

    #[test]
    fn test_deserialize_minimal_offer_uses_template_landing_page() {
        let json = r#"{
            "id": "x",
            "name": "X",
            "description": "An offer",
            "payout": 25,
            "commission": 40,
            "creatives": {
                "organic": [],
                "paid": [{ "platform": "TikTok", "url": "a.mp4", "type": "video" }]
            }
        }"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.id.as_str(), "x");
        assert!(!offer.is_recurring);
        assert!(offer.guidelines.is_empty());
        assert_eq!(offer.creatives.paid[0].kind, CreativeKind::Video);
        assert_eq!(offer.landing_page, LandingPage::default());
    }

    #[test]
    fn test_deserialize_compliance_landing_page() {
        let json = r#"{
            "id": "skore-ai",
            "name": "Skore AI",
            "description": "d",
            "payout": 10,
            "commission": 50,
            "isRecurring": true,
            "landingPage": {
                "intro": { "kind": "compliance", "lead": "Rules:", "rules": ["a", "b"] },
                "previewUrl": "https://whop.com/skore-ai/"
            }
        }"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert!(offer.is_recurring);
        assert_eq!(offer.landing_page.duplicate_url, None);
        assert_eq!(offer.landing_page.tutorial_video_id, None);
        match offer.landing_page.intro {
            LandingPageIntro::Compliance { rules, .. } => assert_eq!(rules.len(), 2),
            other => panic!("unexpected intro: {other:?}"),
        }
    }

    #[test]
    fn test_creatives_for_category() {
        let mut creatives = Creatives::default();
        creatives.paid.push(Creative {
            platform: "TikTok".into(),
            url: "a.mp4".into(),
            kind: CreativeKind::Video,
        });
        assert!(creatives.for_category(CreativeCategory::Organic).is_empty());
        assert_eq!(creatives.for_category(CreativeCategory::Paid).len(), 1);
        assert_eq!(creatives.paid[0].alt_text(), "TikTok creative");
    }

    #[test]
    fn test_validate() {
        assert!(offer("x").validate().is_ok());
        assert!(offer(" ").validate().is_err());
        assert!(offer("promo ").validate().is_err());
        assert!(offer(" promo").validate().is_err());

        let mut negative = offer("x");
        negative.payout = -1.0;
        assert!(negative.validate().is_err());

        let mut nan = offer("x");
        nan.commission = f64::NAN;
        assert!(nan.validate().is_err());

        let mut blank_duplicate = offer("x");
        blank_duplicate.landing_page.duplicate_url = Some(String::new());
        assert!(blank_duplicate.validate().is_err());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(CreativeCategory::default(), CreativeCategory::Organic);
        assert_eq!(CreativeCategory::Paid.label(), "Paid Ads");
        assert_eq!(CreativeCategory::all()[0], CreativeCategory::Organic);
    }
}
