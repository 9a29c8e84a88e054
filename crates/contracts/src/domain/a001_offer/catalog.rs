use super::aggregate::Offer;
use std::collections::HashSet;
use thiserror::Error;

/// Ошибки загрузки каталога офферов
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Offer catalog parse error: {0}")]
    Parse(String),

    #[error("Duplicate offer id: {0}")]
    DuplicateId(String),

    #[error("Invalid offer '{id}': {reason}")]
    InvalidOffer { id: String, reason: String },
}

/// Неизменяемый каталог офферов с поиском по id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferCatalog {
    offers: Vec<Offer>,
}

impl OfferCatalog {
    /// Собрать каталог, проверив каждый оффер и уникальность id
    pub fn new(offers: Vec<Offer>) -> Result<Self, CatalogError> {
        Self::check(&offers)?;
        Ok(Self { offers })
    }

    fn check(offers: &[Offer]) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for offer in offers {
            offer.validate().map_err(|reason| CatalogError::InvalidOffer {
                id: offer.id.to_string(),
                reason,
            })?;
            if !seen.insert(offer.id.as_str()) {
                return Err(CatalogError::DuplicateId(offer.id.to_string()));
            }
        }
        Ok(())
    }

    /// Разобрать JSON-массив офферов
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let offers: Vec<Offer> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(offers)
    }

    pub fn find(&self, id: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_OFFERS: &str = r#"[
        { "id": "a", "name": "A", "description": "first", "payout": 1, "commission": 10 },
        { "id": "b", "name": "B", "description": "second", "payout": 2, "commission": 20 }
    ]"#;

    #[test]
    fn test_find() {
        let catalog = OfferCatalog::from_json(TWO_OFFERS).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("b").map(|o| o.name.as_str()), Some("B"));
        assert!(catalog.find("missing").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            { "id": "a", "name": "A", "description": "", "payout": 1, "commission": 1 },
            { "id": "a", "name": "A2", "description": "", "payout": 1, "commission": 1 }
        ]"#;
        assert_eq!(
            OfferCatalog::from_json(json),
            Err(CatalogError::DuplicateId("a".into()))
        );
    }

    #[test]
    fn test_invalid_offer_rejected() {
        let json = r#"[{ "id": "a", "name": "A", "description": "", "payout": -5, "commission": 1 }]"#;
        match OfferCatalog::from_json(json) {
            Err(CatalogError::InvalidOffer { id, .. }) => assert_eq!(id, "a"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_padded_id_rejected() {
        let json = r#"[{ "id": "promo ", "name": "P", "description": "", "payout": 1, "commission": 1 }]"#;
        match OfferCatalog::from_json(json) {
            Err(CatalogError::InvalidOffer { id, .. }) => assert_eq!(id, "promo "),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            OfferCatalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
