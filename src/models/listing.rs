use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Money;

/// A property submitted by an owner, waiting for an agent's decision
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingSubmission {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Asking price as shown to buyers, e.g. "150,000 JOD"
    pub price: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub rooms: u32,
    pub baths: u32,
    /// Floor area in square meters
    pub area: u32,
    pub owner: String,
    /// Publishing fee debited from the agent's balance on approval
    pub fee: Money,
}

/// A submission an agent approved. Keeps every pending field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApprovedSubmission {
    #[serde(flatten)]
    pub submission: PendingSubmission,
    #[serde(rename = "approvedAt")]
    pub approved_at: DateTime<Utc>,
}

impl ApprovedSubmission {
    pub fn new(submission: PendingSubmission, approved_at: DateTime<Utc>) -> Self {
        Self {
            submission,
            approved_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.submission.id
    }
}

/// Kind of feature shown on a listing card, used to pick an icon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Bedrooms,
    Bathrooms,
    Area,
    Other,
}

impl FeatureKind {
    pub fn classify(feature: &str) -> Self {
        let lower = feature.to_lowercase();
        // "bathroom" also contains "room"
        if lower.contains("bath") || lower.contains("حمام") {
            FeatureKind::Bathrooms
        } else if lower.contains("room") || lower.contains("bed") || lower.contains("غرف") {
            FeatureKind::Bedrooms
        } else if lower.contains("m²") || lower.contains("sqm") {
            FeatureKind::Area
        } else {
            FeatureKind::Other
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FeatureKind::Bedrooms => "fa-bed",
            FeatureKind::Bathrooms => "fa-bath",
            FeatureKind::Area => "fa-ruler-combined",
            FeatureKind::Other => "fa-home",
        }
    }
}

/// Detail view of a listing, built from its card on the browse page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyPreview {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: String,
    pub features: Vec<(FeatureKind, String)>,
}

impl PropertyPreview {
    pub fn description(&self) -> String {
        format!(
            "{} {}. A standout property in a strategic location with high-quality finishes.",
            self.title, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> PendingSubmission {
        PendingSubmission {
            id: "pending_9".to_string(),
            title: "Studio".to_string(),
            location: "Jabal Amman".to_string(),
            price: "60,000 JOD".to_string(),
            property_type: "Apartment".to_string(),
            rooms: 1,
            baths: 1,
            area: 45,
            owner: "Sara Ali".to_string(),
            fee: Money::from_cents(900),
        }
    }

    #[test]
    fn approved_record_flattens_submission_fields() {
        let approved = ApprovedSubmission::new(submission(), Utc::now());
        let value = serde_json::to_value(&approved).unwrap();
        assert_eq!(value["id"], "pending_9");
        assert_eq!(value["type"], "Apartment");
        assert_eq!(value["fee"], 9.0);
        assert!(value["approvedAt"].is_string());
    }

    #[test]
    fn classifies_card_features() {
        assert_eq!(FeatureKind::classify("3 rooms"), FeatureKind::Bedrooms);
        assert_eq!(FeatureKind::classify("2 baths"), FeatureKind::Bathrooms);
        assert_eq!(FeatureKind::classify("2 bathrooms"), FeatureKind::Bathrooms);
        assert_eq!(FeatureKind::classify("1 Bathroom"), FeatureKind::Bathrooms);
        assert_eq!(FeatureKind::classify("4 bedrooms"), FeatureKind::Bedrooms);
        assert_eq!(FeatureKind::classify("3 غرف"), FeatureKind::Bedrooms);
        assert_eq!(FeatureKind::classify("2 حمام"), FeatureKind::Bathrooms);
        assert_eq!(FeatureKind::classify("2 bathrooms").icon(), "fa-bath");
        assert_eq!(FeatureKind::classify("150 m²"), FeatureKind::Area);
        assert_eq!(FeatureKind::classify("Garden"), FeatureKind::Other);
        assert_eq!(FeatureKind::Area.icon(), "fa-ruler-combined");
    }
}
