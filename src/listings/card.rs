use anyhow::{anyhow, Result};
use chrono::Utc;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::{FeatureKind, PropertyPreview};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector `{}`: {:?}", css, e))
}

fn text_of(card: ElementRef<'_>, sel: &Selector) -> Option<String> {
    card.select(sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Build detail previews from every `.property-card` in an HTML fragment
pub fn parse_property_cards(html: &str) -> Result<Vec<PropertyPreview>> {
    let document = Html::parse_fragment(html);
    let card_selector = selector(".property-card")?;
    let title_selector = selector(".property-info h4")?;
    let location_selector = selector(".property-location")?;
    let price_selector = selector(".property-price")?;
    let feature_selector = selector(".property-features span")?;

    let mut previews = Vec::new();
    for card in document.select(&card_selector) {
        // Cards rendered without an id still open; they get a throwaway one
        let id = card
            .value()
            .attr("data-property-id")
            .map(str::to_string)
            .unwrap_or_else(|| Utc::now().timestamp_millis().to_string());

        let features = card
            .select(&feature_selector)
            .map(|span| span.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .map(|text| (FeatureKind::classify(&text), text))
            .collect();

        let preview = PropertyPreview {
            id,
            title: text_of(card, &title_selector).unwrap_or_else(|| "Property".to_string()),
            location: text_of(card, &location_selector).unwrap_or_default(),
            price: text_of(card, &price_selector).unwrap_or_default(),
            features,
        };
        debug!("Parsed card {}: {}", preview.id, preview.title);
        previews.push(preview);
    }

    Ok(previews)
}

/// Preview for the first card in `html`, if any.
pub fn parse_property_card(html: &str) -> Result<Option<PropertyPreview>> {
    Ok(parse_property_cards(html)?.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = r#"
        <div class="property-card" data-property-id="101">
            <button class="favorite-btn"><i class="far fa-heart"></i></button>
            <div class="property-info">
                <h4>Apartment in Khalda</h4>
                <p class="property-location">Khalda, Amman</p>
                <div class="property-features">
                    <span>3 rooms</span>
                    <span>2 baths</span>
                    <span>140 m²</span>
                </div>
                <div class="property-price">95,000 JOD</div>
            </div>
        </div>
    "#;

    #[test]
    fn extracts_fields_and_classifies_features() {
        let preview = parse_property_card(CARD).unwrap().unwrap();
        assert_eq!(preview.id, "101");
        assert_eq!(preview.title, "Apartment in Khalda");
        assert_eq!(preview.location, "Khalda, Amman");
        assert_eq!(preview.price, "95,000 JOD");
        let kinds: Vec<FeatureKind> = preview.features.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![FeatureKind::Bedrooms, FeatureKind::Bathrooms, FeatureKind::Area]
        );
        assert!(preview.description().starts_with("Apartment in Khalda Khalda, Amman."));
    }

    #[test]
    fn bare_card_falls_back_to_defaults() {
        let preview = parse_property_card(r#"<div class="property-card"></div>"#)
            .unwrap()
            .unwrap();
        assert_eq!(preview.title, "Property");
        assert!(preview.location.is_empty());
        assert!(preview.features.is_empty());
        assert!(preview.id.parse::<i64>().is_ok());
    }

    #[test]
    fn no_cards_means_no_preview() {
        assert_eq!(parse_property_card("<p>nothing here</p>").unwrap(), None);
    }

    #[test]
    fn parses_every_card_in_a_grid() {
        let grid = format!("<section>{CARD}{}</section>", CARD.replace("101", "102"));
        let ids: Vec<String> = parse_property_cards(&grid)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["101", "102"]);
    }
}
