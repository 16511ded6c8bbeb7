//! The listing record shared by the demo corpus, remote providers, and the
//! search response.

use serde::{Deserialize, Serialize};

/// A single property listing.
///
/// Serializes with camelCase keys to match the public search API and the
/// remote provider wire format. Every field defaults when absent from an
/// upstream payload, so partial provider records decode instead of failing
/// the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Asking price in whole dollars.
    pub price: u64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub beds: u32,
    /// Bathrooms, fractional to allow half-baths (e.g. 2.5).
    pub baths: f64,
    pub sqft: u64,
    /// Lot size in square feet; 0 for listings with no reported lot (condos).
    pub lot_sqft: u64,
    pub year_built: u32,
    pub stories: u32,
    pub garage_spaces: u32,
    pub has_rv_parking: bool,
    pub has_pool: bool,
    pub has_waterfront: bool,
    pub has_view: bool,
    pub has_basement: bool,
    pub has_fireplace: bool,
    pub is_new_build: bool,
    pub is_fixer: bool,
    pub has_adu: bool,
    /// Monthly HOA fee in whole dollars; 0 when there is no HOA.
    pub hoa_fee: u64,
    pub property_type: String,
    pub photo_url: String,
    /// Curated tags supplied with the listing.
    pub tags: Vec<String>,
    /// Tags inferred from listing photos; only consulted when a search opts
    /// in with `use_vision`, and omitted from JSON when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vision_tags: Vec<String>,
    /// Where the record came from (`"demo"` or a provider name).
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let listing = Listing {
            id: "l-1".to_string(),
            lot_sqft: 4000,
            year_built: 1928,
            garage_spaces: 2,
            has_rv_parking: true,
            has_adu: true,
            hoa_fee: 320,
            property_type: "Single Family".to_string(),
            photo_url: "https://example.com/photo.jpg".to_string(),
            vision_tags: vec!["front porch".to_string()],
            ..Default::default()
        };

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["lotSqft"], 4000);
        assert_eq!(value["yearBuilt"], 1928);
        assert_eq!(value["garageSpaces"], 2);
        assert_eq!(value["hasRvParking"], true);
        assert_eq!(value["hasAdu"], true);
        assert_eq!(value["hoaFee"], 320);
        assert_eq!(value["propertyType"], "Single Family");
        assert_eq!(value["photoUrl"], "https://example.com/photo.jpg");
        assert_eq!(value["visionTags"][0], "front porch");
    }

    #[test]
    fn omits_vision_tags_when_empty() {
        let listing = Listing {
            id: "l-2".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&listing).unwrap();
        assert!(value.get("visionTags").is_none());
        // Curated tags always serialize, even when empty.
        assert_eq!(value["tags"], serde_json::json!([]));
    }

    #[test]
    fn deserializes_partial_payloads_with_defaults() {
        let listing: Listing = serde_json::from_str(
            r#"{"id": "r-1", "title": "Remote Cottage", "price": 340000}"#,
        )
        .unwrap();
        assert_eq!(listing.id, "r-1");
        assert_eq!(listing.price, 340000);
        assert_eq!(listing.beds, 0);
        assert_eq!(listing.baths, 0.0);
        assert!(listing.tags.is_empty());
        assert!(listing.vision_tags.is_empty());
        assert_eq!(listing.source, "");
    }

    #[test]
    fn rejects_negative_numeric_fields() {
        let result = serde_json::from_str::<Listing>(r#"{"id": "r-2", "price": -1}"#);
        assert!(result.is_err());
    }
}
