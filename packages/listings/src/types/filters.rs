//! Search filter criteria and their query-string codec.

use std::collections::HashMap;

use url::form_urlencoded;

use crate::normalize::{
    dedup_case_insensitive, parse_number, sanitize_alpha, sanitize_digits, split_list, truthy,
};

/// Criteria applied to a listing corpus by the filter engine.
///
/// Numeric bounds use zero as the "unconstrained" sentinel: a bound of 0 is
/// never applied, so it is not possible to ask for exactly-zero values (an
/// HOA fee of exactly 0, say). List and string fields are unconstrained when
/// empty. All criteria are ANDed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub min_price: u64,
    pub max_price: u64,
    pub min_beds: u32,
    pub max_beds: u32,
    pub min_baths: f64,
    pub max_baths: f64,
    pub min_sqft: u64,
    pub max_sqft: u64,
    pub min_lot_sqft: u64,
    pub max_lot_sqft: u64,
    pub min_year_built: u32,
    pub max_year_built: u32,
    pub min_stories: u32,
    pub min_garage: u32,
    pub min_hoa: u64,
    pub max_hoa: u64,
    /// Accepted property types, ORed case-insensitively. Empty means any.
    pub property_types: Vec<String>,
    /// Tags a listing must all carry.
    pub tags: Vec<String>,
    /// Tags that disqualify a listing if any is present.
    pub exclude_tags: Vec<String>,
    /// Case-insensitive substring match against the listing city.
    pub city: String,
    /// Two-letter state code, matched case-insensitively.
    pub state: String,
    /// Zip prefix match (supports 3-digit prefix searches).
    pub zip: String,
    /// Free-text search across title, address, location, type, and tags.
    pub query: String,
    /// Widen tag matching to include vision-extracted tags.
    pub use_vision: bool,
    pub require_pool: bool,
    pub require_waterfront: bool,
    pub require_view: bool,
    pub require_basement: bool,
    pub require_fireplace: bool,
    pub require_adu: bool,
    pub require_rv_parking: bool,
    pub require_new_build: bool,
    pub require_fixer: bool,
}

impl SearchFilters {
    /// Build filters from a raw URL query string (without the leading `?`).
    ///
    /// Parsing never fails: malformed numbers become 0 (unconstrained),
    /// unknown flag values become false, and unknown keys are ignored. When
    /// a key repeats, the first value wins. `property_type` and
    /// `property_types` both feed the same list, deduplicated
    /// case-insensitively with the first spelling kept.
    pub fn from_query(query: &str) -> Self {
        let mut first_values: HashMap<String, String> = HashMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            first_values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        let get = |key: &str| first_values.get(key).map(String::as_str).unwrap_or("");

        SearchFilters {
            min_price: parse_number(get("min_price")),
            max_price: parse_number(get("max_price")),
            min_beds: parse_number(get("min_beds")),
            max_beds: parse_number(get("max_beds")),
            min_baths: parse_number(get("min_baths")),
            max_baths: parse_number(get("max_baths")),
            min_sqft: parse_number(get("min_sqft")),
            max_sqft: parse_number(get("max_sqft")),
            min_lot_sqft: parse_number(get("min_lot_sqft")),
            max_lot_sqft: parse_number(get("max_lot_sqft")),
            min_year_built: parse_number(get("min_year_built")),
            max_year_built: parse_number(get("max_year_built")),
            min_stories: parse_number(get("min_stories")),
            min_garage: parse_number(get("min_garage")),
            min_hoa: parse_number(get("min_hoa")),
            max_hoa: parse_number(get("max_hoa")),
            property_types: merge_property_types(get("property_type"), get("property_types")),
            tags: split_list(get("tags")),
            exclude_tags: split_list(get("exclude_tags")),
            city: get("city").to_string(),
            state: sanitize_alpha(get("state"), 2),
            zip: sanitize_digits(get("zip"), 10),
            query: get("q").to_string(),
            use_vision: truthy(get("use_vision")),
            require_pool: truthy(get("pool")),
            require_waterfront: truthy(get("waterfront")),
            require_view: truthy(get("view")),
            require_basement: truthy(get("basement")),
            require_fireplace: truthy(get("fireplace")),
            require_adu: truthy(get("adu")),
            require_rv_parking: truthy(get("rv_parking")),
            require_new_build: truthy(get("new_build")),
            require_fixer: truthy(get("fixer")),
        }
    }

    /// Encode only the set criteria as query parameters for a remote
    /// provider, using the same keys [`from_query`](Self::from_query)
    /// accepts. Unset criteria are left out entirely.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = Vec::new();

        if self.min_price > 0 {
            pairs.push(("min_price", self.min_price.to_string()));
        }
        if self.max_price > 0 {
            pairs.push(("max_price", self.max_price.to_string()));
        }
        if self.min_beds > 0 {
            pairs.push(("min_beds", self.min_beds.to_string()));
        }
        if self.max_beds > 0 {
            pairs.push(("max_beds", self.max_beds.to_string()));
        }
        if self.min_baths > 0.0 {
            pairs.push(("min_baths", self.min_baths.to_string()));
        }
        if self.max_baths > 0.0 {
            pairs.push(("max_baths", self.max_baths.to_string()));
        }
        if self.min_sqft > 0 {
            pairs.push(("min_sqft", self.min_sqft.to_string()));
        }
        if self.max_sqft > 0 {
            pairs.push(("max_sqft", self.max_sqft.to_string()));
        }
        if self.min_lot_sqft > 0 {
            pairs.push(("min_lot_sqft", self.min_lot_sqft.to_string()));
        }
        if self.max_lot_sqft > 0 {
            pairs.push(("max_lot_sqft", self.max_lot_sqft.to_string()));
        }
        if self.min_year_built > 0 {
            pairs.push(("min_year_built", self.min_year_built.to_string()));
        }
        if self.max_year_built > 0 {
            pairs.push(("max_year_built", self.max_year_built.to_string()));
        }
        if self.min_stories > 0 {
            pairs.push(("min_stories", self.min_stories.to_string()));
        }
        if self.min_garage > 0 {
            pairs.push(("min_garage", self.min_garage.to_string()));
        }
        if self.min_hoa > 0 {
            pairs.push(("min_hoa", self.min_hoa.to_string()));
        }
        if self.max_hoa > 0 {
            pairs.push(("max_hoa", self.max_hoa.to_string()));
        }
        if !self.property_types.is_empty() {
            pairs.push(("property_types", self.property_types.join(",")));
        }
        if !self.tags.is_empty() {
            pairs.push(("tags", self.tags.join(",")));
        }
        if !self.exclude_tags.is_empty() {
            pairs.push(("exclude_tags", self.exclude_tags.join(",")));
        }
        if !self.city.is_empty() {
            pairs.push(("city", self.city.clone()));
        }
        if !self.state.is_empty() {
            pairs.push(("state", self.state.clone()));
        }
        if !self.zip.is_empty() {
            pairs.push(("zip", self.zip.clone()));
        }
        if !self.query.is_empty() {
            pairs.push(("q", self.query.clone()));
        }
        if self.use_vision {
            pairs.push(("use_vision", "1".to_string()));
        }
        if self.require_pool {
            pairs.push(("pool", "1".to_string()));
        }
        if self.require_waterfront {
            pairs.push(("waterfront", "1".to_string()));
        }
        if self.require_view {
            pairs.push(("view", "1".to_string()));
        }
        if self.require_basement {
            pairs.push(("basement", "1".to_string()));
        }
        if self.require_fireplace {
            pairs.push(("fireplace", "1".to_string()));
        }
        if self.require_adu {
            pairs.push(("adu", "1".to_string()));
        }
        if self.require_rv_parking {
            pairs.push(("rv_parking", "1".to_string()));
        }
        if self.require_new_build {
            pairs.push(("new_build", "1".to_string()));
        }
        if self.require_fixer {
            pairs.push(("fixer", "1".to_string()));
        }

        pairs
    }
}

/// Union the single-valued and csv property type parameters, dropping later
/// case-insensitive duplicates.
fn merge_property_types(single: &str, csv: &str) -> Vec<String> {
    let mut merged = split_list(single);
    merged.extend(split_list(csv));
    dedup_case_insensitive(merged)
}
