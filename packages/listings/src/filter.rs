//! The pure filter engine.
//!
//! Matching does no I/O and no fallible parsing: filters arrive already
//! normalized, so the only job here is evaluating predicates. Every
//! predicate class is ANDed with the rest, and the output preserves corpus
//! order.

use std::collections::HashSet;

use crate::normalize::normalize_tag;
use crate::types::{Listing, SearchFilters};

/// Apply `filters` to a corpus, keeping matching listings in their original
/// order.
pub fn filter_listings(filters: &SearchFilters, listings: &[Listing]) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| matches(filters, listing))
        .cloned()
        .collect()
}

/// Whether a single listing satisfies every set criterion.
///
/// A numeric bound of zero is unset and never evaluated, so matching is
/// inclusive at the bounds that are set (`price == min_price` passes).
pub fn matches(filters: &SearchFilters, listing: &Listing) -> bool {
    if filters.min_price > 0 && listing.price < filters.min_price {
        return false;
    }
    if filters.max_price > 0 && listing.price > filters.max_price {
        return false;
    }
    if filters.min_beds > 0 && listing.beds < filters.min_beds {
        return false;
    }
    if filters.max_beds > 0 && listing.beds > filters.max_beds {
        return false;
    }
    if filters.min_baths > 0.0 && listing.baths < filters.min_baths {
        return false;
    }
    if filters.max_baths > 0.0 && listing.baths > filters.max_baths {
        return false;
    }
    if filters.min_sqft > 0 && listing.sqft < filters.min_sqft {
        return false;
    }
    if filters.max_sqft > 0 && listing.sqft > filters.max_sqft {
        return false;
    }
    if filters.min_lot_sqft > 0 && listing.lot_sqft < filters.min_lot_sqft {
        return false;
    }
    if filters.max_lot_sqft > 0 && listing.lot_sqft > filters.max_lot_sqft {
        return false;
    }
    if filters.min_year_built > 0 && listing.year_built < filters.min_year_built {
        return false;
    }
    if filters.max_year_built > 0 && listing.year_built > filters.max_year_built {
        return false;
    }
    if filters.min_stories > 0 && listing.stories < filters.min_stories {
        return false;
    }
    if filters.min_garage > 0 && listing.garage_spaces < filters.min_garage {
        return false;
    }
    if filters.min_hoa > 0 && listing.hoa_fee < filters.min_hoa {
        return false;
    }
    if filters.max_hoa > 0 && listing.hoa_fee > filters.max_hoa {
        return false;
    }

    if !filters.property_types.is_empty()
        && !matches_any_property_type(&listing.property_type, &filters.property_types)
    {
        return false;
    }

    if !filters.tags.is_empty() || !filters.exclude_tags.is_empty() {
        let pool = tag_pool(filters, listing);
        if !filters.tags.is_empty() && !has_all_tags(&pool, &filters.tags) {
            return false;
        }
        if !filters.exclude_tags.is_empty() && has_any_tag(&pool, &filters.exclude_tags) {
            return false;
        }
    }

    if !filters.city.is_empty()
        && !listing
            .city
            .to_lowercase()
            .contains(&filters.city.to_lowercase())
    {
        return false;
    }
    if !filters.state.is_empty() && !listing.state.eq_ignore_ascii_case(&filters.state) {
        return false;
    }
    if !filters.zip.is_empty() && !listing.zip.starts_with(&filters.zip) {
        return false;
    }
    if !filters.query.is_empty() && !matches_query(listing, &filters.query) {
        return false;
    }

    if filters.require_pool && !listing.has_pool {
        return false;
    }
    if filters.require_waterfront && !listing.has_waterfront {
        return false;
    }
    if filters.require_view && !listing.has_view {
        return false;
    }
    if filters.require_basement && !listing.has_basement {
        return false;
    }
    if filters.require_fireplace && !listing.has_fireplace {
        return false;
    }
    if filters.require_adu && !listing.has_adu {
        return false;
    }
    if filters.require_rv_parking && !listing.has_rv_parking {
        return false;
    }
    if filters.require_new_build && !listing.is_new_build {
        return false;
    }
    if filters.require_fixer && !listing.is_fixer {
        return false;
    }

    true
}

/// The normalized tags a listing exposes to tag predicates: curated tags,
/// widened with vision tags only when the search opted in.
fn tag_pool(filters: &SearchFilters, listing: &Listing) -> HashSet<String> {
    let mut pool: HashSet<String> = listing.tags.iter().map(|tag| normalize_tag(tag)).collect();
    if filters.use_vision {
        pool.extend(listing.vision_tags.iter().map(|tag| normalize_tag(tag)));
    }
    pool
}

fn has_all_tags(pool: &HashSet<String>, required: &[String]) -> bool {
    required
        .iter()
        .filter(|tag| !tag.is_empty())
        .all(|tag| pool.contains(&normalize_tag(tag)))
}

fn has_any_tag(pool: &HashSet<String>, unwanted: &[String]) -> bool {
    unwanted.iter().any(|tag| pool.contains(&normalize_tag(tag)))
}

fn matches_any_property_type(property_type: &str, allowed: &[String]) -> bool {
    let subject = property_type.to_lowercase();
    allowed
        .iter()
        .any(|candidate| candidate.trim().to_lowercase() == subject)
}

/// Free-text match over the listing's visible text fields. Vision tags are
/// never part of the haystack, opted in or not.
fn matches_query(listing: &Listing, raw_query: &str) -> bool {
    let needle = raw_query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let joined_tags = listing.tags.join(" ");
    let fields = [
        listing.title.as_str(),
        listing.address.as_str(),
        listing.city.as_str(),
        listing.state.as_str(),
        listing.zip.as_str(),
        listing.property_type.as_str(),
        joined_tags.as_str(),
    ];
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
