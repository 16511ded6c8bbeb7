//! Built-in demo corpus.
//!
//! Served whenever no remote provider is configured, or when the remote
//! fetch fails or comes back empty. The records carry pre-extracted vision
//! tags so `use_vision` searches are exercisable without a vision model.

use crate::types::Listing;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The five demo listings, in stable id order.
pub fn demo_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "demo-001".to_string(),
            title: "Bright Modern Loft".to_string(),
            price: 489000,
            address: "123 Mint Ave".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            zip: "97204".to_string(),
            beds: 2,
            baths: 2.0,
            sqft: 1200,
            lot_sqft: 0,
            year_built: 2016,
            stories: 1,
            garage_spaces: 1,
            has_rv_parking: false,
            has_pool: false,
            has_waterfront: false,
            has_view: true,
            has_basement: false,
            has_fireplace: true,
            is_new_build: false,
            is_fixer: false,
            has_adu: false,
            hoa_fee: 320,
            property_type: "Condo".to_string(),
            photo_url: "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?auto=format&fit=crop&w=1600&q=80".to_string(),
            tags: strings(&[
                "open layout",
                "city view",
                "hardwood",
                "floor-to-ceiling windows",
                "modern kitchen",
            ]),
            vision_tags: strings(&["city view", "open layout", "modern kitchen", "loft"]),
            source: "demo".to_string(),
        },
        Listing {
            id: "demo-002".to_string(),
            title: "Calm Charcoal Craftsman".to_string(),
            price: 729000,
            address: "456 Grove St".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            zip: "98101".to_string(),
            beds: 3,
            baths: 2.5,
            sqft: 1850,
            lot_sqft: 4000,
            year_built: 1928,
            stories: 2,
            garage_spaces: 2,
            has_rv_parking: true,
            has_pool: false,
            has_waterfront: false,
            has_view: false,
            has_basement: true,
            has_fireplace: true,
            is_new_build: false,
            is_fixer: false,
            has_adu: true,
            hoa_fee: 0,
            property_type: "Single Family".to_string(),
            photo_url: "https://images.unsplash.com/photo-1616594039964-c2c5bea0b2f9?auto=format&fit=crop&w=1600&q=80".to_string(),
            tags: strings(&[
                "front porch",
                "garden",
                "detached garage",
                "original trim",
                "updated kitchen",
                "rv parking",
            ]),
            vision_tags: strings(&[
                "front porch",
                "rv garage",
                "two-story",
                "garden",
                "detached garage",
            ]),
            source: "demo".to_string(),
        },
        Listing {
            id: "demo-003".to_string(),
            title: "Mint Courtyard Townhome".to_string(),
            price: 615000,
            address: "789 Courtyard Ln".to_string(),
            city: "Denver".to_string(),
            state: "CO".to_string(),
            zip: "80205".to_string(),
            beds: 3,
            baths: 2.0,
            sqft: 1500,
            lot_sqft: 1800,
            year_built: 2012,
            stories: 2,
            garage_spaces: 1,
            has_rv_parking: false,
            has_pool: false,
            has_waterfront: false,
            has_view: true,
            has_basement: false,
            has_fireplace: false,
            is_new_build: false,
            is_fixer: false,
            has_adu: false,
            hoa_fee: 210,
            property_type: "Townhouse".to_string(),
            photo_url: "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?auto=format&fit=crop&w=1600&q=80".to_string(),
            tags: strings(&[
                "patio",
                "attached garage",
                "natural light",
                "mountain glimpse",
                "two-story",
            ]),
            vision_tags: strings(&["patio", "two-story", "attached garage"]),
            source: "demo".to_string(),
        },
        Listing {
            id: "demo-004".to_string(),
            title: "Minimal Lakeview Flat".to_string(),
            price: 540000,
            address: "12 Shoreline Dr".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            zip: "60601".to_string(),
            beds: 2,
            baths: 1.5,
            sqft: 1100,
            lot_sqft: 0,
            year_built: 2004,
            stories: 1,
            garage_spaces: 1,
            has_rv_parking: false,
            has_pool: true,
            has_waterfront: true,
            has_view: true,
            has_basement: false,
            has_fireplace: false,
            is_new_build: false,
            is_fixer: false,
            has_adu: false,
            hoa_fee: 580,
            property_type: "Condo".to_string(),
            photo_url: "https://images.unsplash.com/photo-1505691938895-1758d7feb511?auto=format&fit=crop&w=1600&q=80".to_string(),
            tags: strings(&["lake view", "balcony", "doorman", "fitness center"]),
            vision_tags: strings(&["lake view", "balcony", "high-rise"]),
            source: "demo".to_string(),
        },
        Listing {
            id: "demo-005".to_string(),
            title: "Soft Mint Bungalow".to_string(),
            price: 455000,
            address: "22 Fern St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78704".to_string(),
            beds: 2,
            baths: 1.0,
            sqft: 980,
            lot_sqft: 5200,
            year_built: 1974,
            stories: 1,
            garage_spaces: 0,
            has_rv_parking: true,
            has_pool: false,
            has_waterfront: false,
            has_view: false,
            has_basement: false,
            has_fireplace: true,
            is_new_build: false,
            is_fixer: true,
            has_adu: false,
            hoa_fee: 0,
            property_type: "Single Family".to_string(),
            photo_url: "https://images.unsplash.com/photo-1501127122-f385ca6ddd9d?auto=format&fit=crop&w=1600&q=80".to_string(),
            tags: strings(&["back deck", "fenced yard", "mature trees", "carport"]),
            vision_tags: strings(&[
                "single story",
                "back yard",
                "deck",
                "fenced yard",
                "carport",
            ]),
            source: "demo".to_string(),
        },
    ]
}
