//! Vision feature extraction for listing photos.
//!
//! Vision tags widen tag matching when a search opts in with `use_vision`.
//! Curated corpora (the demo data) ship with vision tags pre-extracted;
//! remote corpora usually arrive without them, and [`apply_vision_tags`]
//! backfills those from a [`VisionClient`]. Extraction is best-effort
//! enrichment: a vision failure is logged and the listing keeps whatever
//! tags it already had.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::types::Listing;

/// Tags detected in a photo, with model confidence per tag.
#[derive(Debug, Clone, Default)]
pub struct VisionFeatures {
    pub tags: HashMap<String, f64>,
}

/// Extracts descriptive tags from a listing photo.
///
/// # Implementations
///
/// - `StubVisionClient` - Fixed tags for local/demo use
/// - A hosted vision model client belongs behind this trait in production
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn extract_features(&self, photo_url: &str) -> Result<VisionFeatures>;
}

/// No-op vision client that reports the same tags for every photo.
#[derive(Debug, Clone, Default)]
pub struct StubVisionClient {
    default_tags: HashMap<String, f64>,
}

impl StubVisionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report this tag (with confidence) for every photo.
    pub fn with_tag(mut self, tag: impl Into<String>, confidence: f64) -> Self {
        self.default_tags.insert(tag.into(), confidence);
        self
    }
}

#[async_trait]
impl VisionClient for StubVisionClient {
    async fn extract_features(&self, _photo_url: &str) -> Result<VisionFeatures> {
        Ok(VisionFeatures {
            tags: self.default_tags.clone(),
        })
    }
}

/// Backfill vision tags for listings that have none, keeping tags at or
/// above `min_confidence` ordered most-confident-first. Listings without
/// a photo, and listings that already carry vision tags, are left alone.
/// Returns how many listings were enriched.
pub async fn apply_vision_tags(
    listings: &mut [Listing],
    client: &dyn VisionClient,
    min_confidence: f64,
) -> usize {
    let mut enriched = 0;
    for listing in listings {
        if !listing.vision_tags.is_empty() || listing.photo_url.is_empty() {
            continue;
        }
        let features = match client.extract_features(&listing.photo_url).await {
            Ok(features) => features,
            Err(error) => {
                warn!(listing_id = %listing.id, error = %error, "vision extraction failed");
                continue;
            }
        };
        let mut tags: Vec<(String, f64)> = features
            .tags
            .into_iter()
            .filter(|(_, confidence)| *confidence >= min_confidence)
            .collect();
        if tags.is_empty() {
            continue;
        }
        // Most confident tag first; name breaks ties so map iteration
        // order never leaks into the output.
        tags.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        listing.vision_tags = tags.into_iter().map(|(tag, _)| tag).collect();
        enriched += 1;
    }
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListingsError;

    struct FailingVisionClient;

    #[async_trait]
    impl VisionClient for FailingVisionClient {
        async fn extract_features(&self, _photo_url: &str) -> Result<VisionFeatures> {
            Err(ListingsError::Vision("model offline".to_string()))
        }
    }

    fn listing(id: &str, photo_url: &str, vision_tags: &[&str]) -> Listing {
        Listing {
            id: id.to_string(),
            photo_url: photo_url.to_string(),
            vision_tags: vision_tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn stub_reports_its_default_tags() {
        let client = StubVisionClient::new()
            .with_tag("patio", 0.9)
            .with_tag("pool", 0.4);
        let features = client.extract_features("https://x/photo.jpg").await.unwrap();
        assert_eq!(features.tags.len(), 2);
        assert_eq!(features.tags["patio"], 0.9);
    }

    #[tokio::test]
    async fn backfills_only_listings_without_vision_tags() {
        let client = StubVisionClient::new()
            .with_tag("deck", 0.8)
            .with_tag("garden", 0.7);
        let mut listings = vec![
            listing("a", "https://x/a.jpg", &[]),
            listing("b", "https://x/b.jpg", &["loft"]),
            listing("c", "", &[]),
        ];

        let enriched = apply_vision_tags(&mut listings, &client, 0.5).await;

        assert_eq!(enriched, 1);
        assert_eq!(listings[0].vision_tags, vec!["deck", "garden"]);
        assert_eq!(listings[1].vision_tags, vec!["loft"]);
        assert!(listings[2].vision_tags.is_empty());
    }

    #[tokio::test]
    async fn drops_tags_below_the_confidence_floor() {
        let client = StubVisionClient::new()
            .with_tag("fireplace", 0.9)
            .with_tag("pool", 0.2)
            .with_tag("view", 0.5);
        let mut listings = vec![listing("a", "https://x/a.jpg", &[])];

        apply_vision_tags(&mut listings, &client, 0.5).await;

        // 0.5 itself clears the floor; 0.2 does not.
        assert_eq!(listings[0].vision_tags, vec!["fireplace", "view"]);
    }

    #[tokio::test]
    async fn orders_tags_by_confidence_then_name() {
        let client = StubVisionClient::new()
            .with_tag("atrium", 0.6)
            .with_tag("view", 0.9)
            .with_tag("deck", 0.6);
        let mut listings = vec![listing("a", "https://x/a.jpg", &[])];

        apply_vision_tags(&mut listings, &client, 0.5).await;

        assert_eq!(listings[0].vision_tags, vec!["view", "atrium", "deck"]);
    }

    #[tokio::test]
    async fn extraction_failure_leaves_listings_untouched() {
        let mut listings = vec![listing("a", "https://x/a.jpg", &[])];
        let enriched = apply_vision_tags(&mut listings, &FailingVisionClient, 0.5).await;
        assert_eq!(enriched, 0);
        assert!(listings[0].vision_tags.is_empty());
    }

    #[tokio::test]
    async fn all_tags_filtered_counts_as_not_enriched() {
        let client = StubVisionClient::new().with_tag("pool", 0.1);
        let mut listings = vec![listing("a", "https://x/a.jpg", &[])];
        let enriched = apply_vision_tags(&mut listings, &client, 0.5).await;
        assert_eq!(enriched, 0);
        assert!(listings[0].vision_tags.is_empty());
    }
}
