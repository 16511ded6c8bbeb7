//! Listing Search Domain Library
//!
//! The data model, normalization rules, and filter engine behind a property
//! listing search endpoint, plus the collaborators that feed it (remote
//! corpus provider, vision tag extraction, demo corpus).
//!
//! # Design Philosophy
//!
//! **"Normalize at the edge, match in the middle"**
//!
//! - Raw query input is normalized once, into [`SearchFilters`]; bad values
//!   become "unconstrained", never errors
//! - The filter engine is pure: no I/O, no failure modes, corpus in,
//!   matches out
//! - Collaborators (remote corpus, vision) sit behind traits and return
//!   `Result`; fallback policy lives with the caller
//!
//! # Usage
//!
//! ```rust,ignore
//! use listings::{demo_listings, filter_listings, SearchFilters};
//!
//! let filters = SearchFilters::from_query("min_beds=3&state=wa");
//! let results = filter_listings(&filters, &demo_listings());
//! ```
//!
//! # Modules
//!
//! - [`types`] - Listing record and search filter criteria
//! - [`normalize`] - Raw-input normalization rules
//! - [`filter`] - The pure matching engine
//! - [`provider`] - Remote corpus collaborator (trait + HTTP + mock)
//! - [`vision`] - Photo tag extraction collaborator
//! - [`demo`] - Built-in demo corpus

pub mod demo;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod provider;
pub mod types;
pub mod vision;

// Re-export core types at crate root
pub use demo::demo_listings;
pub use error::{FetchError, FetchResult, ListingsError, Result};
pub use filter::{filter_listings, matches};
pub use provider::{ListingProvider, MockListingProvider, RemoteListingProvider};
pub use types::{Listing, SearchFilters};
pub use vision::{apply_vision_tags, StubVisionClient, VisionClient, VisionFeatures};
