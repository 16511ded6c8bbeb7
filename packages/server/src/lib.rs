// Listing Search API - server core
//
// This crate provides the HTTP boundary over the `listings` domain library:
// route handlers, middleware, and configuration. All matching semantics live
// in `listings`; this layer only normalizes input, picks a corpus (remote
// with local fallback), and shapes the response.

pub mod config;
pub mod server;

pub use config::*;
