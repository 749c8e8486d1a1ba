//! Trove Rank - product ranking service for the Trove marketplace app
//!
//! This library provides the weighted product ranking engine used by the
//! Trove marketplace app. It blends normalized seller rating with requester
//! proximity into a composite score, stable-sorts the candidate feed, and
//! truncates the result.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_km, RankResult, Ranker, OUTPUT_LIMIT};
pub use crate::models::{
    Candidate, Coordinates, RankProductsRequest, RankProductsResponse, RankWeights,
    RankedCandidate,
};
