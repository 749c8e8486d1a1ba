use crate::core::scoring::score_candidate;
use crate::models::{Candidate, Coordinates, RankWeights, RankedCandidate};

/// Default distance cutoff for the proximity falloff, in kilometers
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// Maximum number of ranked products returned to the caller
pub const OUTPUT_LIMIT: usize = 50;

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankResult {
    pub products: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Ranking engine for the product feed.
///
/// Pure and synchronous: annotates each candidate with a composite score
/// and requester distance, stable-sorts by score, and truncates. The feed
/// arrives pre-ordered by seller rating then recency, and the stable sort
/// keeps that order for tied scores.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: RankWeights,
    max_distance_km: f64,
}

impl Ranker {
    pub fn new(weights: RankWeights, max_distance_km: f64) -> Self {
        Self {
            weights,
            max_distance_km,
        }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: RankWeights::default(),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }

    /// Rank a candidate feed for a requester.
    ///
    /// # Arguments
    /// * `candidates` - Feed from the document store, pre-ordered by seller
    ///   rating (descending) then creation time (descending)
    /// * `requester` - Requester position, if the request carried one
    /// * `limit` - Maximum number of products to return
    pub fn rank(
        &self,
        candidates: Vec<Candidate>,
        requester: Option<Coordinates>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();

        let mut products: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let scored =
                    score_candidate(&candidate, requester, &self.weights, self.max_distance_km);

                RankedCandidate {
                    candidate,
                    distance_km: scored.distance_km,
                    score: scored.score,
                }
            })
            .collect();

        // sort_by is stable, so tied scores keep the upstream feed order
        products.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        products.truncate(limit);

        RankResult {
            products,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
