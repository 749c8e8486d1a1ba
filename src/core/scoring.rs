use crate::core::distance::haversine_km;
use crate::models::{Candidate, Coordinates, RankWeights};

/// Upper bound of the seller rating scale
pub const MAX_SELLER_RATING: f64 = 5.0;

/// Composite score and distance annotation for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    pub score: f64,
    pub distance_km: Option<f64>,
}

/// Score a single candidate against the requester's position.
///
/// Scoring formula (with a requester location):
///
/// ```text
/// score = rating_weight * (sellerRating / 5)
///       + distance_weight * max(0, 1 - distance / max_distance_km)
/// ```
///
/// Without a requester location the distance term is omitted entirely, so
/// the score is `rating_weight * (sellerRating / 5)` and tops out at the
/// rating weight. A candidate with no usable coordinates contributes a
/// distance factor of 0 and a null distance.
pub fn score_candidate(
    candidate: &Candidate,
    requester: Option<Coordinates>,
    weights: &RankWeights,
    max_distance_km: f64,
) -> CandidateScore {
    let normalized_rating = normalized_rating(candidate.seller_rating);

    let distance_km = match (requester, candidate.seller_coordinates()) {
        (Some(from), Some(to)) => Some(haversine_km(from, to)),
        _ => None,
    };

    let score = match requester {
        Some(_) => {
            weights.rating * normalized_rating
                + weights.distance * distance_factor(distance_km, max_distance_km)
        }
        None => weights.rating * normalized_rating,
    };

    CandidateScore { score, distance_km }
}

/// Seller rating normalized to [0, 1].
///
/// A missing or malformed rating reads as 0; out-of-scale values are
/// clamped to the [0, 5] rating scale.
#[inline]
fn normalized_rating(rating: Option<f64>) -> f64 {
    rating
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(0.0, MAX_SELLER_RATING))
        .unwrap_or(0.0)
        / MAX_SELLER_RATING
}

/// Linear falloff: 1.0 at zero distance, 0.0 at or beyond the cutoff.
#[inline]
fn distance_factor(distance_km: Option<f64>, max_distance_km: f64) -> f64 {
    match distance_km {
        Some(d) if d <= max_distance_km => 1.0 - d / max_distance_km,
        _ => 0.0,
    }
}
