use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Coordinates;

/// Request to rank products for a requester.
///
/// Latitude and longitude are parsed leniently: a missing, null, or
/// non-numeric value falls back to the locationless scoring branch instead
/// of rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankProductsRequest {
    #[serde(
        default,
        deserialize_with = "crate::models::domain::lenient_f64"
    )]
    pub latitude: Option<f64>,
    #[serde(
        default,
        deserialize_with = "crate::models::domain::lenient_f64"
    )]
    pub longitude: Option<f64>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub limit: u16,
}

fn default_limit() -> u16 {
    50
}

impl RankProductsRequest {
    /// Requester position for location-aware scoring.
    ///
    /// Both values must be present, numeric, and in range; otherwise the
    /// request counts as locationless.
    pub fn requester_location(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Coordinates::checked(lat, lon),
            _ => None,
        }
    }
}
