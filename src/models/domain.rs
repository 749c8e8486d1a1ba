use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build a pair only when both values are finite and within range.
    ///
    /// Latitude must be in [-90, 90], longitude in [-180, 180]. Anything
    /// else counts as "no coordinates" for scoring purposes.
    pub fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
        {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// Product candidate supplied by the upstream feed.
///
/// Only the fields the ranking engine reads are typed. Everything else the
/// document carries lands in `extra` and is passed through to the response
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(alias = "$id")]
    pub id: String,
    #[serde(rename = "sellerRating", default, deserialize_with = "lenient_f64")]
    pub seller_rating: Option<f64>,
    #[serde(rename = "sellerLatitude", default, deserialize_with = "lenient_f64")]
    pub seller_latitude: Option<f64>,
    #[serde(rename = "sellerLongitude", default, deserialize_with = "lenient_f64")]
    pub seller_longitude: Option<f64>,
    #[serde(
        rename = "createdAt",
        alias = "$createdAt",
        default,
        deserialize_with = "lenient_datetime"
    )]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Candidate {
    /// Seller position, if the document carries a usable pair.
    pub fn seller_coordinates(&self) -> Option<Coordinates> {
        match (self.seller_latitude, self.seller_longitude) {
            (Some(lat), Some(lon)) => Coordinates::checked(lat, lon),
            _ => None,
        }
    }
}

/// Candidate annotated with its composite score and requester distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    pub score: f64,
}

/// Weights for the composite ranking score
#[derive(Debug, Clone, Copy)]
pub struct RankWeights {
    pub rating: f64,
    pub distance: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            rating: 0.6,
            distance: 0.4,
        }
    }
}

/// Deserialize a number that may be missing, null, or of the wrong type.
///
/// A document with `"sellerLatitude": "oops"` stays usable; the bad field
/// just reads as `None`.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

/// Deserialize an RFC 3339 timestamp, reading anything unparseable as `None`.
pub(crate) fn lenient_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<chrono::DateTime<chrono::Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_str()
            .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinates_checked_in_range() {
        assert!(Coordinates::checked(52.52, 13.405).is_some());
        assert!(Coordinates::checked(-90.0, 180.0).is_some());
    }

    #[test]
    fn test_coordinates_checked_rejects_bad_values() {
        assert!(Coordinates::checked(95.0, 0.0).is_none());
        assert!(Coordinates::checked(0.0, -181.0).is_none());
        assert!(Coordinates::checked(f64::NAN, 0.0).is_none());
        assert!(Coordinates::checked(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_candidate_parses_appwrite_document() {
        let doc = json!({
            "$id": "prod_42",
            "sellerRating": 4.5,
            "sellerLatitude": 52.52,
            "sellerLongitude": 13.405,
            "createdAt": "2024-05-01T12:00:00Z",
            "title": "City bike",
            "priceCents": 12500,
        });

        let candidate: Candidate = serde_json::from_value(doc).unwrap();
        assert_eq!(candidate.id, "prod_42");
        assert_eq!(candidate.seller_rating, Some(4.5));
        assert!(candidate.seller_coordinates().is_some());
        assert!(candidate.created_at.is_some());
        assert_eq!(
            candidate.extra.get("title").and_then(Value::as_str),
            Some("City bike")
        );
    }

    #[test]
    fn test_candidate_degrades_malformed_fields() {
        let doc = json!({
            "id": "prod_7",
            "sellerRating": "not a number",
            "sellerLatitude": "52.52",
            "sellerLongitude": null,
            "createdAt": "yesterday",
        });

        let candidate: Candidate = serde_json::from_value(doc).unwrap();
        assert_eq!(candidate.seller_rating, None);
        assert_eq!(candidate.seller_latitude, None);
        assert!(candidate.seller_coordinates().is_none());
        assert!(candidate.created_at.is_none());
    }

    #[test]
    fn test_candidate_out_of_range_coordinates_ignored() {
        let doc = json!({
            "id": "prod_8",
            "sellerLatitude": 95.0,
            "sellerLongitude": 10.0,
        });

        let candidate: Candidate = serde_json::from_value(doc).unwrap();
        assert_eq!(candidate.seller_latitude, Some(95.0));
        assert!(candidate.seller_coordinates().is_none());
    }

    #[test]
    fn test_ranked_candidate_keeps_passthrough_fields() {
        let doc = json!({
            "id": "prod_9",
            "sellerRating": 3.0,
            "imageFileIds": ["img_1", "img_2"],
            "sellerName": "Ada",
        });

        let candidate: Candidate = serde_json::from_value(doc).unwrap();
        let ranked = RankedCandidate {
            candidate,
            distance_km: Some(2.5),
            score: 0.7,
        };

        let out = serde_json::to_value(&ranked).unwrap();
        assert_eq!(out["id"], "prod_9");
        assert_eq!(out["sellerName"], "Ada");
        assert_eq!(out["imageFileIds"], json!(["img_1", "img_2"]));
        assert_eq!(out["distanceKm"], json!(2.5));
        assert_eq!(out["score"], json!(0.7));
    }
}
