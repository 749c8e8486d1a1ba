// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, Coordinates, RankWeights, RankedCandidate};
pub use requests::RankProductsRequest;
pub use responses::{ErrorResponse, HealthResponse, RankProductsResponse};
