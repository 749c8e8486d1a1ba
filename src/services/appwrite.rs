use crate::models::Candidate;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Appwrite
#[derive(Debug, Error)]
pub enum AppwriteError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Appwrite API client
///
/// Fetches the product candidate feed the ranking engine scores. The feed
/// comes back ordered by seller rating then creation time, which the engine
/// relies on as its tie-break order.
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    products_collection: String,
    client: Client,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        products_collection: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            project_id,
            database_id,
            products_collection,
            client,
        }
    }

    pub fn products_collection(&self) -> &str {
        &self.products_collection
    }

    /// Fetch up to `limit` available products, ordered by seller rating
    /// (descending) then creation time (descending).
    ///
    /// Documents that fail to parse are skipped rather than failing the
    /// whole feed.
    pub async fn query_candidates(&self, limit: usize) -> Result<Vec<Candidate>, AppwriteError> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.products_collection
        );

        let queries = vec![
            "equal(\"isAvailable\", true)".to_string(),
            "orderDesc(\"sellerRating\")".to_string(),
            "orderDesc(\"createdAt\")".to_string(),
            format!("limit({})", limit),
        ];

        let queries_json = serde_json::to_string(&queries).unwrap();
        let encoded_queries = urlencoding::encode(&queries_json);
        let full_url = format!("{}?query={}", url, encoded_queries);

        tracing::debug!("Querying candidates from: {}", url);

        let response = self
            .client
            .get(&full_url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppwriteError::Unauthorized);
        }

        if !response.status().is_success() {
            return Err(AppwriteError::ApiError(format!(
                "Failed to query candidates: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| AppwriteError::InvalidResponse("Missing documents array".into()))?;

        let candidates: Vec<Candidate> = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                serde_json::from_value(data.clone()).ok()
            })
            .collect();

        tracing::debug!("Queried {} candidates (total: {})", candidates.len(), total);

        Ok(candidates)
    }
}
