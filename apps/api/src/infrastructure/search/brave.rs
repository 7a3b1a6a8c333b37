use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::services::search::{format_digest, DIGEST_RESULT_LIMIT};
use crate::domain::services::{SearchResult, WebSearch, SEARCH_UNAVAILABLE};

/// Brave Search API client
///
/// Any failure is logged and replaced by [`SEARCH_UNAVAILABLE`].
pub struct BraveSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BraveSearchClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    async fn fetch_results(&self, query: &str) -> Result<Vec<SearchResult>, String> {
        let count = DIGEST_RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(format!("{}/res/v1/web/search", self.base_url))
            .header("X-Subscription-Token", &self.api_key)
            .header("Accept", "application/json")
            .query(&[("q", query), ("count", count.as_str()), ("safesearch", "strict")])
            .send()
            .await
            .map_err(|e| format!("Search request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Search API error ({}): {}", status.as_u16(), body));
        }

        let data: BraveResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse search response: {}", e))?;

        Ok(data
            .web
            .map(|web| web.results)
            .unwrap_or_default()
            .into_iter()
            .map(|r| SearchResult {
                title: r.title,
                description: r.description,
                url: r.url,
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct BraveResponse {
    web: Option<BraveWeb>,
}

#[derive(Debug, Deserialize)]
struct BraveWeb {
    #[serde(default)]
    results: Vec<BraveResult>,
}

#[derive(Debug, Deserialize)]
struct BraveResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    url: String,
}

#[async_trait]
impl WebSearch for BraveSearchClient {
    async fn search(&self, query: &str) -> String {
        match self.fetch_results(query).await {
            Ok(results) => {
                tracing::debug!(results = results.len(), "Web search completed");
                format_digest(&results)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Web search failed");
                SEARCH_UNAVAILABLE.to_string()
            }
        }
    }
}

/// Used when no search API key is configured
pub struct DisabledSearch;

#[async_trait]
impl WebSearch for DisabledSearch {
    async fn search(&self, _query: &str) -> String {
        SEARCH_UNAVAILABLE.to_string()
    }
}
