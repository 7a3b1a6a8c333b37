use async_trait::async_trait;

/// Returned in place of a digest whenever a search cannot be performed
pub const SEARCH_UNAVAILABLE: &str = "Could not perform search at this time.";

/// Number of results included in a digest
pub const DIGEST_RESULT_LIMIT: usize = 3;

/// A single web search hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Web search that never fails outward
///
/// Implementations swallow their own errors and return
/// [`SEARCH_UNAVAILABLE`] instead.
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Returns a text digest of the top results for `query`
    async fn search(&self, query: &str) -> String;
}

/// Formats the top results as title/description/URL blocks separated by a blank line
pub fn format_digest(results: &[SearchResult]) -> String {
    results
        .iter()
        .take(DIGEST_RESULT_LIMIT)
        .map(|result| {
            format!(
                "Title: {}\nDescription: {}\nURL: {}\n",
                result.title, result.description, result.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
