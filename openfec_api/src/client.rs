//! HTTP client for the OpenFEC REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, TotalsQuery},
    types::{CommitteeTotals, PaginatedResponse},
    Error,
};

/// Request timeout for OpenFEC API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of body characters kept in error messages.
const BODY_SNIPPET_LEN: usize = 200;

/// HTTP client for the OpenFEC API.
///
/// Issues a single GET per call. There is no retry or pagination: callers ask
/// for one fixed page and render whatever comes back.
pub struct Client {
    client: reqwest::Client,
    api_key: String,
    /// Base URL for the API. Defaults to `https://api.open.fec.gov/v1`.
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production OpenFEC API.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::with_base_url("https://api.open.fec.gov/v1", api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;
        Ok(Self {
            client,
            api_key,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Network(e)
            })?;

        let status = resp.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::InvalidApiKey);
        } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited);
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::ParseFailed(e.to_string())
        })
    }

    /// Fetches financial totals for one committee.
    pub async fn get_committee_totals(
        &self,
        committee_id: &str,
        query: &TotalsQuery,
    ) -> Result<PaginatedResponse<CommitteeTotals>, Error> {
        let path = format!("/committee/{}/totals/", committee_id);
        tracing::debug!("Fetching committee totals for {}", committee_id);
        self.get::<PaginatedResponse<CommitteeTotals>, TotalsQuery>(&path, query)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= BODY_SNIPPET_LEN {
        body.to_string()
    } else {
        let head: String = body.chars().take(BODY_SNIPPET_LEN).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept_whole() {
        assert_eq!(truncate_body("Bad Request"), "Bad Request");
    }

    #[test]
    fn long_body_is_truncated() {
        let body = "x".repeat(500);
        let snippet = truncate_body(&body);
        assert_eq!(snippet.len(), BODY_SNIPPET_LEN + 3);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn url_carries_path_query_and_key() {
        let client = Client::with_base_url("https://example.com/v1/", "k".to_string()).unwrap();
        let url = client
            .get_url("/committee/C00401224/totals/", &TotalsQuery::for_year(2024))
            .unwrap();
        assert_eq!(url.path(), "/v1/committee/C00401224/totals/");
        let query = url.query().unwrap();
        assert!(query.contains("cycle=2024"));
        assert!(query.ends_with("api_key=k"));
    }
}
