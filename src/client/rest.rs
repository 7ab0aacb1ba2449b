use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{OctoError, OctoResult};
use crate::models::ListResponse;

/// Thin client over the REST collections. One instance per base URL;
/// requests carry JSON headers set once at construction.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, resource: &str) -> String {
        format!("{}/api/{}/", self.base_url, resource)
    }

    fn record_url(&self, resource: &str, id: &str) -> String {
        format!("{}/api/{}/{}/", self.base_url, resource, id)
    }

    /// Fetch a whole collection. Accepts both a bare array body and a
    /// `{"results": [...]}` envelope.
    pub async fn list<T: DeserializeOwned>(&self, resource: &str) -> OctoResult<Vec<T>> {
        let response = self.client.get(self.collection_url(resource)).send().await?;
        let response = Self::check_status(response).await?;

        let page: ListResponse<T> = response.json().await?;
        Ok(page.into_records())
    }

    /// Apply a partial update to one record and return the updated record.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
        fields: &Value,
    ) -> OctoResult<T> {
        let response = self
            .client
            .patch(self.record_url(resource, id))
            .json(fields)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    async fn check_status(response: reqwest::Response) -> OctoResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OctoError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_tolerate_trailing_slash_in_base() {
        let client = ApiClient::new("http://localhost:8000/".to_string());
        assert_eq!(client.collection_url("teams"), "http://localhost:8000/api/teams/");
        assert_eq!(
            client.record_url("users", "u1"),
            "http://localhost:8000/api/users/u1/"
        );
    }
}
