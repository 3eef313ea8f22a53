//! Generic HTTP-verb client for the file-flow backend.
//!
//! Every call names a resource prefix and a resource name; the URL is
//! `{base_url}/{prefix}` plus `/{name}` when the name is non-empty.

use crate::config::ApiSettings;
use flow_core::error::ClientError;
use flow_core::observability::{TracedClientExt, TracedRequest};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};

/// Backend resource groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiPrefix {
    UserUploadedFiles,
}

impl ApiPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiPrefix::UserUploadedFiles => "user-uploaded-files",
        }
    }
}

pub struct ApiClient {
    client: Client,
    settings: ApiSettings,
}

impl ApiClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ClientError> {
        // Cookie store keeps the backend session established at login.
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client, settings })
    }

    pub fn base_url(&self) -> &str {
        self.settings.base_url.trim_end_matches('/')
    }

    pub fn url(&self, prefix: ApiPrefix, name: &str) -> String {
        let basic_url = format!("{}/{}", self.base_url(), prefix.as_str());
        let name = name.trim_matches('/');
        if name.is_empty() {
            basic_url
        } else {
            format!("{}/{}", basic_url, name)
        }
    }

    /// Send a GET request with `query` as URL parameters and decode the JSON body.
    #[tracing::instrument(skip(self, query, prefix), fields(prefix = prefix.as_str()))]
    pub async fn get<T, Q>(&self, prefix: ApiPrefix, name: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(prefix, name);
        let request = self.prepare(self.client.traced_get(&url)).query(query);
        let request_id = request.request_id().to_string();

        let response = request.send().await.map_err(|e| {
            tracing::error!(url = %url, request_id = %request_id, error = %e, "Failed to send GET request");
            ClientError::Transport(e)
        })?;

        let body = Self::ensure_success(response, &url).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(url = %url, error = %e, "Failed to decode response body");
            ClientError::Decode(e)
        })
    }

    /// Send a multipart POST. Any 2xx is success; the body is ignored.
    #[tracing::instrument(skip(self, form, prefix), fields(prefix = prefix.as_str()))]
    pub async fn post_multipart(
        &self,
        prefix: ApiPrefix,
        name: &str,
        form: reqwest::multipart::Form,
    ) -> Result<(), ClientError> {
        let url = self.url(prefix, name);
        let request = self.prepare(self.client.traced_post(&url)).multipart(form);
        let request_id = request.request_id().to_string();

        let response = request.send().await.map_err(|e| {
            tracing::error!(url = %url, request_id = %request_id, error = %e, "Failed to send POST request");
            ClientError::Transport(e)
        })?;

        Self::ensure_success(response, &url).await?;
        Ok(())
    }

    fn prepare(&self, request: TracedRequest) -> TracedRequest {
        let request = match &self.settings.access_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        };
        match self.settings.timeout() {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    async fn ensure_success(response: reqwest::Response, url: &str) -> Result<String, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, url = %url, "API response");

        if status.is_success() {
            Ok(body)
        } else {
            let err = ClientError::from_response_body(status, &body);
            tracing::warn!(status = %status, url = %url, error = %err, "API request failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(ApiSettings::new(base_url)).unwrap()
    }

    #[test]
    fn url_without_name_is_the_prefix() {
        let api = client("http://localhost:8080/v1/");
        assert_eq!(
            api.url(ApiPrefix::UserUploadedFiles, ""),
            "http://localhost:8080/v1/user-uploaded-files"
        );
    }

    #[test]
    fn url_with_name_appends_segment() {
        let api = client("http://localhost:8080/v1");
        assert_eq!(
            api.url(ApiPrefix::UserUploadedFiles, "/42"),
            "http://localhost:8080/v1/user-uploaded-files/42"
        );
    }
}
