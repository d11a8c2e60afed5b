//! # HTTP Transport
//!
//! Talks to one REST resource of the backend using [`reqwest`].
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | list | GET | `{endpoint}/findAll` |
//! | create | POST | `{endpoint}/save` |
//! | update | PUT | `{endpoint}/update/{id}` |
//! | delete | DELETE | `{endpoint}/delete/{id}` |
//! | get one | GET | `{endpoint}/findById/{id}` (see [`FindByIdRoute`]) |

use crate::config::{ApiConfig, FindByIdRoute};
use crate::entity::{RecordId, RestEntity};
use crate::error::{ConfigError, RequestError};
use crate::transport::Transport;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::marker::PhantomData;

/// HTTP client for a single resource endpoint.
pub struct HttpTransport<T: RestEntity> {
    client: reqwest::Client,
    endpoint: String,
    find_by_id_route: FindByIdRoute,
    _record: PhantomData<fn() -> T>,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl<T: RestEntity> HttpTransport<T> {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuses an existing [`reqwest::Client`] so every resource shares one
    /// connection pool.
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client,
            endpoint: config.endpoint(T::RESOURCE)?,
            find_by_id_route: config.find_by_id_route,
            _record: PhantomData,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }

    // ---- private helpers ----

    /// Returns the response unchanged on 2xx, otherwise a
    /// [`RequestError::Status`] carrying the backend's message.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RequestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RequestError::status(
            status.as_u16(),
            error_message(status, &body),
        ))
    }

    async fn parse_response<R: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<R, RequestError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| RequestError::Decode(e.to_string()))
    }

    /// Asserts a 2xx status, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), RequestError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Picks the most useful message out of an error response: the `message` field of a
/// JSON body, then the raw body, then the status reason.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(body)
    {
        return message;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[async_trait]
impl<T: RestEntity> Transport<T> for HttpTransport<T> {
    async fn find_all(&self) -> Result<Vec<T>, RequestError> {
        let response = self.client.get(self.url("findAll")).send().await?;
        Self::parse_response(response).await
    }

    async fn find_by_id(&self, id: RecordId) -> Result<T, RequestError> {
        let response = self
            .client
            .get(self.url(&self.find_by_id_route.path(id)))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn save(&self, record: T) -> Result<T, RequestError> {
        let response = self
            .client
            .post(self.url("save"))
            .json(&record)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update(&self, id: RecordId, record: T) -> Result<(), RequestError> {
        let response = self
            .client
            .put(self.url(&format!("update/{id}")))
            .json(&record)
            .send()
            .await?;
        Self::check_status(response).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), RequestError> {
        let response = self
            .client
            .delete(self.url(&format!("delete/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn error_message_prefers_json_message_field() {
        let body = r#"{"message":"Login already taken","status":400}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "Login already taken"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, "boom\n"),
            "boom"
        );
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"error":"x"}"#),
            r#"{"error":"x"}"#
        );
    }
}
