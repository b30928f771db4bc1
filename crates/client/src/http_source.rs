//! [`QuestionSource`] over the catalog HTTP API.
//!
//! Wraps the `/api/v1` endpoints using [`reqwest`]. Every success body is
//! the `{ "data": ... }` envelope; every failure body is `{ error, code }`.
//! Transport failures and 5xx responses become [`CoreError::Unavailable`].
//! A 404 means a missing record only when its body carries the
//! `NOT_FOUND` code; any other 404 is a misrouted request.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use devinterview_core::error::CoreError;
use devinterview_core::question::ENTITY_QUESTION;
use devinterview_core::subscription::ENTITY_SUBSCRIPTION;
use devinterview_core::types::DbId;
use devinterview_store::models::question::{Question, QuestionDraft};
use devinterview_store::models::subscription::{EmailSubscription, SubscribeRequest};
use devinterview_store::source::QuestionSource;

/// HTTP client for one catalog API instance.
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    code: Option<String>,
}

/// Error code the API puts on a 404 for an absent record.
const NOT_FOUND_CODE: &str = "NOT_FOUND";

impl HttpSource {
    /// Create a client for the API at `api_url`, e.g. `http://localhost:3000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.api_url, path)
    }

    // ---- private helpers ----

    /// Pass 2xx responses through; map everything else to a [`CoreError`].
    ///
    /// `subject` names the entity a 404 refers to.
    async fn ensure_success(
        response: reqwest::Response,
        subject: (&'static str, &str),
    ) -> Result<reqwest::Response, CoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let raw = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let (message, code) = match serde_json::from_str::<ErrorBody>(&raw) {
            Ok(body) => (body.error, body.code),
            Err(_) => (raw, None),
        };

        Err(match status {
            StatusCode::NOT_FOUND if code.as_deref() == Some(NOT_FOUND_CODE) => {
                CoreError::not_found(subject.0, subject.1)
            }
            StatusCode::NOT_FOUND => {
                tracing::warn!(%message, "API route not found");
                CoreError::Unavailable(format!("API route not found (404): {message}"))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                CoreError::Validation(message)
            }
            StatusCode::CONFLICT => CoreError::Conflict(message),
            s if s.is_server_error() || s == StatusCode::REQUEST_TIMEOUT => {
                CoreError::Unavailable(format!("API error ({}): {message}", s.as_u16()))
            }
            s => CoreError::Internal(format!("Unexpected API response ({}): {message}", s.as_u16())),
        })
    }

    /// Unwrap the `data` envelope of a successful response.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
        subject: (&'static str, &str),
    ) -> Result<T, CoreError> {
        let response = Self::ensure_success(response, subject).await?;
        let envelope = response
            .json::<DataEnvelope<T>>()
            .await
            .map_err(|e| CoreError::Internal(format!("Malformed API response: {e}")))?;
        Ok(envelope.data)
    }
}

fn transport_error(e: reqwest::Error) -> CoreError {
    CoreError::Unavailable(format!("HTTP request failed: {e}"))
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn list_questions(&self) -> Result<Vec<Question>, CoreError> {
        let response = self
            .client
            .get(self.endpoint("/catalog"))
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_response(response, (ENTITY_QUESTION, "*")).await
    }

    async fn get_question(&self, id: DbId) -> Result<Option<Question>, CoreError> {
        let response = self
            .client
            .get(self.endpoint(&format!("/questions/{id}")))
            .send()
            .await
            .map_err(transport_error)?;

        match Self::parse_response(response, (ENTITY_QUESTION, &id.to_string())).await {
            Ok(question) => Ok(Some(question)),
            Err(CoreError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_question(&self, draft: QuestionDraft) -> Result<Question, CoreError> {
        let response = self
            .client
            .post(self.endpoint("/questions"))
            .json(&draft)
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_response(response, (ENTITY_QUESTION, "new")).await
    }

    async fn update_question(&self, id: DbId, draft: QuestionDraft) -> Result<Question, CoreError> {
        let response = self
            .client
            .put(self.endpoint(&format!("/questions/{id}")))
            .json(&draft)
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_response(response, (ENTITY_QUESTION, &id.to_string())).await
    }

    async fn delete_question(&self, id: DbId) -> Result<(), CoreError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/questions/{id}")))
            .query(&[("confirm", "true")])
            .send()
            .await
            .map_err(transport_error)?;

        Self::ensure_success(response, (ENTITY_QUESTION, &id.to_string())).await?;
        Ok(())
    }

    async fn subscribe_email(&self, email: String) -> Result<EmailSubscription, CoreError> {
        let response = self
            .client
            .post(self.endpoint("/subscriptions"))
            .json(&SubscribeRequest {
                email: email.clone(),
            })
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_response(response, (ENTITY_SUBSCRIPTION, &email)).await
    }
}
