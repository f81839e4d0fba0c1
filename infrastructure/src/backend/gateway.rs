//! HTTP answer gateway implementation

use crate::backend::error::{BackendError, Result};
use assistant_application::ports::answer_gateway::{AnswerGateway, GatewayError};
use assistant_domain::{AnswerPayload, Question, truncate_str};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum bytes of a raw response body kept in a parse error
const RAW_PREVIEW_BYTES: usize = 512;

/// Wire shape of the query request body
#[derive(Serialize)]
struct QueryRequest<'a> {
    question: &'a str,
}

/// Answer gateway implementation for the policy backend's HTTP endpoint.
///
/// Performs `POST {base_url}/query` with a JSON body and deserializes the
/// response into an [`AnswerPayload`]. By default requests have no timeout;
/// a bounded timeout can be opted into via configuration, in which case
/// expiry surfaces as a transport failure like any other connection error.
pub struct HttpAnswerGateway {
    client: reqwest::Client,
    query_url: String,
}

impl HttpAnswerGateway {
    /// Create a gateway for the given base URL with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a gateway with an optional bounded request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.into();
        let base = base_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(BackendError::InvalidBaseUrl(base_url));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            query_url: format!("{base}/query"),
        })
    }

    /// The full URL queries are posted to.
    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    async fn post_query(&self, question: &Question) -> Result<AnswerPayload> {
        debug!("POST {}", self.query_url);

        let response = self
            .client
            .post(&self.query_url)
            .json(&QueryRequest {
                question: question.content(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
            });
        }

        let raw = response.text().await?;
        serde_json::from_str(&raw).map_err(|e| BackendError::ParseError {
            error: e.to_string(),
            raw: truncate_str(&raw, RAW_PREVIEW_BYTES).to_string(),
        })
    }
}

#[async_trait]
impl AnswerGateway for HttpAnswerGateway {
    async fn ask(&self, question: &Question) -> std::result::Result<AnswerPayload, GatewayError> {
        match self.post_query(question).await {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!("Backend query failed: {error}");
                Err(error.into())
            }
        }
    }
}
