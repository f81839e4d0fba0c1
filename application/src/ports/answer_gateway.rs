//! Answer gateway port
//!
//! Defines the interface for communicating with the policy-answering
//! backend. The backend is an opaque external collaborator reached over
//! HTTP; implementations (adapters) live in the infrastructure layer.

use assistant_domain::{AnswerPayload, Question};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while querying the answering backend.
///
/// The `Display` strings double as the user-visible failure messages, so
/// each variant carries enough context to stand on its own: the protocol
/// variant embeds the numeric status code, the transport and payload
/// variants embed the underlying error text.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request could not be completed (connection refused, DNS
    /// failure, configured timeout expired, ...)
    #[error("Could not reach the policy backend: {0}")]
    Transport(String),

    /// A response arrived but its status code denotes an error
    #[error("Policy backend returned status {status}")]
    Status { status: u16 },

    /// A success response arrived with a body that does not parse into an
    /// answer payload
    #[error("Could not understand the backend response: {0}")]
    InvalidPayload(String),

    /// Generic fallback
    #[error("Query failed: {0}")]
    Other(String),
}

/// Gateway to the policy-answering backend.
///
/// One operation: submit a question, receive an answer payload. Every
/// failure mode is folded into [`GatewayError`]; callers never see a raw
/// transport fault.
#[async_trait]
pub trait AnswerGateway: Send + Sync {
    /// Submit a question and await the structured answer.
    async fn ask(&self, question: &Question) -> Result<AnswerPayload, GatewayError>;
}
