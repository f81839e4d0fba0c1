//! Query interaction controller.
//!
//! Owns the lifecycle of a single user-submitted question: captures input,
//! issues the backend request through the [`AnswerGateway`] port, and tracks
//! exactly one in-flight result.
//!
//! Submission is split into two halves so an event loop can keep editing
//! responsive while the request is in flight:
//!
//! 1. [`begin_submit()`](QueryController::begin_submit) — synchronous
//!    precondition check and transition to pending. Returns the [`Question`]
//!    to transmit, or `None` when the input is blank or a request is already
//!    outstanding (both are silent no-ops).
//! 2. [`resolve()`](QueryController::resolve) — terminal step for every
//!    submission. Clears the pending gate on success *and* failure; the
//!    controller can never be left stuck in pending after a request settles.
//!
//! [`submit()`](QueryController::submit) combines both for single-shot
//! callers. There is no automatic retry and no cancellation of an in-flight
//! request; a failure leaves the controller fully usable for the next
//! submission.

use crate::ports::answer_gateway::{AnswerGateway, GatewayError};
use crate::ports::query_logger::{NoQueryLogger, QueryEvent, QueryLogger};
use assistant_domain::{AnswerPayload, Question, RequestState, truncate_str};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Controller for the question → request → answer cycle.
pub struct QueryController {
    gateway: Arc<dyn AnswerGateway>,
    logger: Arc<dyn QueryLogger>,
    question: String,
    state: RequestState,
}

impl QueryController {
    pub fn new(gateway: Arc<dyn AnswerGateway>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoQueryLogger),
            question: String::new(),
            state: RequestState::new(),
        }
    }

    /// Create with a query logger.
    pub fn with_query_logger(mut self, logger: Arc<dyn QueryLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the current question text unconditionally.
    ///
    /// No validation and no network activity happen here; the emptiness
    /// check is deferred to submission.
    pub fn update_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// The current (unvalidated) question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The current request state.
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// A clone of the gateway handle, for callers that run the request on a
    /// spawned task and feed the outcome back through [`resolve()`].
    ///
    /// [`resolve()`]: QueryController::resolve
    pub fn gateway(&self) -> Arc<dyn AnswerGateway> {
        Arc::clone(&self.gateway)
    }

    /// Check preconditions and transition to pending.
    ///
    /// Returns the validated [`Question`] to transmit, or `None` — with the
    /// state untouched and no request issued — when the trimmed input is
    /// empty or a request is already in flight. Acceptance discards any
    /// previously held answer or failure message.
    pub fn begin_submit(&mut self) -> Option<Question> {
        if self.state.is_pending() {
            debug!("Submission ignored: a request is already in flight");
            return None;
        }

        let Some(question) = Question::try_new(self.question.as_str()) else {
            debug!("Submission ignored: question is blank");
            return None;
        };

        self.state.begin();
        info!(
            "Submitting policy question: {}",
            truncate_str(question.content(), 100)
        );
        self.logger.log(QueryEvent::new(
            "question_submitted",
            serde_json::json!({ "question": question.content() }),
        ));

        Some(question)
    }

    /// Settle the in-flight request.
    ///
    /// Every outcome clears the pending gate: success stores the payload,
    /// failure stores the human-readable message from [`GatewayError`].
    pub fn resolve(&mut self, outcome: Result<AnswerPayload, GatewayError>) {
        match outcome {
            Ok(payload) => {
                info!("Answer received with {} key details", payload.bullets.len());
                self.logger.log(QueryEvent::new(
                    "answer_received",
                    serde_json::json!({
                        "summary": payload.summary,
                        "bullets": payload.bullets,
                    }),
                ));
                self.state.succeed(payload);
            }
            Err(error) => {
                let message = error.to_string();
                warn!("Query failed: {message}");
                self.logger.log(QueryEvent::new(
                    "query_failed",
                    serde_json::json!({ "message": message }),
                ));
                self.state.fail(message);
            }
        }
    }

    /// Full submission cycle for single-shot callers: precondition check,
    /// one gateway call, settle. A rejected submission returns immediately.
    pub async fn submit(&mut self) {
        let Some(question) = self.begin_submit() else {
            return;
        };
        let outcome = self.gateway.ask(&question).await;
        self.resolve(outcome);
    }
}
