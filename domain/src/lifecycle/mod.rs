//! Request lifecycle state machine
//!
//! One enum for the whole submit → pending → succeeded/failed cycle.
//! Exactly one variant holds at any instant, and each new submission
//! overwrites whatever the previous one left behind — no history is kept.
//!
//! Transitions:
//!
//! ```text
//! Idle      --begin--> Pending
//! Succeeded --begin--> Pending
//! Failed    --begin--> Pending
//! Pending   --begin--> (rejected, state unchanged)
//! Pending   --succeed--> Succeeded
//! Pending   --fail-----> Failed
//! ```

use crate::core::answer::AnswerPayload;

/// The state of the single tracked query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing submitted yet (initial state)
    #[default]
    Idle,
    /// A request is in flight; further submissions are gated
    Pending,
    /// The last request completed with an answer
    Succeeded(AnswerPayload),
    /// The last request failed; holds the human-readable message
    Failed(String),
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt the submit transition.
    ///
    /// Returns `true` and moves to [`RequestState::Pending`] from any settled
    /// state, discarding a previous answer or error. Returns `false` and
    /// leaves the state untouched while a request is already in flight —
    /// this is the pending gate that keeps at most one request outstanding.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Settle the in-flight request with an answer.
    pub fn succeed(&mut self, payload: AnswerPayload) {
        *self = Self::Succeeded(payload);
    }

    /// Settle the in-flight request with a failure message.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Failed(message.into());
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The answer held by a succeeded state
    pub fn answer(&self) -> Option<&AnswerPayload> {
        match self {
            Self::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    /// The message held by a failed state
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AnswerPayload {
        AnswerPayload::new("15 days/year.", vec!["15 days paid vacation".to_string()])
    }

    #[test]
    fn test_initial_state_is_idle() {
        assert!(RequestState::new().is_idle());
    }

    #[test]
    fn test_begin_from_idle() {
        let mut state = RequestState::new();
        assert!(state.begin());
        assert!(state.is_pending());
    }

    #[test]
    fn test_begin_rejected_while_pending() {
        let mut state = RequestState::Pending;
        assert!(!state.begin());
        assert!(state.is_pending());
    }

    #[test]
    fn test_begin_from_succeeded_clears_answer() {
        let mut state = RequestState::Succeeded(payload());
        assert!(state.begin());
        assert!(state.is_pending());
        assert!(state.answer().is_none());
    }

    #[test]
    fn test_begin_from_failed_clears_message() {
        let mut state = RequestState::Failed("status 500".to_string());
        assert!(state.begin());
        assert!(state.failure().is_none());
    }

    #[test]
    fn test_succeed_clears_pending() {
        let mut state = RequestState::Pending;
        state.succeed(payload());
        assert!(!state.is_pending());
        assert_eq!(state.answer().unwrap().summary, "15 days/year.");
    }

    #[test]
    fn test_fail_clears_pending() {
        let mut state = RequestState::Pending;
        state.fail("connection refused");
        assert!(!state.is_pending());
        assert_eq!(state.failure(), Some("connection refused"));
    }

    #[test]
    fn test_resubmit_permitted_after_settle() {
        let mut state = RequestState::new();
        assert!(state.begin());
        state.fail("timeout");
        assert!(state.begin());
        state.succeed(payload());
        assert!(state.begin());
        assert!(state.is_pending());
    }
}
