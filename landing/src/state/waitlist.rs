//! Waitlist form state machine.
//!
//! ```text
//! Idle ──begin──▶ Submitting ──Ok──▶ Submitted (terminal)
//!                   │    ▲
//!                 Err   begin (retry)
//!                   ▼    │
//!                  Failed
//! ```
//!
//! `Submitting` doubles as the latch that keeps a second request from being
//! started while one is in flight.

use crate::error::WaitlistError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(WaitlistError),
}

/// The value handed to a waitlist backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistState {
    email: String,
    phase: SubmitPhase,
}

impl WaitlistState {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// True while a request is in flight; the submit control is disabled.
    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    pub fn failure(&self) -> Option<&WaitlistError> {
        match &self.phase {
            SubmitPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Edits are only accepted while the form is open.
    pub fn set_email(&mut self, email: impl Into<String>) {
        if matches!(self.phase, SubmitPhase::Idle | SubmitPhase::Failed(_)) {
            self.email = email.into();
        }
    }

    /// Start a submission.
    ///
    /// Returns `None` without touching state when the email is blank, a
    /// request is already in flight, or the form has already been submitted.
    pub fn begin(&mut self) -> Option<Submission> {
        let open = matches!(self.phase, SubmitPhase::Idle | SubmitPhase::Failed(_));
        let email = self.email.trim();
        if !open || email.is_empty() {
            return None;
        }
        let submission = Submission {
            email: email.to_owned(),
        };
        self.phase = SubmitPhase::Submitting;
        Some(submission)
    }

    /// Apply the backend's answer. Ignored unless a request is in flight.
    pub fn resolve(&mut self, outcome: Result<(), WaitlistError>) {
        if !self.is_busy() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.phase = SubmitPhase::Submitted;
                self.email.clear();
            }
            Err(err) => self.phase = SubmitPhase::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_email(email: &str) -> WaitlistState {
        let mut state = WaitlistState::default();
        state.set_email(email);
        state
    }

    #[test]
    fn happy_path_idle_submitting_submitted() {
        let mut state = with_email("ada@example.com");
        assert_eq!(state.phase(), &SubmitPhase::Idle);

        let submission = state.begin().unwrap();
        assert_eq!(submission.email, "ada@example.com");
        assert!(state.is_busy());
        // email is kept until the request resolves
        assert_eq!(state.email(), "ada@example.com");

        state.resolve(Ok(()));
        assert!(state.is_submitted());
        assert!(!state.is_busy());
        assert_eq!(state.email(), "");
    }

    #[test]
    fn blank_email_does_not_start() {
        let mut state = with_email("   ");
        assert_eq!(state.begin(), None);
        assert_eq!(state.phase(), &SubmitPhase::Idle);
        assert_eq!(state.email(), "   ");
    }

    #[test]
    fn resubmitting_while_busy_is_noop() {
        let mut state = with_email("ada@example.com");
        state.begin().unwrap();
        let before = state.clone();

        assert_eq!(state.begin(), None);
        state.set_email("other@example.com");
        assert_eq!(state, before);
    }

    #[test]
    fn submitted_is_terminal() {
        let mut state = with_email("ada@example.com");
        state.begin().unwrap();
        state.resolve(Ok(()));

        state.set_email("again@example.com");
        assert_eq!(state.begin(), None);
        state.resolve(Err(WaitlistError::Unavailable));
        assert!(state.is_submitted());
        assert_eq!(state.email(), "");
    }

    #[test]
    fn failure_keeps_email_and_allows_retry() {
        let mut state = with_email("ada@example.com");
        state.begin().unwrap();
        state.resolve(Err(WaitlistError::Unavailable));

        assert_eq!(state.failure(), Some(&WaitlistError::Unavailable));
        assert_eq!(state.email(), "ada@example.com");
        assert!(!state.is_busy());

        let retry = state.begin().unwrap();
        assert_eq!(retry.email, "ada@example.com");
        assert!(state.is_busy());
        state.resolve(Ok(()));
        assert!(state.is_submitted());
    }

    #[test]
    fn stray_resolution_is_ignored() {
        let mut state = with_email("ada@example.com");
        state.resolve(Ok(()));
        assert_eq!(state.phase(), &SubmitPhase::Idle);
        assert_eq!(state.email(), "ada@example.com");
    }

    #[test]
    fn submission_email_is_trimmed() {
        let mut state = with_email("  ada@example.com ");
        assert_eq!(state.begin().unwrap().email, "ada@example.com");
    }
}
