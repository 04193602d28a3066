//! Waitlist backend seam.
//!
//! [`WaitlistBackend`] is where a real signup service plugs in: it accepts a
//! [`Submission`] and answers success or failure. The shipped
//! [`SimulatedBackend`] only waits and then succeeds.

use std::sync::Arc;
use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use tracing::{debug, info, warn};

use crate::error::WaitlistError;
use crate::state::{Submission, WaitlistState};

pub trait WaitlistBackend {
    fn join(&self, submission: Submission) -> LocalBoxFuture<'static, Result<(), WaitlistError>>;
}

/// Stand-in for the signup service: sleeps for `latency`, always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl WaitlistBackend for SimulatedBackend {
    fn join(&self, submission: Submission) -> LocalBoxFuture<'static, Result<(), WaitlistError>> {
        let latency = self.latency;
        async move {
            debug!(?latency, chars = submission.email.len(), "simulating waitlist signup");
            gloo_timers::future::sleep(latency).await;
            Ok(())
        }
        .boxed_local()
    }
}

/// Shared handle to the active backend, provided through context.
#[derive(Clone)]
pub struct WaitlistClient(Arc<dyn WaitlistBackend + Send + Sync>);

impl WaitlistClient {
    pub fn new(backend: impl WaitlistBackend + Send + Sync + 'static) -> Self {
        Self(Arc::new(backend))
    }

    pub fn simulated(latency: Duration) -> Self {
        Self::new(SimulatedBackend::new(latency))
    }
}

impl std::fmt::Debug for WaitlistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitlistClient").finish_non_exhaustive()
    }
}

/// Submit handler for the form.
///
/// Does nothing unless the form is open with a non-blank email; otherwise
/// flips the state to `Submitting` and resolves it in the background.
pub fn submit(state: RwSignal<WaitlistState>, client: WaitlistClient) {
    let Some(submission) = state.try_update(WaitlistState::begin).flatten() else {
        return;
    };
    leptos::task::spawn_local(deliver(state, client, submission));
}

/// Wait for the backend and apply its answer.
///
/// If the section was torn down in the meantime the answer is dropped.
pub async fn deliver(state: RwSignal<WaitlistState>, client: WaitlistClient, submission: Submission) {
    let outcome = client.0.join(submission).await;
    match &outcome {
        Ok(()) => info!("waitlist signup acknowledged"),
        Err(err) => warn!(%err, "waitlist signup failed"),
    }
    if state.try_update(|s| s.resolve(outcome)).is_none() {
        debug!("waitlist section disposed before signup resolved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::sync::Mutex;

    type Reply = Result<(), WaitlistError>;

    /// Backend that answers only when the test says so.
    struct Gate(Mutex<Option<oneshot::Receiver<Reply>>>);

    impl Gate {
        fn new() -> (Self, oneshot::Sender<Reply>) {
            let (tx, rx) = oneshot::channel();
            (Self(Mutex::new(Some(rx))), tx)
        }
    }

    impl WaitlistBackend for Gate {
        fn join(&self, _submission: Submission) -> LocalBoxFuture<'static, Reply> {
            let rx = self.0.lock().unwrap().take();
            async move {
                match rx {
                    Some(rx) => rx.await.unwrap_or(Err(WaitlistError::Unavailable)),
                    None => Err(WaitlistError::Unavailable),
                }
            }
            .boxed_local()
        }
    }

    fn open_form(email: &str) -> RwSignal<WaitlistState> {
        let state = RwSignal::new(WaitlistState::default());
        state.update(|s| s.set_email(email));
        state
    }

    #[test]
    fn stays_busy_until_backend_answers() {
        let owner = Owner::new();
        owner.with(|| {
            let (gate, reply) = Gate::new();
            let client = WaitlistClient::new(gate);
            let state = open_form("ada@example.com");
            let submission = state.try_update(WaitlistState::begin).flatten().unwrap();

            let mut pool = LocalPool::new();
            pool.spawner()
                .spawn_local(deliver(state, client, submission))
                .unwrap();
            pool.run_until_stalled();

            assert!(state.with_untracked(WaitlistState::is_busy));
            assert_eq!(state.with_untracked(|s| s.email().to_owned()), "ada@example.com");
            // second submit while in flight changes nothing
            assert_eq!(state.try_update(WaitlistState::begin).flatten(), None);

            reply.send(Ok(())).unwrap();
            pool.run_until_stalled();

            assert!(state.with_untracked(WaitlistState::is_submitted));
            assert_eq!(state.with_untracked(|s| s.email().to_owned()), "");
        });
    }

    #[test]
    fn backend_failure_lands_in_failed_phase() {
        let owner = Owner::new();
        owner.with(|| {
            let (gate, reply) = Gate::new();
            let state = open_form("ada@example.com");
            let submission = state.try_update(WaitlistState::begin).flatten().unwrap();

            reply
                .send(Err(WaitlistError::Rejected("duplicate".into())))
                .unwrap();
            futures::executor::block_on(deliver(state, WaitlistClient::new(gate), submission));

            assert_eq!(
                state.with_untracked(|s| s.failure().cloned()),
                Some(WaitlistError::Rejected("duplicate".into()))
            );
            assert_eq!(state.with_untracked(|s| s.email().to_owned()), "ada@example.com");
        });
    }

    #[test]
    fn answer_after_teardown_is_dropped() {
        let owner = Owner::new();
        let (state, submission) = owner.with(|| {
            let state = open_form("ada@example.com");
            let submission = state.try_update(WaitlistState::begin).flatten().unwrap();
            (state, submission)
        });
        owner.cleanup();

        let (gate, reply) = Gate::new();
        reply.send(Ok(())).unwrap();
        futures::executor::block_on(deliver(state, WaitlistClient::new(gate), submission));
        assert!(state.try_get_untracked().is_none());
    }
}
