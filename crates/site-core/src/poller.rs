//! Payment Status Poller
//!
//! Bounded polling of the checkout status endpoint after the customer
//! returns from the hosted payment page. The loop is strictly sequential:
//! attempt N+1 is never issued before attempt N's response (or failure) has
//! been observed. Both the fetch and the wait are injected so the machine
//! runs unchanged in the browser and under test.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::session::{SessionStatus, StatusCheck};

/// Total status-check attempts before giving up, shared across transient
/// failures and still-pending responses.
pub const MAX_ATTEMPTS: u32 = 5;

/// Fixed wait between attempts; no backoff.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Source of checkout status responses
#[async_trait(?Send)]
pub trait StatusSource {
    /// Query the status endpoint for one session
    async fn fetch_status(&self, session_id: &str) -> Result<SessionStatus>;
}

/// Clock owned by the polling view. `wait` returning `false` means the view
/// is gone and the poll must stop without issuing another fetch.
#[async_trait(?Send)]
pub trait Scheduler {
    /// Sleep for `interval`; report whether polling may continue
    async fn wait(&self, interval: Duration) -> bool;
}

/// Terminal failure of a polling run, with the message shown to the customer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollFailure {
    /// No session identifier in the navigation context; raised by the view
    /// before any network call
    MissingSession,

    /// Provider reported the session expired
    Expired,

    /// Attempt budget exhausted while the payment stayed pending
    TimedOut,

    /// Attempt budget exhausted on transport or server failures
    StatusCheck,
}

impl PollFailure {
    /// Customer-facing message for this failure
    pub fn message(&self) -> &'static str {
        match self {
            PollFailure::MissingSession => "No session ID found",
            PollFailure::Expired => "Payment session expired",
            PollFailure::TimedOut => {
                "Payment status check timed out. Please contact support if you were charged."
            }
            PollFailure::StatusCheck => "Error checking payment status. Please try again.",
        }
    }
}

/// How a polling run ended
#[derive(Clone, Debug, PartialEq)]
pub enum PollOutcome {
    /// `payment_status == "paid"` observed; carries the full response body
    Paid(SessionStatus),

    /// Terminal failure
    Failed(PollFailure),

    /// The owning view was torn down before the run resolved
    Cancelled,
}

/// Bounded, fixed-interval status poller
#[derive(Clone, Copy, Debug)]
pub struct StatusPoller {
    max_attempts: u32,
    interval: Duration,
}

impl Default for StatusPoller {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            interval: POLL_INTERVAL,
        }
    }
}

impl StatusPoller {
    /// Poller with a custom budget and interval
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
        }
    }

    /// Run the poll loop to a terminal outcome.
    ///
    /// The first `paid` observation resolves the run regardless of remaining
    /// budget; an `expired` session fails immediately; everything else
    /// (pending payment, transport failure, non-2xx) consumes one attempt
    /// from the shared budget and retries after the fixed interval.
    pub async fn poll<S, W>(&self, source: &S, scheduler: &W, session_id: &str) -> PollOutcome
    where
        S: StatusSource + ?Sized,
        W: Scheduler + ?Sized,
    {
        let mut attempts = 0;

        loop {
            attempts += 1;

            // Which terminal failure applies if this attempt exhausts the
            // budget: a pending payment times out, a failed check does not
            // pretend to.
            let exhausted = match source.fetch_status(session_id).await {
                Ok(status) => match status.classify() {
                    StatusCheck::Paid => {
                        tracing::info!(session_id, attempts, "payment confirmed");
                        return PollOutcome::Paid(status);
                    }
                    StatusCheck::Expired => {
                        tracing::warn!(session_id, attempts, "payment session expired");
                        return PollOutcome::Failed(PollFailure::Expired);
                    }
                    StatusCheck::Pending => PollFailure::TimedOut,
                },
                Err(err) => {
                    tracing::warn!(session_id, attempts, error = %err, "status check failed");
                    PollFailure::StatusCheck
                }
            };

            if attempts >= self.max_attempts {
                return PollOutcome::Failed(exhausted);
            }

            if !scheduler.wait(self.interval).await {
                return PollOutcome::Cancelled;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use std::cell::RefCell;

    /// Scripted status source: pops one canned reply per fetch and counts
    /// the calls that were actually issued.
    struct ScriptedSource {
        replies: RefCell<Vec<Result<SessionStatus>>>,
        calls: RefCell<u32>,
    }

    impl ScriptedSource {
        fn new(mut replies: Vec<Result<SessionStatus>>) -> Self {
            replies.reverse();
            Self {
                replies: RefCell::new(replies),
                calls: RefCell::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.borrow()
        }
    }

    #[async_trait(?Send)]
    impl StatusSource for ScriptedSource {
        async fn fetch_status(&self, _session_id: &str) -> Result<SessionStatus> {
            *self.calls.borrow_mut() += 1;
            self.replies
                .borrow_mut()
                .pop()
                .expect("poller issued more fetches than scripted")
        }
    }

    /// Scheduler that never sleeps; optionally cancels after N waits.
    struct InstantScheduler {
        waits: RefCell<u32>,
        cancel_after: Option<u32>,
    }

    impl InstantScheduler {
        fn new() -> Self {
            Self {
                waits: RefCell::new(0),
                cancel_after: None,
            }
        }

        fn cancelling_after(waits: u32) -> Self {
            Self {
                waits: RefCell::new(0),
                cancel_after: Some(waits),
            }
        }
    }

    #[async_trait(?Send)]
    impl Scheduler for InstantScheduler {
        async fn wait(&self, _interval: Duration) -> bool {
            let mut waits = self.waits.borrow_mut();
            *waits += 1;
            self.cancel_after.is_none_or(|limit| *waits <= limit)
        }
    }

    fn unpaid() -> SessionStatus {
        SessionStatus {
            status: Some("open".into()),
            payment_status: Some("unpaid".into()),
            ..Default::default()
        }
    }

    fn paid() -> SessionStatus {
        SessionStatus {
            status: Some("complete".into()),
            payment_status: Some("paid".into()),
            amount_total: Some(10000),
            currency: Some("usd".into()),
            ..Default::default()
        }
    }

    fn expired() -> SessionStatus {
        SessionStatus {
            status: Some("expired".into()),
            payment_status: Some("unpaid".into()),
            ..Default::default()
        }
    }

    fn transport_err() -> SiteError {
        SiteError::Transport("connection refused".into())
    }

    #[tokio::test]
    async fn paid_on_first_attempt_resolves_immediately() {
        let source = ScriptedSource::new(vec![Ok(paid())]);
        let outcome = StatusPoller::default()
            .poll(&source, &InstantScheduler::new(), "cs_1")
            .await;

        assert_eq!(outcome, PollOutcome::Paid(paid()));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn pending_then_paid_keeps_final_body() {
        let source = ScriptedSource::new(vec![
            Ok(unpaid()),
            Ok(unpaid()),
            Ok(unpaid()),
            Ok(unpaid()),
            Ok(paid()),
        ]);
        let outcome = StatusPoller::default()
            .poll(&source, &InstantScheduler::new(), "cs_1")
            .await;

        match outcome {
            PollOutcome::Paid(status) => {
                assert_eq!(status.amount_total, Some(10000));
                assert_eq!(status.currency.as_deref(), Some("usd"));
            }
            other => panic!("expected Paid, got {other:?}"),
        }
        assert_eq!(source.calls(), 5);
    }

    #[tokio::test]
    async fn five_pending_attempts_time_out_without_sixth_call() {
        let source = ScriptedSource::new(vec![Ok(unpaid()); 5]);
        let outcome = StatusPoller::default()
            .poll(&source, &InstantScheduler::new(), "cs_1")
            .await;

        assert_eq!(outcome, PollOutcome::Failed(PollFailure::TimedOut));
        assert_eq!(source.calls(), 5);
        assert_eq!(
            PollFailure::TimedOut.message(),
            "Payment status check timed out. Please contact support if you were charged."
        );
    }

    #[tokio::test]
    async fn expired_short_circuits_on_first_attempt() {
        let source = ScriptedSource::new(vec![Ok(expired())]);
        let outcome = StatusPoller::default()
            .poll(&source, &InstantScheduler::new(), "cs_1")
            .await;

        assert_eq!(outcome, PollOutcome::Failed(PollFailure::Expired));
        assert_eq!(source.calls(), 1);
        assert_eq!(PollFailure::Expired.message(), "Payment session expired");
    }

    #[tokio::test]
    async fn transport_failures_share_the_attempt_budget() {
        let source = ScriptedSource::new(vec![Err(transport_err()); 5]);
        let outcome = StatusPoller::default()
            .poll(&source, &InstantScheduler::new(), "cs_1")
            .await;

        assert_eq!(outcome, PollOutcome::Failed(PollFailure::StatusCheck));
        assert_eq!(source.calls(), 5);
    }

    #[tokio::test]
    async fn transport_failure_then_paid_recovers() {
        let source = ScriptedSource::new(vec![Err(transport_err()), Ok(unpaid()), Ok(paid())]);
        let outcome = StatusPoller::default()
            .poll(&source, &InstantScheduler::new(), "cs_1")
            .await;

        assert_eq!(outcome, PollOutcome::Paid(paid()));
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn cancelled_wait_stops_before_next_fetch() {
        let source = ScriptedSource::new(vec![Ok(unpaid()); 5]);
        let scheduler = InstantScheduler::cancelling_after(0);
        let outcome = StatusPoller::default().poll(&source, &scheduler, "cs_1").await;

        assert_eq!(outcome, PollOutcome::Cancelled);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn budget_is_shared_across_failure_kinds() {
        // 3 transport failures + 2 pending responses = 5 total attempts;
        // the last observation was "pending", so the run times out.
        let source = ScriptedSource::new(vec![
            Err(transport_err()),
            Ok(unpaid()),
            Err(transport_err()),
            Err(transport_err()),
            Ok(unpaid()),
        ]);
        let outcome = StatusPoller::default()
            .poll(&source, &InstantScheduler::new(), "cs_1")
            .await;

        assert_eq!(outcome, PollOutcome::Failed(PollFailure::TimedOut));
        assert_eq!(source.calls(), 5);
    }
}
