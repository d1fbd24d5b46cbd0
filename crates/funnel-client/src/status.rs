//! # Payment Status Polling
//!
//! Repeatedly queries `GET /api/checkout/status/{session_id}` until the
//! payment reaches a terminal state or the attempt budget runs out.
//!
//! The loop is explicit (no recursion) and every wait races a shutdown
//! signal, so an abandoned run releases its timer promptly. Runs are
//! deduplicated per session id.

use crate::client::ApiClient;
use funnel_core::{FunnelError, FunnelResult, PaymentSnapshot, PaymentStatus};
use std::collections::HashSet;
use std::sync::{Mutex, RwLock};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

/// Tuning for a polling run.
///
/// The defaults mirror the collaborator's documented budget: 5 queries,
/// 2 s apart (~10 s total). That window can be short for real payment
/// processors; widen it per deployment rather than assuming confirmation
/// lands inside it.
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    /// Status query budget; the first query counts
    pub max_attempts: u32,
    /// Pause between successive queries (none before the first)
    pub interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            interval: Duration::from_millis(2000),
        }
    }
}

/// Payment status checker and poller
pub struct StatusPoller {
    api: ApiClient,
    /// Latest snapshot for observers that do not poll themselves
    last_seen: RwLock<Option<PaymentSnapshot>>,
    /// Session ids with an active polling run
    in_flight: Mutex<HashSet<String>>,
}

impl StatusPoller {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            last_seen: RwLock::new(None),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Latest status snapshot observed by any check or polling run
    pub fn last_seen(&self) -> Option<PaymentSnapshot> {
        *self.last_seen.read().expect("status snapshot lock poisoned")
    }

    /// Single-shot status query; updates the shared snapshot
    #[instrument(skip(self))]
    pub async fn check(&self, session_id: &str) -> FunnelResult<PaymentStatus> {
        let status: PaymentStatus = self
            .api
            .get_json(&format!("/checkout/status/{}", session_id))
            .await?;

        *self.last_seen.write().expect("status snapshot lock poisoned") =
            Some(PaymentSnapshot::now(status));

        Ok(status)
    }

    /// Poll with default options and no external cancellation
    pub async fn poll(&self, session_id: &str) -> FunnelResult<PaymentStatus> {
        let opts = PollOptions {
            max_attempts: self.api.config().poll_max_attempts,
            interval: self.api.config().poll_interval,
        };
        // Keep the sender alive so the run is never spuriously cancelled
        let (_tx, rx) = broadcast::channel(1);
        self.poll_with(session_id, opts, rx).await
    }

    /// Poll until a terminal state, the attempt budget, or the shutdown
    /// signal.
    ///
    /// Transition rule, evaluated after each query:
    /// - `payment_status == paid` → return the snapshot
    /// - `status == expired` → `SessionExpired`
    /// - still pending with the budget spent → `PollTimeout`
    /// - otherwise wait `interval` and re-query
    #[instrument(skip(self, opts, shutdown), fields(max_attempts = opts.max_attempts))]
    pub async fn poll_with(
        &self,
        session_id: &str,
        opts: PollOptions,
        mut shutdown: broadcast::Receiver<()>,
    ) -> FunnelResult<PaymentStatus> {
        let _claim = self.claim(session_id)?;

        if opts.max_attempts == 0 {
            return Err(FunnelError::PollTimeout { attempts: 0 });
        }

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let status = self.check(session_id).await?;

            if status.is_paid() {
                info!(
                    "Payment confirmed: session={}, attempts={}",
                    session_id, attempts
                );
                return Ok(status);
            }

            if status.is_expired() {
                warn!("Payment session expired: session={}", session_id);
                return Err(FunnelError::SessionExpired {
                    session_id: session_id.to_string(),
                });
            }

            if attempts >= opts.max_attempts {
                warn!(
                    "Payment status check timed out: session={}, attempts={}",
                    session_id, attempts
                );
                return Err(FunnelError::PollTimeout { attempts });
            }

            debug!(
                "Payment still pending: session={}, attempt={}/{}",
                session_id, attempts, opts.max_attempts
            );

            tokio::select! {
                _ = tokio::time::sleep(opts.interval) => {}
                signal = shutdown.recv() => {
                    if signal.is_ok() {
                        info!("Status poll cancelled: session={}", session_id);
                        return Err(FunnelError::PollCancelled);
                    }
                    // Sender dropped without signalling; the wait can no
                    // longer be cancelled but must still happen.
                    tokio::time::sleep(opts.interval).await;
                }
            }
        }
    }

    /// Register the session in the dedup set; fails fast if a run is
    /// already active for it.
    fn claim(&self, session_id: &str) -> FunnelResult<PollClaim<'_>> {
        let mut in_flight = self.in_flight.lock().expect("poll registry poisoned");
        if !in_flight.insert(session_id.to_string()) {
            return Err(FunnelError::PollInProgress {
                session_id: session_id.to_string(),
            });
        }
        Ok(PollClaim {
            poller: self,
            session_id: session_id.to_string(),
        })
    }
}

/// Releases the dedup slot when the polling run ends, whichever way
struct PollClaim<'a> {
    poller: &'a StatusPoller,
    session_id: String,
}

impl Drop for PollClaim<'_> {
    fn drop(&mut self) {
        if let Ok(mut in_flight) = self.poller.in_flight.lock() {
            in_flight.remove(&self.session_id);
        }
    }
}
