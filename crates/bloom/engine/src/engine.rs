//! The collective engine — sole authority for the shared progression
//! record.
//!
//! One explicit service instance per persisted store; nothing here is
//! ambient or global. Construct it once, hand it to the UI surfaces that
//! need it; tests build as many independent instances as they like over
//! `MemoryStore`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bloom_types::{Amount, CollectiveState, Donation, ValidationResult};
use tracing::{debug, info, warn};

use crate::{StateStore, StoreError};

/// Change-notification callback, invoked with a snapshot of the new state
pub type StateListener = Arc<dyn Fn(&CollectiveState) + Send + Sync>;

/// Handle returned by [`CollectiveEngine::add_listener`], used to
/// unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The Collective State Manager.
///
/// Owns the in-memory authoritative copy of the state and the listener
/// registry. Every mutation runs as one serialized
/// read-modify-write-persist-notify unit; callers never observe the stage
/// at `STAGE_MAX`.
pub struct CollectiveEngine {
    store: Box<dyn StateStore + Send + Sync>,
    state: Mutex<CollectiveState>,
    listeners: Mutex<Vec<(ListenerId, StateListener)>>,
    next_listener_id: AtomicU64,
}

impl CollectiveEngine {
    /// Build an engine over a persisted store.
    ///
    /// An absent document starts fresh. An unreadable or corrupt document
    /// also starts fresh, with a warning on the log side channel —
    /// reinitializing over a corrupt document discards prior ledger
    /// history, which is the documented recovery for that failure.
    pub fn new(store: Box<dyn StateStore + Send + Sync>) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => {
                debug!(
                    stage = state.current_stage,
                    flowers = state.flowers_completed,
                    donations = state.donation_count(),
                    "resumed persisted collective state"
                );
                state
            }
            Ok(None) => {
                debug!("no persisted collective state, starting fresh");
                CollectiveState::new()
            }
            Err(StoreError::Corrupt(reason)) => {
                warn!(%reason, "persisted collective state is corrupt, reinitializing");
                CollectiveState::new()
            }
            Err(error) => {
                warn!(%error, "could not read persisted collective state, starting fresh");
                CollectiveState::new()
            }
        };

        Self {
            store,
            state: Mutex::new(state),
            listeners: Mutex::new(Vec::new()),
            next_listener_id: AtomicU64::new(0),
        }
    }

    /// Convenience constructor for an ephemeral engine (tests, previews).
    pub fn in_memory() -> Self {
        Self::new(Box::new(crate::MemoryStore::new()))
    }

    /// Snapshot of the current state. No side effects.
    pub fn state(&self) -> CollectiveState {
        lock(&self.state).clone()
    }

    /// Record an accepted donation and advance the bloom.
    ///
    /// Returns `Ok(true)` exactly when this donation completed a flower.
    /// Validation failures reject the call before any mutation. Persistence
    /// failures do NOT fail the call: the in-memory state keeps the
    /// mutation, listeners are still notified, and the failure is logged —
    /// at worst a restart loses the unpersisted write.
    pub fn add_donation(
        &self,
        amount: Amount,
        donor_email: Option<&str>,
    ) -> ValidationResult<bool> {
        let donation = Donation::new(amount, donor_email.map(str::to_owned))?;

        let (snapshot, completed) = {
            let mut state = lock(&self.state);
            let completed = state.record(donation);
            if let Err(error) = self.store.save(&state) {
                warn!(%error, "failed to persist collective state; continuing in memory");
            }
            (state.clone(), completed)
        };

        if completed {
            info!(
                flowers = snapshot.flowers_completed,
                "collective flower completed"
            );
        }

        self.notify(&snapshot);
        Ok(completed)
    }

    /// Subscribe to state changes. Listeners fire in subscription order.
    pub fn add_listener(
        &self,
        listener: impl Fn(&CollectiveState) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener_id.fetch_add(1, Ordering::Relaxed));
        lock(&self.listeners).push((id, Arc::new(listener)));
        id
    }

    /// Unsubscribe. Removing an unknown or already-removed id is a no-op.
    pub fn remove_listener(&self, id: ListenerId) {
        lock(&self.listeners).retain(|(lid, _)| *lid != id);
    }

    /// Deliver a snapshot to every listener registered at the start of the
    /// pass. The registry is snapshotted first, so a listener that
    /// unsubscribes itself or others mid-pass cannot skip or duplicate
    /// deliveries.
    fn notify(&self, snapshot: &CollectiveState) {
        let pass: Vec<StateListener> = lock(&self.listeners)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in pass {
            listener(snapshot);
        }
    }
}

/// A poisoned lock means a panic elsewhere, not invalid state; the document
/// is only ever mutated through `record`, so recovering the guard is safe.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
