//! Collective progression state
//!
//! **CRITICAL INVARIANT**: the stage advances by exactly one per accepted
//! donation and wraps to 0 with a completed-flower increment whenever it
//! would reach `STAGE_MAX`. There is no observable rest point where
//! `current_stage == STAGE_MAX`, and no donation is dropped or counted
//! twice. The wrap and the counter increment happen inside the same
//! `record` call.

use serde::{Deserialize, Serialize};

use crate::{Amount, Donation};

/// Number of growth stages a flower passes through before it blooms
pub const STAGE_MAX: u8 = 10;

/// The shared progression record for the whole community
///
/// One document, read and written as a whole unit. Mutated exclusively
/// through the engine's `add_donation`; everything else takes snapshots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectiveState {
    /// Current growth stage, `0..STAGE_MAX` at every rest point
    pub current_stage: u8,
    /// Completed flowers, monotonically non-decreasing
    pub flowers_completed: u64,
    /// Chronological, append-only donation ledger.
    ///
    /// Retained in full across flower completions for auditability; stage
    /// resets never prune history.
    pub donations: Vec<Donation>,
}

impl CollectiveState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a donation and advance the stage, wrapping on completion.
    ///
    /// Returns `true` exactly when this donation completed a flower.
    pub fn record(&mut self, donation: Donation) -> bool {
        self.donations.push(donation);
        self.current_stage += 1;
        if self.current_stage >= STAGE_MAX {
            self.current_stage = 0;
            self.flowers_completed += 1;
            return true;
        }
        false
    }

    /// Sum of every recorded donation, the donor-tier input
    pub fn lifetime_total(&self) -> Amount {
        self.donations
            .iter()
            .fold(Amount::zero(), |acc, d| acc.saturating_add(d.amount))
    }

    pub fn donation_count(&self) -> usize {
        self.donations.len()
    }

    /// Structural validity of a loaded document.
    ///
    /// A document resting at or past `STAGE_MAX`, or holding a zero-amount
    /// donation, cannot have been produced by `record` and is treated as
    /// corrupt by the store.
    pub fn is_consistent(&self) -> bool {
        self.current_stage < STAGE_MAX && self.donations.iter().all(|d| !d.amount.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donation(major: u64) -> Donation {
        Donation::new(Amount::from_major(major), None).unwrap()
    }

    #[test]
    fn test_record_advances_stage() {
        let mut state = CollectiveState::new();
        assert!(!state.record(donation(10)));
        assert_eq!(state.current_stage, 1);
        assert_eq!(state.flowers_completed, 0);
        assert_eq!(state.donation_count(), 1);
    }

    #[test]
    fn test_tenth_donation_completes_flower() {
        let mut state = CollectiveState::new();
        for _ in 0..9 {
            assert!(!state.record(donation(5)));
        }
        assert_eq!(state.current_stage, 9);

        assert!(state.record(donation(5)));
        assert_eq!(state.current_stage, 0);
        assert_eq!(state.flowers_completed, 1);
        assert_eq!(state.donation_count(), 10);
    }

    #[test]
    fn test_stage_never_rests_at_max() {
        let mut state = CollectiveState::new();
        for n in 1..=95 {
            state.record(donation(1));
            assert!(state.current_stage < STAGE_MAX);
            assert_eq!(state.current_stage as u64, n % STAGE_MAX as u64);
            assert_eq!(state.flowers_completed, n / STAGE_MAX as u64);
        }
    }

    #[test]
    fn test_ledger_retained_across_completions() {
        let mut state = CollectiveState::new();
        for _ in 0..25 {
            state.record(donation(2));
        }
        assert_eq!(state.flowers_completed, 2);
        assert_eq!(state.donation_count(), 25);
        assert_eq!(state.lifetime_total(), Amount::from_major(50));
    }

    #[test]
    fn test_consistency_check() {
        let mut state = CollectiveState::new();
        assert!(state.is_consistent());

        state.record(donation(10));
        assert!(state.is_consistent());

        state.current_stage = STAGE_MAX;
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut state = CollectiveState::new();
        for _ in 0..12 {
            state.record(donation(35));
        }
        let json = serde_json::to_string_pretty(&state).unwrap();
        let back: CollectiveState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
