//! Bloom Domain Types
//!
//! This crate defines the domain types for the Collective Donation Growth
//! Engine — the shared counter that turns a stream of individual donations
//! into a discrete bloom stage, plus the tier primitives used to classify
//! donors and single gifts.
//!
//! # Key Concepts
//!
//! - **Stage**: integer progress marker (`0..STAGE_MAX`) for the collective
//!   flower's growth step. The stage never rests at `STAGE_MAX`.
//! - **Flower completion**: the event where the stage would reach
//!   `STAGE_MAX`; increments the completed-flower counter and resets the
//!   stage to 0 within the same mutation.
//! - **Donor tier**: classification of a donor's lifetime total.
//! - **Certificate tier**: classification of a single gift's amount into a
//!   named visual theme. Intentionally separate from donor tiers.
//! - **Ledger**: the ordered, append-only list of recorded donations.
//!
//! # Architecture
//!
//! This is a pure types crate with no runtime dependencies. All types
//! implement `Clone`, `Debug`, `Serialize`, `Deserialize`.

#![deny(unsafe_code)]

mod amount;
mod donation;
mod errors;
mod state;
mod tier;

pub use amount::*;
pub use donation::*;
pub use errors::*;
pub use state::*;
pub use tier::*;
