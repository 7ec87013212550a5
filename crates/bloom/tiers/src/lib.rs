//! Bloom Tier Classifier
//!
//! Pure classification functions over donation amounts: donor levels from
//! lifetime totals, certificate tiers from single gifts, and the
//! human-readable impact statement shown on donation feedback and
//! certificates. No state, no I/O.

#![deny(unsafe_code)]

mod classify;
mod impact;

pub use classify::*;
pub use impact::*;
