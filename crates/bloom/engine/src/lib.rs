//! Bloom Collective State Manager
//!
//! The single source of truth for the shared progression record: the bloom
//! stage, the completed-flower counter, and the donation ledger. UI
//! surfaces read snapshots, subscribe to change notifications, and feed
//! accepted payments into [`CollectiveEngine::add_donation`].
//!
//! Storage problems never reach donor-facing callers: a failed write is
//! logged and the in-memory state carries on, a corrupt document is
//! reinitialized on load. The only error `add_donation` returns is a
//! validation rejection, which happens before any mutation.

#![deny(unsafe_code)]

mod engine;
mod store;

pub use engine::*;
pub use store::*;
