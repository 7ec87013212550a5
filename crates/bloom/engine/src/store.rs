//! State persistence — save and load the collective document across
//! sessions.
//!
//! Provides the `StateStore` trait, a `JsonFileStore` that keeps the
//! document as a single JSON file, and a `MemoryStore` for tests and
//! embedding.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bloom_types::CollectiveState;

/// Errors from the persisted store.
///
/// These never propagate to donor-facing callers; the engine catches them
/// and reports through the log side channel.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("state serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("persisted state failed validation: {0}")]
    Corrupt(String),

    #[error("store lock poisoned")]
    Lock,
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for collective-state persistence across sessions.
///
/// The document is always read and written as a whole unit; there are no
/// partial-field writes, so an interrupted save can never leave torn state
/// behind.
pub trait StateStore {
    /// Persist the full state document.
    fn save(&self, state: &CollectiveState) -> StoreResult<()>;

    /// Load the persisted document.
    ///
    /// Returns `Ok(None)` if nothing has been persisted yet and
    /// `Err(StoreError::Corrupt)` if a document exists but fails schema or
    /// invariant validation.
    fn load(&self) -> StoreResult<Option<CollectiveState>>;
}

/// JSON-file based state persistence.
///
/// Stores the state as a single JSON document. Writes are atomic (write to
/// `.tmp`, then rename) to prevent corruption from interrupted writes.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a new JSON file store at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn save(&self, state: &CollectiveState) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(state)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Atomic write: write to .tmp then rename
        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn load(&self) -> StoreResult<Option<CollectiveState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let state: CollectiveState = serde_json::from_str(&contents)
            .map_err(|e| StoreError::Corrupt(format!("deserialization failed: {e}")))?;

        if !state.is_consistent() {
            return Err(StoreError::Corrupt(format!(
                "invariant violation: stage {} with {} donations",
                state.current_stage,
                state.donation_count()
            )));
        }

        Ok(Some(state))
    }
}

/// In-memory state persistence (for tests and ephemeral embedding).
pub struct MemoryStore {
    slot: Mutex<Option<CollectiveState>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Create an in-memory store pre-seeded with a document.
    pub fn with_state(state: CollectiveState) -> Self {
        Self {
            slot: Mutex::new(Some(state)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStore {
    fn save(&self, state: &CollectiveState) -> StoreResult<()> {
        let mut slot = self.slot.lock().map_err(|_| StoreError::Lock)?;
        *slot = Some(state.clone());
        Ok(())
    }

    fn load(&self) -> StoreResult<Option<CollectiveState>> {
        let slot = self.slot.lock().map_err(|_| StoreError::Lock)?;
        Ok(slot.clone())
    }
}
