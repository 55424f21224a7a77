//! Parameter persistence interface.

use crate::config::ParameterSnapshot;
use crate::error::StorageError;

/// Non-volatile storage for the editable parameters.
///
/// Failures are never fatal to the controller: on load it falls back to the
/// configured defaults, on persist it keeps the in-memory values and tells
/// the display.
pub trait ParameterStore {
    /// Read the stored parameters.
    fn load(&mut self) -> Result<ParameterSnapshot, StorageError>;

    /// Write all parameters at once.
    fn persist(&mut self, snapshot: &ParameterSnapshot) -> Result<(), StorageError>;
}

impl<T: ParameterStore + ?Sized> ParameterStore for &mut T {
    fn load(&mut self) -> Result<ParameterSnapshot, StorageError> {
        (**self).load()
    }

    fn persist(&mut self, snapshot: &ParameterSnapshot) -> Result<(), StorageError> {
        (**self).persist(snapshot)
    }
}

/// RAM-only store, for boards without non-volatile memory and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    stored: Option<ParameterSnapshot>,
    writes: u32,
}

impl MemoryStore {
    /// Empty store; `load` fails until something is persisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `snapshot`.
    pub fn with_snapshot(snapshot: ParameterSnapshot) -> Self {
        Self {
            stored: Some(snapshot),
            writes: 0,
        }
    }

    /// Last persisted snapshot.
    pub fn stored(&self) -> Option<&ParameterSnapshot> {
        self.stored.as_ref()
    }

    /// Number of successful `persist` calls.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl ParameterStore for MemoryStore {
    fn load(&mut self) -> Result<ParameterSnapshot, StorageError> {
        self.stored
            .ok_or_else(|| StorageError::Io(crate::error::message("nothing stored")))
    }

    fn persist(&mut self, snapshot: &ParameterSnapshot) -> Result<(), StorageError> {
        self.stored = Some(*snapshot);
        self.writes += 1;
        Ok(())
    }
}
