//! JSON encoding of the catalog and the load/save helpers built on it.

use catalog_model::{CatalogState, ModelError};

use crate::error::{PersistenceError, Result};
use crate::{RESET_FLAG_KEY, RESET_FLAG_VALUE, STATE_KEY, StorageBackend};

pub fn encode_state(state: &CatalogState) -> Result<String> {
    serde_json::to_string(state).map_err(|source| PersistenceError::Serialization { source })
}

pub fn decode_state(raw: &str) -> Result<CatalogState> {
    serde_json::from_str(raw).map_err(|source| PersistenceError::Deserialization {
        key: STATE_KEY.to_string(),
        source,
    })
}

/// Read the persisted catalog, if any.
///
/// Duplicate ids or an exhausted id counter make the stored catalog
/// unusable. A counter that lags behind the largest id is repaired in place.
pub fn load_state<B: StorageBackend + ?Sized>(backend: &B) -> Result<Option<CatalogState>> {
    let Some(raw) = backend.read(STATE_KEY)? else {
        return Ok(None);
    };
    let mut state = decode_state(&raw)?;

    match state.check_invariants() {
        Ok(()) => {}
        Err(ModelError::StaleNextId { next_id, max_id }) => {
            state
                .repair_next_id()
                .and_then(|_| state.check_invariants())
                .map_err(|source| PersistenceError::InconsistentState { source })?;
            tracing::warn!(
                %next_id,
                %max_id,
                repaired = %state.next_id,
                "stored next id was behind existing products"
            );
        }
        Err(source) => return Err(PersistenceError::InconsistentState { source }),
    }

    tracing::info!(products = state.len(), "loaded catalog from storage");
    Ok(Some(state))
}

pub fn save_state<B: StorageBackend + ?Sized>(backend: &mut B, state: &CatalogState) -> Result<()> {
    let encoded = encode_state(state)?;
    backend.write(STATE_KEY, &encoded)?;
    tracing::debug!(products = state.len(), next_id = %state.next_id, "saved catalog");
    Ok(())
}

pub fn clear_state<B: StorageBackend + ?Sized>(backend: &mut B) -> Result<()> {
    backend.remove(STATE_KEY)
}

/// Ask for the persisted catalog to be discarded on the next load.
pub fn set_reset_flag<B: StorageBackend + ?Sized>(backend: &mut B) -> Result<()> {
    backend.write(RESET_FLAG_KEY, RESET_FLAG_VALUE)
}

pub fn reset_requested<B: StorageBackend + ?Sized>(backend: &B) -> Result<bool> {
    Ok(backend.read(RESET_FLAG_KEY)?.as_deref() == Some(RESET_FLAG_VALUE))
}

/// Consume a pending reset: clears the catalog and the flag.
///
/// Returns true if a reset was pending.
pub fn take_reset_flag<B: StorageBackend + ?Sized>(backend: &mut B) -> Result<bool> {
    if !reset_requested(backend)? {
        return Ok(false);
    }
    clear_state(backend)?;
    backend.remove(RESET_FLAG_KEY)?;
    tracing::info!("reset flag found, cleared stored catalog");
    Ok(true)
}
