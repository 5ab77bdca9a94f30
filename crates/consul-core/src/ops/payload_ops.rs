//! Payload store operations
//!
//! Payloads are opaque ordered chunk sequences keyed by a 32-byte id.
//! Presence is binary: an id is absent or holds exactly one sequence, stored
//! verbatim. Payloads are write-once until explicitly removed.

use tracing::debug;

use crate::errors::{ConsulError, Result};
use crate::model::{Address, Bytes32, Role};
use crate::ops::{role_ops, Registry};

/// Store a chunk sequence under `id`, verbatim
///
/// Controller-gated. Element order and count are preserved, including
/// zero-length sequences and single-byte chunks.
///
/// # Errors
///
/// Returns `PermissionDenied` if `caller` does not hold Controller, or
/// `PayloadExists` if `id` is already present (stored value untouched).
pub fn add_payload(
    state: &mut Registry,
    caller: Address,
    id: Bytes32,
    chunks: Vec<Vec<u8>>,
) -> Result<()> {
    role_ops::require_role(state, caller, Role::Controller)?;
    if state.payloads.contains_key(&id) {
        return Err(ConsulError::PayloadExists { id });
    }
    debug!(id = %id, chunks = chunks.len(), "payload added");
    state.payloads.insert(id, chunks);
    Ok(())
}

/// Delete the entry for `id` entirely
///
/// Owner-gated. Removing an absent id is a no-op; a subsequent read returns
/// an empty sequence, indistinguishable from never-added.
///
/// # Errors
///
/// Returns `PermissionDenied` if `caller` does not hold Owner.
pub fn remove_payload(state: &mut Registry, caller: Address, id: Bytes32) -> Result<()> {
    role_ops::require_role(state, caller, Role::Owner)?;
    if state.payloads.remove(&id).is_some() {
        debug!(id = %id, "payload removed");
    }
    Ok(())
}
