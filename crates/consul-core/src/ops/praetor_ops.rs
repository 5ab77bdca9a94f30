//! Praetor roster operations
//!
//! The roster is an index-addressable arena: indices stay stable for the
//! lifetime of an entry. Removal overwrites a slot with the zero-valued
//! praetor and never compacts; deactivation flips `active` only.

use tracing::debug;

use crate::errors::{ConsulError, Result};
use crate::model::{Address, Bytes32, NodeEndpoint, Praetor, Role, ServerEndpoint};
use crate::ops::{role_ops, Registry};

/// Append a new active praetor to the end of the roster
///
/// Owner-gated. No uniqueness check on `id`: duplicate ids may coexist at
/// different indices, and callers needing uniqueness enforce it externally.
///
/// # Errors
///
/// Returns `PermissionDenied` if `caller` does not hold Owner.
pub fn add_praetor(
    state: &mut Registry,
    caller: Address,
    id: Bytes32,
    server: ServerEndpoint,
    node: NodeEndpoint,
) -> Result<()> {
    role_ops::require_role(state, caller, Role::Owner)?;
    state.praetors.push(Praetor::new(id, server, node));
    debug!(index = state.praetors.len() - 1, id = %id, "praetor added");
    Ok(())
}

/// Overwrite the slot at `index` with the zero-valued praetor
///
/// Owner-gated. Roster length and every other slot are untouched. Bounds are
/// validated at execution time.
///
/// # Errors
///
/// Returns `PermissionDenied` if `caller` does not hold Owner, or
/// `PraetorIndexOutOfRange` if `index` is at or beyond the roster length.
pub fn remove_praetor(state: &mut Registry, caller: Address, index: usize) -> Result<()> {
    role_ops::require_role(state, caller, Role::Owner)?;
    check_bounds(state, index)?;
    state.praetors[index] = Praetor::zeroed();
    debug!(index, "praetor removed");
    Ok(())
}

/// Set `active = false` on the slot at `index`, leaving other fields untouched
///
/// Owner-gated and idempotent.
///
/// # Errors
///
/// Returns `PermissionDenied` if `caller` does not hold Owner, or
/// `PraetorIndexOutOfRange` if `index` is at or beyond the roster length.
pub fn deactivate_praetor(state: &mut Registry, caller: Address, index: usize) -> Result<()> {
    role_ops::require_role(state, caller, Role::Owner)?;
    check_bounds(state, index)?;
    state.praetors[index].active = false;
    debug!(index, "praetor deactivated");
    Ok(())
}

fn check_bounds(state: &Registry, index: usize) -> Result<()> {
    let len = state.praetors.len();
    if index >= len {
        return Err(ConsulError::PraetorIndexOutOfRange { index, len });
    }
    Ok(())
}
