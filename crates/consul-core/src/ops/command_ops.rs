//! Command register and dictator-mode operations
//!
//! The command register is a single 32-byte value with no history; only the
//! latest value is observable. Dictator mode is inert state: it never feeds
//! back into authorization, external collaborators interpret it.

use tracing::debug;

use crate::errors::Result;
use crate::model::{Address, Bytes32, Role};
use crate::ops::{role_ops, Registry};

/// Unconditionally overwrite the command register
///
/// Controller-gated.
///
/// # Errors
///
/// Returns `PermissionDenied` if `caller` does not hold Controller.
pub fn change_command(state: &mut Registry, caller: Address, new_command: Bytes32) -> Result<()> {
    role_ops::require_role(state, caller, Role::Controller)?;
    state.current_command = new_command;
    debug!(command = %new_command, "command changed");
    Ok(())
}

/// Flip the dictator-mode flag
///
/// Owner-gated. No other observable effect.
///
/// # Errors
///
/// Returns `PermissionDenied` if `caller` does not hold Owner.
pub fn toggle_dictator_mode(state: &mut Registry, caller: Address) -> Result<()> {
    role_ops::require_role(state, caller, Role::Owner)?;
    state.dictator_mode = !state.dictator_mode;
    debug!(enabled = state.dictator_mode, "dictator mode toggled");
    Ok(())
}
