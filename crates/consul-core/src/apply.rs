//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the canonical entry point for
//! atomic registry mutations.
//!
//! ## Atomicity Contract
//!
//! The `apply()` function guarantees:
//! - **All-or-nothing**: Either the entire command succeeds and returns a new
//!   valid state, or it fails with a typed error and no mutation has occurred
//! - **No panics**: Unauthorized callers, out-of-range indices and duplicate
//!   payload ids return typed errors
//! - **Authorization first**: role membership is resolved against the state
//!   before any component is touched
//!
//! ## Example
//!
//! ```
//! use consul_core::{apply, Command, Registry};
//! use consul_core::model::{Address, Bytes32};
//!
//! let deployer = Address::new([1; 20]);
//! let state = Registry::new(deployer);
//!
//! let cmd = Command::ChangeCommand {
//!     new_command: Bytes32::hash_of(b"HALT"),
//! };
//! let new_state = apply(state, deployer, cmd).unwrap();
//! assert_eq!(new_state.current_command(), Bytes32::hash_of(b"HALT"));
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::model::Address;
use crate::ops::{command_ops, payload_ops, praetor_ops, role_ops, Registry};

/// Apply a command to the registry as `caller`, returning the new state
///
/// Takes ownership of the current state, resolves the caller's role
/// membership, executes the command atomically and returns either a new valid
/// state or an error.
///
/// # Atomicity Guarantee
///
/// If this function returns `Ok(new_state)`, the command fully committed. If
/// it returns `Err`, no mutation occurred: every operation validates before
/// its first write, so a caller holding a clone of the previous state can
/// treat it as the current one.
///
/// # Errors
///
/// Returns `PermissionDenied` when `caller` lacks the gating role,
/// `PraetorIndexOutOfRange` for roster indices at or beyond the current
/// length, and `PayloadExists` for duplicate payload ids. See `ConsulError`.
///
/// # Example
///
/// ```
/// use consul_core::{apply, Command, Registry};
/// use consul_core::model::Address;
///
/// let deployer = Address::new([1; 20]);
/// let outsider = Address::new([9; 20]);
/// let state = Registry::new(deployer);
///
/// // Outsiders hold no role; the call is denied before any mutation
/// let result = apply(state, outsider, Command::ToggleDictatorMode);
/// assert!(result.is_err());
/// ```
pub fn apply(mut state: Registry, caller: Address, cmd: Command) -> Result<Registry> {
    match cmd {
        Command::TransferOwnership { new_owner } => {
            role_ops::transfer_ownership(&mut state, caller, new_owner)?;
            Ok(state)
        }

        Command::GrantRole { role, address } => {
            role_ops::grant_role(&mut state, caller, role, address)?;
            Ok(state)
        }

        Command::RevokeRole { role, address } => {
            role_ops::revoke_role(&mut state, caller, role, address)?;
            Ok(state)
        }

        Command::AddPraetor { id, server, node } => {
            praetor_ops::add_praetor(&mut state, caller, id, server, node)?;
            Ok(state)
        }

        Command::RemovePraetor { index } => {
            praetor_ops::remove_praetor(&mut state, caller, index)?;
            Ok(state)
        }

        Command::DeactivatePraetor { index } => {
            praetor_ops::deactivate_praetor(&mut state, caller, index)?;
            Ok(state)
        }

        Command::ChangeCommand { new_command } => {
            command_ops::change_command(&mut state, caller, new_command)?;
            Ok(state)
        }

        Command::ToggleDictatorMode => {
            command_ops::toggle_dictator_mode(&mut state, caller)?;
            Ok(state)
        }

        Command::AddPayload { id, chunks } => {
            payload_ops::add_payload(&mut state, caller, id, chunks)?;
            Ok(state)
        }

        Command::RemovePayload { id } => {
            payload_ops::remove_payload(&mut state, caller, id)?;
            Ok(state)
        }
    }
}
