//! Role hierarchy operations and the authorization guard
//!
//! Every gated mutation across the registry starts with `require_role`. The
//! role-to-admin relation lives in `RoleTable`, so the guard is data-driven
//! rather than branching per operation.

use tracing::debug;

use crate::errors::{ConsulError, Result};
use crate::model::{Address, Role};
use crate::ops::Registry;

/// Authorization guard invoked at the top of every gated mutation
///
/// # Errors
///
/// Returns `PermissionDenied` naming the required role when `caller` does not
/// hold `role`. The call makes no state change.
pub fn require_role(state: &Registry, caller: Address, role: Role) -> Result<()> {
    if state.roles.has_role(role, caller) {
        Ok(())
    } else {
        Err(ConsulError::PermissionDenied { role })
    }
}

/// Grant `role` to `address`
///
/// Gated by the admin of `role`. Granting to an existing member is a no-op,
/// not an error.
///
/// # Errors
///
/// Returns `PermissionDenied` if `caller` does not hold the admin role.
pub fn grant_role(
    state: &mut Registry,
    caller: Address,
    role: Role,
    address: Address,
) -> Result<()> {
    require_role(state, caller, state.roles.admin_of(role))?;
    if state.roles.grant(role, address) {
        debug!(role = %role, address = %address, "role granted");
    }
    Ok(())
}

/// Revoke `role` from `address`
///
/// Gated by the admin of `role`. Revoking from a non-member is a no-op, not
/// an error.
///
/// # Errors
///
/// Returns `PermissionDenied` if `caller` does not hold the admin role.
pub fn revoke_role(
    state: &mut Registry,
    caller: Address,
    role: Role,
    address: Address,
) -> Result<()> {
    require_role(state, caller, state.roles.admin_of(role))?;
    if state.roles.revoke(role, address) {
        debug!(role = %role, address = %address, "role revoked");
    }
    Ok(())
}

/// Transfer Owner from the caller to `new_owner`
///
/// Atomically revokes Owner from the calling address and grants it to
/// `new_owner`. Revocation happens first, so transferring to oneself leaves
/// the caller an Owner.
///
/// # Errors
///
/// Returns `PermissionDenied` if `caller` does not hold Owner.
pub fn transfer_ownership(state: &mut Registry, caller: Address, new_owner: Address) -> Result<()> {
    require_role(state, caller, Role::Owner)?;
    state.roles.revoke(Role::Owner, caller);
    state.roles.grant(Role::Owner, new_owner);
    debug!(from = %caller, to = %new_owner, "ownership transferred");
    Ok(())
}
