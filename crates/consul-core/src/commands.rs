//! Command types representing every gated registry mutation
//!
//! This module defines the command inventory that serves as the entry point
//! for registry mutations via the `apply()` function. Unrestricted reads are
//! accessors on `Registry` and have no command.

use crate::model::{Address, Bytes32, NodeEndpoint, Role, ServerEndpoint};

/// Command enum processed by `apply()`
///
/// Each variant carries exactly the inputs of one gated operation; the caller
/// address travels alongside the command into `apply()`, which resolves role
/// membership before any mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Revoke Owner from the caller and grant it to the new address
    TransferOwnership { new_owner: Address },

    /// Grant a role to an address; gated by the role's admin
    GrantRole { role: Role, address: Address },

    /// Revoke a role from an address; gated by the role's admin
    RevokeRole { role: Role, address: Address },

    /// Append a new active praetor to the roster
    AddPraetor {
        id: Bytes32,
        server: ServerEndpoint,
        node: NodeEndpoint,
    },

    /// Overwrite the roster slot at `index` with the zero-valued praetor
    RemovePraetor { index: usize },

    /// Flip the slot's active flag to false, other fields untouched
    DeactivatePraetor { index: usize },

    /// Overwrite the command register
    ChangeCommand { new_command: Bytes32 },

    /// Flip the dictator-mode flag
    ToggleDictatorMode,

    /// Store a write-once chunk sequence under a fresh id
    AddPayload { id: Bytes32, chunks: Vec<Vec<u8>> },

    /// Delete the payload entry if present
    RemovePayload { id: Bytes32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_change_command() {
        let cmd = Command::ChangeCommand {
            new_command: Bytes32::hash_of(b"HALT"),
        };

        match cmd {
            Command::ChangeCommand { new_command } => {
                assert_eq!(new_command, Bytes32::hash_of(b"HALT"));
            }
            _ => panic!("Wrong command variant"),
        }
    }

    #[test]
    fn test_command_clone() {
        let cmd1 = Command::AddPayload {
            id: Bytes32::hash_of(b"p"),
            chunks: vec![vec![0x01], vec![0x02]],
        };

        let cmd2 = cmd1.clone();
        assert_eq!(cmd1, cmd2);
    }
}
