use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Address, Bytes32, Praetor, Role, RoleTable};

/// The single registry state
///
/// All four sub-components live here: role hierarchy, praetor roster, command
/// register (plus dictator flag) and payload store. The registry is owned
/// exclusively by its caller; mutations go through the `ops` modules, which
/// guard with `role_ops::require_role` and validate before the first write so
/// a returned error implies the state is unchanged. Ordered maps keep
/// iteration and serialized state deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Role memberships and the role-to-admin hierarchy
    pub(crate) roles: RoleTable,
    /// Index-stable roster; removal tombstones a slot, never compacts
    pub(crate) praetors: Vec<Praetor>,
    /// The current command register
    pub(crate) current_command: Bytes32,
    /// Owner-toggled flag interpreted by external collaborators only
    pub(crate) dictator_mode: bool,
    /// Write-once keyed chunk sequences
    pub(crate) payloads: BTreeMap<Bytes32, Vec<Vec<u8>>>,
}

impl Registry {
    /// Create the genesis state
    ///
    /// The deploying address holds Owner and Controller; the command register
    /// starts at the digest of `"REPORT"`; dictator mode starts off.
    pub fn new(deployer: Address) -> Self {
        let mut roles = RoleTable::new();
        roles.grant(Role::Owner, deployer);
        roles.grant(Role::Controller, deployer);
        Self {
            roles,
            praetors: Vec::new(),
            current_command: Self::genesis_command(),
            dictator_mode: false,
            payloads: BTreeMap::new(),
        }
    }

    /// Digest of the literal string `"REPORT"`, the initial command value
    pub fn genesis_command() -> Bytes32 {
        Bytes32::hash_of(b"REPORT")
    }

    /// Rebuild a registry from persisted parts
    ///
    /// Used by the persistence hydration path; performs no gating.
    pub fn from_parts(
        roles: RoleTable,
        praetors: Vec<Praetor>,
        current_command: Bytes32,
        dictator_mode: bool,
        payloads: BTreeMap<Bytes32, Vec<Vec<u8>>>,
    ) -> Self {
        Self {
            roles,
            praetors,
            current_command,
            dictator_mode,
            payloads,
        }
    }

    // ===== Unrestricted reads =====

    /// Pure membership test, no side effect
    pub fn has_role(&self, role: Role, address: Address) -> bool {
        self.roles.has_role(role, address)
    }

    /// The role empowered to grant and revoke `role`
    pub fn role_admin(&self, role: Role) -> Role {
        self.roles.admin_of(role)
    }

    /// The role table, for persistence and inspection
    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    /// The full roster, including zeroed/removed slots
    pub fn praetors(&self) -> &[Praetor] {
        &self.praetors
    }

    /// The current command register value
    pub fn current_command(&self) -> Bytes32 {
        self.current_command
    }

    /// The dictator-mode flag
    pub fn dictator_mode(&self) -> bool {
        self.dictator_mode
    }

    /// Stored chunk sequence for `id`
    ///
    /// Empty for an absent id, indistinguishable from never-added.
    pub fn payload(&self, id: Bytes32) -> &[Vec<u8>] {
        self.payloads.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All stored payload entries, for persistence and inspection
    pub fn payload_entries(&self) -> impl Iterator<Item = (&Bytes32, &Vec<Vec<u8>>)> {
        self.payloads.iter()
    }
}
