//! Role hierarchy model
//!
//! Two tiers: Owner administers itself and Controller. Membership is a
//! general set per role; the role-to-admin relation is data held in the
//! `RoleTable`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConsulError;
use crate::model::Address;

/// A role in the two-tier hierarchy
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Hierarchy root; administers itself and Controller
    Owner,
    /// Authorized to change the command register and add payloads
    Controller,
}

impl Role {
    /// Every role, in hierarchy order
    pub const ALL: [Role; 2] = [Role::Owner, Role::Controller];

    /// Name used in caller-visible permission-denied reasons
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Controller => "controller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ConsulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "owner" => Ok(Role::Owner),
            "controller" => Ok(Role::Controller),
            _ => Err(ConsulError::UnknownRole {
                name: s.to_string(),
            }),
        }
    }
}

/// Membership sets plus the role-to-admin map, fixed at construction
///
/// Ordered maps keep membership iteration and serialized state deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTable {
    /// Addresses holding each role
    members: BTreeMap<Role, BTreeSet<Address>>,
    /// The role empowered to grant and revoke each role
    admins: BTreeMap<Role, Role>,
}

impl RoleTable {
    /// Create the fixed hierarchy: Owner admins itself, Owner admins Controller
    pub fn new() -> Self {
        let mut members = BTreeMap::new();
        let mut admins = BTreeMap::new();
        for role in Role::ALL {
            members.insert(role, BTreeSet::new());
            admins.insert(role, Role::Owner);
        }
        Self { members, admins }
    }

    /// Pure membership test
    pub fn has_role(&self, role: Role, address: Address) -> bool {
        self.members
            .get(&role)
            .map_or(false, |set| set.contains(&address))
    }

    /// The role empowered to grant and revoke `role`
    pub fn admin_of(&self, role: Role) -> Role {
        // admins holds an entry for every Role at construction
        self.admins.get(&role).copied().unwrap_or(Role::Owner)
    }

    /// Add `address` to `role`'s membership set
    ///
    /// Returns `true` if the address was newly added; adding an existing
    /// member is a no-op.
    pub fn grant(&mut self, role: Role, address: Address) -> bool {
        self.members.entry(role).or_default().insert(address)
    }

    /// Remove `address` from `role`'s membership set
    ///
    /// Returns `true` if the address was a member; removing a non-member is a
    /// no-op.
    pub fn revoke(&mut self, role: Role, address: Address) -> bool {
        self.members
            .get_mut(&role)
            .map_or(false, |set| set.remove(&address))
    }

    /// Addresses holding `role`, in sorted order
    pub fn members_of(&self, role: Role) -> Vec<Address> {
        self.members
            .get(&role)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn test_fixed_admin_hierarchy() {
        let table = RoleTable::new();
        assert_eq!(table.admin_of(Role::Owner), Role::Owner);
        assert_eq!(table.admin_of(Role::Controller), Role::Owner);
    }

    #[test]
    fn test_grant_and_revoke() {
        let mut table = RoleTable::new();
        assert!(!table.has_role(Role::Controller, addr(1)));

        assert!(table.grant(Role::Controller, addr(1)));
        assert!(table.has_role(Role::Controller, addr(1)));

        // Re-granting an existing member is a no-op
        assert!(!table.grant(Role::Controller, addr(1)));
        assert!(table.has_role(Role::Controller, addr(1)));

        assert!(table.revoke(Role::Controller, addr(1)));
        assert!(!table.has_role(Role::Controller, addr(1)));

        // Revoking a non-member is a no-op
        assert!(!table.revoke(Role::Controller, addr(1)));
    }

    #[test]
    fn test_membership_is_per_role() {
        let mut table = RoleTable::new();
        table.grant(Role::Owner, addr(1));
        assert!(table.has_role(Role::Owner, addr(1)));
        assert!(!table.has_role(Role::Controller, addr(1)));
    }

    #[test]
    fn test_members_of_sorted() {
        let mut table = RoleTable::new();
        table.grant(Role::Controller, addr(9));
        table.grant(Role::Controller, addr(2));
        table.grant(Role::Controller, addr(5));
        assert_eq!(
            table.members_of(Role::Controller),
            vec![addr(2), addr(5), addr(9)]
        );
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("owner".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!("Controller".parse::<Role>().unwrap(), Role::Controller);
        assert!(matches!(
            "praetor".parse::<Role>(),
            Err(ConsulError::UnknownRole { .. })
        ));
    }
}
