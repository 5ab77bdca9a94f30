use serde::{Deserialize, Serialize};

use crate::model::Bytes32;

/// Public endpoint of a praetor's server, with its human-readable name record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ServerEndpoint {
    pub ip: String,
    pub port: u16,
    pub ens: String,
}

/// Peer endpoint of a praetor's node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NodeEndpoint {
    pub ip: String,
    pub port: u16,
}

/// A registered network participant record
///
/// Praetors live in an index-addressable roster: indices are stable for the
/// lifetime of an entry. Removal overwrites the slot with the zero-valued
/// praetor, it never compacts the sequence. Deactivation flips `active` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Praetor {
    /// Opaque 32-byte identifier; zero for tombstoned slots
    pub id: Bytes32,
    pub server: ServerEndpoint,
    pub node: NodeEndpoint,
    pub active: bool,
}

impl Praetor {
    /// Create a new active praetor
    pub fn new(id: Bytes32, server: ServerEndpoint, node: NodeEndpoint) -> Self {
        Self {
            id,
            server,
            node,
            active: true,
        }
    }

    /// The tombstone value written over a removed roster slot
    pub fn zeroed() -> Self {
        Self {
            id: Bytes32::ZERO,
            server: ServerEndpoint::default(),
            node: NodeEndpoint::default(),
            active: false,
        }
    }

    /// Whether this slot holds the tombstone value
    pub fn is_zeroed(&self) -> bool {
        *self == Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_praetor_is_active() {
        let praetor = Praetor::new(
            Bytes32::hash_of(b"praetor-1"),
            ServerEndpoint {
                ip: "1.2.3.4".to_string(),
                port: 8080,
                ens: "test.eth".to_string(),
            },
            NodeEndpoint {
                ip: "1.2.3.4".to_string(),
                port: 30303,
            },
        );

        assert!(praetor.active);
        assert!(!praetor.is_zeroed());
        assert_eq!(praetor.server.port, 8080);
        assert_eq!(praetor.node.port, 30303);
    }

    #[test]
    fn test_zeroed_tombstone() {
        let tombstone = Praetor::zeroed();
        assert!(tombstone.id.is_zero());
        assert!(!tombstone.active);
        assert!(tombstone.server.ip.is_empty());
        assert_eq!(tombstone.server.port, 0);
        assert!(tombstone.server.ens.is_empty());
        assert!(tombstone.is_zeroed());
    }

    #[test]
    fn test_deactivated_is_not_zeroed() {
        let mut praetor = Praetor::new(
            Bytes32::hash_of(b"praetor-1"),
            ServerEndpoint::default(),
            NodeEndpoint::default(),
        );
        praetor.active = false;
        assert!(!praetor.is_zeroed());
    }
}
