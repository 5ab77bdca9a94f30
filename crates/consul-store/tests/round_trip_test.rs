// Integration tests for snapshot round-trip determinism
// Save then load must reproduce the in-memory registry exactly, including
// tombstoned roster slots, and a file-backed database must survive reopen.

use consul_core::model::{Address, Bytes32, NodeEndpoint, Role, ServerEndpoint};
use consul_core::{apply, Command, Registry};
use rusqlite::Connection;

fn addr(byte: u8) -> Address {
    Address::new([byte; 20])
}

fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    consul_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn populated_registry() -> Registry {
    let state = Registry::new(addr(1));
    let state = apply(
        state,
        addr(1),
        Command::GrantRole {
            role: Role::Controller,
            address: addr(2),
        },
    )
    .unwrap();
    let state = apply(
        state,
        addr(1),
        Command::AddPraetor {
            id: Bytes32::hash_of(b"praetor-a"),
            server: ServerEndpoint {
                ip: "10.0.0.1".to_string(),
                port: 8080,
                ens: "a.eth".to_string(),
            },
            node: NodeEndpoint {
                ip: "10.0.0.1".to_string(),
                port: 30303,
            },
        },
    )
    .unwrap();
    let state = apply(
        state,
        addr(1),
        Command::AddPraetor {
            id: Bytes32::hash_of(b"praetor-b"),
            server: ServerEndpoint {
                ip: "10.0.0.2".to_string(),
                port: 8081,
                ens: "b.eth".to_string(),
            },
            node: NodeEndpoint {
                ip: "10.0.0.2".to_string(),
                port: 30304,
            },
        },
    )
    .unwrap();
    // Tombstone the first slot so the persisted roster carries a zeroed row
    let state = apply(state, addr(1), Command::RemovePraetor { index: 0 }).unwrap();
    let state = apply(
        state,
        addr(2),
        Command::AddPayload {
            id: Bytes32::hash_of(b"payload"),
            chunks: vec![vec![0x12, 0x34], vec![], vec![0x56]],
        },
    )
    .unwrap();
    let state = apply(
        state,
        addr(2),
        Command::ChangeCommand {
            new_command: Bytes32::hash_of(b"DEPLOY"),
        },
    )
    .unwrap();
    apply(state, addr(1), Command::ToggleDictatorMode).unwrap()
}

#[test]
fn test_save_load_round_trip() {
    // Given: a populated registry persisted to a migrated database
    let mut conn = setup_test_db();
    let registry = populated_registry();
    consul_store::repo::save_registry(&mut conn, &registry).unwrap();

    // When: we hydrate it back
    let loaded = consul_store::repo::load_registry(&conn).unwrap();

    // Then: the snapshot is bit-for-bit equal, tombstone included
    assert_eq!(loaded, registry);
    assert!(loaded.praetors()[0].is_zeroed());
    assert_eq!(loaded.current_command(), Bytes32::hash_of(b"DEPLOY"));
    assert!(loaded.dictator_mode());
}

#[test]
fn test_reload_deterministic() {
    let mut conn = setup_test_db();
    let registry = populated_registry();
    consul_store::repo::save_registry(&mut conn, &registry).unwrap();

    let first = consul_store::repo::load_registry(&conn).unwrap();
    let second = consul_store::repo::load_registry(&conn).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_save_replaces_previous_snapshot() {
    let mut conn = setup_test_db();
    let registry = populated_registry();
    consul_store::repo::save_registry(&mut conn, &registry).unwrap();

    // A later state with the payload removed fully replaces the earlier rows
    let later = apply(
        registry,
        addr(1),
        Command::RemovePayload {
            id: Bytes32::hash_of(b"payload"),
        },
    )
    .unwrap();
    consul_store::repo::save_registry(&mut conn, &later).unwrap();

    let loaded = consul_store::repo::load_registry(&conn).unwrap();
    assert_eq!(loaded, later);
    assert!(loaded.payload(Bytes32::hash_of(b"payload")).is_empty());
}

#[test]
fn test_state_survives_reopen() {
    // File-backed database: closing and reopening the connection is the
    // process-restart case
    let dir = tempfile::TempDir::new().unwrap();
    let db_path = dir.path().join("registry.db");

    let registry = populated_registry();
    {
        let mut conn = Connection::open(&db_path).unwrap();
        consul_store::migrations::apply_migrations(&mut conn).unwrap();
        consul_store::repo::save_registry(&mut conn, &registry).unwrap();
    }

    let conn = Connection::open(&db_path).unwrap();
    let loaded = consul_store::repo::load_registry(&conn).unwrap();
    assert_eq!(loaded, registry);
}

#[test]
fn test_uninitialized_database_is_distinguished() {
    let conn = setup_test_db();
    let err = consul_store::repo::load_registry(&conn).unwrap_err();
    assert!(matches!(err, consul_store::StoreError::NotInitialized));
}
