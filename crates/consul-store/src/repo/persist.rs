//! Transactional snapshot persistence
//!
//! Writes the whole registry state in one transaction: a failed save leaves
//! the previous committed snapshot intact.

use consul_core::model::Role;
use consul_core::Registry;
use rusqlite::Connection;
use tracing::debug;

use crate::errors::{Result, StoreError};

/// Persist the full registry snapshot
///
/// Replaces the role membership, roster and payload rows and upserts the
/// singleton registry row, all inside a single transaction.
pub fn save_registry(conn: &mut Connection, registry: &Registry) -> Result<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM role_members", [])?;
    for role in Role::ALL {
        for address in registry.roles().members_of(role) {
            tx.execute(
                "INSERT INTO role_members (role, address) VALUES (?1, ?2)",
                rusqlite::params![role.as_str(), address.to_hex()],
            )?;
        }
    }

    tx.execute("DELETE FROM praetors", [])?;
    for (idx, praetor) in registry.praetors().iter().enumerate() {
        tx.execute(
            "INSERT INTO praetors (idx, id, server_ip, server_port, server_ens, node_ip, node_port, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                idx as i64,
                praetor.id.to_hex(),
                praetor.server.ip,
                praetor.server.port,
                praetor.server.ens,
                praetor.node.ip,
                praetor.node.port,
                if praetor.active { 1 } else { 0 },
            ],
        )?;
    }

    tx.execute("DELETE FROM payloads", [])?;
    for (id, chunks) in registry.payload_entries() {
        let hex_chunks: Vec<String> = chunks.iter().map(hex::encode).collect();
        let chunks_json = serde_json::to_string(&hex_chunks)
            .map_err(|e| StoreError::corrupt(format!("payload chunk encoding: {e}")))?;
        tx.execute(
            "INSERT INTO payloads (id, chunks_json) VALUES (?1, ?2)",
            rusqlite::params![id.to_hex(), chunks_json],
        )?;
    }

    tx.execute(
        "INSERT INTO registry (id, current_command, dictator_mode) VALUES (0, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET
            current_command = excluded.current_command,
            dictator_mode = excluded.dictator_mode",
        rusqlite::params![
            registry.current_command().to_hex(),
            if registry.dictator_mode() { 1 } else { 0 },
        ],
    )?;

    tx.commit()?;
    debug!(
        praetors = registry.praetors().len(),
        "registry snapshot saved"
    );
    Ok(())
}
