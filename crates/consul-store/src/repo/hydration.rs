//! Registry hydration
//!
//! Reloads a persisted snapshot into the in-memory `Registry`. Hydration is
//! deterministic: a persisted-then-loaded registry compares equal to the
//! original.

use std::collections::BTreeMap;

use consul_core::model::{
    Address, Bytes32, NodeEndpoint, Praetor, Role, RoleTable, ServerEndpoint,
};
use consul_core::Registry;
use rusqlite::{Connection, OptionalExtension};

use crate::errors::{Result, StoreError};

/// Load the full registry snapshot
///
/// # Errors
///
/// Returns `NotInitialized` when the singleton registry row is absent, and
/// `Corrupt` when persisted rows cannot be decoded (bad hex, roster index
/// gaps, malformed chunk JSON).
pub fn load_registry(conn: &Connection) -> Result<Registry> {
    let row: Option<(String, i64)> = conn
        .query_row(
            "SELECT current_command, dictator_mode FROM registry WHERE id = 0",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;
    let (command_hex, dictator) = row.ok_or(StoreError::NotInitialized)?;

    let current_command: Bytes32 = command_hex
        .parse()
        .map_err(|e| StoreError::corrupt(format!("registry.current_command: {e}")))?;

    let roles = load_roles(conn)?;
    let praetors = load_praetors(conn)?;
    let payloads = load_payloads(conn)?;

    Ok(Registry::from_parts(
        roles,
        praetors,
        current_command,
        dictator != 0,
        payloads,
    ))
}

fn load_roles(conn: &Connection) -> Result<RoleTable> {
    let mut stmt = conn.prepare("SELECT role, address FROM role_members")?;
    let rows: Vec<(String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<std::result::Result<_, _>>()?;

    let mut roles = RoleTable::new();
    for (role_name, address_hex) in rows {
        let role: Role = role_name
            .parse()
            .map_err(|e| StoreError::corrupt(format!("role_members.role: {e}")))?;
        let address: Address = address_hex
            .parse()
            .map_err(|e| StoreError::corrupt(format!("role_members.address: {e}")))?;
        roles.grant(role, address);
    }
    Ok(roles)
}

fn load_praetors(conn: &Connection) -> Result<Vec<Praetor>> {
    let mut stmt = conn.prepare(
        "SELECT idx, id, server_ip, server_port, server_ens, node_ip, node_port, active
         FROM praetors ORDER BY idx",
    )?;
    let rows: Vec<(i64, String, String, u16, String, String, u16, i64)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
            ))
        })?
        .collect::<std::result::Result<_, _>>()?;

    let mut praetors = Vec::with_capacity(rows.len());
    for (idx, id_hex, server_ip, server_port, server_ens, node_ip, node_port, active) in rows {
        // The roster is dense: row indices must match positions exactly
        if idx as usize != praetors.len() {
            return Err(StoreError::corrupt(format!(
                "praetor roster has an index gap at {idx}"
            )));
        }
        let id: Bytes32 = id_hex
            .parse()
            .map_err(|e| StoreError::corrupt(format!("praetors.id: {e}")))?;
        praetors.push(Praetor {
            id,
            server: ServerEndpoint {
                ip: server_ip,
                port: server_port,
                ens: server_ens,
            },
            node: NodeEndpoint {
                ip: node_ip,
                port: node_port,
            },
            active: active != 0,
        });
    }
    Ok(praetors)
}

fn load_payloads(conn: &Connection) -> Result<BTreeMap<Bytes32, Vec<Vec<u8>>>> {
    let mut stmt = conn.prepare("SELECT id, chunks_json FROM payloads")?;
    let rows: Vec<(String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<std::result::Result<_, _>>()?;

    let mut payloads = BTreeMap::new();
    for (id_hex, chunks_json) in rows {
        let id: Bytes32 = id_hex
            .parse()
            .map_err(|e| StoreError::corrupt(format!("payloads.id: {e}")))?;
        let hex_chunks: Vec<String> = serde_json::from_str(&chunks_json)
            .map_err(|e| StoreError::corrupt(format!("payloads.chunks_json: {e}")))?;
        let mut chunks = Vec::with_capacity(hex_chunks.len());
        for chunk_hex in hex_chunks {
            let chunk = hex::decode(&chunk_hex)
                .map_err(|e| StoreError::corrupt(format!("payload chunk hex: {e}")))?;
            chunks.push(chunk);
        }
        payloads.insert(id, chunks);
    }
    Ok(payloads)
}
