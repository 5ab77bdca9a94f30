//! Migration runner
//!
//! Applies embedded migrations with checksums and idempotency: a migration
//! runs at most once, and a recorded migration whose SQL has changed since it
//! was applied is an error, not a re-run.

use rusqlite::{Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::errors::{Result, StoreError};
use crate::migrations::embedded::{get_migrations, Migration};

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in get_migrations() {
        apply_migration(conn, &migration)?;
    }

    Ok(())
}

fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id TEXT PRIMARY KEY,
            checksum TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

fn apply_migration(conn: &mut Connection, migration: &Migration) -> Result<()> {
    let checksum = sql_checksum(migration.sql);

    let recorded: Option<String> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE id = ?1",
            [migration.id],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(expected) = recorded {
        if expected != checksum {
            return Err(StoreError::ChecksumMismatch {
                id: migration.id.to_string(),
                expected,
                actual: checksum,
            });
        }
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(migration.sql)?;
    tx.execute(
        "INSERT INTO schema_version (id, checksum) VALUES (?1, ?2)",
        rusqlite::params![migration.id, checksum],
    )?;
    tx.commit()?;

    debug!(id = migration.id, "migration applied");
    Ok(())
}

/// SHA256 checksum of migration SQL, hex-encoded
fn sql_checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_deterministic() {
        let a = sql_checksum("SELECT 1");
        let b = sql_checksum("SELECT 1");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_apply_migrations_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        apply_migrations(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count as usize, get_migrations().len());
    }

    #[test]
    fn test_checksum_mismatch_detected() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        // Tamper with the recorded checksum of the first migration
        conn.execute(
            "UPDATE schema_version SET checksum = 'tampered' WHERE id = ?1",
            [get_migrations()[0].id],
        )
        .unwrap();

        let err = apply_migrations(&mut conn).unwrap_err();
        assert!(matches!(err, StoreError::ChecksumMismatch { .. }));
    }
}
