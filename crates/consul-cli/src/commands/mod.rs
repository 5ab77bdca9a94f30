//! CLI command implementations
//!
//! Each area module exposes `execute(args)`. Mutating subcommands share one
//! shape: open the database, hydrate the registry, apply a single gated
//! command as the given caller, persist the new snapshot. A core error aborts
//! before any write, so the on-disk state only ever moves whole-call.

pub mod command;
pub mod dictator;
pub mod init;
pub mod payload;
pub mod praetor;
pub mod role;
pub mod state;

use std::error::Error;
use std::path::Path;

use consul_core::model::Address;
use consul_core::Registry;

/// Open the registry database, creating parent directories, and migrate it
pub(crate) fn open_store(db: &str) -> Result<rusqlite::Connection, Box<dyn Error>> {
    if let Some(parent) = Path::new(db).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut conn = consul_store::db::open(db)?;
    consul_store::db::configure(&conn)?;
    consul_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}

/// Load, apply one gated command as `caller`, persist the new state
pub(crate) fn run_gated(
    db: &str,
    caller: &str,
    cmd: consul_core::Command,
) -> Result<(), Box<dyn Error>> {
    let caller: Address = caller.parse()?;
    let mut conn = open_store(db)?;
    let state = consul_store::repo::load_registry(&conn)?;
    let new_state = consul_core::apply(state, caller, cmd)?;
    consul_store::repo::save_registry(&mut conn, &new_state)?;
    Ok(())
}

/// Load the registry for an unrestricted read
pub(crate) fn load(db: &str) -> Result<Registry, Box<dyn Error>> {
    let conn = open_store(db)?;
    Ok(consul_store::repo::load_registry(&conn)?)
}
