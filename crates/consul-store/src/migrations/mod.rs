//! Embedded SQL migrations
//!
//! Migrations are compiled into the binary and applied idempotently with
//! checksum verification.

pub mod embedded;
pub mod runner;

pub use runner::apply_migrations;
