//! Payload store commands

use clap::{Args, Subcommand};
use consul_core::model::Bytes32;
use consul_core::Command;

#[derive(Debug, Args)]
pub struct PayloadArgs {
    #[command(subcommand)]
    pub command: PayloadCommand,
}

#[derive(Debug, Subcommand)]
pub enum PayloadCommand {
    /// Store a write-once chunk sequence (controller-gated)
    Add(AddArgs),
    /// Delete a payload entry (owner-gated)
    Remove(RemoveArgs),
    /// Print a payload's chunks as hex, one per line
    Get(GetArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub caller: String,

    /// 32-byte payload id as hex
    #[arg(long)]
    pub id: String,

    /// Chunk as hex; repeat to build the ordered sequence
    #[arg(long = "chunk")]
    pub chunks: Vec<String>,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(long)]
    pub caller: String,

    /// 32-byte payload id as hex
    #[arg(long)]
    pub id: String,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// 32-byte payload id as hex
    #[arg(long)]
    pub id: String,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

pub fn execute(args: PayloadArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        PayloadCommand::Add(args) => {
            let id: Bytes32 = args.id.parse()?;
            let mut chunks = Vec::with_capacity(args.chunks.len());
            for chunk_hex in &args.chunks {
                let stripped = chunk_hex.strip_prefix("0x").unwrap_or(chunk_hex);
                chunks.push(hex::decode(stripped)?);
            }
            let count = chunks.len();
            super::run_gated(&args.db, &args.caller, Command::AddPayload { id, chunks })?;
            println!("Payload {} added ({} chunks)", id, count);
            Ok(())
        }
        PayloadCommand::Remove(args) => {
            let id: Bytes32 = args.id.parse()?;
            super::run_gated(&args.db, &args.caller, Command::RemovePayload { id })?;
            println!("Payload {} removed", id);
            Ok(())
        }
        PayloadCommand::Get(args) => {
            let id: Bytes32 = args.id.parse()?;
            let registry = super::load(&args.db)?;
            for chunk in registry.payload(id) {
                println!("0x{}", hex::encode(chunk));
            }
            Ok(())
        }
    }
}
