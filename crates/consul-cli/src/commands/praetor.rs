//! Praetor roster commands

use clap::{Args, Subcommand};
use consul_core::model::{Bytes32, NodeEndpoint, ServerEndpoint};
use consul_core::Command;

#[derive(Debug, Args)]
pub struct PraetorArgs {
    #[command(subcommand)]
    pub command: PraetorCommand,
}

#[derive(Debug, Subcommand)]
pub enum PraetorCommand {
    /// Append a new active praetor to the roster
    Add(AddArgs),
    /// Tombstone the roster slot at an index
    Remove(IndexArgs),
    /// Deactivate the roster slot at an index
    Deactivate(IndexArgs),
    /// Print the full roster, zeroed slots included
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub caller: String,

    /// 32-byte praetor id as hex
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub server_ip: String,

    #[arg(long)]
    pub server_port: u16,

    /// Human-readable name record for the server endpoint
    #[arg(long, default_value = "")]
    pub server_ens: String,

    #[arg(long)]
    pub node_ip: String,

    #[arg(long)]
    pub node_port: u16,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    #[arg(long)]
    pub caller: String,

    /// Roster index of the target slot
    #[arg(long)]
    pub index: usize,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

pub fn execute(args: PraetorArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        PraetorCommand::Add(args) => {
            let id: Bytes32 = args.id.parse()?;
            let cmd = Command::AddPraetor {
                id,
                server: ServerEndpoint {
                    ip: args.server_ip,
                    port: args.server_port,
                    ens: args.server_ens,
                },
                node: NodeEndpoint {
                    ip: args.node_ip,
                    port: args.node_port,
                },
            };
            super::run_gated(&args.db, &args.caller, cmd)?;
            println!("Praetor {} added", id);
            Ok(())
        }
        PraetorCommand::Remove(args) => {
            super::run_gated(
                &args.db,
                &args.caller,
                Command::RemovePraetor { index: args.index },
            )?;
            println!("Praetor at index {} removed", args.index);
            Ok(())
        }
        PraetorCommand::Deactivate(args) => {
            super::run_gated(
                &args.db,
                &args.caller,
                Command::DeactivatePraetor { index: args.index },
            )?;
            println!("Praetor at index {} deactivated", args.index);
            Ok(())
        }
        PraetorCommand::List(args) => {
            let registry = super::load(&args.db)?;
            for (idx, praetor) in registry.praetors().iter().enumerate() {
                println!(
                    "[{}] id={} active={} server={}:{} ens={} node={}:{}",
                    idx,
                    praetor.id,
                    praetor.active,
                    praetor.server.ip,
                    praetor.server.port,
                    praetor.server.ens,
                    praetor.node.ip,
                    praetor.node.port,
                );
            }
            Ok(())
        }
    }
}
