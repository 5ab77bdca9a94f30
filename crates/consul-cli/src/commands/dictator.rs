//! Dictator mode commands

use clap::{Args, Subcommand};
use consul_core::Command;

#[derive(Debug, Args)]
pub struct DictatorArgs {
    #[command(subcommand)]
    pub command: DictatorCommand,
}

#[derive(Debug, Subcommand)]
pub enum DictatorCommand {
    /// Flip the dictator-mode flag (owner-gated)
    Toggle(ToggleArgs),
    /// Print the dictator-mode flag
    Get(GetArgs),
}

#[derive(Debug, Args)]
pub struct ToggleArgs {
    #[arg(long)]
    pub caller: String,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

pub fn execute(args: DictatorArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        DictatorCommand::Toggle(args) => {
            super::run_gated(&args.db, &args.caller, Command::ToggleDictatorMode)?;
            let registry = super::load(&args.db)?;
            println!("Dictator mode: {}", registry.dictator_mode());
            Ok(())
        }
        DictatorCommand::Get(args) => {
            let registry = super::load(&args.db)?;
            println!("{}", registry.dictator_mode());
            Ok(())
        }
    }
}
