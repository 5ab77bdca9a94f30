//! Command register commands

use clap::{Args, Subcommand};
use consul_core::model::Bytes32;
use consul_core::Command;

#[derive(Debug, Args)]
pub struct CommandArgs {
    #[command(subcommand)]
    pub command: RegisterCommand,
}

#[derive(Debug, Subcommand)]
pub enum RegisterCommand {
    /// Print the current command register value
    Get(GetArgs),
    /// Overwrite the command register (controller-gated)
    Set(SetArgs),
}

#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(long)]
    pub caller: String,

    /// Raw 32-byte value as hex
    #[arg(long, conflicts_with = "text")]
    pub value: Option<String>,

    /// Store the digest of this string instead of a raw value
    #[arg(long, conflicts_with = "value")]
    pub text: Option<String>,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

pub fn execute(args: CommandArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        RegisterCommand::Get(args) => {
            let registry = super::load(&args.db)?;
            println!("{}", registry.current_command());
            Ok(())
        }
        RegisterCommand::Set(args) => {
            let new_command = match (&args.value, &args.text) {
                (Some(value), None) => value.parse::<Bytes32>()?,
                (None, Some(text)) => Bytes32::hash_of(text.as_bytes()),
                _ => return Err("Must specify either --value or --text".into()),
            };
            super::run_gated(
                &args.db,
                &args.caller,
                Command::ChangeCommand { new_command },
            )?;
            println!("Command set to {}", new_command);
            Ok(())
        }
    }
}
