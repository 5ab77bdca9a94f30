//! Role hierarchy commands

use clap::{Args, Subcommand};
use consul_core::model::{Address, Role};
use consul_core::Command;

#[derive(Debug, Args)]
pub struct RoleArgs {
    #[command(subcommand)]
    pub command: RoleCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoleCommand {
    /// Grant a role to an address (gated by the role's admin)
    Grant(GrantArgs),
    /// Revoke a role from an address (gated by the role's admin)
    Revoke(GrantArgs),
    /// Test whether an address holds a role
    Has(HasArgs),
    /// Print the admin role for a role
    Admin(AdminArgs),
    /// Move Owner from the caller to a new address
    TransferOwnership(TransferArgs),
}

#[derive(Debug, Args)]
pub struct GrantArgs {
    #[arg(long)]
    pub caller: String,

    /// Role name: owner or controller
    #[arg(long)]
    pub role: String,

    #[arg(long)]
    pub address: String,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

#[derive(Debug, Args)]
pub struct HasArgs {
    /// Role name: owner or controller
    #[arg(long)]
    pub role: String,

    #[arg(long)]
    pub address: String,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Role name: owner or controller
    #[arg(long)]
    pub role: String,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

#[derive(Debug, Args)]
pub struct TransferArgs {
    #[arg(long)]
    pub caller: String,

    #[arg(long)]
    pub new_owner: String,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

pub fn execute(args: RoleArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        RoleCommand::Grant(args) => {
            let role: Role = args.role.parse()?;
            let address: Address = args.address.parse()?;
            super::run_gated(&args.db, &args.caller, Command::GrantRole { role, address })?;
            println!("Granted {} to {}", role, address);
            Ok(())
        }
        RoleCommand::Revoke(args) => {
            let role: Role = args.role.parse()?;
            let address: Address = args.address.parse()?;
            super::run_gated(&args.db, &args.caller, Command::RevokeRole { role, address })?;
            println!("Revoked {} from {}", role, address);
            Ok(())
        }
        RoleCommand::Has(args) => {
            let role: Role = args.role.parse()?;
            let address: Address = args.address.parse()?;
            let registry = super::load(&args.db)?;
            println!("{}", registry.has_role(role, address));
            Ok(())
        }
        RoleCommand::Admin(args) => {
            let role: Role = args.role.parse()?;
            let registry = super::load(&args.db)?;
            println!("{}", registry.role_admin(role));
            Ok(())
        }
        RoleCommand::TransferOwnership(args) => {
            let new_owner: Address = args.new_owner.parse()?;
            super::run_gated(
                &args.db,
                &args.caller,
                Command::TransferOwnership { new_owner },
            )?;
            println!("Ownership transferred to {}", new_owner);
            Ok(())
        }
    }
}
