//! Registry initialization command

use clap::Args;
use consul_core::model::Address;
use consul_core::Registry;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Address granted Owner and Controller at genesis
    #[arg(long)]
    pub owner: String,

    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

pub fn execute(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let owner: Address = args.owner.parse()?;
    let mut conn = super::open_store(&args.db)?;

    if consul_store::repo::load_registry(&conn).is_ok() {
        return Err("registry already initialized".into());
    }

    let registry = Registry::new(owner);
    consul_store::repo::save_registry(&mut conn, &registry)?;

    println!("Initialized registry at {} (owner {})", args.db, owner);
    Ok(())
}
