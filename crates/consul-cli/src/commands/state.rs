//! Registry state dump command

use clap::Args;

#[derive(Debug, Args)]
pub struct StateArgs {
    #[arg(long, default_value = ".consul/registry.db")]
    pub db: String,
}

pub fn execute(args: StateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let registry = super::load(&args.db)?;
    println!("{}", serde_json::to_string_pretty(&registry)?);
    Ok(())
}
