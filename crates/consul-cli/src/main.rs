//! Consul CLI
//!
//! Command-line interface for the Consul registry

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "consul")]
#[command(about = "Consul - permissioned registry control plane", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create and initialize a registry database
    Init(commands::init::InitArgs),
    /// Role hierarchy operations
    Role(commands::role::RoleArgs),
    /// Praetor roster operations
    Praetor(commands::praetor::PraetorArgs),
    /// Command register operations
    Command(commands::command::CommandArgs),
    /// Dictator mode operations
    Dictator(commands::dictator::DictatorArgs),
    /// Payload store operations
    Payload(commands::payload::PayloadArgs),
    /// Dump the full registry state as JSON
    State(commands::state::StateArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Role(args) => commands::role::execute(args),
        Commands::Praetor(args) => commands::praetor::execute(args),
        Commands::Command(args) => commands::command::execute(args),
        Commands::Dictator(args) => commands::dictator::execute(args),
        Commands::Payload(args) => commands::payload::execute(args),
        Commands::State(args) => commands::state::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
