//! Operator CLI for the Demeter production-backed ledger.
//!
//! Drives one ledger operation per invocation against a bincode state file,
//! with policy and price-catalog configuration in a TOML file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod store;

/// Operator CLI for the Demeter production-backed ledger.
#[derive(Parser)]
#[command(name = "demeter", version, about)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "demeter.toml")]
    config: PathBuf,

    /// Path to the ledger state file.
    #[arg(long, global = true, default_value = "demeter.state")]
    state: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the ledger state and pin the system accounts
    Init {
        /// Account accumulating transfer tax
        #[arg(long)]
        treasury: u64,
        /// Account receiving newly minted seigniorage
        #[arg(long)]
        pool: u64,
    },
    /// Register a production batch as collateral
    Register {
        /// Product category
        #[arg(long)]
        category: String,
        /// Quantity pledged, in units of the category
        #[arg(long)]
        quantity: i128,
        /// Caller-asserted unit price; omitted, the catalog resolves it
        #[arg(long)]
        unit_price: Option<i128>,
        /// Height after which the batch rots if unsold
        #[arg(long)]
        expires: u64,
    },
    /// Run the policy engine once: mint the collateral/supply gap
    Mint,
    /// Burn rotted collateral value and the matching supply
    Burn {
        /// Collateral value that rotted
        #[arg(long)]
        value: i128,
    },
    /// Taxed transfer between accounts
    Transfer {
        #[arg(long)]
        from: u64,
        #[arg(long)]
        to: u64,
        #[arg(long)]
        amount: i128,
        /// Levy paid to the treasury, out of the amount
        #[arg(long)]
        tax: i128,
    },
    /// Show an account balance
    Balance {
        #[arg(long)]
        account: u64,
    },
    /// Show aggregates, height and velocity
    Status,
    /// Advance the recorded chain height
    Advance {
        #[arg(long)]
        height: u64,
    },
    /// Print and clear pending events
    Events,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Init { treasury, pool } => {
            commands::init::run(&cli.config, &cli.state, treasury, pool)
        }
        Command::Register {
            category,
            quantity,
            unit_price,
            expires,
        } => commands::register::run(
            &cli.config,
            &cli.state,
            &category,
            quantity,
            unit_price,
            expires,
        ),
        Command::Mint => commands::mint::run(&cli.config, &cli.state),
        Command::Burn { value } => commands::burn::run(&cli.config, &cli.state, value),
        Command::Transfer {
            from,
            to,
            amount,
            tax,
        } => commands::transfer::run(&cli.config, &cli.state, from, to, amount, tax),
        Command::Balance { account } => commands::balance::run(&cli.config, &cli.state, account),
        Command::Status => commands::status::run(&cli.config, &cli.state),
        Command::Advance { height } => commands::advance::run(&cli.config, &cli.state, height),
        Command::Events => commands::events::run(&cli.config, &cli.state),
    }
}
