//! Command-line interface for strictly_vending.

use clap::{Parser, Subcommand};

/// Strictly Vending - a type-safe vending machine
#[derive(Parser, Debug)]
#[command(name = "strictly_vending")]
#[command(about = "Type-safe vending machine state machine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a scripted purchase against a stocked machine
    Demo {
        /// Print the final machine snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drive a machine interactively from stdin
    Repl,
}
