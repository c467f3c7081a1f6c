//! Strictly Vending - CLI
//!
//! Demo and interactive front ends for the vending machine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use strictly_vending::{Product, VendingMachine};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { json } => run_demo(json),
        Command::Repl => run_repl(),
    }
}

/// Stocks a machine and replays one full purchase cycle.
fn run_demo(json: bool) -> Result<()> {
    let mut machine = VendingMachine::new();
    machine
        .inventory_mut()
        .add_product(Product::new("1", "Coke", 25), 5);
    machine
        .inventory_mut()
        .add_product(Product::new("2", "Chips", 15), 3);

    machine.insert_coin(25);
    machine.select_product("1");
    machine.press_button();
    let product = machine.dispense_item();

    match product {
        Some(product) => info!(%product, "purchase complete"),
        None => info!("purchase did not complete"),
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&machine)?);
    }

    Ok(())
}

/// Reads line commands from stdin against one machine.
fn run_repl() -> Result<()> {
    let mut machine = VendingMachine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("commands: insert <amount> | select <id> | press | dispense");
    println!("          stock <id> <name> <price> <qty> | status | quit");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["insert", amount] => match amount.parse::<i64>() {
                Ok(amount) => machine.insert_coin(amount),
                Err(_) => println!("amount must be an integer"),
            },
            ["select", id] => machine.select_product(id),
            ["press"] => machine.press_button(),
            ["dispense"] => match machine.dispense_item() {
                Some(product) => println!("dispensed: {product}"),
                None => println!("nothing dispensed"),
            },
            ["stock", id, name, price, qty] => {
                match (price.parse::<u32>(), qty.parse::<u32>()) {
                    (Ok(price), Ok(qty)) => {
                        machine
                            .inventory_mut()
                            .add_product(Product::new(*id, *name, price), qty);
                    }
                    _ => println!("price and qty must be non-negative integers"),
                }
            }
            ["status"] => {
                println!(
                    "state: {}, inserted: {}, selected: {}",
                    machine.state(),
                    machine.inserted_money(),
                    machine.selected_product().unwrap_or("-")
                );
                for entry in machine.inventory().entries() {
                    println!("  {} x{}", entry.product(), entry.quantity());
                }
            }
            _ => println!("unrecognized command"),
        }
    }

    Ok(())
}
