//! Turnstile State Machine
//!
//! The classic coin-operated turnstile, with the table written as a literal
//! via the `transition_table!` macro and lookahead via `what_next`.
//!
//! Run with: cargo run --example turnstile

use std::sync::Arc;
use switchyard::{transition_table, Machine, RegistryBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Turnstile State Machine ===\n");

    let table = transition_table! {
        "LOCKED"   => { "COIN" => "UNLOCKED", "PUSH" => "LOCKED" },
        "UNLOCKED" => { "PUSH" => "LOCKED", "COIN" => "UNLOCKED" },
    };

    let registry = Arc::new(
        RegistryBuilder::new()
            .table(&table)?
            .default_state("LOCKED")
            .build()?,
    );

    let mut machine = Machine::new(Arc::clone(&registry));
    println!("States: {:?}", registry.states().collect::<Vec<_>>());
    println!("Initial state: {}\n", machine.current_state());

    println!("Lookahead without moving:");
    println!(
        "  COIN from LOCKED would lead to: {:?}",
        machine.what_next("LOCKED", "COIN")?
    );
    println!("  still in: {}\n", machine.current_state());

    println!("A visitor arrives:");
    let state = machine.transition("COIN")?;
    println!("  COIN -> {state}");
    let state = machine.transition("PUSH")?;
    println!("  PUSH -> {state}\n");

    println!("Pushing without paying keeps it locked:");
    let state = machine.transition("PUSH")?;
    println!("  PUSH -> {state}");

    println!("\n=== Demo Complete ===");
    Ok(())
}
