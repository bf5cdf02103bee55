//! Job Lifecycle State Machine
//!
//! This demo drives a machine whose transition table arrives as JSON,
//! the way a configuration service or database row would supply it.
//!
//! Key concepts:
//! - Decoding a table from JSON
//! - Advancing with `transition` and recovering from rejected actions
//! - Resetting back to the default state
//!
//! Run with: cargo run --example job_lifecycle

use switchyard::{Machine, TransitionTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Job Lifecycle State Machine ===\n");

    let json = r#"
        {
            "NEW":     { "START": "STARTED" },
            "STARTED": { "COMPLETE": "NEW" }
        }
    "#;

    let table = TransitionTable::from_json(json)?;
    let mut machine = Machine::from_table(&table, "NEW")?;

    println!("Table decoded from JSON, default state: NEW");
    println!("Initial state: {}\n", machine.current_state());

    println!("Driving the machine:");
    let state = machine.transition("START")?;
    println!("  START    -> {state}");
    let state = machine.transition("COMPLETE")?;
    println!("  COMPLETE -> {state}\n");

    println!("Rejected actions leave the machine where it was:");
    match machine.transition("COMPLETE") {
        Ok(state) => println!("  unexpected success: {state}"),
        Err(err) => println!("  {err}"),
    }
    println!("  still in: {}\n", machine.current_state());

    machine.transition("START")?;
    println!("After START, reset() returns: {}", machine.reset());

    println!("\n=== Demo Complete ===");
    Ok(())
}
