//! Traffic Light State Machine
//!
//! This example walks a monitoring-style traffic light through its table.
//!
//! Key concepts:
//! - Declaring legal edges with `transitions!`
//! - Querying reachable states
//! - Rejected transitions leave the state unchanged
//!
//! Run with: cargo run --example traffic_light

use fsm_table::{state_enum, transitions, StateMachine};

state_enum! {
    enum TrafficLight {
        Green,
        Yellow,
        Red,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let machine = StateMachine::new(
        TrafficLight::Green,
        transitions! {
            TrafficLight::Green => [TrafficLight::Yellow],
            TrafficLight::Yellow => [TrafficLight::Green, TrafficLight::Red],
            TrafficLight::Red => [TrafficLight::Yellow, TrafficLight::Green],
        },
    );

    println!("Created: {}", machine);
    println!("Possible from Green: {:?}\n", machine.possible());

    for dst in [
        TrafficLight::Yellow,
        TrafficLight::Red,
        TrafficLight::Red,
        TrafficLight::Green,
    ] {
        match machine.transition(dst) {
            Ok(state) => println!("  -> {:?} (now {})", state, machine),
            Err(err) => println!("  x  {:?}: {}", dst, err),
        }
    }

    println!("\nFinal state: {:?}", machine.current());
    println!("\n=== Example Complete ===");
}
