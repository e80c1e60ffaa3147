//! Example: days until a warmer temperature.
//!
//! Run with:
//! `cargo run --example daily_temperatures`

use monostack::{problems::next_greater::NextGreater, StackEngine};

fn main() {
    let temperatures = [73, 74, 75, 71, 69, 72, 76, 73];

    let engine = StackEngine::new(NextGreater::<i32>::new());
    let days = engine.run(&temperatures);

    println!("Days until warmer:");
    for (t, d) in temperatures.iter().zip(&days) {
        if *d == 0 {
            println!("  {t}°F -> never");
        } else {
            println!("  {t}°F -> {d} day(s)");
        }
    }
}
