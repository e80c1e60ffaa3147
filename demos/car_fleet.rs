//! Example: counting car fleets.
//!
//! Run with:
//! `cargo run --example car_fleet`

use monostack::problems::car_fleet::car_fleet;

fn main() {
    let target = 12;
    let positions = [10, 8, 0, 5, 3];
    let speeds = [2, 4, 1, 1, 3];

    match car_fleet(target, &positions, &speeds) {
        Ok(n) => println!("{n} fleet(s) reach mile {target}"),
        Err(err) => eprintln!("car_fleet: {err}"),
    }

    // Mismatched companion arrays are rejected.
    if let Err(err) = car_fleet(target, &positions, &speeds[..3]) {
        println!("rejected: {err}");
    }
}
