//! Example: rectangle and water analysis of one skyline.
//!
//! Run with:
//! `cargo run --example skyline`

use monostack::{compute_range_extremum, Policy};

fn main() {
    let skyline = [0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1];

    for policy in Policy::ALL {
        match compute_range_extremum(&skyline, policy) {
            Ok(result) => println!("{:>15}: {:?}", policy.as_str(), result),
            Err(err) => eprintln!("{:>15}: {err}", policy.as_str()),
        }
    }
}
