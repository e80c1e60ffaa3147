//! Car fleets arriving at a shared target.
//!
//! Cars drive towards `target` along one lane and may not overtake: a faster
//! car that catches a slower one ahead joins it and moves at its speed from
//! then on. Processing cars from the one closest to the target backwards,
//! the arrival time of each fleet's leader is kept on a stack; a car whose
//! unobstructed arrival time is strictly later than the leader ahead cannot
//! catch up and starts a new fleet.
//!
//! Arrival times are rationals `(target - position) / speed` and are compared
//! by cross-multiplication, so no floating point rounding is involved.

use std::cmp::Ordering;

use crate::error::{EngineError, Result};
use crate::utils::cmp_ratio;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Car {
    position: i64,
    speed: i64,
}

impl Car {
    /// Arrival time as `(distance, speed)`.
    fn eta(self, target: i64) -> (i64, i64) {
        (target - self.position, self.speed)
    }
}

fn validate(target: i64, positions: &[i64], speeds: &[i64]) -> Result<()> {
    if positions.len() != speeds.len() {
        return Err(EngineError::invalid(
            "speeds",
            format!(
                "expected {} values to pair with positions, got {}",
                positions.len(),
                speeds.len()
            ),
        ));
    }
    if target < 0 {
        return Err(EngineError::invalid(
            "target",
            format!("must be non-negative, got {target}"),
        ));
    }
    if let Some((i, &s)) = speeds.iter().enumerate().find(|&(_, &s)| s <= 0) {
        return Err(EngineError::invalid(
            "speeds",
            format!("speed at index {i} must be positive, got {s}"),
        ));
    }
    if let Some((i, &p)) = positions
        .iter()
        .enumerate()
        .find(|&(_, &p)| p < 0 || p > target)
    {
        return Err(EngineError::invalid(
            "positions",
            format!("position at index {i} must lie in 0..={target}, got {p}"),
        ));
    }
    Ok(())
}

/// Number of fleets that reach `target`.
///
/// `positions[i]` and `speeds[i]` describe car `i`. Cars that start at the
/// same position form a single fleet.
///
/// # Errors
/// [`EngineError::InvalidArgument`] if the arrays differ in length, a speed
/// is not strictly positive, the target is negative, or a position lies
/// outside `0..=target`.
pub fn car_fleet(target: i64, positions: &[i64], speeds: &[i64]) -> Result<usize> {
    validate(target, positions, speeds)?;

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("car_fleet", cars = positions.len(), target);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut cars: Vec<Car> = positions
        .iter()
        .zip(speeds)
        .map(|(&position, &speed)| Car { position, speed })
        .collect();

    // Closest to the target first; among cars sharing a position the slowest
    // leads, so the faster ones merge into it.
    cars.sort_unstable_by(|a, b| {
        b.position.cmp(&a.position).then_with(|| {
            let (da, sa) = a.eta(target);
            let (db, sb) = b.eta(target);
            cmp_ratio(db, sb, da, sa)
        })
    });

    let mut leaders: Vec<(i64, i64)> = Vec::new();
    for car in cars {
        let (distance, speed) = car.eta(target);
        let starts_fleet = match leaders.last() {
            None => true,
            Some(&(ld, ls)) => cmp_ratio(distance, speed, ld, ls) == Ordering::Greater,
        };
        if starts_fleet {
            leaders.push((distance, speed));
        }
    }
    Ok(leaders.len())
}
