//! Proves 3 · 4 · 4 = 48 without numbers, and checks a few laws along the way.
//!
//! Set `RUST_LOG=neumann=trace` to see every addition and multiplication.

use neumann::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Logs whether an identity holds.
fn check(name: &str, holds: bool) {
    if holds {
        info!(name, "identity holds");
    } else {
        warn!(name, "identity fails");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let zero = Set::empty();
    let one = zero.succ();
    let two = one.succ();
    let three = two.succ();
    let four = three.succ();
    let five = four.succ();

    check("2 · 2 = 4", &two * &two == four);
    check("3 · (4 · 5) = (3 · 4) · 5", &three * &(&four * &five) == &(&three * &four) * &five);
    check("3 · (2 + 4) = 3 · 2 + 3 · 4", &three * &(&two + &four) == &(&three * &two) + &(&three * &four));

    let prod = &(&three * &four) * &four;
    println!("2:         {two}\n3 · 4 · 4: {} elements", prod.count());
}
