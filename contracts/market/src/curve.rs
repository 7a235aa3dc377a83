//! The bonding curve every key trade is priced on.
//!
//! The marginal price of key `i` is quadratic in `i`, so the cost of a
//! range of keys is the discrete integral over `[supply, supply + amount)`,
//! which collapses to a difference of cubes. The result is scaled into
//! 18-decimal units and divided by the calibration constant, putting the
//! first key on a fresh market at 1/300000 of a whole unit.

/// 1.0 in the fixed-point scale used for prices and fee percentages.
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// Calibration divisor of the curve.
pub const CURVE_DIVISOR: i128 = 300_000;

/// Cost of buying `amount` keys when `supply` keys already exist. Pure;
/// selling the same range back is priced with the identical call, which is
/// what makes buy/sell round trips symmetric.
pub fn price(supply: u64, amount: u64) -> i128 {
    if amount == 0 {
        return 0;
    }

    let lower = cube(supply);
    let upper = cube(supply + amount);

    (upper - lower) * UNIT / CURVE_DIVISOR
}

fn cube(n: u64) -> i128 {
    let n = n as i128;
    n * n * n
}
