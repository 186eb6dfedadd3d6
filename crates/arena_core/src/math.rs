//! Fixed-point math utilities for reproducible damage calculation.
//!
//! Damage formulas multiply stats by fractional coefficients (0.8, 1.5, jitter
//! factors). Doing that in fixed-point keeps every result bit-identical across
//! platforms, so a seeded battle replays the same way everywhere.

use fixed::types::{I32F32, I64F64};

/// Fixed-point number type for all combat math.
///
/// Uses 32 bits for integer part and 32 bits for fractional part.
/// Range: approximately -2,147,483,648 to 2,147,483,647
/// Precision: approximately 0.00000000023
pub type Fixed = I32F32;

/// Wide fixed-point type for intermediate damage products.
///
/// Stat × coefficient × rarity × jitter chains overflow [`Fixed`] for large
/// `u32` stats; this type holds every such product without saturating until
/// well past `u32::MAX`.
pub type Wide = I64F64;

/// Build a fixed-point fraction from a whole percentage (`percent / 100`).
#[must_use]
pub fn from_percent(percent: u32) -> Fixed {
    Fixed::from_num(percent) / Fixed::from_num(100)
}

/// Truncate a fixed-point value toward zero, clamping negatives to 0.
#[must_use]
pub fn truncate_to_u32(value: Fixed) -> u32 {
    if value <= Fixed::ZERO {
        0
    } else {
        value.to_num::<u32>()
    }
}

/// Truncate a wide value toward zero, clamping to `[0, u32::MAX]`.
#[must_use]
pub fn truncate_wide_to_u32(value: Wide) -> u32 {
    if value <= Wide::ZERO {
        0
    } else {
        value.saturating_to_num::<u32>()
    }
}
