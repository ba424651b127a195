//! # Unit Types
//!
//! Type-safe wrappers for the length units the estimators convert between,
//! plus the purchase-unit rounding policy shared by every calculator.
//!
//! ## Design Philosophy
//!
//! Simple newtype wrappers rather than a full units library:
//! - The estimators use a small, consistent metric set
//! - JSON serialization stays clean (just numbers)
//! - Minimal runtime overhead
//!
//! Areas, volumes, and masses stay as plain `f64` fields whose names carry the
//! unit suffix (`area_m2`, `cement_kg_per_m3`); only the meter/centimeter
//! conversion is error-prone enough to deserve a type boundary.
//!
//! ## Purchase Units
//!
//! Materials are bought in whole units, so derived quantities round **up**:
//! cement by the 50 kg bag, steel by the 7.4 kg rod (12 m of 12 mm rebar),
//! sand and aggregate by the whole cubic meter, tiles by the box.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::units::{Centimeters, Meters, bags_of_cement};
//!
//! let thickness = Centimeters(15.0);
//! let thickness_m: Meters = thickness.into();
//! assert_eq!(thickness_m.0, 0.15);
//!
//! assert_eq!(bags_of_cement(630.0), 13); // 630 kg / 50 kg per bag, rounded up
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of one cement bag (kg)
pub const CEMENT_BAG_KG: f64 = 50.0;

/// Mass of one rebar rod: 12 m of 12 mm bar (kg)
pub const STEEL_ROD_KG: f64 = 7.4;

/// Round a continuous quantity up to the next whole purchasable unit.
///
/// Partial units are never sold, so under-provisioning is disallowed by
/// construction. Inputs are validated non-negative before reaching here;
/// the count is `u64` so no realistic quantity clamps on conversion.
pub fn round_up(quantity: f64) -> u64 {
    quantity.ceil() as u64
}

/// Convert a cement mass to whole 50 kg bags, rounded up.
pub fn bags_of_cement(cement_kg: f64) -> u64 {
    round_up(cement_kg / CEMENT_BAG_KG)
}

/// Convert a steel mass to whole 12 m rods, rounded up.
pub fn rods_of_steel(steel_kg: f64) -> u64 {
    round_up(steel_kg / STEEL_ROD_KG)
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters (thickness fields are cm-scale)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_meters() {
        let cm = Centimeters(15.0);
        let m: Meters = cm.into();
        assert_eq!(m.0, 0.15);
    }

    #[test]
    fn test_meters_to_cm() {
        let m = Meters(0.25);
        let cm: Centimeters = m.into();
        assert_eq!(cm.0, 25.0);
    }

    #[test]
    fn test_bag_rounding() {
        assert_eq!(bags_of_cement(630.0), 13); // 12.6 bags
        assert_eq!(bags_of_cement(650.0), 13); // exactly 13
        assert_eq!(bags_of_cement(650.1), 14);
        assert_eq!(bags_of_cement(0.0), 0);
    }

    #[test]
    fn test_rod_rounding() {
        assert_eq!(rods_of_steel(960.0), 130); // 129.7 rods
        assert_eq!(rods_of_steel(7.4), 1);
    }

    #[test]
    fn test_bag_bounds() {
        // bags * 50 >= kg and (bags - 1) * 50 < kg for kg > 0
        for kg in [1.0, 49.9, 50.0, 50.1, 630.0, 1234.5] {
            let bags = bags_of_cement(kg) as f64;
            assert!(bags * CEMENT_BAG_KG >= kg);
            assert!((bags - 1.0) * CEMENT_BAG_KG < kg);
        }
    }

    #[test]
    fn test_huge_quantities_do_not_clamp() {
        // Counts above u32::MAX survive the float-to-int conversion.
        let kg = 3.0e11; // 6e9 bags
        assert_eq!(bags_of_cement(kg), 6_000_000_000);
        assert!(round_up(kg) > u64::from(u32::MAX));
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(3.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "3.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
