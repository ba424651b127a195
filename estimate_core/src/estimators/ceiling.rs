//! # Ceiling/Slab Estimator
//!
//! Material take-off for a poured concrete ceiling from plan dimensions,
//! slab thickness, and the structural system.
//!
//! Steel scales with the slab **area**, not the poured volume:
//! reinforcement mesh is laid out by floor plan. This is a deliberate
//! domain convention; linear elements (see [`crate::estimators::element`])
//! reinforce by volume instead.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::catalog::{Catalog, SlabSystem};
//! use estimate_core::estimators::ceiling::{calculate, CeilingInput};
//!
//! let input = CeilingInput {
//!     label: "Roof slab".to_string(),
//!     length_m: 4.0,
//!     width_m: 3.0,
//!     thickness_cm: 15.0,
//!     system: SlabSystem::Normal,
//! };
//!
//! let bill = calculate(&input, Catalog::builtin()).unwrap();
//! assert_eq!(bill.cement_bags, Some(13));
//! ```

use serde::{Deserialize, Serialize};

use crate::bill::MaterialBill;
use crate::catalog::{Catalog, SlabSystem};
use crate::errors::EstimateResult;
use crate::units::{bags_of_cement, rods_of_steel, round_up, Centimeters, Meters};
use crate::validate::require_non_negative;

/// Input parameters for a ceiling/slab estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Roof slab",
///   "length_m": 4.0,
///   "width_m": 3.0,
///   "thickness_cm": 15.0,
///   "system": "normal"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeilingInput {
    /// User label for this estimate (e.g., "Roof slab")
    pub label: String,

    /// Plan length in meters
    pub length_m: f64,

    /// Plan width in meters
    pub width_m: f64,

    /// Slab thickness in centimeters
    pub thickness_cm: f64,

    /// Structural system (selects the coefficient row)
    pub system: SlabSystem,
}

impl CeilingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        require_non_negative("length_m", self.length_m)?;
        require_non_negative("width_m", self.width_m)?;
        require_non_negative("thickness_cm", self.thickness_cm)?;
        Ok(())
    }

    /// Plan area A = length x width (m²)
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// Poured volume = area x thickness (m³), thickness normalized to meters
    pub fn volume_m3(&self) -> f64 {
        let thickness: Meters = Centimeters(self.thickness_cm).into();
        self.area_m2() * thickness.0
    }
}

/// Estimate materials and cost for a ceiling/slab.
///
/// # Returns
///
/// * `Ok(MaterialBill)` - concrete, cement, sand, aggregate, water,
///   steel, and approximate cost
/// * `Err(EstimateError::InvalidInput)` - if any field fails validation
pub fn calculate(input: &CeilingInput, catalog: &Catalog) -> EstimateResult<MaterialBill> {
    input.validate()?;

    let row = catalog.slab(input.system);
    let area = input.area_m2();
    let volume = input.volume_m3();

    let cement_kg = volume * row.cement_kg_per_m3;
    let steel_kg = area * row.steel_kg_per_m2;

    Ok(MaterialBill {
        area_m2: Some(area),
        volume_m3: Some(volume),
        concrete_m3: Some(volume * row.waste_factor),
        cement_bags: Some(bags_of_cement(cement_kg)),
        sand_m3: Some(round_up(volume * row.sand_m3_per_m3)),
        gravel_m3: Some(round_up(volume * row.gravel_m3_per_m3)),
        water_liters: Some(round_up(volume * row.water_l_per_m3)),
        steel_kg: Some(steel_kg),
        steel_rods: Some(rods_of_steel(steel_kg)),
        cost: volume * row.cost_per_m3,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ceiling() -> CeilingInput {
        CeilingInput {
            label: "Test slab".to_string(),
            length_m: 4.0,
            width_m: 3.0,
            thickness_cm: 15.0,
            system: SlabSystem::Normal,
        }
    }

    #[test]
    fn test_geometry() {
        let input = test_ceiling();
        assert!((input.area_m2() - 12.0).abs() < 1e-9);
        assert!((input.volume_m3() - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_normal_slab_takeoff() {
        let bill = calculate(&test_ceiling(), Catalog::builtin()).unwrap();

        // cement = 1.8 * 350 = 630 kg -> 13 bags
        assert_eq!(bill.cement_bags, Some(13));
        // sand = ceil(1.8 * 0.45) = 1, gravel = ceil(1.8 * 0.8) = 2
        assert_eq!(bill.sand_m3, Some(1));
        assert_eq!(bill.gravel_m3, Some(2));
        // water = ceil(1.8 * 180) = 324
        assert_eq!(bill.water_liters, Some(324));
        // steel scales with area: 12 * 80 = 960 kg -> 130 rods
        assert_eq!(bill.steel_kg, Some(960.0));
        assert_eq!(bill.steel_rods, Some(130));
        // 5% waste on concrete
        assert!((bill.concrete_m3.unwrap() - 1.89).abs() < 1e-9);
        // cost = 1.8 * 1200, not rounded
        assert!((bill.cost - 2160.0).abs() < 1e-9);
    }

    #[test]
    fn test_beam_system_has_higher_waste() {
        let mut input = test_ceiling();
        input.system = SlabSystem::BeamAndSlab;
        let bill = calculate(&input, Catalog::builtin()).unwrap();

        // 8% formwork loss vs 5% for normal/flat
        assert!((bill.concrete_m3.unwrap() - 1.8 * 1.08).abs() < 1e-9);
    }

    #[test]
    fn test_steel_tracks_area_not_volume() {
        let thin = CeilingInput {
            thickness_cm: 10.0,
            ..test_ceiling()
        };
        let thick = CeilingInput {
            thickness_cm: 20.0,
            ..test_ceiling()
        };

        let thin_bill = calculate(&thin, Catalog::builtin()).unwrap();
        let thick_bill = calculate(&thick, Catalog::builtin()).unwrap();

        // Same plan area, so same steel regardless of thickness
        assert_eq!(thin_bill.steel_kg, thick_bill.steel_kg);
        // But more concrete for the thicker pour
        assert!(thick_bill.concrete_m3 > thin_bill.concrete_m3);
    }

    #[test]
    fn test_monotonic_in_length() {
        let small = calculate(&test_ceiling(), Catalog::builtin()).unwrap();
        let big = calculate(
            &CeilingInput {
                length_m: 6.0,
                ..test_ceiling()
            },
            Catalog::builtin(),
        )
        .unwrap();

        assert!(big.cement_bags >= small.cement_bags);
        assert!(big.sand_m3 >= small.sand_m3);
        assert!(big.gravel_m3 >= small.gravel_m3);
        assert!(big.steel_rods >= small.steel_rods);
    }

    #[test]
    fn test_rejects_negative_width() {
        let mut input = test_ceiling();
        input.width_m = -3.0;
        assert!(calculate(&input, Catalog::builtin()).is_err());
    }

    #[test]
    fn test_rejects_nan_thickness() {
        let mut input = test_ceiling();
        input.thickness_cm = f64::NAN;
        assert!(calculate(&input, Catalog::builtin()).is_err());
    }

    #[test]
    fn test_idempotent() {
        let input = test_ceiling();
        let a = calculate(&input, Catalog::builtin()).unwrap();
        let b = calculate(&input, Catalog::builtin()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialization() {
        let input = test_ceiling();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: CeilingInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
