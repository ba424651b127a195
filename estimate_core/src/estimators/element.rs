//! # Linear Element Estimator
//!
//! Material take-off for columns, foundations, and beams from the unit
//! dimensions and a piece count.
//!
//! Steel here scales with the **volume** - linear members are reinforced
//! through their cross-section. Slabs reinforce by plan area instead
//! (see [`crate::estimators::ceiling`]); the asymmetry is intentional.

use serde::{Deserialize, Serialize};

use crate::bill::MaterialBill;
use crate::catalog::{Catalog, ElementKind, ELEMENT_WASTE_FACTOR};
use crate::errors::EstimateResult;
use crate::units::{bags_of_cement, rods_of_steel, round_up};
use crate::validate::{require_count, require_non_negative};

/// Input parameters for a linear element estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Ground floor columns",
///   "kind": "column",
///   "length_m": 0.3,
///   "width_m": 0.3,
///   "height_m": 3.0,
///   "count": 4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementInput {
    /// User label for this estimate
    pub label: String,

    /// Element kind (selects the coefficient row)
    pub kind: ElementKind,

    /// Section length in meters
    pub length_m: f64,

    /// Section width in meters
    pub width_m: f64,

    /// Element height/run in meters
    pub height_m: f64,

    /// Number of identical pieces (strictly positive)
    pub count: u32,
}

impl ElementInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        require_non_negative("length_m", self.length_m)?;
        require_non_negative("width_m", self.width_m)?;
        require_non_negative("height_m", self.height_m)?;
        require_count("count", self.count)?;
        Ok(())
    }

    /// Volume of a single piece (m³)
    pub fn unit_volume_m3(&self) -> f64 {
        self.length_m * self.width_m * self.height_m
    }

    /// Total volume across all pieces (m³)
    pub fn total_volume_m3(&self) -> f64 {
        self.unit_volume_m3() * self.count as f64
    }
}

/// Estimate materials and cost for a set of linear concrete elements.
pub fn calculate(input: &ElementInput, catalog: &Catalog) -> EstimateResult<MaterialBill> {
    input.validate()?;

    let row = catalog.element(input.kind);
    let volume = input.total_volume_m3();

    let cement_kg = volume * row.cement_kg_per_m3;
    let steel_kg = volume * row.steel_kg_per_m3;

    Ok(MaterialBill {
        volume_m3: Some(volume),
        concrete_m3: Some(volume * ELEMENT_WASTE_FACTOR),
        cement_bags: Some(bags_of_cement(cement_kg)),
        sand_m3: Some(round_up(volume * row.sand_m3_per_m3)),
        gravel_m3: Some(round_up(volume * row.gravel_m3_per_m3)),
        steel_kg: Some(steel_kg),
        steel_rods: Some(rods_of_steel(steel_kg)),
        cost: volume * row.cost_per_m3,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_columns() -> ElementInput {
        ElementInput {
            label: "Test columns".to_string(),
            kind: ElementKind::Column,
            length_m: 0.3,
            width_m: 0.3,
            height_m: 3.0,
            count: 4,
        }
    }

    #[test]
    fn test_volume() {
        let input = test_columns();
        assert!((input.unit_volume_m3() - 0.27).abs() < 1e-9);
        assert!((input.total_volume_m3() - 1.08).abs() < 1e-9);
    }

    #[test]
    fn test_column_takeoff() {
        let bill = calculate(&test_columns(), Catalog::builtin()).unwrap();

        // cement = 1.08 * 400 = 432 kg -> 9 bags
        assert_eq!(bill.cement_bags, Some(9));
        // sand = ceil(0.432) = 1, gravel = ceil(0.864) = 1
        assert_eq!(bill.sand_m3, Some(1));
        assert_eq!(bill.gravel_m3, Some(1));
        // steel scales with volume: 1.08 * 120 = 129.6 kg -> 18 rods
        assert!((bill.steel_kg.unwrap() - 129.6).abs() < 1e-9);
        assert_eq!(bill.steel_rods, Some(18));
        // fixed 5% waste
        assert!((bill.concrete_m3.unwrap() - 1.08 * 1.05).abs() < 1e-9);
        // cost = 1.08 * 1800
        assert!((bill.cost - 1944.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_water_line_for_elements() {
        let bill = calculate(&test_columns(), Catalog::builtin()).unwrap();
        assert_eq!(bill.water_liters, None);
    }

    #[test]
    fn test_steel_tracks_volume() {
        let catalog = Catalog::builtin();
        let short = calculate(&test_columns(), catalog).unwrap();
        let tall = calculate(
            &ElementInput {
                height_m: 6.0,
                ..test_columns()
            },
            catalog,
        )
        .unwrap();

        // Same section, double the height, double the steel
        assert!((tall.steel_kg.unwrap() - 2.0 * short.steel_kg.unwrap()).abs() < 1e-9);
    }

    #[test]
    fn test_kinds_differ_in_reinforcement() {
        let catalog = Catalog::builtin();
        let as_kind = |kind| {
            calculate(
                &ElementInput {
                    kind,
                    ..test_columns()
                },
                catalog,
            )
            .unwrap()
        };

        let column = as_kind(ElementKind::Column);
        let foundation = as_kind(ElementKind::Foundation);
        let beam = as_kind(ElementKind::Beam);

        // Beams carry the densest reinforcement, foundations the lightest
        assert!(beam.steel_kg > column.steel_kg);
        assert!(column.steel_kg > foundation.steel_kg);
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut input = test_columns();
        input.count = 0;
        assert!(calculate(&input, Catalog::builtin()).is_err());
    }

    #[test]
    fn test_negative_height_rejected() {
        let mut input = test_columns();
        input.height_m = -3.0;
        assert!(calculate(&input, Catalog::builtin()).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = test_columns();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: ElementInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
