//! # Masonry (Brick) Estimator
//!
//! Unit count and mortar take-off for a masonry wall from its face area,
//! unit type, and thickness. A fixed 5% waste applies to the unit count
//! regardless of unit type; mortar is fixed at 30% of the nominal wall
//! volume, so the thickness only feeds the mortar math.

use serde::{Deserialize, Serialize};

use crate::bill::MaterialBill;
use crate::catalog::{BrickType, Catalog};
use crate::errors::EstimateResult;
use crate::units::{bags_of_cement, round_up, Centimeters, Meters};
use crate::validate::require_non_negative;

/// Input parameters for a masonry wall estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "North wall",
///   "area_m2": 50.0,
///   "brick": "red",
///   "thickness_cm": 12.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallInput {
    /// User label for this estimate
    pub label: String,

    /// Wall face area in m²
    pub area_m2: f64,

    /// Masonry unit type (selects the coefficient row)
    pub brick: BrickType,

    /// Wall thickness in centimeters (feeds the mortar volume only)
    pub thickness_cm: f64,
}

impl WallInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        require_non_negative("area_m2", self.area_m2)?;
        require_non_negative("thickness_cm", self.thickness_cm)?;
        Ok(())
    }

    /// Mortar volume = area x thickness x mortar fraction (m³)
    pub fn mortar_volume_m3(&self, mortar_fraction: f64) -> f64 {
        let thickness: Meters = Centimeters(self.thickness_cm).into();
        self.area_m2 * thickness.0 * mortar_fraction
    }
}

/// Estimate units, mortar materials, and cost for a masonry wall.
pub fn calculate(input: &WallInput, catalog: &Catalog) -> EstimateResult<MaterialBill> {
    input.validate()?;

    let row = catalog.brick(input.brick);
    let mortar = &catalog.mortar;

    let units = round_up(input.area_m2 * row.units_per_m2 * mortar.unit_waste_factor);

    let mortar_volume = input.mortar_volume_m3(mortar.volume_fraction);
    let cement_kg = mortar_volume * mortar.cement_kg_per_m3;
    let sand_m3 = round_up(mortar_volume * mortar.sand_m3_per_m3);

    // Cost prices the raw cement mass and the ceiled sand, on top of the units
    let cost = units as f64 * row.unit_price
        + cement_kg * mortar.cement_price_per_kg
        + sand_m3 as f64 * mortar.sand_price_per_m3;

    Ok(MaterialBill {
        area_m2: Some(input.area_m2),
        units: Some(units),
        cement_bags: Some(bags_of_cement(cement_kg)),
        sand_m3: Some(sand_m3),
        cost,
        ..Default::default()
    })
}
