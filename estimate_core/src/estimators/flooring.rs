//! # Flooring (Tile) Estimator
//!
//! Tile count, packaging, and installation take-off from floor area,
//! nominal tile size, a selectable waste allowance, and the install
//! method. Exactly one of the two material branches is populated:
//! adhesive mass, or a cement-and-sand mortar bed.

use serde::{Deserialize, Serialize};

use crate::bill::MaterialBill;
use crate::catalog::{Catalog, InstallMethod, TileSize, WasteAllowance};
use crate::errors::EstimateResult;
use crate::units::{bags_of_cement, round_up};
use crate::validate::require_non_negative;

/// Input parameters for a flooring estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Living room",
///   "area_m2": 30.0,
///   "tile": "60x60",
///   "waste": "5",
///   "method": "adhesive"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlooringInput {
    /// User label for this estimate
    pub label: String,

    /// Floor area in m²
    pub area_m2: f64,

    /// Nominal tile size (selects coverage, box count, and price)
    pub tile: TileSize,

    /// Waste allowance (cuts and breakage)
    pub waste: WasteAllowance,

    /// Installation method (selects the material branch and labor rate)
    pub method: InstallMethod,
}

impl FlooringInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        require_non_negative("area_m2", self.area_m2)?;
        Ok(())
    }
}

/// Estimate tiles, packaging, install materials, and cost for a floor.
pub fn calculate(input: &FlooringInput, catalog: &Catalog) -> EstimateResult<MaterialBill> {
    input.validate()?;

    let row = catalog.tile(input.tile);
    let install = &catalog.install;

    let tiles = round_up(
        input.area_m2 / row.area_per_tile_m2 * (1.0 + input.waste.percent() / 100.0),
    );
    let boxes = round_up(tiles as f64 / row.tiles_per_box as f64);

    let mut bill = MaterialBill {
        area_m2: Some(input.area_m2),
        tiles: Some(tiles),
        boxes: Some(boxes),
        ..Default::default()
    };

    let install_cost = match input.method {
        InstallMethod::Adhesive => {
            bill.adhesive_kg = Some(round_up(input.area_m2 * install.adhesive_kg_per_m2));
            input.area_m2 * install.adhesive_cost_per_m2
        }
        InstallMethod::MortarBed => {
            let cement_kg = input.area_m2 * install.mortar_cement_kg_per_m2;
            bill.cement_bags = Some(bags_of_cement(cement_kg));
            bill.sand_m3 = Some(round_up(input.area_m2 * install.mortar_sand_m3_per_m2));
            input.area_m2 * install.mortar_cost_per_m2
        }
    };

    bill.cost = tiles as f64 * row.price_per_tile + install_cost;
    Ok(bill)
}
