//! # Render (Plaster) Estimator
//!
//! Mix take-off for wall render from area, coat thickness, and mix type.
//! Gypsum render uses neither cement nor sand - lines that compute to
//! zero are left out of the bill entirely rather than reported as zeros.

use serde::{Deserialize, Serialize};

use crate::bill::MaterialBill;
use crate::catalog::{Catalog, RenderType};
use crate::errors::EstimateResult;
use crate::units::{bags_of_cement, round_up, Centimeters, Meters};
use crate::validate::require_non_negative;

/// Input parameters for a render estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Interior walls",
///   "area_m2": 120.0,
///   "thickness_cm": 2.0,
///   "render": "gypsum"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInput {
    /// User label for this estimate
    pub label: String,

    /// Surface area in m²
    pub area_m2: f64,

    /// Coat thickness in centimeters (typically 1.5 - 2)
    pub thickness_cm: f64,

    /// Render mix type (selects the coefficient row)
    pub render: RenderType,
}

impl RenderInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        require_non_negative("area_m2", self.area_m2)?;
        require_non_negative("thickness_cm", self.thickness_cm)?;
        Ok(())
    }

    /// Render volume = area x thickness (m³)
    pub fn volume_m3(&self) -> f64 {
        let thickness: Meters = Centimeters(self.thickness_cm).into();
        self.area_m2 * thickness.0
    }
}

/// Estimate mix materials and cost for a render coat.
///
/// Only line items with a non-zero quantity appear in the bill.
pub fn calculate(input: &RenderInput, catalog: &Catalog) -> EstimateResult<MaterialBill> {
    input.validate()?;

    let row = catalog.render(input.render);
    let volume = input.volume_m3();

    let nonzero = |qty: u64| Some(qty).filter(|&q| q > 0);
    let cement_bags = nonzero(bags_of_cement(volume * row.cement_kg_per_m3));
    let sand_m3 = nonzero(round_up(volume * row.sand_m3_per_m3));
    let additive_kg = nonzero(round_up(volume * row.additive_kg_per_m3));

    Ok(MaterialBill {
        area_m2: Some(input.area_m2),
        volume_m3: Some(volume),
        cement_bags,
        sand_m3,
        additive_kg,
        cost: volume * row.cost_per_m3,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_render(render: RenderType) -> RenderInput {
        RenderInput {
            label: "Test render".to_string(),
            area_m2: 100.0,
            thickness_cm: 2.0,
            render,
        }
    }

    #[test]
    fn test_cement_render_has_no_additive() {
        let bill = calculate(&test_render(RenderType::Cement), Catalog::builtin()).unwrap();

        // volume = 100 * 0.02 = 2 m³; cement = 500 kg -> 10 bags
        assert_eq!(bill.cement_bags, Some(10));
        // sand = ceil(2 * 1.3) = 3 m³
        assert_eq!(bill.sand_m3, Some(3));
        assert_eq!(bill.additive_kg, None);
        assert!((bill.cost - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_gypsum_render_omits_cement_and_sand() {
        let bill = calculate(&test_render(RenderType::Gypsum), Catalog::builtin()).unwrap();

        assert_eq!(bill.cement_bags, None);
        assert_eq!(bill.sand_m3, None);
        // additive = ceil(2 * 800) = 1600 kg
        assert_eq!(bill.additive_kg, Some(1600));
    }

    #[test]
    fn test_lime_render_has_all_three_lines() {
        let bill = calculate(&test_render(RenderType::Lime), Catalog::builtin()).unwrap();

        assert!(bill.cement_bags.is_some());
        assert!(bill.sand_m3.is_some());
        assert!(bill.additive_kg.is_some());
    }

    #[test]
    fn test_omitted_lines_stay_out_of_json() {
        let bill = calculate(&test_render(RenderType::Gypsum), Catalog::builtin()).unwrap();
        let json = serde_json::to_string(&bill).unwrap();
        assert!(!json.contains("cement_bags"));
        assert!(!json.contains("sand_m3"));
        assert!(json.contains("additive_kg"));
    }

    #[test]
    fn test_zero_area_omits_all_material_lines() {
        let mut input = test_render(RenderType::Cement);
        input.area_m2 = 0.0;
        let bill = calculate(&input, Catalog::builtin()).unwrap();

        // Nothing to mix: no zero-quantity lines, even for non-zero rates.
        assert_eq!(bill.cement_bags, None);
        assert_eq!(bill.sand_m3, None);
        assert_eq!(bill.additive_kg, None);
        assert_eq!(bill.cost, 0.0);
    }

    #[test]
    fn test_rejects_negative_thickness() {
        let mut input = test_render(RenderType::Cement);
        input.thickness_cm = -2.0;
        assert!(calculate(&input, Catalog::builtin()).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = test_render(RenderType::Lime);
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: RenderInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
