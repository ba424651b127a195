//! # MaterialBill
//!
//! The single output record of every estimator: derived quantities plus
//! an approximate cost.
//!
//! Line items are optional so a bill only carries what the calculator
//! actually produced - a gypsum render bill has no cement line at all,
//! not a zero. Discrete quantities (bags, rods, boxes, whole m³) are
//! already ceiling-rounded to purchasable units; `cost` is a rough
//! estimate and is never rounded up.

use serde::{Deserialize, Serialize};

/// Result of one estimation call.
///
/// All fields are deterministic functions of the validated input and the
/// coefficient row; two calls with identical inputs produce identical
/// bills.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_m2": 12.0,
///   "volume_m3": 1.8,
///   "concrete_m3": 1.89,
///   "cement_bags": 13,
///   "sand_m3": 1,
///   "gravel_m3": 2,
///   "water_liters": 324,
///   "steel_kg": 960.0,
///   "steel_rods": 130,
///   "cost": 2160.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialBill {
    /// Plan or wall face area (m²)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_m2: Option<f64>,

    /// Nominal volume before waste (m³)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_m3: Option<f64>,

    /// Concrete to order, waste factor applied (m³)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concrete_m3: Option<f64>,

    /// Cement in whole 50 kg bags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cement_bags: Option<u64>,

    /// Sand in whole cubic meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sand_m3: Option<u64>,

    /// Coarse aggregate in whole cubic meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravel_m3: Option<u64>,

    /// Mixing water in liters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_liters: Option<u64>,

    /// Reinforcement steel mass (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steel_kg: Option<f64>,

    /// Reinforcement steel in whole 12 m rods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steel_rods: Option<u64>,

    /// Masonry units (bricks/blocks), waste included
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<u64>,

    /// Tiles, waste included
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiles: Option<u64>,

    /// Tile boxes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxes: Option<u64>,

    /// Tile adhesive (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adhesive_kg: Option<u64>,

    /// Render additive (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additive_kg: Option<u64>,

    /// Approximate total cost (EGP). Non-authoritative; never rounded up.
    pub cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lines_are_omitted_from_json() {
        let bill = MaterialBill {
            area_m2: Some(30.0),
            additive_kg: Some(120),
            cost: 900.0,
            ..Default::default()
        };

        let json = serde_json::to_string(&bill).unwrap();
        assert!(json.contains("additive_kg"));
        assert!(!json.contains("cement_bags"));
        assert!(!json.contains("steel_kg"));
    }

    #[test]
    fn test_roundtrip() {
        let bill = MaterialBill {
            area_m2: Some(12.0),
            volume_m3: Some(1.8),
            cement_bags: Some(13),
            steel_rods: Some(130),
            cost: 2160.0,
            ..Default::default()
        };

        let json = serde_json::to_string(&bill).unwrap();
        let roundtrip: MaterialBill = serde_json::from_str(&json).unwrap();
        assert_eq!(bill, roundtrip);
    }
}
