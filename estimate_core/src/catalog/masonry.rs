//! Masonry coefficient rows: brick/block unit counts and mortar spec.

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Masonry unit type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickType {
    /// Solid fired-clay brick (small format, 55 units per m²)
    #[serde(rename = "red")]
    RedBrick,
    /// Large cement block
    #[serde(rename = "block")]
    CementBlock,
    /// Hollow clay block
    #[serde(rename = "hollow")]
    HollowBlock,
}

impl BrickType {
    /// All brick type variants for UI selection
    pub const ALL: [BrickType; 3] = [
        BrickType::RedBrick,
        BrickType::CementBlock,
        BrickType::HollowBlock,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "red" | "red-brick" | "clay" => Ok(BrickType::RedBrick),
            "block" | "cement-block" => Ok(BrickType::CementBlock),
            "hollow" | "hollow-block" => Ok(BrickType::HollowBlock),
            _ => Err(EstimateError::invalid_input(
                "brick_type",
                s,
                "Expected one of: red, block, hollow",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BrickType::RedBrick => "Red Brick",
            BrickType::CementBlock => "Cement Block",
            BrickType::HollowBlock => "Hollow Block",
        }
    }
}

impl std::fmt::Display for BrickType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-m² unit count and unit price for one masonry type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickRow {
    /// Units laid per m² of wall face
    pub units_per_m2: f64,
    /// Price per unit (EGP)
    pub unit_price: f64,
}

/// Mortar consumption and pricing for masonry walls.
///
/// Mortar is fixed at 30% of the nominal wall volume regardless of the
/// unit type; the wall thickness only feeds that volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortarSpec {
    /// Mortar share of the nominal wall volume
    pub volume_fraction: f64,
    /// Cement consumption in the mortar mix (kg per m³)
    pub cement_kg_per_m3: f64,
    /// Sand consumption in the mortar mix (m³ per m³)
    pub sand_m3_per_m3: f64,
    /// Cement price (EGP per kg)
    pub cement_price_per_kg: f64,
    /// Sand price (EGP per m³)
    pub sand_price_per_m3: f64,
    /// Waste allowance on the unit count (5% for all unit types)
    pub unit_waste_factor: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_type_parsing() {
        assert_eq!(
            BrickType::from_str_flexible("red brick").unwrap(),
            BrickType::RedBrick
        );
        assert_eq!(
            BrickType::from_str_flexible("HOLLOW").unwrap(),
            BrickType::HollowBlock
        );
        assert!(BrickType::from_str_flexible("stone").is_err());
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&BrickType::CementBlock).unwrap();
        assert_eq!(json, "\"block\"");
    }
}
