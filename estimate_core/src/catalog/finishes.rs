//! Finish coefficient rows: render/plaster mixes, tile formats, and
//! installation methods.

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Render (plaster) mix type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderType {
    /// Cement-sand render
    Cement,
    /// Gypsum render (no cement or sand, additive only)
    Gypsum,
    /// Lime render
    Lime,
}

impl RenderType {
    /// All render type variants for UI selection
    pub const ALL: [RenderType; 3] = [RenderType::Cement, RenderType::Gypsum, RenderType::Lime];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.to_lowercase().trim() {
            "cement" => Ok(RenderType::Cement),
            "gypsum" => Ok(RenderType::Gypsum),
            "lime" => Ok(RenderType::Lime),
            _ => Err(EstimateError::invalid_input(
                "render_type",
                s,
                "Expected one of: cement, gypsum, lime",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RenderType::Cement => "Cement Render",
            RenderType::Gypsum => "Gypsum Render",
            RenderType::Lime => "Lime Render",
        }
    }
}

impl std::fmt::Display for RenderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-m³ consumption rates for one render mix.
///
/// Rates may legitimately be zero: gypsum render uses neither cement nor
/// sand, only a bagged additive. Zero-rate lines are omitted from the
/// resulting bill rather than reported as zeros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderRow {
    /// Cement consumption (kg per m³), may be 0
    pub cement_kg_per_m3: f64,
    /// Sand consumption (m³ per m³), may be 0
    pub sand_m3_per_m3: f64,
    /// Additive consumption (kg per m³), may be 0
    pub additive_kg_per_m3: f64,
    /// Estimated all-in cost (EGP per m³)
    pub cost_per_m3: f64,
}

/// Nominal tile size (cm x cm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileSize {
    #[serde(rename = "60x60")]
    T60x60,
    #[serde(rename = "50x50")]
    T50x50,
    #[serde(rename = "40x40")]
    T40x40,
    #[serde(rename = "30x30")]
    T30x30,
    #[serde(rename = "20x20")]
    T20x20,
}

impl TileSize {
    /// All tile size variants for UI selection
    pub const ALL: [TileSize; 5] = [
        TileSize::T60x60,
        TileSize::T50x50,
        TileSize::T40x40,
        TileSize::T30x30,
        TileSize::T20x20,
    ];

    /// Parse from common string representations ("60x60", "60 x 60", "60")
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.to_lowercase().replace([' ', '*'], "").as_str() {
            "60x60" | "60" => Ok(TileSize::T60x60),
            "50x50" | "50" => Ok(TileSize::T50x50),
            "40x40" | "40" => Ok(TileSize::T40x40),
            "30x30" | "30" => Ok(TileSize::T30x30),
            "20x20" | "20" => Ok(TileSize::T20x20),
            _ => Err(EstimateError::invalid_input(
                "tile_size",
                s,
                "Expected one of: 60x60, 50x50, 40x40, 30x30, 20x20",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TileSize::T60x60 => "60 x 60 cm",
            TileSize::T50x50 => "50 x 50 cm",
            TileSize::T40x40 => "40 x 40 cm",
            TileSize::T30x30 => "30 x 30 cm",
            TileSize::T20x20 => "20 x 20 cm",
        }
    }
}

impl std::fmt::Display for TileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Packaging and pricing for one tile format
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileRow {
    /// Coverage of a single tile (m²)
    pub area_per_tile_m2: f64,
    /// Tiles per retail box
    pub tiles_per_box: u32,
    /// Price per tile (EGP)
    pub price_per_tile: f64,
}

/// Flooring waste allowance selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WasteAllowance {
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "15")]
    Fifteen,
}

impl WasteAllowance {
    /// All waste allowance variants for UI selection
    pub const ALL: [WasteAllowance; 3] = [
        WasteAllowance::Five,
        WasteAllowance::Ten,
        WasteAllowance::Fifteen,
    ];

    /// Waste percentage as a number
    pub fn percent(&self) -> f64 {
        match self {
            WasteAllowance::Five => 5.0,
            WasteAllowance::Ten => 10.0,
            WasteAllowance::Fifteen => 15.0,
        }
    }

    /// Parse from a percentage string ("5", "10%", ...)
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.trim().trim_end_matches('%') {
            "5" => Ok(WasteAllowance::Five),
            "10" => Ok(WasteAllowance::Ten),
            "15" => Ok(WasteAllowance::Fifteen),
            _ => Err(EstimateError::invalid_input(
                "waste",
                s,
                "Expected one of: 5, 10, 15",
            )),
        }
    }
}

impl std::fmt::Display for WasteAllowance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Tile installation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallMethod {
    /// Thin-bed tile adhesive
    #[serde(rename = "adhesive")]
    Adhesive,
    /// Traditional cement-sand mortar bed
    #[serde(rename = "mortar")]
    MortarBed,
}

impl InstallMethod {
    /// All install method variants for UI selection
    pub const ALL: [InstallMethod; 2] = [InstallMethod::Adhesive, InstallMethod::MortarBed];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.to_lowercase().trim() {
            "adhesive" | "glue" => Ok(InstallMethod::Adhesive),
            "mortar" | "mortar-bed" | "cement" => Ok(InstallMethod::MortarBed),
            _ => Err(EstimateError::invalid_input(
                "install_method",
                s,
                "Expected one of: adhesive, mortar",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            InstallMethod::Adhesive => "Adhesive",
            InstallMethod::MortarBed => "Mortar Bed",
        }
    }
}

impl std::fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-m² consumption and labor pricing for tile installation.
///
/// Exactly one of the two material branches applies per job: adhesive
/// mass, or a cement + sand mortar bed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallSpec {
    /// Adhesive consumption (kg per m², adhesive method)
    pub adhesive_kg_per_m2: f64,
    /// Labor cost for adhesive installation (EGP per m²)
    pub adhesive_cost_per_m2: f64,
    /// Cement consumption (kg per m², mortar-bed method)
    pub mortar_cement_kg_per_m2: f64,
    /// Sand consumption (m³ per m², mortar-bed method)
    pub mortar_sand_m3_per_m2: f64,
    /// Labor cost for mortar-bed installation (EGP per m²)
    pub mortar_cost_per_m2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_type_parsing() {
        assert_eq!(
            RenderType::from_str_flexible("Gypsum").unwrap(),
            RenderType::Gypsum
        );
        assert!(RenderType::from_str_flexible("stucco").is_err());
    }

    #[test]
    fn test_tile_size_parsing() {
        assert_eq!(
            TileSize::from_str_flexible("60 x 60").unwrap(),
            TileSize::T60x60
        );
        assert!(TileSize::from_str_flexible("25").is_err());
    }

    #[test]
    fn test_waste_allowance() {
        assert_eq!(WasteAllowance::from_str_flexible("10%").unwrap().percent(), 10.0);
        assert!(WasteAllowance::from_str_flexible("12").is_err());
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&TileSize::T40x40).unwrap();
        assert_eq!(json, "\"40x40\"");

        let parsed: InstallMethod = serde_json::from_str("\"mortar\"").unwrap();
        assert_eq!(parsed, InstallMethod::MortarBed);
    }
}
