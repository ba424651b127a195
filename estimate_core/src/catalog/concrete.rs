//! Concrete coefficient rows: slab systems and linear elements.
//!
//! Consumption rates are hand-authored from common Egyptian site practice
//! and rough current market pricing (EGP). Rates scale per m³ of poured
//! concrete except slab steel, which scales per m² of floor plan -
//! reinforcement mesh is laid out by area, not by pour depth. Linear
//! members (columns, foundations, beams) are reinforced through their
//! section, so their steel scales per m³.

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Structural system of a poured ceiling/slab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlabSystem {
    /// Conventional solid slab on beams
    #[serde(rename = "normal")]
    Normal,
    /// Flat slab (no drop beams, heavier reinforcement)
    #[serde(rename = "flat")]
    FlatSlab,
    /// Beam-and-slab system (ribbed; highest steel and formwork loss)
    #[serde(rename = "beams")]
    BeamAndSlab,
}

impl SlabSystem {
    /// All slab system variants for UI selection
    pub const ALL: [SlabSystem; 3] = [
        SlabSystem::Normal,
        SlabSystem::FlatSlab,
        SlabSystem::BeamAndSlab,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "normal" | "solid" => Ok(SlabSystem::Normal),
            "flat" | "flat-slab" => Ok(SlabSystem::FlatSlab),
            "beams" | "beam-and-slab" | "ribbed" => Ok(SlabSystem::BeamAndSlab),
            _ => Err(EstimateError::invalid_input(
                "slab_system",
                s,
                "Expected one of: normal, flat, beams",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SlabSystem::Normal => "Normal Slab",
            SlabSystem::FlatSlab => "Flat Slab",
            SlabSystem::BeamAndSlab => "Beams and Slabs",
        }
    }
}

impl std::fmt::Display for SlabSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-unit consumption rates for one slab system.
///
/// All rates are per m³ of concrete except `steel_kg_per_m2`,
/// which is per m² of slab area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabRow {
    /// Cement consumption (kg per m³)
    pub cement_kg_per_m3: f64,
    /// Sand consumption (m³ per m³)
    pub sand_m3_per_m3: f64,
    /// Coarse aggregate consumption (m³ per m³)
    pub gravel_m3_per_m3: f64,
    /// Reinforcement steel (kg per m² of slab area)
    pub steel_kg_per_m2: f64,
    /// Mixing water (liters per m³)
    pub water_l_per_m3: f64,
    /// Waste allowance on the poured volume (e.g. 1.05 = 5%)
    pub waste_factor: f64,
    /// Estimated all-in cost (EGP per m³)
    pub cost_per_m3: f64,
}

/// Kind of linear concrete element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Vertical column
    Column,
    /// Isolated foundation footing
    Foundation,
    /// Horizontal beam
    Beam,
}

impl ElementKind {
    /// All element kind variants for UI selection
    pub const ALL: [ElementKind; 3] = [
        ElementKind::Column,
        ElementKind::Foundation,
        ElementKind::Beam,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.to_lowercase().trim() {
            "column" | "col" => Ok(ElementKind::Column),
            "foundation" | "footing" => Ok(ElementKind::Foundation),
            "beam" => Ok(ElementKind::Beam),
            _ => Err(EstimateError::invalid_input(
                "element_kind",
                s,
                "Expected one of: column, foundation, beam",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Column => "Column",
            ElementKind::Foundation => "Foundation",
            ElementKind::Beam => "Beam",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-unit consumption rates for one linear element kind.
///
/// Unlike [`SlabRow`], steel scales with volume: linear members are
/// reinforced through their cross-section, not by plan area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRow {
    /// Cement consumption (kg per m³)
    pub cement_kg_per_m3: f64,
    /// Sand consumption (m³ per m³)
    pub sand_m3_per_m3: f64,
    /// Coarse aggregate consumption (m³ per m³)
    pub gravel_m3_per_m3: f64,
    /// Reinforcement steel (kg per m³ of concrete)
    pub steel_kg_per_m3: f64,
    /// Estimated all-in cost (EGP per m³)
    pub cost_per_m3: f64,
}

/// Waste allowance applied to linear-element concrete volume
pub const ELEMENT_WASTE_FACTOR: f64 = 1.05;
