//! # Coefficient Catalog
//!
//! Static lookup tables keyed by material/method subtype. Each calculator
//! consults one row of the catalog for its per-unit consumption rates and
//! unit prices; the catalog is never mutated.
//!
//! The selectors are closed enums, so every lookup is an exhaustive
//! `match` - an unknown subtype cannot reach a calculator.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::catalog::{Catalog, SlabSystem};
//!
//! let catalog = Catalog::builtin();
//! let row = catalog.slab(SlabSystem::Normal);
//! assert_eq!(row.cement_kg_per_m3, 350.0);
//! ```

pub mod concrete;
pub mod finishes;
pub mod masonry;

pub use concrete::{ElementKind, ElementRow, SlabRow, SlabSystem, ELEMENT_WASTE_FACTOR};
pub use finishes::{
    InstallMethod, InstallSpec, RenderRow, RenderType, TileRow, TileSize, WasteAllowance,
};
pub use masonry::{BrickRow, BrickType, MortarSpec};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The full coefficient catalog: one row per selector value.
///
/// Constructed once (usually via [`Catalog::builtin`]) and passed by
/// reference into the calculators. Read-only for the life of the process;
/// safe for unsynchronized concurrent reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub slab_normal: SlabRow,
    pub slab_flat: SlabRow,
    pub slab_beams: SlabRow,

    pub brick_red: BrickRow,
    pub brick_block: BrickRow,
    pub brick_hollow: BrickRow,
    pub mortar: MortarSpec,

    pub render_cement: RenderRow,
    pub render_gypsum: RenderRow,
    pub render_lime: RenderRow,

    pub tile_60: TileRow,
    pub tile_50: TileRow,
    pub tile_40: TileRow,
    pub tile_30: TileRow,
    pub tile_20: TileRow,
    pub install: InstallSpec,

    pub element_column: ElementRow,
    pub element_foundation: ElementRow,
    pub element_beam: ElementRow,
}

impl Catalog {
    /// The process-wide built-in catalog, constructed once.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::default);
        &BUILTIN
    }

    /// Look up the coefficient row for a slab system.
    pub fn slab(&self, system: SlabSystem) -> &SlabRow {
        match system {
            SlabSystem::Normal => &self.slab_normal,
            SlabSystem::FlatSlab => &self.slab_flat,
            SlabSystem::BeamAndSlab => &self.slab_beams,
        }
    }

    /// Look up the unit count/price row for a masonry type.
    pub fn brick(&self, brick: BrickType) -> &BrickRow {
        match brick {
            BrickType::RedBrick => &self.brick_red,
            BrickType::CementBlock => &self.brick_block,
            BrickType::HollowBlock => &self.brick_hollow,
        }
    }

    /// Look up the mix row for a render type.
    pub fn render(&self, render: RenderType) -> &RenderRow {
        match render {
            RenderType::Cement => &self.render_cement,
            RenderType::Gypsum => &self.render_gypsum,
            RenderType::Lime => &self.render_lime,
        }
    }

    /// Look up packaging and pricing for a tile size.
    pub fn tile(&self, size: TileSize) -> &TileRow {
        match size {
            TileSize::T60x60 => &self.tile_60,
            TileSize::T50x50 => &self.tile_50,
            TileSize::T40x40 => &self.tile_40,
            TileSize::T30x30 => &self.tile_30,
            TileSize::T20x20 => &self.tile_20,
        }
    }

    /// Look up the coefficient row for a linear element kind.
    pub fn element(&self, kind: ElementKind) -> &ElementRow {
        match kind {
            ElementKind::Column => &self.element_column,
            ElementKind::Foundation => &self.element_foundation,
            ElementKind::Beam => &self.element_beam,
        }
    }
}

impl Default for Catalog {
    /// Hand-authored consumption rates and rough EGP market prices.
    fn default() -> Self {
        Catalog {
            slab_normal: SlabRow {
                cement_kg_per_m3: 350.0,
                sand_m3_per_m3: 0.45,
                gravel_m3_per_m3: 0.8,
                steel_kg_per_m2: 80.0,
                water_l_per_m3: 180.0,
                waste_factor: 1.05,
                cost_per_m3: 1200.0,
            },
            slab_flat: SlabRow {
                cement_kg_per_m3: 380.0,
                sand_m3_per_m3: 0.42,
                gravel_m3_per_m3: 0.85,
                steel_kg_per_m2: 120.0,
                water_l_per_m3: 190.0,
                waste_factor: 1.05,
                cost_per_m3: 1400.0,
            },
            // Beam systems lose more to formwork, hence the 8% waste
            slab_beams: SlabRow {
                cement_kg_per_m3: 400.0,
                sand_m3_per_m3: 0.4,
                gravel_m3_per_m3: 0.9,
                steel_kg_per_m2: 150.0,
                water_l_per_m3: 200.0,
                waste_factor: 1.08,
                cost_per_m3: 1600.0,
            },

            brick_red: BrickRow {
                units_per_m2: 55.0,
                unit_price: 1.2,
            },
            brick_block: BrickRow {
                units_per_m2: 12.5,
                unit_price: 3.5,
            },
            brick_hollow: BrickRow {
                units_per_m2: 12.5,
                unit_price: 2.8,
            },
            mortar: MortarSpec {
                volume_fraction: 0.3,
                cement_kg_per_m3: 300.0,
                sand_m3_per_m3: 1.2,
                cement_price_per_kg: 2.5,
                sand_price_per_m3: 80.0,
                unit_waste_factor: 1.05,
            },

            render_cement: RenderRow {
                cement_kg_per_m3: 250.0,
                sand_m3_per_m3: 1.3,
                additive_kg_per_m3: 0.0,
                cost_per_m3: 400.0,
            },
            render_gypsum: RenderRow {
                cement_kg_per_m3: 0.0,
                sand_m3_per_m3: 0.0,
                additive_kg_per_m3: 800.0,
                cost_per_m3: 300.0,
            },
            render_lime: RenderRow {
                cement_kg_per_m3: 150.0,
                sand_m3_per_m3: 1.2,
                additive_kg_per_m3: 100.0,
                cost_per_m3: 350.0,
            },

            tile_60: TileRow {
                area_per_tile_m2: 0.36,
                tiles_per_box: 4,
                price_per_tile: 25.0,
            },
            tile_50: TileRow {
                area_per_tile_m2: 0.25,
                tiles_per_box: 6,
                price_per_tile: 18.0,
            },
            tile_40: TileRow {
                area_per_tile_m2: 0.16,
                tiles_per_box: 9,
                price_per_tile: 12.0,
            },
            tile_30: TileRow {
                area_per_tile_m2: 0.09,
                tiles_per_box: 12,
                price_per_tile: 8.0,
            },
            tile_20: TileRow {
                area_per_tile_m2: 0.04,
                tiles_per_box: 25,
                price_per_tile: 4.0,
            },
            install: InstallSpec {
                adhesive_kg_per_m2: 5.0,
                adhesive_cost_per_m2: 25.0,
                mortar_cement_kg_per_m2: 15.0,
                mortar_sand_m3_per_m2: 0.02,
                mortar_cost_per_m2: 15.0,
            },

            element_column: ElementRow {
                cement_kg_per_m3: 400.0,
                sand_m3_per_m3: 0.4,
                gravel_m3_per_m3: 0.8,
                steel_kg_per_m3: 120.0,
                cost_per_m3: 1800.0,
            },
            element_foundation: ElementRow {
                cement_kg_per_m3: 350.0,
                sand_m3_per_m3: 0.45,
                gravel_m3_per_m3: 0.85,
                steel_kg_per_m3: 80.0,
                cost_per_m3: 1500.0,
            },
            element_beam: ElementRow {
                cement_kg_per_m3: 380.0,
                sand_m3_per_m3: 0.42,
                gravel_m3_per_m3: 0.82,
                steel_kg_per_m3: 150.0,
                cost_per_m3: 1700.0,
            },
        }
    }
}
