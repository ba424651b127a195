//! # Material Estimators
//!
//! One calculator per construction element category. Each module follows
//! the same pattern:
//!
//! - `*Input` - input parameters (JSON-serializable), with `validate()`
//! - `calculate(input, catalog) -> Result<MaterialBill, EstimateError>` -
//!   pure calculation function
//!
//! Every calculator is a side-effect-free function of its inputs and a
//! read-only [`Catalog`](crate::catalog::Catalog) reference; repeated
//! invocations with identical inputs are bit-identical.
//!
//! ## Available Estimators
//!
//! - [`ceiling`] - poured slab/ceiling (area-based steel)
//! - [`masonry`] - brick/block wall with mortar
//! - [`render`] - plaster coat (zero-rate lines omitted)
//! - [`flooring`] - tiles, packaging, and installation
//! - [`element`] - columns, foundations, beams (volume-based steel)

pub mod ceiling;
pub mod element;
pub mod flooring;
pub mod masonry;
pub mod render;

use serde::{Deserialize, Serialize};

use crate::bill::MaterialBill;
use crate::catalog::Catalog;
use crate::errors::EstimateResult;

// Re-export commonly used types
pub use ceiling::CeilingInput;
pub use element::ElementInput;
pub use flooring::FlooringInput;
pub use masonry::WallInput;
pub use render::RenderInput;

/// Enum wrapper for all estimator input types.
///
/// Allows storing heterogeneous estimates in a single collection (the
/// saved-estimate log) while keeping type safety and clean serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EstimateItem {
    /// Poured ceiling/slab estimate
    Ceiling(CeilingInput),
    /// Masonry wall estimate
    Wall(WallInput),
    /// Render/plaster estimate
    Render(RenderInput),
    /// Tile flooring estimate
    Flooring(FlooringInput),
    /// Linear element (column/foundation/beam) estimate
    Element(ElementInput),
}

impl EstimateItem {
    /// Get the user-provided label for this estimate
    pub fn label(&self) -> &str {
        match self {
            EstimateItem::Ceiling(i) => &i.label,
            EstimateItem::Wall(i) => &i.label,
            EstimateItem::Render(i) => &i.label,
            EstimateItem::Flooring(i) => &i.label,
            EstimateItem::Element(i) => &i.label,
        }
    }

    /// Get the estimate category as a string
    pub fn category(&self) -> &'static str {
        match self {
            EstimateItem::Ceiling(_) => "Ceiling",
            EstimateItem::Wall(_) => "Wall",
            EstimateItem::Render(_) => "Render",
            EstimateItem::Flooring(_) => "Flooring",
            EstimateItem::Element(_) => "Element",
        }
    }

    /// Run the matching calculator against a catalog.
    pub fn estimate(&self, catalog: &Catalog) -> EstimateResult<MaterialBill> {
        match self {
            EstimateItem::Ceiling(i) => ceiling::calculate(i, catalog),
            EstimateItem::Wall(i) => masonry::calculate(i, catalog),
            EstimateItem::Render(i) => render::calculate(i, catalog),
            EstimateItem::Flooring(i) => flooring::calculate(i, catalog),
            EstimateItem::Element(i) => element::calculate(i, catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SlabSystem;

    #[test]
    fn test_item_dispatch() {
        let item = EstimateItem::Ceiling(CeilingInput {
            label: "Slab".to_string(),
            length_m: 4.0,
            width_m: 3.0,
            thickness_cm: 15.0,
            system: SlabSystem::Normal,
        });

        assert_eq!(item.category(), "Ceiling");
        assert_eq!(item.label(), "Slab");

        let bill = item.estimate(Catalog::builtin()).unwrap();
        assert_eq!(bill.cement_bags, Some(13));
    }

    #[test]
    fn test_item_serialization_tag() {
        let item = EstimateItem::Render(RenderInput {
            label: "Walls".to_string(),
            area_m2: 40.0,
            thickness_cm: 2.0,
            render: crate::catalog::RenderType::Gypsum,
        });

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Render\""));

        let roundtrip: EstimateItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, roundtrip);
    }
}
