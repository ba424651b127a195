//! # estimate_core - Construction Material Estimation Engine
//!
//! `estimate_core` turns simple geometric and categorical inputs into
//! material quantities (volumes, masses, counts) and an approximate
//! cost, governed by a hand-authored coefficient catalog, ceiling
//! rounding to purchasable units, and per-category waste allowances.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take validated input and a
//!   read-only catalog reference and return a [`bill::MaterialBill`]
//! - **JSON-First**: all inputs, results, and errors implement
//!   Serialize/Deserialize
//! - **Closed catalogs**: material subtypes are enums, so an unknown
//!   subtype cannot reach a calculator
//! - **Round up**: bags, rods, boxes, and whole cubic meters are never
//!   under-provisioned; cost stays a plain unrounded estimate
//!
//! ## Quick Start
//!
//! ```rust
//! use estimate_core::catalog::{Catalog, SlabSystem};
//! use estimate_core::estimators::ceiling::{calculate, CeilingInput};
//!
//! let input = CeilingInput {
//!     label: "Roof slab".to_string(),
//!     length_m: 4.0,
//!     width_m: 3.0,
//!     thickness_cm: 15.0,
//!     system: SlabSystem::Normal,
//! };
//!
//! let bill = calculate(&input, Catalog::builtin()).unwrap();
//! assert_eq!(bill.cement_bags, Some(13));
//! assert_eq!(bill.steel_rods, Some(130));
//! ```
//!
//! ## Modules
//!
//! - [`estimators`] - the five calculators and the [`estimators::EstimateItem`] wrapper
//! - [`catalog`] - coefficient tables and their closed selector enums
//! - [`bill`] - the MaterialBill result type
//! - [`validate`] - input range checks guarding every entry point
//! - [`units`] - metric newtypes and the purchase-unit rounding policy
//! - [`errors`] - structured error types
//! - [`history`] - best-effort local log of saved estimates

pub mod bill;
pub mod catalog;
pub mod errors;
pub mod estimators;
pub mod history;
pub mod units;
pub mod validate;

// Re-export commonly used types at crate root for convenience
pub use bill::MaterialBill;
pub use catalog::Catalog;
pub use errors::{EstimateError, EstimateResult};
pub use estimators::EstimateItem;
pub use history::{load_log, save_log, EstimateLog, SavedEstimate};
