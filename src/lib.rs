//! # Coil Models
//!
//! Electro-thermal models for rebuildable vaping coil builds.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific coil build models.
//! - [`support`]: Supporting utilities used by models.
//!
//! The one model currently provided is the coil build simulator in
//! [`models::electrothermal::coil`]: a closed-form pipeline that derives a
//! build's electrical and thermal behavior from its wire material and
//! geometry. See that module for the full contract.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//! Utility code starts inside a model's internal `core` module and moves to
//! [`support`] once it is useful across models.

pub mod models;
pub mod support;
