//! Public coil build models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently just
//! [`electrothermal`]) based on an opinionated taxonomy. This organization
//! may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The `core`
//! module is an implementation detail; the model module re-exports the types
//! and entry points that make up its public contract.

pub mod electrothermal;
