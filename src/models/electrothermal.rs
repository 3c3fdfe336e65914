//! Coupled electrical and thermal models.
//!
//! This module contains models where a build's electrical behavior (resistance,
//! amperage, power) and its thermal behavior (heat flux, heat capacity,
//! ramp-up) are derived together from shared geometry.

pub mod coil;
