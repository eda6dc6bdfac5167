//! Vehicle registry adapters.
//!
//! Implementations of [`VehicleRegistry`](kentekenbot_core::registry::VehicleRegistry).

pub mod rdw;
