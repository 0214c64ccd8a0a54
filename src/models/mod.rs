//! Data models for the atelier backend.
//!
//! Wire shapes are camelCase to match the admin frontend.

mod booking;
mod stats;
mod tattoo;

pub use booking::*;
pub use stats::*;
pub use tattoo::*;
