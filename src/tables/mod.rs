//! Table entries consumed by dimension entities

pub mod dimstyle;

pub use dimstyle::{AngularUnitFormat, DimStyle, TextMovement};
