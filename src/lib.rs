//! # acad-dimension
//!
//! Angular dimension entities for a DXF drawing data model.
//!
//! The crate keeps the reference geometry of angular dimensions consistent
//! while they are edited: it derives the vertex and the measured angle,
//! decides which reference line is "first" when the user drags the
//! dimension arc, and re-projects every stored point when the drawing is
//! moved, rotated or scaled.
//!
//! ## Quick Start
//!
//! ```rust
//! use acad_dimension::entities::{AngularDimension2Line, LineRef};
//! use acad_dimension::types::Vector2;
//!
//! let mut dim = AngularDimension2Line::new(
//!     LineRef::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)),
//!     LineRef::new(Vector2::new(0.0, 0.0), Vector2::new(0.0, 1.0)),
//!     0.1,
//! )?;
//! assert!((dim.measurement() - 90.0).abs() < 1e-9);
//!
//! dim.set_dimension_line_position(Vector2::new(1.0, 1.0))?;
//! assert!((dim.offset() - 2f64.sqrt()).abs() < 1e-9);
//! # Ok::<(), acad_dimension::DimensionError>(())
//! ```
//!
//! ## Architecture
//!
//! - `types` - vectors, matrices and the WCS/OCS plane basis
//! - `entities` - the `Entity` trait, `Line`, and the `Dimension` variants
//! - `tables` - the dimension style the dimensions read their defaults from
//! - `xdata` - extended data attached to entities
//!
//! The library logs through the `log` facade and never installs a logger.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod entities;
pub mod error;
pub mod tables;
pub mod types;
pub mod xdata;

// Re-export commonly used types
pub use error::{DimensionError, Result};
pub use types::{Handle, Matrix3, Transform, Vector2, Vector3};

// Re-export entity types
pub use entities::{
    AngularDimension2Line, AngularDimension3Point, Dimension, DimensionBehavior, Entity, Line,
    LineRef,
};

// Re-export table types
pub use tables::{DimStyle, TextMovement};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
