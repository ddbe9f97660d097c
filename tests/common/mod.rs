//! Shared test utilities for acad-dimension integration tests.
//!
//! Dimension builders and tolerance-based comparisons, imported by every
//! test crate via `mod common;`.

#![allow(dead_code)]

pub mod builders;
pub mod comparison;
