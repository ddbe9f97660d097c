//! Dimension builders shared by the integration tests.

#![allow(dead_code)]

use acad_dimension::entities::{AngularDimension2Line, AngularDimension3Point, LineRef};
use acad_dimension::types::Vector2;
use acad_dimension::DimStyle;

/// Lines along +X and +Y meeting at the origin, both starting at the vertex.
pub fn right_angle(offset: f64) -> AngularDimension2Line {
    AngularDimension2Line::new(
        LineRef::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)),
        LineRef::new(Vector2::new(0.0, 0.0), Vector2::new(0.0, 1.0)),
        offset,
    )
    .unwrap()
}

/// Two lines through `center` with the given directions (radians).
///
/// `first_span` and `second_span` place the endpoints along each line as
/// parameters of the unit direction, so the vertex may lie before, between
/// or beyond the stored endpoints.
pub fn lines_through(
    center: Vector2,
    first_angle: f64,
    first_span: (f64, f64),
    second_angle: f64,
    second_span: (f64, f64),
) -> (LineRef, LineRef) {
    let d1 = Vector2::new(first_angle.cos(), first_angle.sin());
    let d2 = Vector2::new(second_angle.cos(), second_angle.sin());
    (
        LineRef::new(center + d1 * first_span.0, center + d1 * first_span.1),
        LineRef::new(center + d2 * second_span.0, center + d2 * second_span.1),
    )
}

/// Dimension over `lines_through`, with the standard style.
pub fn dimension_through(
    center: Vector2,
    first_angle: f64,
    first_span: (f64, f64),
    second_angle: f64,
    second_span: (f64, f64),
    offset: f64,
) -> AngularDimension2Line {
    let (first, second) = lines_through(center, first_angle, first_span, second_angle, second_span);
    AngularDimension2Line::new(first, second, offset).unwrap()
}

/// Quarter sweep from +X to +Y around the origin.
pub fn quarter_3point(offset: f64) -> AngularDimension3Point {
    AngularDimension3Point::new(
        Vector2::ZERO,
        Vector2::new(2.0, 0.0),
        Vector2::new(0.0, 3.0),
        offset,
        DimStyle::standard(),
    )
    .unwrap()
}
