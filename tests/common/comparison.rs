//! Geometry and dimension comparison utilities for tests.

#![allow(dead_code)]

use acad_dimension::entities::AngularDimension2Line;
use acad_dimension::types::{Vector2, Vector3};

/// Default tolerance for floating-point comparisons.
pub const TOL: f64 = 1e-6;

/// Check approximate equality of two f64 values within `tol`.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Assert two f64 values are approximately equal.
pub fn assert_f64_eq(a: f64, b: f64, tol: f64) {
    assert!(
        approx_eq(a, b, tol),
        "f64 mismatch: {a} vs {b} (delta={}, tol={tol})",
        (a - b).abs()
    );
}

/// Assert two Vector2 values are approximately equal component-wise.
pub fn assert_vec2_eq(a: &Vector2, b: &Vector2, tol: f64) {
    assert!(
        approx_eq(a.x, b.x, tol) && approx_eq(a.y, b.y, tol),
        "Vector2 mismatch: {a} vs {b} tol={tol}"
    );
}

/// Assert two Vector3 values are approximately equal component-wise.
pub fn assert_vec3_eq(a: &Vector3, b: &Vector3, tol: f64) {
    assert!(
        approx_eq(a.x, b.x, tol) && approx_eq(a.y, b.y, tol) && approx_eq(a.z, b.z, tol),
        "Vector3 mismatch: {a} vs {b} tol={tol}"
    );
}

/// Append a diff message if two Vector2 values differ beyond tolerance.
pub fn check_vec2(diffs: &mut Vec<String>, name: &str, a: &Vector2, b: &Vector2, tol: f64) {
    if !approx_eq(a.x, b.x, tol) || !approx_eq(a.y, b.y, tol) {
        diffs.push(format!("{name}: {a} vs {b}"));
    }
}

/// Compare the observable geometry of two dimensions, returning every
/// field that differs.
///
/// Line roles are compared as stored, so a dimension whose lines were
/// reassigned differs from one that kept them.
pub fn compare_dimensions(
    a: &AngularDimension2Line,
    b: &AngularDimension2Line,
    tol: f64,
) -> Vec<String> {
    let mut diffs = Vec::new();
    check_vec2(&mut diffs, "first.start", &a.first_line().start, &b.first_line().start, tol);
    check_vec2(&mut diffs, "first.end", &a.first_line().end, &b.first_line().end, tol);
    check_vec2(&mut diffs, "second.start", &a.second_line().start, &b.second_line().start, tol);
    check_vec2(&mut diffs, "second.end", &a.second_line().end, &b.second_line().end, tol);
    check_vec2(
        &mut diffs,
        "arc",
        &a.arc_definition_point(),
        &b.arc_definition_point(),
        tol,
    );
    check_vec2(
        &mut diffs,
        "definition",
        &a.base.definition_point(),
        &b.base.definition_point(),
        tol,
    );
    check_vec2(
        &mut diffs,
        "text",
        &a.base.text_reference_point(),
        &b.base.text_reference_point(),
        tol,
    );
    if !approx_eq(a.offset(), b.offset(), tol) {
        diffs.push(format!("offset: {} vs {}", a.offset(), b.offset()));
    }
    if !approx_eq(a.base.elevation(), b.base.elevation(), tol) {
        diffs.push(format!("elevation: {} vs {}", a.base.elevation(), b.base.elevation()));
    }
    let (na, nb) = (a.base.normal(), b.base.normal());
    if !(approx_eq(na.x, nb.x, tol) && approx_eq(na.y, nb.y, tol) && approx_eq(na.z, nb.z, tol)) {
        diffs.push(format!("normal: {na} vs {nb}"));
    }
    diffs
}

/// Assert two dimensions have the same geometry within `tol`.
pub fn assert_same_dimension(a: &AngularDimension2Line, b: &AngularDimension2Line, tol: f64) {
    let diffs = compare_dimensions(a, b, tol);
    assert!(diffs.is_empty(), "dimensions differ:\n  {}", diffs.join("\n  "));
}
