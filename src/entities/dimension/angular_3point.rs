//! Angular dimension defined by a vertex and two points

use std::f64::consts::TAU;

use super::{
    clamp_offset, DimensionBase, DimensionBehavior, DimensionBlockBuilder, DimensionType,
    PlaneTransform,
};
use crate::error::{DimensionError, Result};
use crate::tables::{DimStyle, TextMovement};
use crate::types::{normalize_angle, Matrix3, Vector2, Vector3, EPSILON};

/// Sweeps closer than this to a full turn count as zero
const ANGLE_TOLERANCE: f64 = 1e-9;

/// Angular dimension measuring the counter-clockwise sweep from
/// `start_point` to `end_point` around `center`
#[derive(Debug, Clone, PartialEq)]
pub struct AngularDimension3Point {
    pub base: DimensionBase,
    center: Vector2,
    start_point: Vector2,
    end_point: Vector2,
    offset: f64,
    arc_definition_point: Vector2,
}

impl AngularDimension3Point {
    /// Create a dimension from three OCS points
    pub fn new(
        center: Vector2,
        start_point: Vector2,
        end_point: Vector2,
        offset: f64,
        style: DimStyle,
    ) -> Result<Self> {
        validate_points(center, start_point, end_point)?;
        if offset < 0.0 {
            return Err(DimensionError::OutOfRange {
                name: "offset",
                value: offset,
            });
        }

        let mut dimension = AngularDimension3Point {
            base: DimensionBase::new(DimensionType::Angular3Point, style),
            center,
            start_point,
            end_point,
            offset,
            arc_definition_point: Vector2::ZERO,
        };
        dimension.update_reference_points()?;
        Ok(dimension)
    }

    /// Vertex of the angle
    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Set the vertex; validated by the next derivation
    pub fn set_center(&mut self, center: Vector2) {
        self.center = center;
    }

    /// Point on the ray where the sweep starts
    pub fn start_point(&self) -> Vector2 {
        self.start_point
    }

    /// Set the start point; validated by the next derivation
    pub fn set_start_point(&mut self, point: Vector2) {
        self.start_point = point;
    }

    /// Point on the ray where the sweep ends
    pub fn end_point(&self) -> Vector2 {
        self.end_point
    }

    /// Set the end point; validated by the next derivation
    pub fn set_end_point(&mut self, point: Vector2) {
        self.end_point = point;
    }

    /// Distance from the vertex to the dimension arc
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Set the distance from the vertex to the dimension arc
    ///
    /// The arc point and text anchor follow at once when the reference
    /// geometry is valid; otherwise the next derivation reports it.
    pub fn set_offset(&mut self, offset: f64) -> Result<()> {
        if offset < 0.0 {
            return Err(DimensionError::OutOfRange {
                name: "offset",
                value: offset,
            });
        }
        self.offset = offset;
        if validate_points(self.center, self.start_point, self.end_point).is_ok() {
            self.place_arc();
        }
        Ok(())
    }

    /// Point on the dimension arc, midway through the sweep
    pub fn arc_definition_point(&self) -> Vector2 {
        self.arc_definition_point
    }

    /// Counter-clockwise sweep in radians within [0, 2π)
    pub fn measurement_radians(&self) -> f64 {
        sweep(self.center, self.start_point, self.end_point)
    }

    /// Counter-clockwise sweep in degrees within [0, 360)
    pub fn measurement(&self) -> f64 {
        self.measurement_radians().to_degrees()
    }

    /// Move the dimension arc so it passes through `point`
    ///
    /// Start and end are exchanged when `point` lies outside the current
    /// sweep, so the arc always covers the picked side.
    pub fn set_dimension_line_position(&mut self, point: Vector2) -> Result<()> {
        self.solve_position(point, true)
    }

    /// Recompute the derived points without exchanging start and end
    pub fn update_reference_points(&mut self) -> Result<()> {
        validate_points(self.center, self.start_point, self.end_point)?;

        if self.base.text_position_manually_set()
            && self.base.text_movement() == TextMovement::BesideDimLine
        {
            let text = self.base.text_reference_point();
            return self.solve_position(text, false);
        }

        self.place_arc();
        Ok(())
    }

    /// Apply a linear map and a translation to the dimension
    ///
    /// Fails with [`DimensionError::InvalidGeometry`] if the transformed
    /// points collapse; the dimension is left untouched in that case.
    pub fn transform_by(&mut self, linear: &Matrix3, translation: Vector3) -> Result<()> {
        let plane = PlaneTransform::new(self.base.normal(), self.base.elevation(), linear, translation);

        let center = plane.apply(self.center);
        let elevation = center.z;
        let center = center.xy();
        let start = plane.apply(self.start_point).xy();
        let end = plane.apply(self.end_point).xy();

        if let Err(err) = validate_points(center, start, end) {
            log::warn!("transform rejected: {err}");
            return Err(err);
        }

        let arc_point = plane.apply(self.arc_definition_point).xy();
        let definition_point = plane.apply(self.base.definition_point()).xy();
        let text_point = self
            .base
            .text_position_manually_set()
            .then(|| plane.apply(self.base.text_reference_point()).xy());

        self.center = center;
        self.start_point = start;
        self.end_point = end;
        self.arc_definition_point = arc_point;
        self.base.set_definition_point(definition_point);
        if let Some(text) = text_point {
            self.base.move_text_reference_point(text);
        }
        self.base.set_plane(plane.new_normal(), elevation);

        self.solve_position(arc_point, true)
    }

    fn solve_position(&mut self, point: Vector2, normalize: bool) -> Result<()> {
        validate_points(self.center, self.start_point, self.end_point)?;

        let dir_offset = point - self.center;
        if normalize && dir_offset.length() >= EPSILON {
            let start_angle = (self.start_point - self.center).angle();
            let mut phi = normalize_angle(dir_offset.angle() - start_angle);
            if phi > TAU - ANGLE_TOLERANCE {
                phi = 0.0;
            }
            if phi > self.measurement_radians() + ANGLE_TOLERANCE {
                log::debug!("angular dimension start and end exchanged for target {point}");
                std::mem::swap(&mut self.start_point, &mut self.end_point);
            }
        }

        self.offset = clamp_offset(dir_offset.length());
        self.place_arc();
        Ok(())
    }

    fn place_arc(&mut self) {
        self.base.set_definition_point(self.end_point);

        let start_angle = (self.start_point - self.center).angle();
        let mid_angle = start_angle + self.measurement_radians() * 0.5;
        self.arc_definition_point = self.center.polar(self.offset, mid_angle);

        self.base.place_text(self.center, self.arc_definition_point);
    }
}

/// Counter-clockwise sweep from `start` to `end` around `center`
fn sweep(center: Vector2, start: Vector2, end: Vector2) -> f64 {
    let angle = normalize_angle((end - center).angle() - (start - center).angle());
    if angle > TAU - ANGLE_TOLERANCE {
        0.0
    } else {
        angle
    }
}

/// Both rays must exist and differ
fn validate_points(center: Vector2, start: Vector2, end: Vector2) -> Result<()> {
    let to_start = start - center;
    let to_end = end - center;
    if to_start.length() < EPSILON || to_end.length() < EPSILON {
        return Err(DimensionError::InvalidGeometry(
            "a dimension point coincides with the vertex".to_string(),
        ));
    }
    if to_start.is_parallel_to(&to_end) && to_start.dot(&to_end) > 0.0 {
        return Err(DimensionError::InvalidGeometry(
            "the start and end points lie on the same ray".to_string(),
        ));
    }
    Ok(())
}

impl DimensionBehavior for AngularDimension3Point {
    fn base(&self) -> &DimensionBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DimensionBase {
        &mut self.base
    }

    fn measurement(&self) -> f64 {
        AngularDimension3Point::measurement(self)
    }

    fn update_reference_points(&mut self) -> Result<()> {
        AngularDimension3Point::update_reference_points(self)
    }

    fn set_dimension_line_position(&mut self, point: Vector2) -> Result<()> {
        AngularDimension3Point::set_dimension_line_position(self, point)
    }

    fn transform_by(&mut self, linear: &Matrix3, translation: Vector3) -> Result<()> {
        AngularDimension3Point::transform_by(self, linear, translation)
    }

    fn build_block<B: DimensionBlockBuilder>(&mut self, builder: &B, name: &str) -> B::Block {
        self.base.block_name = Some(name.to_string());
        builder.angular_3point(self, name)
    }
}
