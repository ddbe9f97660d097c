//! Angular dimension defined by two lines

use super::{
    clamp_offset, DimensionBase, DimensionBehavior, DimensionBlockBuilder, DimensionType,
    PlaneTransform,
};
use crate::entities::Line;
use crate::error::{DimensionError, Result};
use crate::tables::{DimStyle, TextMovement};
use crate::types::{line_intersection, world_to_ocs, Matrix3, Vector2, Vector3, EPSILON};

/// A reference line of an angular dimension, in the dimension's OCS
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRef {
    pub start: Vector2,
    pub end: Vector2,
}

impl LineRef {
    /// Create a line reference
    pub const fn new(start: Vector2, end: Vector2) -> Self {
        LineRef { start, end }
    }

    /// Direction from start to end (not normalized)
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Same line, opposite direction
    pub fn reversed(self) -> Self {
        LineRef {
            start: self.end,
            end: self.start,
        }
    }
}

/// Angular dimension measuring the angle between two lines
///
/// The lines are stored in OCS. The measured angle is the unsigned angle
/// between their directions; which of the two lines is "first" decides on
/// which side of the vertex the arc is drawn, and
/// [`set_dimension_line_position`](Self::set_dimension_line_position)
/// reassigns the roles so the arc passes through the picked point.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularDimension2Line {
    pub base: DimensionBase,
    first_line: LineRef,
    second_line: LineRef,
    offset: f64,
    arc_definition_point: Vector2,
}

impl AngularDimension2Line {
    /// Create a dimension from two OCS lines with the standard style
    pub fn new(first_line: LineRef, second_line: LineRef, offset: f64) -> Result<Self> {
        Self::builder()
            .first_line(first_line)
            .second_line(second_line)
            .offset(offset)
            .style(DimStyle::standard())
            .build()
    }

    /// Create a dimension from two world-space lines
    ///
    /// The endpoints are projected into the plane defined by `normal`.
    pub fn from_lines(
        first_line: &Line,
        second_line: &Line,
        offset: f64,
        normal: Vector3,
        style: DimStyle,
    ) -> Result<Self> {
        Self::builder()
            .first_world_line(first_line)
            .second_world_line(second_line)
            .normal(normal)
            .offset(offset)
            .style(style)
            .build()
    }

    /// Start building a dimension
    pub fn builder() -> AngularDimension2LineBuilder {
        AngularDimension2LineBuilder::default()
    }

    /// First reference line
    pub fn first_line(&self) -> LineRef {
        self.first_line
    }

    /// Second reference line
    pub fn second_line(&self) -> LineRef {
        self.second_line
    }

    /// Set the first reference line
    ///
    /// Not validated here; the next derivation fails if the lines became
    /// parallel.
    pub fn set_first_line(&mut self, line: LineRef) {
        self.first_line = line;
    }

    /// Set the second reference line
    ///
    /// Not validated here; the next derivation fails if the lines became
    /// parallel.
    pub fn set_second_line(&mut self, line: LineRef) {
        self.second_line = line;
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
        if let Ok(center) = self.center_point() {
            self.place_arc(center);
        }
        Ok(())
    }

    /// Point on the dimension arc, midway between the two lines
    pub fn arc_definition_point(&self) -> Vector2 {
        self.arc_definition_point
    }

    /// Intersection of the two (infinite) reference lines
    pub fn center_point(&self) -> Result<Vector2> {
        vertex(&self.first_line, &self.second_line)
    }

    /// Angle between the line directions, in radians within [0, π]
    pub fn measurement_radians(&self) -> f64 {
        self.first_line
            .direction()
            .angle_between(&self.second_line.direction())
    }

    /// Angle between the line directions, in degrees within [0, 180]
    pub fn measurement(&self) -> f64 {
        self.measurement_radians().to_degrees()
    }

    /// Move the dimension arc so it passes through `point`
    ///
    /// Reassigns the first/second roles of the lines (and their direction
    /// sense) so the arc, swept counter-clockwise from the first line to the
    /// second, covers the quadrant containing `point`.
    pub fn set_dimension_line_position(&mut self, point: Vector2) -> Result<()> {
        self.solve_position(point, true)
    }

    /// Recompute the derived points without reassigning line roles
    pub fn update_reference_points(&mut self) -> Result<()> {
        let center = self.center_point()?;
        log::trace!("updating angular dimension reference points around {center}");

        if self.base.text_position_manually_set()
            && self.base.text_movement() == TextMovement::BesideDimLine
        {
            let text = self.base.text_reference_point();
            return self.solve_position(text, false);
        }

        self.place_arc(center);
        Ok(())
    }

    /// Apply a linear map and a translation to the dimension
    ///
    /// Fails with [`DimensionError::InvalidGeometry`] if the transformed
    /// lines are parallel; the dimension is left untouched in that case.
    pub fn transform_by(&mut self, linear: &Matrix3, translation: Vector3) -> Result<()> {
        let plane = PlaneTransform::new(self.base.normal(), self.base.elevation(), linear, translation);

        let start1 = plane.apply(self.first_line.start);
        let elevation = start1.z;
        let first = LineRef::new(start1.xy(), plane.apply(self.first_line.end).xy());
        let second = LineRef::new(
            plane.apply(self.second_line.start).xy(),
            plane.apply(self.second_line.end).xy(),
        );

        if first.direction().is_parallel_to(&second.direction()) {
            log::warn!("transform rejected: it makes the dimension lines parallel");
            return Err(DimensionError::parallel_lines());
        }

        let arc_point = plane.apply(self.arc_definition_point).xy();
        let definition_point = plane.apply(self.base.definition_point()).xy();
        let text_point = self
            .base
            .text_position_manually_set()
            .then(|| plane.apply(self.base.text_reference_point()).xy());

        self.first_line = first;
        self.second_line = second;
        self.arc_definition_point = arc_point;
        self.base.set_definition_point(definition_point);
        if let Some(text) = text_point {
            self.base.move_text_reference_point(text);
        }
        self.base.set_plane(plane.new_normal(), elevation);

        self.solve_position(arc_point, true)
    }

    /// Position solver shared by user repositioning and recalculation
    fn solve_position(&mut self, point: Vector2, normalize: bool) -> Result<()> {
        let center = self.center_point()?;

        if normalize {
            let (first, second) = normalize_roles(self.first_line, self.second_line, point - center);
            if first != self.first_line || second != self.second_line {
                log::debug!("angular dimension lines reassigned for target {point}");
            }
            self.first_line = first;
            self.second_line = second;
        }

        self.offset = clamp_offset(center.distance(&point));
        self.place_arc(center);
        Ok(())
    }

    /// Definition point, arc point and (unless manual) text anchor
    ///
    /// The arc starts at the angle of the first line's direction, which is
    /// the angle from the vertex to the first line's end only when that end
    /// lies beyond the vertex. For a segment drawn towards the vertex the
    /// arc lands in the opposite sector until the next repositioning.
    fn place_arc(&mut self, center: Vector2) {
        self.base.set_definition_point(self.second_line.end);

        let start_angle = self.first_line.direction().angle();
        let mid_angle = start_angle + self.measurement_radians() * 0.5;
        self.arc_definition_point = center.polar(self.offset, mid_angle);

        self.base.place_text(center, self.arc_definition_point);
    }
}

/// Vertex of two reference lines
fn vertex(first: &LineRef, second: &LineRef) -> Result<Vector2> {
    line_intersection(first.start, first.direction(), second.start, second.direction())
        .ok_or_else(DimensionError::parallel_lines)
}

/// Assign the first/second roles so the counter-clockwise sweep from the
/// first direction to the second contains `dir_offset`
///
/// The two directions split the plane into four sectors. After the pair is
/// wound counter-clockwise, the sign of each line's cross product with
/// `dir_offset` tells which sector the target is in; each sector maps to
/// one role assignment whose sweep is that sector. Targets on a boundary
/// ray are kept by the current assignment, so the result is a fixed point.
fn normalize_roles(first: LineRef, second: LineRef, dir_offset: Vector2) -> (LineRef, LineRef) {
    let (ref1, ref2) = if first.direction().cross(&second.direction()) < 0.0 {
        (second, first)
    } else {
        (first, second)
    };

    if dir_offset.length() < EPSILON {
        return (ref1, ref2);
    }

    let cross_first = ref1.direction().cross(&dir_offset);
    let cross_second = ref2.direction().cross(&dir_offset);

    match (cross_first >= 0.0, cross_second) {
        (true, c) if c <= 0.0 => (ref1, ref2),
        (true, _) => (ref2, ref1.reversed()),
        (false, c) if c >= 0.0 => (ref1.reversed(), ref2.reversed()),
        (false, _) => (ref2.reversed(), ref1),
    }
}

impl DimensionBehavior for AngularDimension2Line {
    fn base(&self) -> &DimensionBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DimensionBase {
        &mut self.base
    }

    fn measurement(&self) -> f64 {
        AngularDimension2Line::measurement(self)
    }

    fn update_reference_points(&mut self) -> Result<()> {
        AngularDimension2Line::update_reference_points(self)
    }

    fn set_dimension_line_position(&mut self, point: Vector2) -> Result<()> {
        AngularDimension2Line::set_dimension_line_position(self, point)
    }

    fn transform_by(&mut self, linear: &Matrix3, translation: Vector3) -> Result<()> {
        AngularDimension2Line::transform_by(self, linear, translation)
    }

    fn build_block<B: DimensionBlockBuilder>(&mut self, builder: &B, name: &str) -> B::Block {
        self.base.block_name = Some(name.to_string());
        builder.angular_2line(self, name)
    }
}

/// Where a reference line of the builder comes from
#[derive(Debug, Clone)]
enum LineSource {
    Local(LineRef),
    World(Vector3, Vector3),
}

/// Builder for [`AngularDimension2Line`]
///
/// Lines, offset and style are validated by [`build`](Self::build); the
/// normal defaults to +Z.
#[derive(Debug, Clone, Default)]
pub struct AngularDimension2LineBuilder {
    first: Option<LineSource>,
    second: Option<LineSource>,
    offset: f64,
    normal: Option<Vector3>,
    elevation: f64,
    style: Option<DimStyle>,
    layer: Option<String>,
}

impl AngularDimension2LineBuilder {
    /// First line, already in OCS
    pub fn first_line(mut self, line: LineRef) -> Self {
        self.first = Some(LineSource::Local(line));
        self
    }

    /// Second line, already in OCS
    pub fn second_line(mut self, line: LineRef) -> Self {
        self.second = Some(LineSource::Local(line));
        self
    }

    /// First line, in world coordinates
    pub fn first_world_line(mut self, line: &Line) -> Self {
        self.first = Some(LineSource::World(line.start, line.end));
        self
    }

    /// Second line, in world coordinates
    pub fn second_world_line(mut self, line: &Line) -> Self {
        self.second = Some(LineSource::World(line.start, line.end));
        self
    }

    /// Distance from the vertex to the dimension arc
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Normal of the dimension plane
    pub fn normal(mut self, normal: Vector3) -> Self {
        self.normal = Some(normal);
        self
    }

    /// Elevation used when no world-space line sets it
    pub fn elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Dimension style
    pub fn style(mut self, style: DimStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Layer of the dimension
    pub fn layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    /// Validate the inputs and build the dimension
    pub fn build(self) -> Result<AngularDimension2Line> {
        let first = self
            .first
            .ok_or_else(|| DimensionError::InvalidArgument("the first line is missing".to_string()))?;
        let second = self
            .second
            .ok_or_else(|| DimensionError::InvalidArgument("the second line is missing".to_string()))?;
        let style = self
            .style
            .ok_or_else(|| DimensionError::InvalidArgument("the dimension style is missing".to_string()))?;

        let mut base = DimensionBase::new(DimensionType::Angular, style);
        base.set_normal(self.normal.unwrap_or(Vector3::UNIT_Z))?;
        if let Some(layer) = self.layer {
            base.common.layer = layer;
        }

        let mut elevation = self.elevation;
        let mut world_elevation = None;
        let mut project = |source: LineSource| match source {
            LineSource::Local(line) => line,
            LineSource::World(start, end) => {
                let (ocs, z) = world_to_ocs(&[start, end], base.normal());
                world_elevation.get_or_insert(z);
                LineRef::new(ocs[0], ocs[1])
            }
        };
        let first_line = project(first);
        let second_line = project(second);
        if let Some(z) = world_elevation {
            elevation = z;
        }
        base.set_elevation(elevation);

        if first_line.direction().is_parallel_to(&second_line.direction()) {
            return Err(DimensionError::parallel_lines());
        }
        if self.offset < 0.0 {
            return Err(DimensionError::OutOfRange {
                name: "offset",
                value: self.offset,
            });
        }

        let mut dimension = AngularDimension2Line {
            base,
            first_line,
            second_line,
            offset: self.offset,
            arc_definition_point: Vector2::ZERO,
        };
        dimension.update_reference_points()?;
        Ok(dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, SQRT_2};

    const TOL: f64 = 1e-9;

    fn right_angle(offset: f64) -> AngularDimension2Line {
        AngularDimension2Line::new(
            LineRef::new(Vector2::ZERO, Vector2::new(1.0, 0.0)),
            LineRef::new(Vector2::ZERO, Vector2::new(0.0, 1.0)),
            offset,
        )
        .unwrap()
    }

    #[test]
    fn test_right_angle_measurement() {
        let dim = right_angle(0.1);
        assert!((dim.measurement() - 90.0).abs() < TOL);
        assert!(dim.center_point().unwrap().approx_eq(&Vector2::ZERO, TOL));
    }

    #[test]
    fn test_construction_places_arc_at_offset() {
        let dim = right_angle(0.1);
        let expected = Vector2::ZERO.polar(0.1, FRAC_PI_4);
        assert!(dim.arc_definition_point().approx_eq(&expected, TOL));
        assert_eq!(dim.base.definition_point(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_set_dimension_line_position() {
        let mut dim = right_angle(0.1);
        dim.set_dimension_line_position(Vector2::new(1.0, 1.0)).unwrap();

        assert!((dim.offset() - SQRT_2).abs() < TOL);
        let arc = dim.arc_definition_point();
        assert!((arc.length() - SQRT_2).abs() < TOL);
        assert!((arc.angle() - FRAC_PI_4).abs() < TOL);
        assert!(arc.approx_eq(&Vector2::new(1.0, 1.0), TOL));
    }

    #[test]
    fn test_text_anchor_follows_arc() {
        let mut dim = right_angle(1.0);
        dim.set_dimension_line_position(Vector2::new(2.0, 2.0)).unwrap();
        let gap = dim.base.text_gap() * dim.base.overall_scale();
        let expected = dim.arc_definition_point().polar(gap, FRAC_PI_4);
        assert!(dim.base.text_reference_point().approx_eq(&expected, TOL));
    }

    #[test]
    fn test_opposite_quadrant_reverses_both_lines() {
        let mut dim = right_angle(1.0);
        dim.set_dimension_line_position(Vector2::new(-1.0, -1.0)).unwrap();

        assert_eq!(dim.first_line().direction(), Vector2::new(-1.0, 0.0));
        assert_eq!(dim.second_line().direction(), Vector2::new(0.0, -1.0));
        assert!(dim.arc_definition_point().approx_eq(&Vector2::new(-1.0, -1.0), TOL));
        assert!((dim.measurement() - 90.0).abs() < TOL);
    }

    #[test]
    fn test_every_quadrant_puts_arc_through_target() {
        let targets = [
            Vector2::new(3.0, 1.0),
            Vector2::new(-1.0, 2.0),
            Vector2::new(-2.0, -0.5),
            Vector2::new(0.5, -4.0),
        ];
        for target in targets {
            let mut dim = AngularDimension2Line::new(
                LineRef::new(Vector2::new(-1.0, -1.0), Vector2::new(2.0, 2.0)),
                LineRef::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, -0.5)),
                1.0,
            )
            .unwrap();
            dim.set_dimension_line_position(target).unwrap();

            let arc_dir = dim.arc_definition_point().normalize();
            let first = dim.first_line().direction();
            let second = dim.second_line().direction();
            assert!(first.cross(&second) > 0.0);
            assert!(first.cross(&target) >= -TOL, "target {target}");
            assert!(second.cross(&target) <= TOL, "target {target}");
            assert!(first.cross(&arc_dir) > 0.0 && second.cross(&arc_dir) < 0.0);
        }
    }

    #[test]
    fn test_clockwise_pair_is_rewound() {
        let mut dim = AngularDimension2Line::new(
            LineRef::new(Vector2::ZERO, Vector2::new(0.0, 1.0)),
            LineRef::new(Vector2::ZERO, Vector2::new(1.0, 0.0)),
            1.0,
        )
        .unwrap();
        dim.set_dimension_line_position(Vector2::new(1.0, 1.0)).unwrap();
        assert_eq!(dim.first_line().end, Vector2::new(1.0, 0.0));
        assert_eq!(dim.second_line().end, Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_target_on_boundary_is_stable() {
        let mut dim = right_angle(1.0);
        dim.set_dimension_line_position(Vector2::new(0.0, -2.0)).unwrap();
        let once = dim.clone();
        dim.set_dimension_line_position(Vector2::new(0.0, -2.0)).unwrap();
        assert_eq!(dim, once);
    }

    #[test]
    fn test_lines_drawn_towards_vertex_start_from_direction() {
        let mut dim = AngularDimension2Line::new(
            LineRef::new(Vector2::new(-2.0, 0.0), Vector2::new(-1.0, 0.0)),
            LineRef::new(Vector2::new(0.0, -2.0), Vector2::new(0.0, -1.0)),
            1.0,
        )
        .unwrap();
        let expected = Vector2::ZERO.polar(1.0, FRAC_PI_4);
        assert!(dim.arc_definition_point().approx_eq(&expected, TOL));

        dim.set_dimension_line_position(Vector2::new(-1.0, -1.0)).unwrap();
        assert!(dim.arc_definition_point().approx_eq(&Vector2::new(-1.0, -1.0), TOL));
        assert_eq!(dim.first_line().direction(), Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn test_target_at_center_clamps_offset() {
        let mut dim = right_angle(1.0);
        dim.set_dimension_line_position(Vector2::ZERO).unwrap();
        assert_eq!(dim.offset(), EPSILON);
    }

    #[test]
    fn test_parallel_lines_rejected() {
        let err = AngularDimension2Line::new(
            LineRef::new(Vector2::ZERO, Vector2::new(1.0, 0.0)),
            LineRef::new(Vector2::new(0.0, 1.0), Vector2::new(-3.0, 1.0)),
            1.0,
        )
        .unwrap_err();
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn test_set_offset_moves_arc_and_text() {
        let mut dim = right_angle(0.1);
        let text_before = dim.base.text_reference_point();
        dim.set_offset(5.0).unwrap();

        let center = dim.center_point().unwrap();
        let arc = dim.arc_definition_point();
        assert!((center.distance(&arc) - 5.0).abs() < TOL);
        assert!((arc.angle() - FRAC_PI_4).abs() < TOL);

        let gap = dim.base.text_gap() * dim.base.overall_scale();
        let text = dim.base.text_reference_point();
        assert!((center.distance(&text) - (5.0 + gap)).abs() < TOL);
        assert!(center.distance(&text) > center.distance(&text_before));
    }

    #[test]
    fn test_set_offset_on_parallel_lines_is_deferred() {
        let mut dim = right_angle(1.0);
        let arc_before = dim.arc_definition_point();
        dim.set_second_line(LineRef::new(Vector2::new(0.0, 2.0), Vector2::new(5.0, 2.0)));

        dim.set_offset(3.0).unwrap();
        assert_eq!(dim.offset(), 3.0);
        assert_eq!(dim.arc_definition_point(), arc_before);
        assert!(dim.update_reference_points().unwrap_err().is_invalid_geometry());
    }

    #[test]
    fn test_negative_offset_rejected() {
        let err = AngularDimension2Line::new(
            LineRef::new(Vector2::ZERO, Vector2::new(1.0, 0.0)),
            LineRef::new(Vector2::ZERO, Vector2::new(0.0, 1.0)),
            -1.0,
        )
        .unwrap_err();
        assert!(matches!(err, DimensionError::OutOfRange { name: "offset", .. }));

        let mut dim = right_angle(1.0);
        assert!(dim.set_offset(-0.5).is_err());
        assert_eq!(dim.offset(), 1.0);
    }

    #[test]
    fn test_missing_inputs_rejected() {
        let line = LineRef::new(Vector2::ZERO, Vector2::UNIT_X);
        let missing_style = AngularDimension2Line::builder()
            .first_line(line)
            .second_line(LineRef::new(Vector2::ZERO, Vector2::UNIT_Y))
            .build();
        assert!(matches!(missing_style, Err(DimensionError::InvalidArgument(_))));

        let missing_line = AngularDimension2Line::builder()
            .first_line(line)
            .style(DimStyle::standard())
            .build();
        assert!(matches!(missing_line, Err(DimensionError::InvalidArgument(_))));
    }

    #[test]
    fn test_lazy_setter_validation() {
        let mut dim = right_angle(1.0);
        dim.set_second_line(LineRef::new(Vector2::new(0.0, 2.0), Vector2::new(5.0, 2.0)));
        assert!(dim.update_reference_points().unwrap_err().is_invalid_geometry());
        assert!(dim.set_dimension_line_position(Vector2::new(1.0, 1.0)).is_err());
        assert!(dim.center_point().is_err());
    }

    #[test]
    fn test_manual_text_beside_dim_line_moves_arc() {
        let mut dim = right_angle(1.0);
        dim.base.set_text_reference_point(Vector2::new(3.0, 4.0));
        dim.update_reference_points().unwrap();

        assert!((dim.offset() - 5.0).abs() < TOL);
        assert_eq!(dim.base.text_reference_point(), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_manual_text_with_leader_is_left_alone() {
        let mut dim = right_angle(1.0);
        dim.base.style.dimtmove = TextMovement::OverDimLineWithLeader;
        dim.base.set_text_reference_point(Vector2::new(3.0, 4.0));
        dim.update_reference_points().unwrap();

        assert_eq!(dim.offset(), 1.0);
        assert_eq!(dim.base.text_reference_point(), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_from_world_lines_projects_into_plane() {
        let first = Line::from_coords(0.0, 0.0, 5.0, 2.0, 0.0, 5.0);
        let second = Line::from_coords(0.0, 0.0, 5.0, 0.0, 3.0, 5.0);
        let dim =
            AngularDimension2Line::from_lines(&first, &second, 1.0, Vector3::UNIT_Z, DimStyle::standard())
                .unwrap();

        assert!((dim.base.elevation() - 5.0).abs() < TOL);
        assert!(dim.first_line().end.approx_eq(&Vector2::new(2.0, 0.0), TOL));
        assert!((dim.measurement() - 90.0).abs() < TOL);
    }

    #[test]
    fn test_transform_translation() {
        let mut dim = right_angle(1.0);
        dim.transform_by(&Matrix3::identity(), Vector3::new(2.0, 3.0, 4.0))
            .unwrap();

        assert!(dim.center_point().unwrap().approx_eq(&Vector2::new(2.0, 3.0), TOL));
        assert!((dim.base.elevation() - 4.0).abs() < TOL);
        assert!((dim.offset() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_degenerate_transform_is_rolled_back() {
        let mut dim = AngularDimension2Line::new(
            LineRef::new(Vector2::ZERO, Vector2::new(1.0, 0.0)),
            LineRef::new(Vector2::ZERO, Vector2::new(1.0, 1.0)),
            1.0,
        )
        .unwrap();
        let before = dim.clone();

        let err = dim
            .transform_by(&Matrix3::scaling(1.0, 0.0, 1.0), Vector3::ZERO)
            .unwrap_err();
        assert!(err.is_invalid_geometry());
        assert_eq!(dim, before);
    }

    #[test]
    fn test_build_block_records_name() {
        struct Names;
        impl DimensionBlockBuilder for Names {
            type Block = String;
            fn angular_2line(&self, dimension: &AngularDimension2Line, name: &str) -> String {
                format!("{name}:{:.0}", dimension.measurement())
            }
            fn angular_3point(&self, _: &super::super::AngularDimension3Point, name: &str) -> String {
                name.to_string()
            }
        }

        let mut dim = right_angle(1.0);
        let block = DimensionBehavior::build_block(&mut dim, &Names, "*D1");
        assert_eq!(block, "*D1:90");
        assert_eq!(dim.base.block_name.as_deref(), Some("*D1"));
    }
}
