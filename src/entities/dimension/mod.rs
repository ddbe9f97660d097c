//! Dimension entity types
//!
//! Every dimension stores its geometry as 2D points in its object
//! coordinate system (OCS): the plane defined by `normal` at height
//! `elevation`. Derived points (arc point, definition point, text anchor)
//! are recomputed from the reference geometry after every committed edit.

use crate::entities::{Entity, EntityCommon};
use crate::error::{DimensionError, Result};
use crate::tables::{DimStyle, TextMovement};
use crate::types::{Handle, Matrix3, Transform, Vector2, Vector3, EPSILON};

pub mod angular_2line;
pub mod angular_3point;
pub mod style_override;

pub use angular_2line::{AngularDimension2Line, AngularDimension2LineBuilder, LineRef};
pub use angular_3point::AngularDimension3Point;
pub use style_override::{DimStyleOverrideType, DimStyleOverrideValue, DimStyleOverrides};

/// Dimension type (DXF code 70, lower bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionType {
    /// Angular dimension defined by two lines
    Angular = 2,
    /// Angular dimension defined by a vertex and two points
    Angular3Point = 5,
}

/// Attachment point type for dimension text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentPointType {
    TopLeft = 1,
    TopCenter = 2,
    TopRight = 3,
    MiddleLeft = 4,
    #[default]
    MiddleCenter = 5,
    MiddleRight = 6,
    BottomLeft = 7,
    BottomCenter = 8,
    BottomRight = 9,
}

/// Data shared by every dimension kind
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionBase {
    pub common: EntityCommon,
    /// Dimension type
    pub dimension_type: DimensionType,
    /// Dimension style
    pub style: DimStyle,
    /// Per-dimension overrides of style variables
    pub style_overrides: DimStyleOverrides,
    /// Text that replaces the measurement, `<>` stands for the measurement
    pub user_text: Option<String>,
    /// Rotation angle of dimension text (radians)
    pub text_rotation: f64,
    /// Attachment point of the text
    pub attachment_point: AttachmentPointType,
    /// Line spacing factor of multi-line text
    pub line_spacing_factor: f64,
    /// Name of the block holding the rendered geometry, once built
    pub block_name: Option<String>,
    normal: Vector3,
    elevation: f64,
    definition_point: Vector2,
    text_reference_point: Vector2,
    text_position_manually_set: bool,
}

impl DimensionBase {
    /// Create a new dimension base
    pub fn new(dimension_type: DimensionType, style: DimStyle) -> Self {
        Self {
            common: EntityCommon::default(),
            dimension_type,
            style,
            style_overrides: DimStyleOverrides::new(),
            user_text: None,
            text_rotation: 0.0,
            attachment_point: AttachmentPointType::MiddleCenter,
            line_spacing_factor: 1.0,
            block_name: None,
            normal: Vector3::UNIT_Z,
            elevation: 0.0,
            definition_point: Vector2::ZERO,
            text_reference_point: Vector2::ZERO,
            text_position_manually_set: false,
        }
    }

    /// Normal of the dimension plane (unit length)
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Set the normal of the dimension plane
    ///
    /// Stored points are kept as they are; use a transform to move them
    /// into another plane.
    pub fn set_normal(&mut self, normal: Vector3) -> Result<()> {
        if normal.is_zero() {
            return Err(DimensionError::InvalidArgument(
                "the normal vector cannot be zero".to_string(),
            ));
        }
        self.normal = normal.normalize();
        Ok(())
    }

    /// Elevation of the dimension plane along its normal
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Set the elevation of the dimension plane
    pub fn set_elevation(&mut self, elevation: f64) {
        self.elevation = elevation;
    }

    /// Definition point, used by consumers to anchor extension geometry
    pub fn definition_point(&self) -> Vector2 {
        self.definition_point
    }

    /// Text anchor in OCS
    pub fn text_reference_point(&self) -> Vector2 {
        self.text_reference_point
    }

    /// Place the text manually; derived recalculation keeps it from now on
    pub fn set_text_reference_point(&mut self, point: Vector2) {
        self.text_reference_point = point;
        self.text_position_manually_set = true;
    }

    /// Whether the text anchor was placed by the user
    pub fn text_position_manually_set(&self) -> bool {
        self.text_position_manually_set
    }

    /// Hand the text anchor back to the derived placement
    ///
    /// The anchor is recomputed by the next reference point update.
    pub fn reset_text_position(&mut self) {
        self.text_position_manually_set = false;
    }

    /// Builder: set the layer
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.common.layer = layer.into();
        self
    }

    /// Builder: set the user text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.user_text = Some(text.into());
        self
    }

    /// Text gap, from the overrides or the style (DIMGAP)
    pub fn text_gap(&self) -> f64 {
        self.style_overrides
            .real(DimStyleOverrideType::TextOffset)
            .unwrap_or(self.style.dimgap)
    }

    /// Overall scale, from the overrides or the style (DIMSCALE)
    pub fn overall_scale(&self) -> f64 {
        self.style_overrides
            .real(DimStyleOverrideType::DimScaleOverall)
            .unwrap_or(self.style.dimscale)
    }

    /// Text movement rule, from the overrides or the style (DIMTMOVE)
    pub fn text_movement(&self) -> TextMovement {
        self.style_overrides
            .text_movement(DimStyleOverrideType::FitTextMove)
            .unwrap_or(self.style.dimtmove)
    }

    /// Arrow size in drawing units (DIMASZ times DIMSCALE)
    pub fn arrow_size(&self) -> f64 {
        self.style_overrides
            .real(DimStyleOverrideType::ArrowSize)
            .unwrap_or(self.style.dimasz)
            * self.overall_scale()
    }

    /// Text height in drawing units (DIMTXT times DIMSCALE)
    pub fn text_height(&self) -> f64 {
        self.style_overrides
            .real(DimStyleOverrideType::TextHeight)
            .unwrap_or(self.style.dimtxt)
            * self.overall_scale()
    }

    /// Decimal places of angular values (DIMADEC)
    pub fn angular_precision(&self) -> usize {
        let places = self
            .style_overrides
            .integer(DimStyleOverrideType::AngularPrecision)
            .unwrap_or(self.style.dimadec);
        places.clamp(0, 8) as usize
    }

    /// Measurement prefix/suffix template (DIMPOST)
    pub fn measurement_template(&self) -> &str {
        self.style_overrides
            .text(DimStyleOverrideType::DimPrefixSuffix)
            .unwrap_or(self.style.dimpost.as_str())
    }

    /// Text displayed for an angle given in degrees
    ///
    /// The value is formatted with DIMAUNIT and the angular precision, then
    /// put in place of `<>` in the DIMPOST template (a template without
    /// `<>` is a suffix). Non-empty user text replaces the result, again
    /// substituting `<>`.
    pub fn format_measurement(&self, degrees: f64) -> String {
        let value = self.style.dimaunit.format(degrees, self.angular_precision());
        let template = self.measurement_template();
        let text = if template.contains(MEASUREMENT_MARKER) {
            template.replacen(MEASUREMENT_MARKER, &value, 1)
        } else {
            format!("{value}{template}")
        };

        match self.user_text.as_deref() {
            Some(user) if !user.is_empty() => user.replace(MEASUREMENT_MARKER, &text),
            _ => text,
        }
    }

    pub(crate) fn set_plane(&mut self, normal: Vector3, elevation: f64) {
        self.normal = normal;
        self.elevation = elevation;
    }

    pub(crate) fn set_definition_point(&mut self, point: Vector2) {
        self.definition_point = point;
    }

    /// Move a manually placed text anchor without touching the flag
    pub(crate) fn move_text_reference_point(&mut self, point: Vector2) {
        self.text_reference_point = point;
    }

    /// Place the text anchor outside the arc point, unless the user placed it
    pub(crate) fn place_text(&mut self, center: Vector2, arc_point: Vector2) {
        if self.text_position_manually_set {
            return;
        }
        let gap = self.text_gap() * self.overall_scale();
        self.text_reference_point = arc_point + (arc_point - center).normalize() * gap;
    }
}

/// Placeholder for the measured value in DIMPOST and user text
const MEASUREMENT_MARKER: &str = "<>";

/// Offset of a dimension arc, clamped away from zero
pub(crate) fn clamp_offset(distance: f64) -> f64 {
    if distance < EPSILON {
        EPSILON
    } else {
        distance
    }
}

/// Re-projects points of one dimension plane through an affine transform
/// into the plane of the transformed normal
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlaneTransform {
    to_world: Matrix3,
    linear: Matrix3,
    translation: Vector3,
    to_ocs: Matrix3,
    elevation: f64,
    new_normal: Vector3,
}

impl PlaneTransform {
    pub(crate) fn new(normal: Vector3, elevation: f64, linear: &Matrix3, translation: Vector3) -> Self {
        let mapped = *linear * normal;
        let new_normal = if mapped.is_zero() {
            normal
        } else {
            mapped.normalize()
        };

        // Arbitrary axis bases are orthonormal: the transpose is the inverse.
        Self {
            to_world: Matrix3::arbitrary_axis(normal),
            linear: *linear,
            translation,
            to_ocs: Matrix3::arbitrary_axis(new_normal).transpose(),
            elevation,
            new_normal,
        }
    }

    /// Transformed point in the new OCS; `z` is its new elevation
    pub(crate) fn apply(&self, point: Vector2) -> Vector3 {
        let world = self.to_world * point.to_3d(self.elevation);
        self.to_ocs * (self.linear * world + self.translation)
    }

    pub(crate) fn new_normal(&self) -> Vector3 {
        self.new_normal
    }
}

/// Renderer-side builder for the block that displays a dimension
///
/// The crate computes the reference geometry only; turning it into lines,
/// arcs, arrows and text is left to the implementor.
pub trait DimensionBlockBuilder {
    /// Block type produced by the builder
    type Block;

    /// Build the block of a two-line angular dimension
    fn angular_2line(&self, dimension: &AngularDimension2Line, name: &str) -> Self::Block;

    /// Build the block of a three-point angular dimension
    fn angular_3point(&self, dimension: &AngularDimension3Point, name: &str) -> Self::Block;
}

/// Capabilities every dimension kind provides
pub trait DimensionBehavior: Clone {
    /// Shared dimension data
    fn base(&self) -> &DimensionBase;

    /// Mutable shared dimension data
    fn base_mut(&mut self) -> &mut DimensionBase;

    /// Measured value (degrees for angular dimensions)
    fn measurement(&self) -> f64;

    /// Recompute the derived points from the current reference geometry
    fn update_reference_points(&mut self) -> Result<()>;

    /// Move the dimension line so it passes through `point` (OCS)
    fn set_dimension_line_position(&mut self, point: Vector2) -> Result<()>;

    /// Apply a linear map and a translation; on error nothing changes
    fn transform_by(&mut self, linear: &Matrix3, translation: Vector3) -> Result<()>;

    /// Text displayed for the measurement, after style and user text
    fn measurement_text(&self) -> String {
        self.base().format_measurement(self.measurement())
    }

    /// Build the display block and remember its name
    fn build_block<B: DimensionBlockBuilder>(&mut self, builder: &B, name: &str) -> B::Block;
}

/// Unified dimension enum for all supported dimension kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    Angular2Line(AngularDimension2Line),
    Angular3Point(AngularDimension3Point),
}

impl Dimension {
    /// Get the dimension type
    pub fn dimension_type(&self) -> DimensionType {
        self.base().dimension_type
    }
}

impl DimensionBehavior for Dimension {
    fn base(&self) -> &DimensionBase {
        match self {
            Dimension::Angular2Line(d) => d.base(),
            Dimension::Angular3Point(d) => d.base(),
        }
    }

    fn base_mut(&mut self) -> &mut DimensionBase {
        match self {
            Dimension::Angular2Line(d) => d.base_mut(),
            Dimension::Angular3Point(d) => d.base_mut(),
        }
    }

    fn measurement(&self) -> f64 {
        match self {
            Dimension::Angular2Line(d) => d.measurement(),
            Dimension::Angular3Point(d) => d.measurement(),
        }
    }

    fn update_reference_points(&mut self) -> Result<()> {
        match self {
            Dimension::Angular2Line(d) => d.update_reference_points(),
            Dimension::Angular3Point(d) => d.update_reference_points(),
        }
    }

    fn set_dimension_line_position(&mut self, point: Vector2) -> Result<()> {
        match self {
            Dimension::Angular2Line(d) => d.set_dimension_line_position(point),
            Dimension::Angular3Point(d) => d.set_dimension_line_position(point),
        }
    }

    fn transform_by(&mut self, linear: &Matrix3, translation: Vector3) -> Result<()> {
        match self {
            Dimension::Angular2Line(d) => d.transform_by(linear, translation),
            Dimension::Angular3Point(d) => d.transform_by(linear, translation),
        }
    }

    fn build_block<B: DimensionBlockBuilder>(&mut self, builder: &B, name: &str) -> B::Block {
        match self {
            Dimension::Angular2Line(d) => d.build_block(builder, name),
            Dimension::Angular3Point(d) => d.build_block(builder, name),
        }
    }
}

impl From<AngularDimension2Line> for Dimension {
    fn from(d: AngularDimension2Line) -> Self {
        Dimension::Angular2Line(d)
    }
}

impl From<AngularDimension3Point> for Dimension {
    fn from(d: AngularDimension3Point) -> Self {
        Dimension::Angular3Point(d)
    }
}

impl Entity for Dimension {
    fn handle(&self) -> Handle {
        self.base().common.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.base_mut().common.handle = handle;
    }

    fn layer(&self) -> &str {
        &self.base().common.layer
    }

    fn set_layer(&mut self, layer: String) {
        self.base_mut().common.layer = layer;
    }

    fn entity_type(&self) -> &'static str {
        match self {
            Dimension::Angular2Line(_) => "DIMENSION_ANGULAR_2LINE",
            Dimension::Angular3Point(_) => "DIMENSION_ANGULAR_3POINT",
        }
    }

    fn apply_transform(&mut self, transform: &Transform) -> Result<()> {
        self.transform_by(&transform.linear(), transform.translation())
    }
}
