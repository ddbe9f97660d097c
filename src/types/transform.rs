//! Transformation types for geometric operations
//!
//! Provides the matrices used to move, rotate and scale entities and the
//! plane-basis change between world coordinates (WCS) and an entity's
//! object coordinate system (OCS).

use crate::types::{Vector2, Vector3};
use std::ops::Mul;

/// 3x3 matrix for linear maps and plane bases
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    /// Matrix elements stored in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Create identity matrix
    pub fn identity() -> Self {
        Self::from_rows([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])
    }

    /// Create zero matrix
    pub fn zero() -> Self {
        Self { m: [[0.0; 3]; 3] }
    }

    /// Create matrix from rows
    pub fn from_rows(row0: [f64; 3], row1: [f64; 3], row2: [f64; 3]) -> Self {
        Self {
            m: [row0, row1, row2],
        }
    }

    /// Create matrix whose columns are the given vectors
    pub fn from_columns(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self::from_rows([c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z])
    }

    /// Create rotation matrix around Z axis
    pub fn rotation_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0])
    }

    /// Create rotation matrix around an arbitrary axis (Rodrigues' formula)
    pub fn rotation(axis: Vector3, angle: f64) -> Self {
        let a = axis.normalize();
        let (sin, cos) = angle.sin_cos();
        let t = 1.0 - cos;
        Self::from_rows(
            [cos + a.x * a.x * t, a.x * a.y * t - a.z * sin, a.x * a.z * t + a.y * sin],
            [a.y * a.x * t + a.z * sin, cos + a.y * a.y * t, a.y * a.z * t - a.x * sin],
            [a.z * a.x * t - a.y * sin, a.z * a.y * t + a.x * sin, cos + a.z * a.z * t],
        )
    }

    /// Create scaling matrix
    pub fn scaling(sx: f64, sy: f64, sz: f64) -> Self {
        Self::from_rows([sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, sz])
    }

    /// Create arbitrary axis matrix for OCS to WCS conversion
    ///
    /// Implements the AutoCAD arbitrary axis algorithm. The columns are the
    /// OCS X, Y and Z axes expressed in world coordinates, so the matrix is
    /// orthonormal for any non-zero normal.
    pub fn arbitrary_axis(normal: Vector3) -> Self {
        const ARBITRARY_AXIS_THRESHOLD: f64 = 1.0 / 64.0;

        let normal = normal.normalize();

        let ax = if normal.x.abs() < ARBITRARY_AXIS_THRESHOLD
            && normal.y.abs() < ARBITRARY_AXIS_THRESHOLD
        {
            Vector3::UNIT_Y
        } else {
            Vector3::UNIT_Z
        };

        let x_dir = ax.cross(&normal).normalize();
        let y_dir = normal.cross(&x_dir).normalize();

        Self::from_columns(x_dir, y_dir, normal)
    }

    /// Transpose the matrix
    pub fn transpose(&self) -> Self {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[j][i];
            }
        }
        result
    }

    /// Calculate determinant
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Invert the matrix (returns None if singular)
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return None;
        }

        let m = &self.m;
        let inv_det = 1.0 / det;
        Some(Self::from_rows(
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ))
    }

    /// Transform a Vector3
    pub fn transform_point(&self, v: Vector3) -> Vector3 {
        let m = &self.m;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    result.m[i][j] += self.m[i][k] * rhs.m[k][j];
                }
            }
        }
        result
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Self::Output {
        self.transform_point(v)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// 4x4 affine transformation matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    /// Matrix elements stored in row-major order
    pub m: [[f64; 4]; 4],
}

impl Matrix4 {
    /// Create identity matrix
    pub fn identity() -> Self {
        Self::from_parts(Matrix3::identity(), Vector3::ZERO)
    }

    /// Build an affine matrix from a linear part and a translation
    pub fn from_parts(linear: Matrix3, translation: Vector3) -> Self {
        let l = &linear.m;
        Self {
            m: [
                [l[0][0], l[0][1], l[0][2], translation.x],
                [l[1][0], l[1][1], l[1][2], translation.y],
                [l[2][0], l[2][1], l[2][2], translation.z],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Create translation matrix
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self::from_parts(Matrix3::identity(), Vector3::new(tx, ty, tz))
    }

    /// Get the 3x3 rotation/scale portion
    pub fn to_matrix3(&self) -> Matrix3 {
        Matrix3::from_rows(
            [self.m[0][0], self.m[0][1], self.m[0][2]],
            [self.m[1][0], self.m[1][1], self.m[1][2]],
            [self.m[2][0], self.m[2][1], self.m[2][2]],
        )
    }

    /// Get the translation column
    pub fn translation_part(&self) -> Vector3 {
        Vector3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }

    /// Transform a point (applies full transformation including translation)
    pub fn transform_point(&self, v: Vector3) -> Vector3 {
        self.to_matrix3().transform_point(v) + self.translation_part()
    }

    /// Transform a direction vector (ignores translation)
    pub fn transform_direction(&self, v: Vector3) -> Vector3 {
        self.to_matrix3().transform_point(v)
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = Self { m: [[0.0; 4]; 4] };
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i][j] += self.m[i][k] * rhs.m[k][j];
                }
            }
        }
        result
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Affine transform combining rotation, scaling, and translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The 4x4 transformation matrix
    pub matrix: Matrix4,
}

impl Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create transform from a linear map and a translation
    pub fn new(linear: Matrix3, translation: Vector3) -> Self {
        Self {
            matrix: Matrix4::from_parts(linear, translation),
        }
    }

    /// Create rotation transform around arbitrary axis
    pub fn from_rotation(axis: Vector3, angle: f64) -> Self {
        Self::new(Matrix3::rotation(axis, angle), Vector3::ZERO)
    }

    /// Create translation transform
    pub fn from_translation(translation: Vector3) -> Self {
        Self::new(Matrix3::identity(), translation)
    }

    /// Create uniform scaling transform
    pub fn from_scale(scale: f64) -> Self {
        Self::new(Matrix3::scaling(scale, scale, scale), Vector3::ZERO)
    }

    /// Create non-uniform scaling transform
    pub fn from_scaling(scale: Vector3) -> Self {
        Self::new(Matrix3::scaling(scale.x, scale.y, scale.z), Vector3::ZERO)
    }

    /// Linear part of the transform
    pub fn linear(&self) -> Matrix3 {
        self.matrix.to_matrix3()
    }

    /// Translation part of the transform
    pub fn translation(&self) -> Vector3 {
        self.matrix.translation_part()
    }

    /// Apply transform to a point
    pub fn apply(&self, point: Vector3) -> Vector3 {
        self.matrix.transform_point(point)
    }

    /// Apply only the linear portion
    pub fn apply_rotation(&self, direction: Vector3) -> Vector3 {
        self.matrix.transform_direction(direction)
    }

    /// Combine with another transform (this transform applied first)
    pub fn then(&self, other: &Transform) -> Transform {
        Transform {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Inverse transform, if the linear part is invertible
    pub fn inverse(&self) -> Option<Transform> {
        let inv = self.linear().inverse()?;
        Some(Transform::new(inv, -(inv * self.translation())))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Project world points into the OCS defined by `normal`
///
/// Returns the in-plane coordinates of every point and the elevation of the
/// first one. Points that do not share a plane keep only their projection.
pub fn world_to_ocs(points: &[Vector3], normal: Vector3) -> (Vec<Vector2>, f64) {
    let to_ocs = Matrix3::arbitrary_axis(normal).transpose();
    let mut elevation = 0.0;
    let projected = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let v = to_ocs * *p;
            if i == 0 {
                elevation = v.z;
            }
            v.xy()
        })
        .collect();
    (projected, elevation)
}

/// Lift an OCS point at `elevation` into world coordinates
pub fn ocs_to_world(point: Vector2, elevation: f64, normal: Vector3) -> Vector3 {
    Matrix3::arbitrary_axis(normal) * point.to_3d(elevation)
}
