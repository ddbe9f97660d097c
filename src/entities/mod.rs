//! CAD entity types and traits

use crate::error::Result;
use crate::types::{Handle, Transform, Vector3};
use crate::xdata::ExtendedData;

pub mod dimension;
pub mod line;

pub use dimension::*;
pub use line::Line;

/// Base trait for all CAD entities
pub trait Entity {
    /// Get the entity's unique handle
    fn handle(&self) -> Handle;

    /// Set the entity's handle
    fn set_handle(&mut self, handle: Handle);

    /// Get the entity's layer name
    fn layer(&self) -> &str;

    /// Set the entity's layer name
    fn set_layer(&mut self, layer: String);

    /// Get the entity type name
    fn entity_type(&self) -> &'static str;

    /// Apply a general affine transform to the entity
    ///
    /// Entities whose geometry can degenerate under a transform return an
    /// error and keep their previous state.
    fn apply_transform(&mut self, transform: &Transform) -> Result<()>;

    /// Move the entity by an offset
    fn translate(&mut self, offset: Vector3) -> Result<()> {
        self.apply_transform(&Transform::from_translation(offset))
    }

    /// Apply rotation around an axis through the origin
    fn apply_rotation(&mut self, axis: Vector3, angle: f64) -> Result<()> {
        self.apply_transform(&Transform::from_rotation(axis, angle))
    }

    /// Apply uniform scaling about the origin
    fn apply_scaling(&mut self, scale: f64) -> Result<()> {
        self.apply_transform(&Transform::from_scale(scale))
    }
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle
    pub handle: Handle,
    /// Layer name
    pub layer: String,
    /// Extended data (XDATA)
    pub extended_data: ExtendedData,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: "0".to_string(),
            extended_data: ExtendedData::new(),
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_common_defaults() {
        let common = EntityCommon::new();
        assert!(common.handle.is_null());
        assert_eq!(common.layer, "0");
        assert!(common.extended_data.is_empty());
    }

    #[test]
    fn test_entity_common_with_layer() {
        assert_eq!(EntityCommon::with_layer("DIMS").layer, "DIMS");
    }
}
