//! Per-dimension overrides of dimension style variables

use indexmap::IndexMap;

use crate::error::{DimensionError, Result};
use crate::tables::TextMovement;

/// Dimension style variables that can be overridden on a single dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimStyleOverrideType {
    /// DIMGAP - distance between the dimension line and its text
    TextOffset,
    /// DIMSCALE - overall scale applied to sizes and distances
    DimScaleOverall,
    /// DIMTMOVE - text movement rule
    FitTextMove,
    /// DIMASZ - arrow size
    ArrowSize,
    /// DIMTXT - text height
    TextHeight,
    /// DIMADEC - angular decimal places
    AngularPrecision,
    /// DIMPOST - measurement prefix/suffix template
    DimPrefixSuffix,
}

impl DimStyleOverrideType {
    /// Name of the style variable this override replaces
    pub fn variable_name(self) -> &'static str {
        match self {
            DimStyleOverrideType::TextOffset => "DIMGAP",
            DimStyleOverrideType::DimScaleOverall => "DIMSCALE",
            DimStyleOverrideType::FitTextMove => "DIMTMOVE",
            DimStyleOverrideType::ArrowSize => "DIMASZ",
            DimStyleOverrideType::TextHeight => "DIMTXT",
            DimStyleOverrideType::AngularPrecision => "DIMADEC",
            DimStyleOverrideType::DimPrefixSuffix => "DIMPOST",
        }
    }

    /// Check a value against the kind and range this variable accepts
    fn validate(self, value: &DimStyleOverrideValue) -> Result<()> {
        use DimStyleOverrideType as T;
        use DimStyleOverrideValue as V;

        match (self, value) {
            (T::DimScaleOverall, V::Real(v)) if *v <= 0.0 => Err(DimensionError::OutOfRange {
                name: self.variable_name(),
                value: *v,
            }),
            (T::TextOffset | T::ArrowSize | T::TextHeight, V::Real(v)) if *v < 0.0 => {
                Err(DimensionError::OutOfRange {
                    name: self.variable_name(),
                    value: *v,
                })
            }
            (T::AngularPrecision, V::Integer(v)) if !(0..=8).contains(v) => {
                Err(DimensionError::OutOfRange {
                    name: self.variable_name(),
                    value: f64::from(*v),
                })
            }
            (T::TextOffset | T::DimScaleOverall | T::ArrowSize | T::TextHeight, V::Real(_))
            | (T::FitTextMove, V::TextMovement(_))
            | (T::AngularPrecision, V::Integer(_))
            | (T::DimPrefixSuffix, V::Text(_)) => Ok(()),
            _ => Err(DimensionError::InvalidArgument(format!(
                "{} cannot hold {:?}",
                self.variable_name(),
                value
            ))),
        }
    }
}

/// Value of a style override
#[derive(Debug, Clone, PartialEq)]
pub enum DimStyleOverrideValue {
    Real(f64),
    Integer(i16),
    Text(String),
    TextMovement(TextMovement),
}

/// Typed table of style overrides, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimStyleOverrides {
    entries: IndexMap<DimStyleOverrideType, DimStyleOverrideValue>,
}

impl DimStyleOverrides {
    /// Create an empty override table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an override, returning the value it replaced
    ///
    /// Fails if the value kind does not match the variable or the value is
    /// out of range; the table is unchanged in that case.
    pub fn set(
        &mut self,
        kind: DimStyleOverrideType,
        value: DimStyleOverrideValue,
    ) -> Result<Option<DimStyleOverrideValue>> {
        kind.validate(&value)?;
        Ok(self.entries.insert(kind, value))
    }

    /// Get an override value
    pub fn get(&self, kind: DimStyleOverrideType) -> Option<&DimStyleOverrideValue> {
        self.entries.get(&kind)
    }

    /// Remove an override
    pub fn remove(&mut self, kind: DimStyleOverrideType) -> Option<DimStyleOverrideValue> {
        self.entries.shift_remove(&kind)
    }

    /// Real-valued override
    pub fn real(&self, kind: DimStyleOverrideType) -> Option<f64> {
        match self.get(kind)? {
            DimStyleOverrideValue::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer-valued override
    pub fn integer(&self, kind: DimStyleOverrideType) -> Option<i16> {
        match self.get(kind)? {
            DimStyleOverrideValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Text-valued override
    pub fn text(&self, kind: DimStyleOverrideType) -> Option<&str> {
        match self.get(kind)? {
            DimStyleOverrideValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Text movement override
    pub fn text_movement(&self, kind: DimStyleOverrideType) -> Option<TextMovement> {
        match self.get(kind)? {
            DimStyleOverrideValue::TextMovement(v) => Some(*v),
            _ => None,
        }
    }

    /// Iterate over all overrides in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&DimStyleOverrideType, &DimStyleOverrideValue)> {
        self.entries.iter()
    }

    /// Number of overrides
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no overrides
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all overrides
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
