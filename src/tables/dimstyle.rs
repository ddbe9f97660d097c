//! Dimension style table entry

use crate::types::Handle;

/// Text movement rule applied when dimension text is moved away from its
/// default position (DIMTMOVE, code 279)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextMovement {
    /// Keep the text beside the dimension line; moving the text moves the
    /// dimension line with it
    #[default]
    BesideDimLine = 0,
    /// Move the text freely and connect it with a leader
    OverDimLineWithLeader = 1,
    /// Move the text freely without a leader
    OverDimLineWithoutLeader = 2,
}

impl TextMovement {
    /// Convert from the DXF group code value
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(TextMovement::BesideDimLine),
            1 => Some(TextMovement::OverDimLineWithLeader),
            2 => Some(TextMovement::OverDimLineWithoutLeader),
            _ => None,
        }
    }

    /// The DXF group code value
    pub fn code(self) -> i16 {
        self as i16
    }
}

/// Angular unit format (DIMAUNIT, code 275)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngularUnitFormat {
    #[default]
    DecimalDegrees = 0,
    DegreesMinutesSeconds = 1,
    Gradians = 2,
    Radians = 3,
}

impl AngularUnitFormat {
    /// Format an angle given in degrees with `precision` decimal places
    ///
    /// For degrees/minutes/seconds the precision selects the fields shown:
    /// 0 shows whole degrees, 1 and 2 add minutes, 3 and 4 add seconds, and
    /// every further place is a decimal of the seconds.
    pub fn format(self, degrees: f64, precision: usize) -> String {
        match self {
            AngularUnitFormat::DecimalDegrees => format!("{degrees:.precision$}°"),
            AngularUnitFormat::Gradians => format!("{:.precision$}g", degrees * 400.0 / 360.0),
            AngularUnitFormat::Radians => format!("{:.precision$}r", degrees.to_radians()),
            AngularUnitFormat::DegreesMinutesSeconds => format_dms(degrees, precision),
        }
    }
}

fn format_dms(degrees: f64, precision: usize) -> String {
    let sign = if degrees < 0.0 { "-" } else { "" };
    let degrees = degrees.abs();

    match precision {
        0 => format!("{sign}{}°", degrees.round()),
        1 | 2 => {
            let minutes = (degrees * 60.0).round() as u64;
            format!("{sign}{}°{}'", minutes / 60, minutes % 60)
        }
        _ => {
            let places = precision.saturating_sub(4);
            let scale = 10u64.pow(places as u32);
            let ticks = (degrees * 3600.0 * scale as f64).round() as u64;
            let per_minute = 60 * scale;
            let per_degree = 60 * per_minute;
            let seconds = (ticks % per_minute) as f64 / scale as f64;
            format!(
                "{sign}{}°{}'{seconds:.places$}\"",
                ticks / per_degree,
                (ticks % per_degree) / per_minute
            )
        }
    }
}

/// A dimension style table entry
///
/// Only the variables the dimension entities consume are modelled. Defaults
/// match the "Standard" style of an imperial drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DimStyle {
    /// Unique handle
    pub handle: Handle,
    /// Style name
    pub name: String,

    // ─── Arrows ───
    /// Arrow size (DIMASZ, code 41)
    pub dimasz: f64,

    // ─── Text ───
    /// Text height (DIMTXT, code 140)
    pub dimtxt: f64,
    /// Gap between the dimension line and its text (DIMGAP, code 147)
    pub dimgap: f64,
    /// Text movement (DIMTMOVE, code 279)
    pub dimtmove: TextMovement,
    /// Text style name (DIMTXSTY)
    pub dimtxsty: String,

    // ─── Scale / units ───
    /// Overall dimension scale factor (DIMSCALE, code 40)
    pub dimscale: f64,
    /// Angular unit format (DIMAUNIT, code 275)
    pub dimaunit: AngularUnitFormat,
    /// Angular decimal places (DIMADEC, code 179)
    pub dimadec: i16,
    /// Measurement prefix/suffix template (DIMPOST, code 3)
    pub dimpost: String,
}

impl DimStyle {
    /// Name of the style every drawing carries
    pub const STANDARD: &'static str = "Standard";

    /// Create a new dimension style
    pub fn new(name: impl Into<String>) -> Self {
        DimStyle {
            handle: Handle::NULL,
            name: name.into(),
            dimasz: 0.18,
            dimtxt: 0.18,
            dimgap: 0.09,
            dimtmove: TextMovement::BesideDimLine,
            dimtxsty: Self::STANDARD.to_string(),
            dimscale: 1.0,
            dimaunit: AngularUnitFormat::DecimalDegrees,
            dimadec: 0,
            dimpost: "<>".to_string(),
        }
    }

    /// Create the standard dimension style
    pub fn standard() -> Self {
        Self::new(Self::STANDARD)
    }

    /// Check if this is the standard style
    pub fn is_standard(&self) -> bool {
        self.name.eq_ignore_ascii_case(Self::STANDARD)
    }

    /// Builder: set the text gap
    pub fn with_text_gap(mut self, gap: f64) -> Self {
        self.dimgap = gap;
        self
    }

    /// Builder: set the overall scale
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.dimscale = scale;
        self
    }

    /// Builder: set the text movement rule
    pub fn with_text_movement(mut self, movement: TextMovement) -> Self {
        self.dimtmove = movement;
        self
    }
}

impl Default for DimStyle {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_style() {
        let style = DimStyle::standard();
        assert!(style.is_standard());
        assert_eq!(style.dimscale, 1.0);
        assert_eq!(style.dimtmove, TextMovement::BesideDimLine);
    }

    #[test]
    fn test_builders() {
        let style = DimStyle::new("Mech")
            .with_text_gap(0.5)
            .with_scale(2.0)
            .with_text_movement(TextMovement::OverDimLineWithLeader);
        assert!(!style.is_standard());
        assert_eq!(style.dimgap, 0.5);
        assert_eq!(style.dimscale, 2.0);
        assert_eq!(style.dimtmove.code(), 1);
    }

    #[test]
    fn test_text_movement_codes() {
        for code in 0..3 {
            assert_eq!(TextMovement::from_code(code).unwrap().code(), code);
        }
        assert!(TextMovement::from_code(7).is_none());
    }

    #[test]
    fn test_angular_formats() {
        assert_eq!(AngularUnitFormat::DecimalDegrees.format(90.0, 0), "90°");
        assert_eq!(AngularUnitFormat::DecimalDegrees.format(45.126, 2), "45.13°");
        assert_eq!(AngularUnitFormat::Gradians.format(90.0, 1), "100.0g");
        assert_eq!(AngularUnitFormat::Radians.format(180.0, 4), "3.1416r");
    }

    #[test]
    fn test_degrees_minutes_seconds() {
        let dms = AngularUnitFormat::DegreesMinutesSeconds;
        assert_eq!(dms.format(30.5, 0), "31°");
        assert_eq!(dms.format(30.5, 2), "30°30'");
        assert_eq!(dms.format(30.5125, 4), "30°30'45\"");
        assert_eq!(dms.format(30.5125, 5), "30°30'45.0\"");
        // minutes carry into degrees
        assert_eq!(dms.format(59.99999, 2), "60°0'");
    }
}
