//! Angle value type with dual radian/degree representation.
//!
//! - `Angle` stores both representations, derived from each other once at
//!   construction, plus the unit it was constructed from.
//! - Addition sums both representations and clears the unit tag; see
//!   [`Angle::unit`] for the rationale.

use std::ops::Add;
use std::str::FromStr;

use crate::InvalidArgument;

/// The supported angle units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    Radian,
    Degree,
}

impl FromStr for AngleUnit {
    type Err = InvalidArgument;

    /// Parses a unit name, case-insensitively. Accepts `radian`/`rad` and
    /// `degree`/`deg`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "radian" | "radians" | "rad" => Ok(AngleUnit::Radian),
            "degree" | "degrees" | "deg" => Ok(AngleUnit::Degree),
            _ => Err(InvalidArgument::InvalidAngleUnit { got: s.to_owned() }),
        }
    }
}

/// A rotational measure carrying both radian and degree values.
///
/// The two numeric fields are always mutually consistent: constructors derive
/// one from the other and the type is immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    radians: f64,
    degrees: f64,
    unit: Option<AngleUnit>,
}

#[inline]
fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

#[inline]
fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

impl Angle {
    /// Creates an angle from a radian value.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians,
            degrees: radians_to_degrees(radians),
            unit: Some(AngleUnit::Radian),
        }
    }

    /// Creates an angle from a degree value.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees,
            radians: degrees_to_radians(degrees),
            unit: Some(AngleUnit::Degree),
        }
    }

    /// Creates an angle from a value in the given unit.
    #[inline]
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Radian => Self::from_radians(value),
            AngleUnit::Degree => Self::from_degrees(value),
        }
    }

    /// The angle value in radians.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// The angle value in degrees.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The unit this angle was constructed from, or `None` for angles
    /// produced by addition.
    ///
    /// Sums carry no meaningful unit: both representations are added
    /// componentwise and neither operand's tag wins. This mirrors the
    /// upstream behavior and is kept rather than silently changed.
    #[inline]
    pub fn unit(&self) -> Option<AngleUnit> {
        self.unit
    }
}

impl Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, rhs: Angle) -> Self::Output {
        Angle {
            radians: self.radians + rhs.radians,
            degrees: self.degrees + rhs.degrees,
            unit: None,
        }
    }
}
