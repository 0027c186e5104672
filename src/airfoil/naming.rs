//! Canonical names for NACA 4-digit airfoils.
//!
//! The designation packs the three shape parameters into a camber percentage, a one digit camber
//! position in tenths of the chord, and a two digit thickness percentage, so that 2% camber at
//! 40% chord with 12% thickness becomes "2412".

use crate::airfoil::ShapeParameters;
use crate::errors::InvalidArgument;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How a fractional parameter is reduced to the integer digits of the designation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DigitRounding {
    /// Drop the fractional part. A camber of 0.025 becomes "2", and since 0.29 * 100 is slightly
    /// below 29 in floating point a thickness of 0.29 becomes "28".
    Truncate,

    /// Round half away from zero, so a camber of 0.025 becomes "3"
    Nearest,
}

impl Default for DigitRounding {
    fn default() -> Self {
        DigitRounding::Truncate
    }
}

impl DigitRounding {
    fn apply(&self, value: f64) -> i64 {
        match self {
            DigitRounding::Truncate => value as i64,
            DigitRounding::Nearest => value.round() as i64,
        }
    }
}

/// The integer fields of a 4-digit designation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Naca4Code {
    pub camber: i64,
    pub position: i64,
    pub thickness: i64,
}

impl Naca4Code {
    pub fn new(camber: i64, position: i64, thickness: i64) -> Naca4Code {
        Naca4Code {
            camber,
            position,
            thickness,
        }
    }

    /// Derive the designation using truncation
    pub fn from_params(params: &ShapeParameters) -> Naca4Code {
        Self::from_params_with(params, DigitRounding::Truncate)
    }

    pub fn from_params_with(params: &ShapeParameters, rounding: DigitRounding) -> Naca4Code {
        Naca4Code {
            camber: rounding.apply(params.camber * 100.0),
            position: rounding.apply(params.camber_position * 10.0),
            thickness: rounding.apply(params.thickness * 100.0),
        }
    }

    /// The shape parameters this designation stands for
    pub fn params(&self) -> ShapeParameters {
        ShapeParameters::new(
            self.camber as f64 / 100.0,
            self.position as f64 / 10.0,
            self.thickness as f64 / 100.0,
        )
    }

    pub fn label(&self) -> String {
        format!("NACA {} Airfoil", self)
    }
}

impl Display for Naca4Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{:02}", self.camber, self.position, self.thickness)
    }
}

impl FromStr for Naca4Code {
    type Err = InvalidArgument;

    /// Accepts "2412", "NACA 2412" or "naca2412"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidArgument::MalformedCode(s.to_string());
        let trimmed = s.trim();
        let digits = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("naca") => trimmed[4..].trim_start(),
            _ => trimmed,
        };

        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let field = |r: std::ops::Range<usize>| digits[r].parse::<i64>().map_err(|_| malformed());
        Ok(Naca4Code::new(field(0..1)?, field(1..2)?, field(2..4)?))
    }
}

/// Produce the display name "NACA MPTT Airfoil" for a set of shape parameters. Each field is
/// truncated, not rounded, and the thickness field is zero padded to two digits.
pub fn format_label(camber: f64, camber_position: f64, thickness: f64) -> String {
    Naca4Code::from_params(&ShapeParameters::new(camber, camber_position, thickness)).label()
}
