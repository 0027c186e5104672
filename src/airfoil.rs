use crate::serialize::Point2f64;
use itertools::Itertools;
use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};

pub mod generate;
pub mod naming;

/// The three shape parameters of a NACA 4-digit airfoil, each expressed as a fraction of the
/// chord. A NACA 2412 has a camber of 0.02, a camber position of 0.4 and a thickness of 0.12.
/// No range checking is done here, values outside of the physically sensible ranges are passed
/// straight through to the formulas.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    pub camber: f64,
    pub camber_position: f64,
    pub thickness: f64,
}

impl ShapeParameters {
    pub fn new(camber: f64, camber_position: f64, thickness: f64) -> ShapeParameters {
        ShapeParameters {
            camber,
            camber_position,
            thickness,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CamberStation {
    #[serde(with = "Point2f64")]
    pub camber: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub upper: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// The surfaces of an airfoil, each ordered from the leading edge to the trailing edge
pub struct Airfoil {
    pub camber: Vec<Point2<f64>>,
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation]) -> Airfoil {
        Airfoil {
            camber: stations.iter().map(|s| s.camber).collect(),
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
        }
    }

    /// Builds the closed outline: the upper surface from the trailing edge forward to the leading
    /// edge, then the lower surface back to the trailing edge. The first lower point duplicates
    /// the leading edge and is skipped.
    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result: Vec<Point2<f64>> = self.upper.iter().rev().copied().collect();
        result.extend(self.lower.iter().skip(1));
        result
    }
}

/// A closed airfoil outline stored as two parallel coordinate sequences, which is the form
/// plotting and export collaborators consume directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateLoop {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl CoordinateLoop {
    pub fn from_points(points: &[Point2<f64>]) -> CoordinateLoop {
        CoordinateLoop {
            xs: points.iter().map(|p| p.x).collect(),
            ys: points.iter().map(|p| p.y).collect(),
        }
    }

    pub fn from_airfoil(airfoil: &Airfoil) -> CoordinateLoop {
        Self::from_points(&airfoil.to_outer_contour())
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Index of the point shared by the upper and lower surfaces
    pub fn leading_edge_index(&self) -> usize {
        self.len() / 2
    }

    /// The extents of the loop as ((x_min, x_max), (y_min, y_max)), or None if the loop is empty
    /// or contains values which can't be ordered
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        if self.xs.iter().chain(self.ys.iter()).any(|v| v.is_nan()) {
            return None;
        }
        let x = self.xs.iter().copied().minmax().into_option()?;
        let y = self.ys.iter().copied().minmax().into_option()?;
        Some((x, y))
    }
}
