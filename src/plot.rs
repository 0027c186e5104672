//! A renderer-agnostic description of how an airfoil should be framed on a 2D plot. Rendering
//! itself is left to the caller; a fresh `PlotView` is built for every refresh so no plot state
//! is shared with the geometry routines.

use crate::airfoil::naming::format_label;
use crate::airfoil::{CoordinateLoop, ShapeParameters};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotFrame {
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub equal_aspect: bool,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
}

impl Default for PlotFrame {
    fn default() -> Self {
        PlotFrame {
            x_limits: (-0.1, 1.1),
            y_limits: (-0.6, 0.6),
            equal_aspect: true,
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            grid: true,
        }
    }
}

impl PlotFrame {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_limits.0 && x <= self.x_limits.1 && y >= self.y_limits.0 && y <= self.y_limits.1
    }

    /// Frame the loop under the label derived from its shape parameters
    pub fn view<'a>(&'a self, params: &ShapeParameters, coords: &'a CoordinateLoop) -> PlotView<'a> {
        let title = format_label(params.camber, params.camber_position, params.thickness);
        self.titled(title, coords)
    }

    pub fn titled<'a>(&'a self, title: String, coords: &'a CoordinateLoop) -> PlotView<'a> {
        PlotView {
            frame: self,
            title,
            coords,
        }
    }
}

/// Everything a renderer needs to draw one airfoil
#[derive(Debug)]
pub struct PlotView<'a> {
    pub frame: &'a PlotFrame,
    pub title: String,
    pub coords: &'a CoordinateLoop,
}

impl<'a> PlotView<'a> {
    /// Indices of the points which fall outside of the frame limits
    pub fn clipped(&self) -> Vec<usize> {
        self.coords
            .xs
            .iter()
            .zip_eq(self.coords.ys.iter())
            .positions(|(x, y)| !self.frame.contains(*x, *y))
            .collect()
    }
}
