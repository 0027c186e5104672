use crate::airfoil::{Airfoil, CamberStation, CoordinateLoop, ShapeParameters};
use crate::errors::InvalidArgument;
use crate::Result;
use ncollide2d::na::Point2;

/// The number of chordwise stations used when the caller doesn't specify one
pub const DEFAULT_POINT_COUNT: usize = 100;

/// Return `n` evenly spaced chord fractions covering the closed interval [0, 1]
pub fn chord_fractions(n: usize) -> Result<Vec<f64>> {
    if n < 2 {
        return Err(Box::new(InvalidArgument::NotEnoughPoints(n)));
    }
    let last = (n - 1) as f64;
    Ok((0..n).map(|i| i as f64 / last).collect())
}

/// An AirfoilGenerator is an entity which can generate the x, y position of the mean camber line
/// and the airfoil half thickness at fractions of the chord. This provides the information
/// necessary to compute the upper and lower surfaces.
pub trait AirfoilGenerator {
    /// Return a 2D point with the position of the camber line at a fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> Point2<f64>;

    /// Return the half thickness of the airfoil, measured from the camber line, at a fraction from
    /// 0.0 to 1.0
    fn half_thickness(&self, x: f64) -> f64;

    /// The angle along which the half thickness is laid off from the camber line. This is the
    /// polar angle of the camber point itself, atan2(yc, x), and not the slope of the camber line.
    fn surface_angle(&self, x: f64) -> f64 {
        let c = self.camber_line(x);
        c.y.atan2(c.x)
    }

    fn station_at(&self, x: f64) -> CamberStation {
        let c = self.camber_line(x);
        let t = self.half_thickness(x);
        let theta = self.surface_angle(x);
        let (s, k) = (theta.sin(), theta.cos());

        CamberStation::new(
            c,
            Point2::new(c.x - t * s, c.y + t * k),
            Point2::new(c.x + t * s, c.y - t * k),
        )
    }

    /// Evaluates stations at `n` evenly spaced chord fractions
    fn sample(&self, n: usize) -> Result<Airfoil> {
        let stations: Vec<CamberStation> = chord_fractions(n)?
            .into_iter()
            .map(|x| self.station_at(x))
            .collect();

        Ok(Airfoil::from_stations(&stations))
    }

    /// Evaluates `n` stations and assembles them into a closed loop of 2n - 1 points
    fn coordinates(&self, n: usize) -> Result<CoordinateLoop> {
        Ok(CoordinateLoop::from_airfoil(&self.sample(n)?))
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
#[derive(Debug, Clone)]
pub struct Naca4Digit {
    m: f64,
    p: f64,
    t: f64,
    chord_len: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator with a unit chord.
    ///
    /// # Arguments
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4. A value of exactly zero produces a
    /// symmetric airfoil regardless of the camber.
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    pub fn new(max_camber: f64, max_camber_chord: f64, t_max: f64) -> Naca4Digit {
        Naca4Digit {
            m: max_camber,
            p: max_camber_chord,
            t: t_max,
            chord_len: 1.0,
        }
    }

    pub fn from_params(params: &ShapeParameters) -> Naca4Digit {
        Self::new(params.camber, params.camber_position, params.thickness)
    }

    /// Scale the generated geometry to an actual chord length
    pub fn with_chord(mut self, chord_len: f64) -> Naca4Digit {
        self.chord_len = chord_len;
        self
    }

    pub fn params(&self) -> ShapeParameters {
        ShapeParameters::new(self.m, self.p, self.t)
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_line(&self, x: f64) -> Point2<f64> {
        let y = if self.p == 0.0 {
            0.0
        } else if x < self.p {
            (self.m / self.p.powi(2)) * (2.0 * self.p * x - x.powi(2))
        } else {
            (self.m / (1.0 - self.p).powi(2)) * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powi(2))
        };

        Point2::new(x * self.chord_len, y * self.chord_len)
    }

    fn half_thickness(&self, x: f64) -> f64 {
        (self.t / 0.2)
            * self.chord_len
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1036 * x.powi(4))
    }
}

/// Generate the closed coordinate loop of a unit chord NACA 4-digit airfoil.
///
/// The loop has `2 * point_count - 1` points: the upper surface from the trailing edge to the
/// leading edge followed by the lower surface back to the trailing edge. A `point_count` below 2
/// is rejected with `InvalidArgument::NotEnoughPoints`; out-of-range shape parameters are not
/// checked and may produce non-finite coordinates.
pub fn generate_coordinates(
    camber: f64,
    camber_position: f64,
    thickness: f64,
    point_count: usize,
) -> Result<CoordinateLoop> {
    Naca4Digit::new(camber, camber_position, thickness).coordinates(point_count)
}
