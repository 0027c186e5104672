use std::error::Error;
use std::fmt::{Display, Formatter};

/// Structurally unusable inputs to the airfoil routines. Out-of-range shape parameters are not
/// errors; they simply produce degenerate or non-finite coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidArgument {
    /// The point count was below the two points needed to span the chord
    NotEnoughPoints(usize),

    /// A 4-digit designation string could not be interpreted
    MalformedCode(String),
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidArgument::NotEnoughPoints(n) => {
                write!(f, "at least 2 points are required, got {}", n)
            }
            InvalidArgument::MalformedCode(s) => {
                write!(f, "'{}' is not a NACA 4-digit designation", s)
            }
        }
    }
}

impl Error for InvalidArgument {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_point_count() {
        let e = InvalidArgument::NotEnoughPoints(1);
        assert_eq!("at least 2 points are required, got 1", e.to_string());
    }

    #[test]
    fn boxes_into_dyn_error() {
        let e: Box<dyn Error> = Box::new(InvalidArgument::MalformedCode("24x2".to_string()));
        assert!(e.to_string().contains("24x2"));
    }
}
