use std::error::Error;

pub mod airfoil;
pub mod config;
pub mod errors;
pub mod export;
pub mod plot;
pub mod serialize;

pub use airfoil::generate::{generate_coordinates, DEFAULT_POINT_COUNT};
pub use airfoil::naming::format_label;
pub use airfoil::{CoordinateLoop, ShapeParameters};
pub use errors::InvalidArgument;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;
