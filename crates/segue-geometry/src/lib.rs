//! Pure math for Segue
//!
//! This crate contains the geometry primitives shared by the input and
//! transition crates: points, sizes and the two screen axes.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Axis, Point, Size};
}
