//! N-dimensional points, vectors, and hyperspheres.
//!
//! All types are immutable values. Every operation that can fail returns a
//! [`Result`] with a [`GeometryError`] describing what went wrong.
//!
//! ```
//! use ndgeom::prelude::*;
//!
//! let a = Vector::new([1.0, 2.0, 3.0, 4.0, 0.0], None)?;
//! let b = a.scale(-2.001)?;
//! assert!(Vector::is_collinear(&a, &b)?);
//!
//! let sphere = Sphere::from_length(5.0, 3)?;
//! assert_eq!(sphere.radius(), 5.0);
//! assert!(sphere.contains(&Point::new([0.0, 3.0, 4.0])?)?);
//! # Ok::<(), ndgeom::GeometryError>(())
//! ```

pub use approx;

/// Floating-point type used for coordinates.
pub type Float = f64;

/// Asserts that both arguments are approximately equal, using
/// [`ABS_TOLERANCE`] and [`REL_TOLERANCE`].
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_relative_eq!(
            $a,
            $b,
            epsilon = $crate::ABS_TOLERANCE,
            max_relative = $crate::REL_TOLERANCE
        )
    };
}

pub mod approx_cmp;
mod coords;
mod error;
mod point;
pub mod special;
mod sphere;
mod vector;


pub use error::{ErrorKind, GeometryError, Result};

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::approx_cmp::{ABS_TOLERANCE, REL_TOLERANCE, approx_eq, approx_eq_zero};
    pub use crate::coords::{Coords, Ndim};
    pub use crate::error::{ErrorKind, GeometryError};
    pub use crate::point::Point;
    pub use crate::sphere::Sphere;
    pub use crate::vector::{Addend, Multiplier, Product, Vector};
    pub use crate::Float;
}
pub use prelude::*;
