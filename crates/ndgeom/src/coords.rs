//! Number of dimensions and coordinate-list traits.

use crate::{Float, GeometryError, Result};

/// Number of dimensions.
pub trait Ndim {
    /// Returns the number of dimensions of the object.
    ///
    /// Points, vectors, and spheres always have at least one dimension.
    fn ndim(&self) -> usize;
}

/// Operand that can be read as an ordered list of coordinates, such as a
/// [`crate::Point`] or a slice of floats.
pub trait Coords {
    /// Returns the coordinates as a slice.
    fn as_coords(&self) -> &[Float];

    /// Returns the coordinates, checking that there are exactly `ndim` of them
    /// and that all of them are finite.
    fn checked_coords(&self, ndim: usize) -> Result<&[Float]> {
        let coords = self.as_coords();
        GeometryError::check_ndim(ndim, coords.len())?;
        for &x in coords {
            GeometryError::check_finite(x, "coordinate")?;
        }
        Ok(coords)
    }
}

impl<T: Coords + ?Sized> Coords for &'_ T {
    fn as_coords(&self) -> &[Float] {
        (**self).as_coords()
    }
}

impl Coords for [Float] {
    fn as_coords(&self) -> &[Float] {
        self
    }
}

impl<const N: usize> Coords for [Float; N] {
    fn as_coords(&self) -> &[Float] {
        self
    }
}

impl Coords for Vec<Float> {
    fn as_coords(&self) -> &[Float] {
        self
    }
}
