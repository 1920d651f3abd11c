//! N-dimensional Euclidean point.

use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;

use crate::{Coords, Float, GeometryError, Ndim, Result};

/// N-dimensional Euclidean point with at least one coordinate.
///
/// Points are compared using exact equality.
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq)]
pub struct Point(SmallVec<[Float; 4]>);

impl Point {
    /// Constructs a point from a list of coordinates.
    ///
    /// Returns [`GeometryError::EmptyPoint`] if there are no coordinates, or
    /// [`GeometryError::InvalidArgument`] if any coordinate is not finite.
    pub fn new(values: impl IntoIterator<Item = Float>) -> Result<Self> {
        let values: SmallVec<[Float; 4]> = values.into_iter().collect();
        if values.is_empty() {
            return Err(GeometryError::EmptyPoint);
        }
        for &x in &values {
            GeometryError::check_finite(x, "coordinate")?;
        }
        Ok(Self(values))
    }

    /// Returns the origin point.
    ///
    /// Returns [`GeometryError::EmptyPoint`] if `ndim` is zero.
    pub fn origin(ndim: usize) -> Result<Self> {
        Self::new(std::iter::repeat_n(0.0, ndim))
    }

    /// Returns the origin point with the same number of dimensions.
    pub(crate) fn zeroed(&self) -> Point {
        Self(self.0.iter().map(|_| 0.0).collect())
    }

    /// Returns the coordinates of the point.
    pub fn values(&self) -> &[Float] {
        &self.0
    }
    /// Returns an iterator over the coordinates of the point.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Float>> {
        self.0.iter().copied()
    }
    /// Returns a coordinate of the point, or `None` if the index is out of
    /// bounds.
    pub fn get(&self, idx: usize) -> Option<Float> {
        self.0.get(idx).copied()
    }

    /// Returns whether every coordinate is zero.
    pub fn is_origin(&self) -> bool {
        self.0.iter().all(|&x| x == 0.0)
    }

    /// Returns the sum of the point and `rhs`, coordinate by coordinate.
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if `rhs` has a different
    /// number of coordinates, or [`GeometryError::InvalidArgument`] if a
    /// coordinate of the sum overflows.
    pub fn add(&self, rhs: impl Coords) -> Result<Point> {
        let rhs = rhs.checked_coords(self.ndim())?;
        self.zip_map(rhs, |l, r| l + r)
    }

    /// Returns the difference between the point and `rhs`, coordinate by
    /// coordinate.
    pub fn sub(&self, rhs: impl Coords) -> Result<Point> {
        let rhs = rhs.checked_coords(self.ndim())?;
        self.zip_map(rhs, |l, r| l - r)
    }

    /// Returns the Euclidean distance between two points.
    pub fn distance_to(&self, other: &Point) -> Result<Float> {
        let other = other.checked_coords(self.ndim())?;
        Ok(std::iter::zip(self.iter(), other)
            .map(|(l, r)| (l - r) * (l - r))
            .sum::<Float>()
            .sqrt())
    }

    /// Applies `f` to each pair of coordinates. Both must have the same length.
    ///
    /// Returns [`GeometryError::InvalidArgument`] if any result is not finite.
    pub(crate) fn zip_map(
        &self,
        rhs: &[Float],
        f: impl Fn(Float, Float) -> Float,
    ) -> Result<Point> {
        debug_assert_eq!(self.0.len(), rhs.len());
        Point::new(std::iter::zip(self.iter(), rhs).map(|(l, &r)| f(l, r)))
    }

    /// Applies `f` to each coordinate.
    ///
    /// Returns [`GeometryError::InvalidArgument`] if any result is not finite.
    pub(crate) fn map(&self, f: impl Fn(Float) -> Float) -> Result<Point> {
        Point::new(self.iter().map(f))
    }
}

impl Ndim for Point {
    /// Returns the number of coordinates in the point.
    fn ndim(&self) -> usize {
        self.0.len()
    }
}

impl Coords for Point {
    fn as_coords(&self) -> &[Float] {
        &self.0
    }
}

impl Index<usize> for Point {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Point {
    type Item = Float;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Float>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes a parenthesized, comma-separated list of coordinates.
pub(crate) fn fmt_coords(f: &mut fmt::Formatter<'_>, coords: &[Float]) -> fmt::Result {
    write!(f, "(")?;
    let mut iter = coords.iter();
    if let Some(first) = iter.next() {
        write!(f, "{first}")?;
        for elem in iter {
            write!(f, ", {elem}")?;
        }
    }
    write!(f, ")")?;
    Ok(())
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point[{}]", self.ndim())?;
        fmt_coords(f, &self.0)
    }
}
