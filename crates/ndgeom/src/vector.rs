//! N-dimensional vector between two points.

use std::fmt;
use std::ops::Index;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::approx_cmp::{approx_eq, approx_sum_eq_zero};
use crate::point::fmt_coords;
use crate::{Coords, Float, GeometryError, Ndim, Point, Result};

/// Directed segment from a start point to an end point.
///
/// The coordinates of a vector (accessed via [`Coords`] or indexing) are those
/// of its displacement `end - start`. A vector whose start point is the origin
/// is called a _radius vector_.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct Vector {
    start_point: Point,
    end_point: Point,
    #[cfg_attr(feature = "serde", serde(skip))]
    displacement: Point,
}

/// Right-hand side of [`Vector::add()`] and [`Vector::subtract()`].
#[derive(Debug, Copy, Clone)]
pub enum Addend<'a> {
    /// Another vector. Start points are added together and end points are
    /// added together.
    Vector(&'a Vector),
    /// List of coordinates, which translates both the start and end points.
    Coords(&'a [Float]),
}
impl<'a> From<&'a Vector> for Addend<'a> {
    fn from(value: &'a Vector) -> Self {
        Addend::Vector(value)
    }
}
impl<'a> From<&'a Point> for Addend<'a> {
    fn from(value: &'a Point) -> Self {
        Addend::Coords(value.values())
    }
}
impl<'a> From<&'a [Float]> for Addend<'a> {
    fn from(value: &'a [Float]) -> Self {
        Addend::Coords(value)
    }
}
impl<'a, const N: usize> From<&'a [Float; N]> for Addend<'a> {
    fn from(value: &'a [Float; N]) -> Self {
        Addend::Coords(value)
    }
}
impl<'a> From<&'a Vec<Float>> for Addend<'a> {
    fn from(value: &'a Vec<Float>) -> Self {
        Addend::Coords(value)
    }
}

/// Right-hand side of [`Vector::multiply()`].
#[derive(Debug, Copy, Clone)]
pub enum Multiplier<'a> {
    /// Scalar, which scales the vector.
    Scalar(Float),
    /// Another vector, which produces the dot product.
    Vector(&'a Vector),
}
impl From<Float> for Multiplier<'_> {
    fn from(value: Float) -> Self {
        Multiplier::Scalar(value)
    }
}
impl<'a> From<&'a Vector> for Multiplier<'a> {
    fn from(value: &'a Vector) -> Self {
        Multiplier::Vector(value)
    }
}

/// Result of [`Vector::multiply()`].
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    /// Dot product of two vectors.
    Scalar(Float),
    /// Vector scaled by a scalar.
    Vector(Vector),
}
impl Product {
    /// Returns the scalar, if this is a dot product.
    pub fn into_scalar(self) -> Option<Float> {
        match self {
            Product::Scalar(x) => Some(x),
            Product::Vector(_) => None,
        }
    }
    /// Returns the vector, if this is a scaled vector.
    pub fn into_vector(self) -> Option<Vector> {
        match self {
            Product::Scalar(_) => None,
            Product::Vector(v) => Some(v),
        }
    }
}
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Scalar(x) => write!(f, "{x}"),
            Product::Vector(v) => write!(f, "{v}"),
        }
    }
}

impl Vector {
    /// Constructs a vector from a list of end coordinates and an optional list
    /// of start coordinates. If `start` is `None`, the vector starts at the
    /// origin.
    ///
    /// ```
    /// # use ndgeom::prelude::*;
    /// let v = Vector::new([4.0, 6.0], Some(&[1.0, 2.0]))?;
    /// assert_eq!(v.values(), &[3.0, 4.0]);
    /// assert_eq!(v.length(), 5.0);
    /// # Ok::<(), GeometryError>(())
    /// ```
    pub fn new(end: impl Coords, start: Option<&[Float]>) -> Result<Self> {
        let end = end.as_coords();
        let start_point = match start {
            Some(start) => {
                GeometryError::check_ndim(end.len(), start.len())?;
                Point::new(start.iter().copied())?
            }
            None => Point::origin(end.len())?,
        };
        let end_point = Point::new(end.iter().copied())?;
        Self::between(start_point, &end_point)
    }

    /// Constructs a radius vector from the origin to `point`.
    pub fn from_point(point: &Point) -> Self {
        Self {
            start_point: point.zeroed(),
            end_point: point.clone(),
            displacement: point.clone(),
        }
    }

    /// Constructs a vector from `start` to `end`.
    pub fn from_points(end: &Point, start: &Point) -> Result<Self> {
        Self::between(start.clone(), end)
    }

    fn between(start_point: Point, end_point: &Point) -> Result<Self> {
        let displacement = end_point.sub(&start_point)?;
        Self::from_parts(start_point, displacement)
    }

    /// Constructs a vector from its start point and displacement, which must
    /// have the same number of dimensions.
    fn from_parts(start_point: Point, displacement: Point) -> Result<Self> {
        let end_point = start_point.zip_map(displacement.values(), |s, d| s + d)?;
        Ok(Self {
            start_point,
            end_point,
            displacement,
        })
    }

    /// Returns the start point of the vector.
    pub fn start_point(&self) -> &Point {
        &self.start_point
    }
    /// Returns the end point of the vector.
    pub fn end_point(&self) -> &Point {
        &self.end_point
    }
    /// Returns the displacement `end - start` as a point.
    pub fn displacement(&self) -> &Point {
        &self.displacement
    }
    /// Returns the coordinates of the displacement.
    pub fn values(&self) -> &[Float] {
        self.displacement.values()
    }

    /// Returns whether the vector starts at the origin.
    pub fn is_radius_vector(&self) -> bool {
        self.start_point.is_origin()
    }

    /// Returns the Euclidean length of the vector.
    pub fn length(&self) -> Float {
        self.displacement
            .iter()
            .map(|x| x * x)
            .sum::<Float>()
            .sqrt()
    }
    /// Returns the Euclidean length of the vector. Same as
    /// [`Vector::length()`].
    pub fn abs(&self) -> Float {
        self.length()
    }

    /// Adds a vector or a list of coordinates to the vector.
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the operands have
    /// different numbers of dimensions, or [`GeometryError::InvalidArgument`]
    /// if a coordinate of the result overflows.
    pub fn add<'a>(&self, rhs: impl Into<Addend<'a>>) -> Result<Vector> {
        let (start, end) = match rhs.into() {
            Addend::Vector(other) => (
                self.start_point.add(&other.start_point)?,
                self.end_point.add(&other.end_point)?,
            ),
            Addend::Coords(coords) => (
                self.start_point.add(coords)?,
                self.end_point.add(coords)?,
            ),
        };
        Self::between(start, &end)
    }

    /// Subtracts a vector or a list of coordinates from the vector. This is
    /// equivalent to adding the negated operand.
    pub fn subtract<'a>(&self, rhs: impl Into<Addend<'a>>) -> Result<Vector> {
        match rhs.into() {
            Addend::Vector(other) => self.add(&other.negate()?),
            Addend::Coords(coords) => {
                let negated: SmallVec<[Float; 4]> = coords.iter().map(|x| -x).collect();
                self.add(Addend::Coords(&negated))
            }
        }
    }

    /// Returns the vector scaled by `scalar`, keeping the same start point.
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `scalar` is not finite or
    /// a coordinate of the result overflows.
    pub fn scale(&self, scalar: Float) -> Result<Vector> {
        GeometryError::check_finite(scalar, "scalar")?;
        let displacement = self.displacement.map(|x| x * scalar)?;
        Self::from_parts(self.start_point.clone(), displacement)
    }

    /// Returns the dot product of the vector with another.
    pub fn dot(&self, rhs: &Vector) -> Result<Float> {
        Self::scalar_multiply(self, rhs)
    }

    /// Multiplies the vector by a scalar (producing a vector) or by another
    /// vector (producing their dot product).
    ///
    /// ```
    /// # use ndgeom::prelude::*;
    /// let a = Vector::new([1.0, 2.0], None)?;
    /// let b = Vector::new([3.0, -1.0], None)?;
    /// assert_eq!(a.multiply(&b)?, Product::Scalar(1.0));
    /// assert_eq!(a.multiply(2.0)?, Product::Vector(Vector::new([2.0, 4.0], None)?));
    /// # Ok::<(), GeometryError>(())
    /// ```
    pub fn multiply<'a>(&self, rhs: impl Into<Multiplier<'a>>) -> Result<Product> {
        match rhs.into() {
            Multiplier::Scalar(scalar) => self.scale(scalar).map(Product::Vector),
            Multiplier::Vector(other) => self.dot(other).map(Product::Scalar),
        }
    }

    /// Returns the vector reflected through its start point.
    ///
    /// Returns [`GeometryError::InvalidArgument`] if a coordinate of the new
    /// end point overflows.
    pub fn negate(&self) -> Result<Vector> {
        let displacement = self.displacement.map(|x| -x)?;
        Self::from_parts(self.start_point.clone(), displacement)
    }

    /// Returns the dot product of two vectors.
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the vectors have
    /// different numbers of dimensions.
    pub fn scalar_multiply(a: &Vector, b: &Vector) -> Result<Float> {
        GeometryError::check_ndim(a.ndim(), b.ndim())?;
        Ok(std::iter::zip(a.values(), b.values())
            .map(|(l, r)| l * r)
            .sum())
    }

    /// Returns whether two vectors lie along the same line, which is the case
    /// when every 2x2 minor of the matrix with rows `a` and `b` vanishes.
    ///
    /// Vectors with fewer than two dimensions are always collinear. The zero
    /// vector is collinear with every vector.
    pub fn is_collinear(a: &Vector, b: &Vector) -> Result<bool> {
        GeometryError::check_ndim(a.ndim(), b.ndim())?;
        let ndim = a.ndim();
        if ndim <= 1 {
            return Ok(true);
        }
        let nonvanishing_minor = (0..ndim)
            .tuple_combinations::<(usize, usize)>()
            .find(|&(i, j)| !approx_eq(a[i] * b[j], a[j] * b[i]));
        match nonvanishing_minor {
            Some((i, j)) => {
                log::trace!("{a} and {b} are not collinear: minor ({i}, {j}) is nonzero");
                Ok(false)
            }
            None => Ok(true),
        }
    }

    /// Returns whether two vectors are perpendicular, which is the case when
    /// their dot product is zero. This includes 1-dimensional vectors, where
    /// one of them must be the zero vector.
    pub fn is_orthogonal(a: &Vector, b: &Vector) -> Result<bool> {
        GeometryError::check_ndim(a.ndim(), b.ndim())?;
        Ok(approx_sum_eq_zero(
            std::iter::zip(a.values(), b.values()).map(|(l, r)| l * r),
        ))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.displacement == other.displacement && self.start_point == other.start_point
    }
}

impl Ndim for Vector {
    /// Returns the number of dimensions of the vector.
    fn ndim(&self) -> usize {
        self.displacement.ndim()
    }
}

impl Coords for Vector {
    fn as_coords(&self) -> &[Float] {
        self.displacement.values()
    }
}

impl Index<usize> for Vector {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.displacement[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(")?;
        fmt_coords(f, self.start_point.values())?;
        write!(f, ", ")?;
        fmt_coords(f, self.end_point.values())?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ErrorKind, assert_approx_eq};

    fn vector(end: &[Float]) -> Vector {
        Vector::new(end, None).unwrap()
    }

    fn point(coords: &[Float]) -> Point {
        Point::new(coords.iter().copied()).unwrap()
    }

    #[test]
    fn test_vector_new() {
        let v = Vector::new([4.0, 6.0, 1.0], Some(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(v.values(), &[3.0, 4.0, -2.0]);
        assert_eq!(v.start_point(), &point(&[1.0, 2.0, 3.0]));
        assert_eq!(v.end_point(), &point(&[4.0, 6.0, 1.0]));
        assert_eq!(v.ndim(), 3);
        assert!(!v.is_radius_vector());

        let v = vector(&[1.0, 2.0]);
        assert!(v.is_radius_vector());
        assert_eq!(v.start_point(), &point(&[0.0, 0.0]));

        assert_eq!(
            Vector::new([1.0, 2.0], Some(&[1.0])),
            Err(GeometryError::DimensionMismatch {
                expected: 2,
                got: 1,
            }),
        );
        assert_eq!(
            Vector::new([0.0; 0], None).map_err(|e| e.kind()),
            Err(ErrorKind::EmptyPoint),
        );
        assert_eq!(
            Vector::new([Float::NAN], None).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument),
        );
    }

    #[test]
    fn test_vector_from_points() {
        let a = point(&[1.0, 1.0, 1.0]);
        let b = point(&[5.0, 5.0, 5.0]);
        let ab = Vector::from_points(&b, &a).unwrap();
        assert_eq!(ab.start_point(), &a);
        assert_eq!(ab.end_point(), &b);
        assert_eq!(ab.values(), &[4.0, 4.0, 4.0]);

        let v = Vector::from_point(&b);
        assert!(v.is_radius_vector());
        assert_eq!(v.end_point(), &b);

        assert_eq!(
            Vector::from_points(&b, &point(&[1.0])).map_err(|e| e.kind()),
            Err(ErrorKind::DimensionMismatch),
        );
    }

    #[test]
    fn test_vector_add() {
        let v1 = Vector::new([2.0, 3.0], Some(&[1.0, 1.0])).unwrap();
        let v2 = Vector::new([0.0, 5.0], Some(&[-1.0, 2.0])).unwrap();
        let sum = v1.add(&v2).unwrap();
        assert_eq!(sum.start_point(), &point(&[0.0, 3.0]));
        assert_eq!(sum.end_point(), &point(&[2.0, 8.0]));
        assert_eq!(sum.values(), &[2.0, 5.0]);

        let translated = v1.add(&[10.0, 20.0]).unwrap();
        assert_eq!(translated.start_point(), &point(&[11.0, 21.0]));
        assert_eq!(translated.values(), v1.values());

        let by_point = v1.add(&point(&[10.0, 20.0])).unwrap();
        assert_eq!(by_point, translated);

        assert_eq!(
            vector(&[1.0, 2.0]).add(&vector(&[1.0, 2.0, 3.0])),
            Err(GeometryError::DimensionMismatch {
                expected: 2,
                got: 3,
            }),
        );
        assert_eq!(
            v1.add(&[1.0, 2.0, 3.0]).map_err(|e| e.kind()),
            Err(ErrorKind::DimensionMismatch),
        );
    }

    #[test]
    fn test_vector_subtract() {
        let a = vector(&[1.0, 2.0, 3.0, 4.0, 0.0]);
        let b = vector(&[1.0, 6.0, 5.0, 1.0, 1.0]);
        let diff = b.subtract(&a).unwrap();
        assert_eq!(diff.values(), &[0.0, 4.0, 2.0, -3.0, 1.0]);
        assert!(diff.is_radius_vector());

        let translated = a.subtract(&vec![1.0; 5]).unwrap();
        assert_eq!(translated.start_point(), &point(&[-1.0; 5]));
        assert_eq!(translated.values(), a.values());
    }

    #[test]
    fn test_vector_neg() {
        let v = Vector::new([2.0, 3.0], Some(&[1.0, 1.0])).unwrap();
        let n = v.negate().unwrap();
        assert_eq!(n.start_point(), v.start_point());
        assert_eq!(n.end_point(), &point(&[0.0, -1.0]));
        assert_eq!(n.length(), v.length());
        assert_eq!(v.add(&n).unwrap().length(), 0.0);
    }

    #[test]
    fn test_vector_scale() {
        let v = Vector::new([2.0, 3.0], Some(&[1.0, 1.0])).unwrap();
        let scaled = v.scale(5.0).unwrap();
        assert_eq!(scaled.start_point(), v.start_point());
        assert_eq!(scaled.values(), &[5.0, 10.0]);
        assert_eq!(scaled.end_point(), &point(&[6.0, 11.0]));
        assert_eq!(
            v.scale(Float::NAN).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument),
        );
        assert_eq!(
            v.multiply(Float::INFINITY).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument),
        );
    }

    #[test]
    fn test_vector_overflow() {
        let big = vector(&[1e308, 1.0]);
        assert_eq!(
            big.scale(10.0).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument),
        );
        assert_eq!(
            big.add(&big).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument),
        );
        assert_eq!(
            big.subtract(&[-1e308, 0.0]).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument),
        );
        assert_eq!(
            Vector::new([-1e308], Some(&[1e308])).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument),
        );

        // Reflecting through a far-away start point overflows the end point
        let far = Vector::new([0.0], Some(&[1e308])).unwrap();
        assert_eq!(far.negate().map_err(|e| e.kind()), Err(ErrorKind::InvalidArgument));
        assert_eq!(big.negate().unwrap().values(), &[-1e308, -1.0]);
    }

    #[test]
    fn test_vector_length() {
        assert_eq!(vector(&[3.0, 4.0]).length(), 5.0);
        assert_eq!(vector(&[-2.0]).abs(), 2.0);
        assert_approx_eq!(vector(&[1.0, 2.0, 3.0, 4.0, 0.0]).length(), 30.0_f64.sqrt());
    }

    #[test]
    fn test_dot_product() {
        let a = vector(&[1.0, 2.0, 3.0, 4.0, 0.0]);
        let b = vector(&[1.0, 6.0, 5.0, 1.0, 1.0]);
        assert_eq!(Vector::scalar_multiply(&a, &b), Ok(32.0));
        assert_eq!(a.dot(&b), Ok(32.0));
        assert_eq!(a.multiply(&b).unwrap().into_scalar(), Some(32.0));
        assert_eq!(
            Vector::scalar_multiply(&a, &vector(&[1.0])).map_err(|e| e.kind()),
            Err(ErrorKind::DimensionMismatch),
        );
    }

    #[test]
    fn test_collinear() {
        let a = vector(&[1.0, 2.0, 3.0, 4.0, 0.0]);
        let b = vector(&[1.0, 6.0, 5.0, 1.0, 1.0]);
        assert_eq!(Vector::is_collinear(&a, &a.scale(-2.001).unwrap()), Ok(true));
        assert_eq!(Vector::is_collinear(&a, &b), Ok(false));
        assert_eq!(Vector::is_collinear(&vector(&[3.0]), &vector(&[-7.0])), Ok(true));
        assert_eq!(Vector::is_collinear(&vector(&[0.0, 0.0]), &vector(&[1.0, 5.0])), Ok(true));
        assert_eq!(
            Vector::is_collinear(&vector(&[1.0, 2.0]), &vector(&[1.0, 2.0, 3.0])),
            Err(GeometryError::DimensionMismatch {
                expected: 2,
                got: 3,
            }),
        );
    }

    #[test]
    fn test_orthogonal() {
        let d = vector(&[1.0, 1.0]);
        assert_eq!(Vector::is_orthogonal(&d, &vector(&[-1.0, 1.0])), Ok(true));
        assert_eq!(Vector::is_orthogonal(&d, &vector(&[0.0, 1.0])), Ok(false));
        assert_eq!(
            Vector::is_orthogonal(&vector(&[0.1, 0.2]), &vector(&[0.2, -0.1])),
            Ok(true),
        );
        assert_eq!(Vector::is_orthogonal(&vector(&[0.0]), &vector(&[5.0])), Ok(true));
        assert_eq!(Vector::is_orthogonal(&vector(&[2.0]), &vector(&[5.0])), Ok(false));
        assert_eq!(Vector::is_orthogonal(&vector(&[-3.0]), &vector(&[0.0])), Ok(true));
        assert_eq!(
            Vector::is_orthogonal(&d, &vector(&[1.0])).map_err(|e| e.kind()),
            Err(ErrorKind::DimensionMismatch),
        );
    }

    #[test]
    fn test_vector_eq() {
        let v = Vector::new([2.0, 3.0], Some(&[1.0, 1.0])).unwrap();
        assert_eq!(v, Vector::new([2.0, 3.0], Some(&[1.0, 1.0])).unwrap());
        assert_ne!(v, vector(&[1.0, 2.0]));
        assert_eq!(vector(&[1.0, 6.0, 5.0, 1.0, 1.0]), vector(&[1.0, 6.0, 5.0, 1.0, 1.0]));
    }

    #[test]
    fn test_vector_display() {
        let v = Vector::new([2.0, 3.5], Some(&[1.0, 1.0])).unwrap();
        assert_eq!(v.to_string(), "Vector((1, 1), (2, 3.5))");
        assert_eq!(Product::Scalar(2.5).to_string(), "2.5");
    }
}
