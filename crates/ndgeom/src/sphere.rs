//! N-dimensional hypersphere.

use std::fmt;

use crate::approx_cmp::{approx_eq, approx_lt_eq};
use crate::{Coords, Float, GeometryError, Ndim, Point, Result, Vector, special};

/// Hypersphere described by a radius vector from its center to a point on its
/// surface.
///
/// Spheres support scaling but not the additive operations of [`Vector`];
/// [`Sphere::add()`], [`Sphere::subtract()`], [`Sphere::negate()`], and
/// [`Sphere::abs()`] always return [`GeometryError::UnsupportedOperation`].
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
#[derive(Debug, Clone)]
pub struct Sphere(Vector);

impl Sphere {
    const TYPE_NAME: &'static str = "Sphere";

    /// Maximum number of dimensions accepted by [`Sphere::from_length()`].
    pub const MAX_NDIM: usize = 1 << 20;

    /// Constructs a sphere from the coordinates of a point on its surface and
    /// the optional coordinates of its center. If `center` is `None`, the
    /// sphere is centered at the origin.
    pub fn new(surface: impl Coords, center: Option<&[Float]>) -> Result<Self> {
        Vector::new(surface, center).map(Self)
    }

    /// Constructs a sphere centered at the start of `vector` whose surface
    /// passes through the end of `vector`.
    pub fn from_vector(vector: &Vector) -> Self {
        Self(vector.clone())
    }

    /// Constructs a sphere centered at `center` whose surface passes through
    /// `surface`.
    pub fn from_points(surface: &Point, center: &Point) -> Result<Self> {
        Vector::from_points(surface, center).map(Self)
    }

    /// Constructs a sphere of radius `length` centered at the origin in
    /// `ndim`-dimensional space. The point on its surface lies along the last
    /// axis.
    ///
    /// Returns [`GeometryError::DomainError`] if `ndim` is zero or greater than
    /// [`Sphere::MAX_NDIM`], or [`GeometryError::InvalidArgument`] if `length`
    /// is not finite.
    ///
    /// ```
    /// # use ndgeom::prelude::*;
    /// let sphere = Sphere::from_length(5.0, 3)?;
    /// assert_eq!(sphere.radius(), 5.0);
    /// assert_eq!(sphere.ndim(), 3);
    /// assert_eq!(sphere.scale(2.0)?.radius(), 10.0);
    /// # Ok::<(), GeometryError>(())
    /// ```
    pub fn from_length(length: Float, ndim: usize) -> Result<Self> {
        if ndim < 1 {
            return Err(GeometryError::domain(format!(
                "sphere must have at least 1 dimension, got {ndim}"
            )));
        }
        if ndim > Self::MAX_NDIM {
            return Err(GeometryError::domain(format!(
                "sphere must have at most {} dimensions, got {ndim}",
                Self::MAX_NDIM,
            )));
        }
        GeometryError::check_finite(length, "radius")?;
        let mut surface = vec![0.0; ndim];
        surface[ndim - 1] = length;
        log::debug!("constructing {ndim}D sphere of radius {length}");
        Self::new(surface, None)
    }

    /// Returns the center of the sphere.
    pub fn center(&self) -> &Point {
        self.0.start_point()
    }
    /// Returns the point on the surface of the sphere that defines its radius.
    pub fn surface_point(&self) -> &Point {
        self.0.end_point()
    }
    /// Returns the radius vector of the sphere.
    pub fn as_vector(&self) -> &Vector {
        &self.0
    }
    /// Returns the radius vector of the sphere.
    pub fn into_vector(self) -> Vector {
        self.0
    }

    /// Returns the radius of the sphere, which is never negative.
    pub fn radius(&self) -> Float {
        self.0.length()
    }
    /// Returns the radius of the sphere. Same as [`Sphere::radius()`].
    pub fn length(&self) -> Float {
        self.radius()
    }

    /// Returns the (N-1)-dimensional surface measure of the sphere:
    /// `2 π^(n/2) / Γ(n/2) R^(n-1)`.
    pub fn area(&self) -> Float {
        let n = self.ndim();
        special::unit_sphere_area(n) * self.radius().powf(n as Float - 1.0)
    }

    /// Returns the N-dimensional measure of the ball enclosed by the sphere:
    /// `π^(n/2) / Γ(n/2 + 1) R^n`.
    pub fn volume(&self) -> Float {
        let n = self.ndim();
        special::unit_ball_volume(n) * self.radius().powf(n as Float)
    }

    fn distance_from_center(&self, point: &Point) -> Result<Float> {
        GeometryError::check_ndim(self.ndim(), point.ndim())?;
        self.center().distance_to(point)
    }

    /// Returns whether `point` is inside the ball enclosed by the sphere or
    /// approximately on its surface.
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if `point` has a different
    /// number of dimensions.
    pub fn contains(&self, point: &Point) -> Result<bool> {
        let distance = self.distance_from_center(point)?;
        Ok(approx_lt_eq(distance, self.radius()))
    }

    /// Returns whether `point` is approximately on the surface of the sphere.
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if `point` has a different
    /// number of dimensions.
    pub fn on_sphere(&self, point: &Point) -> Result<bool> {
        let distance = self.distance_from_center(point)?;
        Ok(approx_eq(distance, self.radius()))
    }

    /// Returns the sphere with the same center and its radius scaled by
    /// `scalar`. A negative scalar also mirrors the surface point through the
    /// center, so the radius is scaled by `|scalar|`.
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `scalar` is not finite.
    pub fn scale(&self, scalar: Float) -> Result<Sphere> {
        self.0.scale(scalar).map(Self)
    }
    /// Returns the sphere with its radius scaled by `scalar`. Same as
    /// [`Sphere::scale()`].
    pub fn multiply(&self, scalar: Float) -> Result<Sphere> {
        self.scale(scalar)
    }

    /// Always returns [`GeometryError::UnsupportedOperation`].
    pub fn add<T>(&self, _rhs: T) -> Result<Sphere> {
        Err(GeometryError::unsupported("addition", Self::TYPE_NAME))
    }
    /// Always returns [`GeometryError::UnsupportedOperation`].
    pub fn subtract<T>(&self, _rhs: T) -> Result<Sphere> {
        Err(GeometryError::unsupported("subtraction", Self::TYPE_NAME))
    }
    /// Always returns [`GeometryError::UnsupportedOperation`].
    pub fn negate(&self) -> Result<Sphere> {
        Err(GeometryError::unsupported("negation", Self::TYPE_NAME))
    }
    /// Always returns [`GeometryError::UnsupportedOperation`]. Use
    /// [`Sphere::radius()`] instead.
    pub fn abs(&self) -> Result<Float> {
        Err(GeometryError::unsupported("absolute value", Self::TYPE_NAME))
    }
}

impl PartialEq for Sphere {
    /// Returns whether the spheres have the same center and approximately the
    /// same radius.
    fn eq(&self, other: &Self) -> bool {
        self.center() == other.center() && approx_eq(self.radius(), other.radius())
    }
}

impl Ndim for Sphere {
    /// Returns the number of dimensions of the space containing the sphere.
    fn ndim(&self) -> usize {
        self.0.ndim()
    }
}

impl From<Vector> for Sphere {
    fn from(value: Vector) -> Self {
        Self(value)
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sphere[{}](start_point={}, radius={})",
            self.ndim(),
            self.center(),
            self.radius(),
        )
    }
}
