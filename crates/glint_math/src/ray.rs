use crate::DVec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized on construction and whenever it is
/// reassigned, so `|direction| == 1` holds for every ray built through
/// this API. A zero-length input direction stays zero; such a ray cannot
/// hit anything.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    /// Create a new ray. The direction is normalized.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Create a ray starting at `origin` and passing through `through`.
    pub fn from_points(origin: DVec3, through: DVec3) -> Self {
        Self::new(origin, through - origin)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the unit direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Move the ray origin.
    pub fn set_origin(&mut self, origin: DVec3) {
        self.origin = origin;
    }

    /// Replace the direction, renormalizing it.
    pub fn set_direction(&mut self, direction: DVec3) {
        self.direction = direction.normalize_or_zero();
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}
