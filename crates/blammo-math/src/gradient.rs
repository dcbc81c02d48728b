//! Gradient vector helpers.
//!
//! Lattice gradients are drawn component-wise from a coarse integer grid,
//! so a zero vector is a real possibility for small tables. These helpers
//! return `None` for vectors that can't be normalised instead of producing
//! NaN.

use glam::{DVec2, DVec3};

/// Normalises a 2D gradient, or `None` if its length is zero or not finite.
///
/// # Example
///
/// ```rust
/// use blammo_math::{normalize2, DVec2};
///
/// let g = normalize2(DVec2::new(3.0, 4.0)).unwrap();
/// assert!((g.length() - 1.0).abs() < 1e-12);
/// assert!(normalize2(DVec2::ZERO).is_none());
/// ```
#[inline]
pub fn normalize2(v: DVec2) -> Option<DVec2> {
    v.try_normalize()
}

/// Normalises a 3D gradient, or `None` if its length is zero or not finite.
#[inline]
pub fn normalize3(v: DVec3) -> Option<DVec3> {
    v.try_normalize()
}
