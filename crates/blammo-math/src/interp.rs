//! Interpolation utilities for lattice noise.
//!
//! Gradient noise blends corner contributions with a cubic ease curve and
//! plain linear interpolation:
//!
//! - Linear interpolation ([`lerp`])
//! - The classic Perlin ease curve ([`s_curve`])
//!
//! Everything works in `f64`; the noise core keeps full double precision so
//! that lattice lookups stay exact far from the origin.
//!
//! # Usage
//!
//! ```rust
//! use blammo_math::{lerp, s_curve};
//!
//! let mid = lerp(0.0, 10.0, 0.5);
//! assert_eq!(mid, 5.0);
//!
//! let eased = s_curve(0.5);
//! assert_eq!(eased, 0.5);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + t * (b - a)`
///
/// # Example
///
/// ```rust
/// use blammo_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Cubic ease curve used for noise blending weights.
///
/// Same polynomial as a unit smoothstep, without the clamp: the argument is
/// always a cell-local fraction in `[0, 1)`.
///
/// # Formula
///
/// `t * t * (3 - 2 * t)`
///
/// # Properties
///
/// - First derivative is zero at both ends, so noise has no creases at
///   cell boundaries
/// - Second derivative is not continuous
///
/// # Example
///
/// ```rust
/// use blammo_math::s_curve;
///
/// assert_eq!(s_curve(0.0), 0.0);
/// assert_eq!(s_curve(1.0), 1.0);
/// ```
#[inline]
pub fn s_curve(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
