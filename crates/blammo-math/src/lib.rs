//! # blammo-math
//!
//! Math primitives for lattice gradient noise:
//!
//! - Interpolation ([`lerp`], [`s_curve`])
//! - Gradient normalisation ([`normalize2`], [`normalize3`])
//!
//! # Dependencies
//!
//! - [`glam`] - `DVec2`/`DVec3` for gradient vectors, re-exported here
//!
//! # Used By
//!
//! - `blammo-noise` - Table generation and noise evaluation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod gradient;
mod interp;

pub use glam::{DVec2, DVec3};
pub use gradient::*;
pub use interp::*;
