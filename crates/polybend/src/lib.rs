//! Bend-angle geometry for 2D polylines.
//!
//! Purpose
//! - Provide a small angle value type (radians/degrees), a 2D point type with
//!   arithmetic, and the turning angle at each interior vertex of a polyline
//!   via the law-of-cosines vector formula.
//! - Keep the API minimal (KISS, YAGNI) and numerically explicit: near-0 and
//!   near-π results are snapped, everything else follows IEEE semantics.
//!
//! All computations are pure value operations; there is no shared state, no
//! I/O, and no configuration beyond the fixed snap epsilon in `bend`.

pub mod angle;
pub mod bend;
pub mod point;
pub mod rand;

mod error;

pub use error::InvalidArgument;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience alias so callers share the edge-vector type with `bend`.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{Angle, AngleUnit};
    pub use crate::bend::{angle_3pnt, angle_3pnt_checked, line_angles, line_angles_iter};
    pub use crate::point::Point;
    pub use crate::InvalidArgument;
    pub use nalgebra::Vector2 as Vec2;
}
