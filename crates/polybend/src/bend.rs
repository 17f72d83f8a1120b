//! Turning angles at polyline vertices via the law-of-cosines formula.
//!
//! Purpose
//! - `angle_3pnt` is the numeric core: the angle at vertex `b` between edges
//!   `b→a` and `b→c`, from `acos(ba·bc / (|ba||bc|))`.
//! - `line_angles` slides a 3-point window over a polyline and reports the
//!   bend at every interior vertex, in input order.
//!
//! Numerics
//! - Results within `SNAP_EPS` of 0 or π are snapped to the exact value to
//!   suppress floating-point noise on collinear inputs.
//! - Degenerate windows (a duplicated vertex gives a zero-length edge) yield
//!   NaN and propagate unguarded; callers validate or accept NaN.

use nalgebra::Vector2;

use crate::angle::Angle;
use crate::point::Point;
use crate::InvalidArgument;

/// Tolerance for snapping near-collinear results to exactly 0 or π.
const SNAP_EPS: f64 = 1e-9;

/// Angle at vertex `b` formed by the edges towards `a` and `c`.
///
/// Collinear triples snap to exactly 0 (same direction) or π (fold-back).
pub fn angle_3pnt(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Angle {
    let ba = a - b;
    let bc = c - b;

    let cos_a = ba.dot(&bc) / (ba.norm() * bc.norm());
    let angle = cos_a.acos();

    if (angle - std::f64::consts::PI).abs() < SNAP_EPS {
        return Angle::from_radians(std::f64::consts::PI);
    }
    if angle.abs() < SNAP_EPS {
        return Angle::from_radians(0.0);
    }
    Angle::from_radians(angle)
}

/// Arity-checked variant of [`angle_3pnt`] over a point slice.
///
/// Rejects anything but exactly 3 points, distinguishing under- from
/// over-length inputs.
pub fn angle_3pnt_checked(v: &[Vector2<f64>]) -> Result<Angle, InvalidArgument> {
    match v.len() {
        n if n > 3 => Err(InvalidArgument::TooManyPoints { got: n }),
        n if n < 3 => Err(InvalidArgument::TooFewPoints { got: n }),
        _ => Ok(angle_3pnt(v[0], v[1], v[2])),
    }
}

/// Bend angles at the interior vertices of `points`, in input order.
///
/// Returns exactly `max(N − 2, 0)` pairs; pair `i` is `(points[i + 1], angle
/// at that vertex)`. Fewer than 3 points produce an empty result. The input
/// is never mutated.
pub fn line_angles(points: &[Point]) -> Vec<(Point, Angle)> {
    let mut angles = Vec::with_capacity(points.len().saturating_sub(2));
    for w in points.windows(3) {
        angles.push((w[1], angle_3pnt(w[0].into(), w[1].into(), w[2].into())));
    }
    angles
}

/// [`line_angles`] over any ordered point source.
pub fn line_angles_iter<I>(points: I) -> Vec<(Point, Angle)>
where
    I: IntoIterator<Item = Point>,
{
    let points: Vec<Point> = points.into_iter().collect();
    line_angles(&points)
}
