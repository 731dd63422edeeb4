use crate::{point::ControlPoint, polynomial::Polynomial};

/// Returns position on the quadratic Bezier curve from `p0` (`t = 0`) to `p1` (`t = 1`)
/// with single control handle `s`.
/// # Example
/// ```
/// use curve_functions::{bezier_curve_2p1c, Point2};
///
/// let p0 = Point2::new(0.0, 0.0);
/// let p1 = Point2::new(2.0, 0.0);
/// let handle = Point2::new(1.0, 2.0);
///
/// assert_eq!(bezier_curve_2p1c(p0, p1, handle, 0.5), Point2::new(1.0, 1.0));
/// ```
pub fn bezier_curve_2p1c<P: ControlPoint>(p0: P, p1: P, s: P, t: f64) -> P {
    let omt = 1.0 - t;

    p0 * (omt * omt) + s * (2.0 * t * omt) + p1 * (t * t)
}

/// Power form of the curve evaluated by [bezier_curve_2p1c]: `p0 + 2(s - p0) t + (p0 - 2s + p1) t^2`.
pub fn bezier_polynomial_2p1c<P: ControlPoint>(p0: P, p1: P, s: P) -> Polynomial<P, 3> {
    Polynomial::new([p0, (s - p0) * 2.0, p0 - s * 2.0 + p1])
}
