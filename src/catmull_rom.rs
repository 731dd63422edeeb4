use crate::{point::ControlPoint, polynomial::Polynomial};

/// Returns position on the uniform Catmull-Rom spline segment between `p1` (`t = 0`) and `p2` (`t = 1`).
/// `p0` and `p3` are the neighbouring points which shape the tangents at both ends of the segment.
///
/// Values of `t` outside `[0, 1]` extrapolate the cubic.
/// # Example
/// ```
/// use curve_functions::{catmull_rom_curve, Point2};
///
/// let p0 = Point2::new(0.0, 0.0);
/// let p1 = Point2::new(1.0, 0.0);
/// let p2 = Point2::new(2.0, 1.0);
/// let p3 = Point2::new(3.0, 1.0);
///
/// assert_eq!(catmull_rom_curve(p0, p1, p2, p3, 0.0), p1);
/// assert_eq!(catmull_rom_curve(p0, p1, p2, p3, 0.5), Point2::new(1.5, 0.5));
/// ```
pub fn catmull_rom_curve<P: ControlPoint>(p0: P, p1: P, p2: P, p3: P, t: f64) -> P {
    let a = p1 * 2.0;
    let b = p2 - p0;
    let c = p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3;
    let d = p3 - p0 + p1 * 3.0 - p2 * 3.0;

    (a + b * t + c * (t * t) + d * (t * t * t)) * 0.5
}

/// Cubic in power form of the segment evaluated by [catmull_rom_curve].
/// Its [Polynomial::slope] is the tangent, equal to `(p2 - p0) / 2` at `t = 0` and `(p3 - p1) / 2` at `t = 1`.
pub fn catmull_rom_polynomial<P: ControlPoint>(p0: P, p1: P, p2: P, p3: P) -> Polynomial<P, 4> {
    let a = p1;
    let b = (p2 - p0) * 0.5;
    let c = (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * 0.5;
    let d = (p3 - p0 + p1 * 3.0 - p2 * 3.0) * 0.5;

    Polynomial::new([a, b, c, d])
}
