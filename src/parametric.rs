use std::{error::Error, fmt::Display};

use crate::{point::ControlPoint, polynomial::Polynomial};

/// Returns position on the 3-point parametric curve which starts at `p0` (`t = 0`),
/// passes through `p1` at `t = s` and ends at `p2` (`t = 1`).
///
/// `s` must lie strictly inside `(0, 1)`. No check is made: `s = 0` or `s = 1` divides by zero
/// and the result has infinite or NaN components. Use [try_parametric_curve] to get an error instead.
/// # Example
/// ```
/// use curve_functions::{parametric_curve, Point2};
/// use assert_approx_eq::assert_approx_eq;
///
/// let p0 = Point2::new(0.0, 0.0);
/// let p1 = Point2::new(1.0, 2.0);
/// let p2 = Point2::new(3.0, 0.0);
///
/// let middle = parametric_curve(p0, p1, p2, 0.4, 0.4);
/// assert_approx_eq!(middle.x, 1.0, 1e-9);
/// assert_approx_eq!(middle.y, 2.0, 1e-9);
/// ```
pub fn parametric_curve<P: ControlPoint>(p0: P, p1: P, p2: P, s: f64, t: f64) -> P {
    parametric_polynomial(p0, p1, p2, s).evaluate(t)
}

/// Coefficients of the curve evaluated by [parametric_curve], in ascending power of `t`.
/// Same division by zero behaviour for `s = 0` or `s = 1`.
pub fn parametric_polynomial<P: ControlPoint>(p0: P, p1: P, p2: P, s: f64) -> Polynomial<P, 3> {
    let x = 1.0 - s;

    let b = (p1 - p0) * (1.0 / (x * s));
    let c = (p2 - p0) * (1.0 / x);

    let a0 = p0;
    let a1 = b - c * s;
    let a2 = c - b;

    Polynomial::new([a0, a1, a2])
}

/// Checked version of [parametric_curve].
/// # Errors
/// Error is returned when `s` is not finite or is equal to 0 or 1.
/// ```
/// use curve_functions::{try_parametric_curve, Point2};
///
/// let p0 = Point2::new(0.0, 0.0);
/// let p1 = Point2::new(1.0, 2.0);
/// let p2 = Point2::new(3.0, 0.0);
///
/// assert!(try_parametric_curve(p0, p1, p2, 0.5, 0.25).is_ok());
/// assert!(try_parametric_curve(p0, p1, p2, 1.0, 0.25).is_err());
/// ```
pub fn try_parametric_curve<P: ControlPoint>(p0: P, p1: P, p2: P, s: f64, t: f64) -> Result<P, Box<dyn Error>> {
    Ok(try_parametric_polynomial(p0, p1, p2, s)?.evaluate(t))
}

/// Checked version of [parametric_polynomial].
/// # Errors
/// Error is returned when `s` is not finite or is equal to 0 or 1.
pub fn try_parametric_polynomial<P: ControlPoint>(p0: P, p1: P, p2: P, s: f64) -> Result<Polynomial<P, 3>, Box<dyn Error>> {
    if !s.is_finite() {
        return Err(Box::new(CurveError(format!("s must be finite, got {}", s))));
    }
    if s == 0.0 || s == 1.0 {
        return Err(Box::new(CurveError(format!("s must not be 0 or 1, got {}", s))));
    }
    Ok(parametric_polynomial(p0, p1, p2, s))
}

#[derive(Debug)]
struct CurveError(String);

impl Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Curve: {}", self.0)
    }
}

impl Error for CurveError {}
