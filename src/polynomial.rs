use crate::point::ControlPoint;

/// Polynomial in parameter `t` with point valued coefficients, stored in ascending power order:
/// `coefficients[0] + coefficients[1] * t + ... + coefficients[N - 1] * t^(N - 1)`.
///
/// Curve builders such as [crate::catmull_rom_polynomial] return this form so a single curve
/// can be evaluated at many parameters, or differentiated, without recomputing its coefficients.
/// # Example
/// ```
/// use curve_functions::{Point2, Polynomial};
///
/// // p(t) = (1, 0) + (0, 2) * t
/// let line = Polynomial::new([Point2::new(1.0, 0.0), Point2::new(0.0, 2.0)]);
///
/// assert_eq!(line.evaluate(0.5), Point2::new(1.0, 1.0));
/// assert_eq!(line.slope(0.5), Point2::new(0.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial<P, const N: usize> {
    coefficients: [P; N],
}

impl<P: ControlPoint, const N: usize> Polynomial<P, N> {

    /// Creates polynomial from coefficients given in ascending power order.
    /// A polynomial needs at least one coefficient, `N = 0` fails to compile.
    pub fn new(coefficients: [P; N]) -> Self {
        const { assert!(N > 0, "polynomial must have at least one coefficient") };
        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[P; N] {
        &self.coefficients
    }

    /// Value at `t`, evaluated with Horner's scheme.
    pub fn evaluate(&self, t: f64) -> P {
        let mut result = self.coefficients[N - 1];
        for i in (0..N - 1).rev() {
            result = result * t + self.coefficients[i];
        }
        result
    }

    /// First derivative with respect to `t`, which is the tangent of the curve at `t`.
    pub fn slope(&self, t: f64) -> P {
        let mut result = self.coefficients[N - 1] * (N - 1) as f64;
        for i in (1..N - 1).rev() {
            result = result * t + self.coefficients[i] * i as f64;
        }
        result
    }

    /// Evaluates polynomial for every value of `t_values`, keeping their order.
    pub fn batch_evaluate(&self, t_values: &[f64]) -> Vec<P> {
        let mut results = Vec::with_capacity(t_values.len());
        for t in t_values {
            results.push(self.evaluate(*t));
        }
        results
    }
}
