use std::ops::{Add, Mul, Sub};

/// Arithmetic a point type must provide to be interpolated by the curve functions:
/// addition, subtraction and multiplication by an `f64` scalar.
///
/// Implemented for every type with those operators, so [nalgebra::Vector2], [nalgebra::Vector3]
/// and plain `f64` can be passed directly.
/// # Example
/// ```
/// use curve_functions::{ControlPoint, Point2};
///
/// fn midpoint<P: ControlPoint>(a: P, b: P) -> P {
///     a + (b - a) * 0.5
/// }
///
/// assert_eq!(midpoint(Point2::new(0.0, 0.0), Point2::new(2.0, 4.0)), Point2::new(1.0, 2.0));
/// assert_eq!(midpoint(1.0, 3.0), 2.0);
/// ```
pub trait ControlPoint:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
{
}

impl<P> ControlPoint for P
where
    P: Copy + Add<Output = P> + Sub<Output = P> + Mul<f64, Output = P>
{
}

#[cfg(test)]
mod tests {
    use nalgebra::{Vector2, Vector3};

    use super::*;

    fn lerp<P: ControlPoint>(a: P, b: P, t: f64) -> P {
        a + (b - a) * t
    }

    #[test]
    fn scalar_is_control_point() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn nalgebra_vectors_are_control_points() {
        assert_eq!(lerp(Vector2::new(0.0, 0.0), Vector2::new(4.0, -2.0), 0.25), Vector2::new(1.0, -0.5));
        assert_eq!(
            lerp(Vector3::new(1.0, 1.0, 1.0), Vector3::new(3.0, 1.0, -1.0), 0.5),
            Vector3::new(2.0, 1.0, 0.0)
        );
    }
}
