//! Closed-form interpolation curves over 2D and 3D points: a 3-point parametric curve,
//! a Catmull-Rom spline segment and a quadratic Bezier curve with single control handle.
//!
//! Every curve is a pure function, generic over [ControlPoint], so the same function
//! serves [Point2], [Point3] or any other type with `+`, `-` and `* f64`.
//!
//! # Example
//! ```
//! use curve_functions::{bezier_curve_2p1c, catmull_rom_curve, Point2, Point3};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let value = bezier_curve_2p1c(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(1.0, 2.0), 0.5);
//! assert_eq!(value, Point2::new(1.0, 1.0));
//!
//! let value = catmull_rom_curve(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 1.0),
//!     Point3::new(2.0, 1.0, 1.0),
//!     Point3::new(3.0, 1.0, 0.0),
//!     1.0
//! );
//! assert_approx_eq!(value.x, 2.0, 1e-9);
//! assert_approx_eq!(value.y, 1.0, 1e-9);
//! assert_approx_eq!(value.z, 1.0, 1e-9);
//! ```

mod point;
mod polynomial;
mod parametric;
mod catmull_rom;
mod bezier;

pub use point::ControlPoint;
pub use polynomial::Polynomial;
pub use parametric::{parametric_curve, parametric_polynomial, try_parametric_curve, try_parametric_polynomial};
pub use catmull_rom::{catmull_rom_curve, catmull_rom_polynomial};
pub use bezier::{bezier_curve_2p1c, bezier_polynomial_2p1c};

/// Point in 2D space.
pub type Point2 = nalgebra::Vector2<f64>;

/// Point in 3D space.
pub type Point3 = nalgebra::Vector3<f64>;
