extern crate curve_functions;

use curve_functions::{catmull_rom_curve, Point2};

fn main() {

    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 2.0),
        Point2::new(3.0, 3.0),
        Point2::new(4.0, 1.0),
        Point2::new(6.0, 0.0),
        Point2::new(7.0, 2.0)
    ];

    let steps_per_segment = 10;

    println!("t;x;y");
    for segment in 0..points.len() - 3 {
        for i in 0..steps_per_segment {
            let t = i as f64 / steps_per_segment as f64;
            let point = catmull_rom_curve(points[segment], points[segment + 1], points[segment + 2], points[segment + 3], t);
            println!("{:.2};{:.2};{:.2}", segment as f64 + t, point.x, point.y);
        }
    }
}
