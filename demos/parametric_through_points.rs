extern crate curve_functions;

use curve_functions::{try_parametric_curve, Point2};

fn main() {

    let p0 = Point2::new(0.0, 1.0);
    let p1 = Point2::new(2.0, 3.0);
    let p2 = Point2::new(5.0, 0.0);

    for s in [0.25, 0.5, 1.0] {
        println!("s = {}", s);
        let number_of_steps = 10;
        for i in 0..=number_of_steps {
            let t = i as f64 / number_of_steps as f64;
            match try_parametric_curve(p0, p1, p2, s, t) {
                Ok(point) => println!("{:.2};{:.2};{:.2}", t, point.x, point.y),
                Err(error) => {
                    println!("{}", error);
                    break;
                }
            }
        }
    }
}
