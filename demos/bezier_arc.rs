extern crate curve_functions;

use curve_functions::{bezier_polynomial_2p1c, Point3};

fn main() {

    let start = Point3::new(0.0, 0.0, 0.0);
    let end = Point3::new(4.0, 0.0, 2.0);
    let handle = Point3::new(2.0, 3.0, 1.0);

    let curve = bezier_polynomial_2p1c(start, end, handle);

    let number_of_steps = 20;
    let mut t_vector = Vec::new();
    for i in 0..=number_of_steps {
        t_vector.push(i as f64 / number_of_steps as f64);
    }

    let result = curve.batch_evaluate(&t_vector);

    println!("t;x;y;z;dx;dy;dz");
    for i in 0..=number_of_steps {
        let tangent = curve.slope(t_vector[i]);
        println!(
            "{:.2};{:.2};{:.2};{:.2};{:.2};{:.2};{:.2}",
            t_vector[i], result[i].x, result[i].y, result[i].z, tangent.x, tangent.y, tangent.z
        );
    }
}
