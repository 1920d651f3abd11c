//! Walkthrough of the library on a fixed set of examples.

use eyre::Result;
use itertools::Itertools;
use ndgeom::prelude::*;

const SEPARATOR_WIDTH: usize = 40;

fn print_separator() {
    println!("\n{}\n", "_".repeat(SEPARATOR_WIDTH));
}

pub(crate) fn run() -> Result<()> {
    log::debug!("running showcase");

    print_separator();
    vector_arithmetic()?;
    print_separator();
    vector_predicates()?;
    print_separator();
    sphere_predicates()?;
    Ok(())
}

fn vector_arithmetic() -> Result<()> {
    let a = Vector::new([1.0, 2.0, 3.0, 4.0, 0.0], None)?;
    let b = Vector::new([1.0, 6.0, 5.0, 1.0, 1.0], None)?;
    let c = Vector::new([1.0, 6.0, 5.0, 1.0, 1.0], None)?;

    println!("Vector a: {a}, length: {}", a.length());
    println!("Vector b: {b}, length: {}", b.length());
    println!("Vector c: {c}, length: {}", c.length());
    println!("b == c: {}", b == c);
    println!();

    println!("{a} + {b} = {}", a.add(&b)?);
    println!("{b} - {a} = {}", b.subtract(&a)?);
    println!("{a} * 5 = {}", a.multiply(5.0)?);
    println!("{a} * {b} = {}", a.multiply(&b)?);
    println!("scalar product of {a} and {b} = {}", Vector::scalar_multiply(&a, &b)?);
    Ok(())
}

fn vector_predicates() -> Result<()> {
    let a = Vector::new([1.0, 2.0, 3.0, 4.0, 0.0], None)?;
    let b = Vector::new([1.0, 6.0, 5.0, 1.0, 1.0], None)?;
    let scaled = a.scale(-2.001)?;

    println!("{a} and {scaled} collinear: {}", Vector::is_collinear(&a, &scaled)?);
    println!("{a} and {b} collinear: {}", Vector::is_collinear(&a, &b)?);

    let d = Vector::new([1.0, 1.0], None)?;
    let e = Vector::new([-1.0, 1.0], None)?;
    let h = Vector::new([0.0, 1.0], None)?;

    println!("{d} and {e} orthogonal: {}", Vector::is_orthogonal(&d, &e)?);
    println!("{d} and {h} orthogonal: {}", Vector::is_orthogonal(&d, &h)?);
    Ok(())
}

fn sphere_predicates() -> Result<()> {
    let point_a = Point::new([1.0, 1.0, 1.0])?;
    let point_b = Point::new([5.0, 5.0, 5.0])?;
    let point_c = Point::new([7.0, 7.0, 7.0])?;
    let point_d = Point::new([12.0, 12.0, 12.0])?;
    let points = [&point_a, &point_b, &point_c, &point_d];

    println!("Points: {}", points.iter().join(", "));

    let vector_ab = Vector::from_points(&point_b, &point_a)?;
    println!("Vector from a to b: {vector_ab}");

    let sphere = Sphere::from_vector(&vector_ab);
    println!("Sphere from vector ab: {sphere}");
    println!("Area: {}, volume: {}", sphere.area(), sphere.volume());

    for point in [&point_c, &point_d] {
        println!("Ball contains {point}: {}", sphere.contains(point)?);
    }
    for point in points {
        println!("Sphere passes through {point}: {}", sphere.on_sphere(point)?);
    }
    Ok(())
}
