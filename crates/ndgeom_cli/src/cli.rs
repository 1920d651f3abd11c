use eyre::{Result, WrapErr};
use ndgeom::prelude::*;
use serde::Serialize;

/// Demonstration of N-dimensional points, vectors, and hyperspheres
///
/// If no subcommand is specified, then the showcase is run.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,
}

#[derive(clap::Subcommand, Debug, Default)]
pub(crate) enum Subcommand {
    /// Print sample points, vectors, and spheres along with the results of
    /// operations on them.
    #[default]
    Showcase,
    /// Print the surface area and volume of a sphere centered at the origin.
    #[command(allow_negative_numbers = true)]
    Sphere {
        /// Radius of the sphere.
        radius: Float,
        /// Number of dimensions.
        ndim: usize,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the sum, difference, and dot product of two vectors starting at
    /// the origin, and whether they are collinear or orthogonal.
    Vectors {
        /// Comma-separated coordinates of the first vector (such as `1,2,3`).
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        a: Vec<Float>,
        /// Comma-separated coordinates of the second vector.
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        b: Vec<Float>,
    },
}

/// Measures of a sphere, as printed by `ndgeom sphere --json`.
#[derive(Serialize, Debug)]
struct SphereInfo<'a> {
    ndim: usize,
    radius: Float,
    area: Float,
    volume: Float,
    sphere: &'a Sphere,
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Showcase => crate::showcase::run(),

        Subcommand::Sphere { radius, ndim, json } => {
            let sphere = Sphere::from_length(radius, ndim).wrap_err("error constructing sphere")?;
            let info = SphereInfo {
                ndim,
                radius: sphere.radius(),
                area: sphere.area(),
                volume: sphere.volume(),
                sphere: &sphere,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{sphere}");
                println!("area: {}", info.area);
                println!("volume: {}", info.volume);
            }
            Ok(())
        }

        Subcommand::Vectors { a, b } => {
            let a = Vector::new(&a, None).wrap_err("invalid vector `a`")?;
            let b = Vector::new(&b, None).wrap_err("invalid vector `b`")?;
            log::debug!("comparing {}D vectors", a.ndim());
            println!("a = {a}, length {}", a.length());
            println!("b = {b}, length {}", b.length());
            println!("a + b = {}", a.add(&b)?);
            println!("a - b = {}", a.subtract(&b)?);
            println!("a * b = {}", a.multiply(&b)?);
            println!("collinear: {}", Vector::is_collinear(&a, &b)?);
            println!("orthogonal: {}", Vector::is_orthogonal(&a, &b)?);
            Ok(())
        }
    }
}
