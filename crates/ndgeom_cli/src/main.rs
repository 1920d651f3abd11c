//! Command-line demonstration of N-dimensional points, vectors, and
//! hyperspheres.

mod cli;
mod showcase;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install()?;

    cli::exec(args.subcommand.unwrap_or_default())
}
