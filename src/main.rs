// Print the mean intensity of the nonzero voxels of a brain volume:
//     volstats subject1/mri/brain.mgz
//
// Set RUST_LOG=debug to see what is going on.

use std::io;

use tracing_subscriber::EnvFilter;
use volstats::{FileDecoder, VolstatsError};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    match volstats::run(std::env::args_os(), &FileDecoder, &mut stdout.lock()) {
        Ok(_) => Ok(()),
        Err(VolstatsError::Argument(err)) => err.exit(),
        Err(err) => Err(err.into()),
    }
}
