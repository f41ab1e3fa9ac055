//! The command line report: decode one volume and print the mean of its nonzero voxels.

use clap::Parser;

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{Result, VolstatsError};
use crate::stats::nonzero_mean;
use crate::volume::VolumeDecoder;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "volstats", version, about = "Print the mean intensity of the nonzero voxels of a brain volume")]
pub struct Cli {
    /// Path to the volume file (.nii, .nii.gz, .hdr/.img, .mgh, .mgz)
    pub fpath: PathBuf,
}

/// Parse the arguments (the first one being the program name), decode the volume with the given
/// decoder and write the line `mean: <value>` to `out`.
///
/// Nothing is written unless the mean could be computed. Returns the mean.
pub fn run<I, T, D, W>(args: I, decoder: &D, out: &mut W) -> Result<f64>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    D: VolumeDecoder + ?Sized,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    let volume = decoder.decode(&cli.fpath)?;
    let mean = nonzero_mean(&volume.voxels())?;

    writeln!(out, "mean: {}", mean).map_err(VolstatsError::Output)?;
    out.flush().map_err(VolstatsError::Output)?;
    Ok(mean)
}
