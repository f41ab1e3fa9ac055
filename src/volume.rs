//! The decoded volume and the decoders producing it.

use ndarray::{ArrayD, ArrayViewD};
use tracing::debug;

use std::fmt;
use std::path::Path;

use crate::error::{Result, VolstatsError};
use crate::fs_mgh::read_mgh;
use crate::nii::read_nifti;
use crate::util::lowercase_file_name;

/// The on-disk format a volume was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeFormat {
    /// FreeSurfer MGH, uncompressed.
    Mgh,
    /// FreeSurfer MGH, gzip-compressed.
    Mgz,
    /// NIfTI-1, single file or header/image pair, optionally gzip-compressed.
    Nifti,
}

const NIFTI_SUFFIXES: [&str; 6] = [".nii", ".nii.gz", ".hdr", ".hdr.gz", ".img", ".img.gz"];

impl VolumeFormat {
    /// Guess the format from the file name. Returns None if the name has no known volume file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<VolumeFormat> {
        let name = lowercase_file_name(path)?;
        if name.ends_with(".mgh") {
            Some(VolumeFormat::Mgh)
        } else if name.ends_with(".mgz") || name.ends_with(".mgh.gz") {
            Some(VolumeFormat::Mgz)
        } else if NIFTI_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            Some(VolumeFormat::Nifti)
        } else {
            None
        }
    }
}

impl fmt::Display for VolumeFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            VolumeFormat::Mgh => "MGH",
            VolumeFormat::Mgz => "MGZ",
            VolumeFormat::Nifti => "NIfTI",
        };
        write!(f, "{}", name)
    }
}

/// A decoded brain volume: a dense array of voxel intensities.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    data: ArrayD<f64>,
    format: VolumeFormat,
}

impl Volume {
    pub fn new(data: ArrayD<f64>, format: VolumeFormat) -> Volume {
        Volume { data, format }
    }

    pub fn format(&self) -> VolumeFormat {
        self.format
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn num_voxels(&self) -> usize {
        self.data.len()
    }

    /// Read-only view of the voxel intensities.
    pub fn voxels(&self) -> ArrayViewD<'_, f64> {
        self.data.view()
    }

    pub fn into_voxels(self) -> ArrayD<f64> {
        self.data
    }
}

/// Turns a file path into a `Volume`.
///
/// This is the seam between the report and the file formats. Any closure
/// `Fn(&Path) -> Result<Volume>` is a decoder too, which comes in handy for tests.
pub trait VolumeDecoder {
    fn decode(&self, path: &Path) -> Result<Volume>;
}

impl<F> VolumeDecoder for F
where
    F: Fn(&Path) -> Result<Volume>,
{
    fn decode(&self, path: &Path) -> Result<Volume> {
        self(path)
    }
}

/// The default decoder, which reads MGH, MGZ and NIfTI files from disk, picking the format from the file name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl VolumeDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<Volume> {
        let format = VolumeFormat::from_path(path)
            .ok_or_else(|| VolstatsError::UnknownVolumeFormat(path.to_path_buf()))?;
        debug!(path = %path.display(), %format, "decoding volume");

        let data = match format {
            VolumeFormat::Mgh | VolumeFormat::Mgz => {
                let mgh = read_mgh(path)?;
                mgh.to_f64().ok_or(VolstatsError::InvalidFsMghFormat)?
            }
            VolumeFormat::Nifti => read_nifti(path)?,
        };

        debug!(shape = ?data.shape(), num_voxels = data.len(), "decoded volume");
        Ok(Volume::new(data, format))
    }
}

/// Read a volume file in any supported format.
pub fn read_volume<P: AsRef<Path>>(path: P) -> Result<Volume> {
    FileDecoder.decode(path.as_ref())
}
