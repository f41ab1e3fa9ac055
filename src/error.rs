use quick_error::quick_error;
use std::io::Error as IOError;
use std::path::PathBuf;

quick_error! {
    /// Error type for all error variants originated by this crate.
    #[derive(Debug)]
    pub enum VolstatsError {
        /// Bad or missing command line arguments.
        Argument(err: clap::Error) {
            from()
            display("{}", err)
            source(err)
        }

        /// Invalid MGH file: wrong format version or non-positive dimensions.
        InvalidFsMghFormat {
            display("Invalid FreeSurfer MGH file")
        }

        UnsupportedMghDatatype(code: i32) {
            display("Unsupported MGH data type code {}", code)
        }

        InvalidVolumeShape(err: ndarray::ShapeError) {
            from()
            display("Voxel data does not match the volume dimensions: {}", err)
            source(err)
        }

        /// The file name does not match any supported volume format.
        UnknownVolumeFormat(path: PathBuf) {
            display("Unrecognized volume file format: '{}'", path.display())
        }

        Nifti(err: nifti::NiftiError) {
            from()
            display("Failed to read NIfTI volume: {}", err)
            source(err)
        }

        /// No voxel is nonzero, so there is nothing to average.
        EmptyReduction {
            display("Volume contains no nonzero voxels, the mean is undefined")
        }

        /// Writing the report failed.
        Output(err: IOError) {
            display("Failed to write report: {}", err)
            source(err)
        }

        /// I/O Error
        Io(err: IOError) {
            from()
            display("I/O error: {}", err)
            source(err)
        }
    }
}

/// Coarse failure categories, as seen by the user of the command line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    Decode,
    EmptyReduction,
    Output,
}

impl VolstatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VolstatsError::Argument(_) => ErrorKind::Argument,
            VolstatsError::EmptyReduction => ErrorKind::EmptyReduction,
            VolstatsError::Output(_) => ErrorKind::Output,
            VolstatsError::InvalidFsMghFormat
            | VolstatsError::UnsupportedMghDatatype(_)
            | VolstatsError::InvalidVolumeShape(_)
            | VolstatsError::UnknownVolumeFormat(_)
            | VolstatsError::Nifti(_)
            | VolstatsError::Io(_) => ErrorKind::Decode,
        }
    }
}

impl From<ndarray_stats::errors::EmptyInput> for VolstatsError {
    fn from(_: ndarray_stats::errors::EmptyInput) -> Self {
        VolstatsError::EmptyReduction
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, VolstatsError>;
