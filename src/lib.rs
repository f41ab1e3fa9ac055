//! Mean intensity of the nonzero voxels of a neuroimaging volume.
//!
//! Volumes are read from NIfTI-1 files (via the `nifti` crate) or from FreeSurfer MGH/MGZ files.
//! Zero voxels are considered background and excluded from the mean.
//!
//! ```no_run
//! let volume = volstats::read_volume("subject1/mri/brain.mgz")?;
//! let mean = volstats::nonzero_mean(&volume.voxels())?;
//! println!("mean: {}", mean);
//! # Ok::<(), volstats::VolstatsError>(())
//! ```

pub mod error;
pub mod fs_mgh;
pub mod nii;
pub mod report;
pub mod stats;
pub mod util;
pub mod volume;

pub use error::{ErrorKind, Result, VolstatsError};
pub use fs_mgh::{read_mgh, FsMgh, FsMghHeader};
pub use nii::read_nifti;
pub use report::{run, Cli};
pub use stats::{nonzero_mean, nonzero_summary, NonzeroSummary};
pub use volume::{read_volume, FileDecoder, Volume, VolumeDecoder, VolumeFormat};
