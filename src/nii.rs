//! Reading NIfTI-1 volumes, delegated to the `nifti` crate.
//!
//! Supported are single files (`.nii`), their gzip-compressed variant (`.nii.gz`) and
//! header/image pairs (`.hdr`/`.img`, optionally gzip-compressed). A pair can be opened by
//! either of its two file names. The intensity scaling given in the header
//! (`scl_slope`, `scl_inter`) is applied to the voxel values.

use ndarray::ArrayD;
use nifti::volume::ndarray::IntoNdArray;
use nifti::{NiftiObject, ReaderOptions};

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::util::lowercase_file_name;

/// Read a NIfTI volume and return its scaled voxel values as f64.
pub fn read_nifti<P: AsRef<Path>>(path: P) -> Result<ArrayD<f64>> {
    let header_path = pair_header_path(path.as_ref());
    let obj = ReaderOptions::new().read_file(&header_path)?;
    let data = obj.into_volume().into_ndarray::<f64>()?;
    Ok(data)
}

/// For the image file of a header/image pair, the path of its header file. Any other path is returned as is.
///
/// The `nifti` crate finds the image file of a pair from its header file, but not the other way around.
pub fn pair_header_path(path: &Path) -> PathBuf {
    let name = match lowercase_file_name(path) {
        Some(name) => name,
        None => return path.to_path_buf(),
    };
    let (suffix_len, header_suffix) = if name.ends_with(".img") {
        (".img".len(), "hdr")
    } else if name.ends_with(".img.gz") {
        (".img.gz".len(), "hdr.gz")
    } else {
        return path.to_path_buf();
    };

    let original = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let stem_len = original.len() - suffix_len;
    // Keep the case of the extension, e.g. "T1.IMG" pairs with "T1.HDR".
    let header_extension = if original[stem_len + 1..].starts_with(|c: char| c.is_ascii_uppercase()) {
        header_suffix.to_ascii_uppercase()
    } else {
        header_suffix.to_string()
    };
    path.with_file_name(format!("{}.{}", &original[..stem_len], header_extension))
}
