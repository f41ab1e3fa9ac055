//! Utility functions used in all other volstats modules.

use std::io::{self, Read};
use std::path::Path;

use crate::error::Result;

/// Return the lower-cased file name of the path, if it has one.
pub fn lowercase_file_name<P>(path: P) -> Option<String>
where
    P: AsRef<Path>,
{
    path.as_ref()
        .file_name()
        .map(|a| a.to_string_lossy().to_lowercase())
}

/// Check whether the file is gzip-compressed by naming convention, i.e., its name ends with ".gz" or ".mgz".
pub fn is_gz_file<P>(path: P) -> bool
where
    P: AsRef<Path>,
{
    lowercase_file_name(path)
        .map(|a| a.ends_with(".gz") || a.ends_with(".mgz"))
        .unwrap_or(false)
}

/// Consume and discard exactly `num_bytes` bytes from the input. Works on non-seekable streams like gzip decoders.
pub fn skip_bytes<S>(input: &mut S, num_bytes: u64) -> Result<()>
where
    S: Read,
{
    let skipped = io::copy(&mut input.by_ref().take(num_bytes), &mut io::sink())?;
    if skipped != num_bytes {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("expected to skip {} bytes, stream ended after {}", num_bytes, skipped),
        )
        .into());
    }
    Ok(())
}
