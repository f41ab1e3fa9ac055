//! Functions for managing FreeSurfer brain volumes in binary 'MGH' files.
//!
//! MGH files store a 4D volume (three spatial dimensions plus frames) in big endian byte order,
//! preceded by a fixed-size header. MGZ files are gzip-compressed MGH files.

use byteordered::ByteOrdered;
use flate2::bufread::GzDecoder;
use ndarray::{Array, Array4, ArrayD, ShapeBuilder};

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{Result, VolstatsError};
use crate::util::{is_gz_file, skip_bytes};

pub const MGH_VERSION: i32 = 1;

pub const MGH_DATATYPE_NAMES : [&str; 4] = ["MRI_UCHAR", "MRI_INT", "MRI_FLOAT", "MRI_SHORT"];
pub const MGH_DATATYPE_CODES : [i32; 4] = [0, 1, 3, 4];
pub const MGH_DATA_START : i32 = 284; // The index in bytes where the data part starts in an MGH file.
pub const MGH_HEADER_USED_BYTES : i32 = 90; // The header fields, including the RAS block. The rest up to MGH_DATA_START is unused.

pub const MRI_UCHAR: i32 = 0;
pub const MRI_INT: i32 = 1;
pub const MRI_FLOAT: i32 = 3;
pub const MRI_SHORT: i32 = 4;

/// Models the header of a FreeSurfer MGH file containing a brain volume.
#[derive(Debug, Clone, PartialEq)]
pub struct FsMghHeader {
    pub mgh_format_version: i32,
    pub dim1len: i32,
    pub dim2len: i32,
    pub dim3len: i32,
    pub dim4len: i32,  // aka "num_frames"
    pub dtype: i32,
    pub dof: i32,
    pub is_ras_good: i16,
    pub delta: [f32; 3],
    pub mdc_raw: [f32; 9],
    pub p_xyz_c: [f32; 3],
}

/// Models a FreeSurfer MGH file. Exactly one of the data fields is set, depending on the header's `dtype`.
#[derive(Debug, Clone, PartialEq)]
pub struct FsMgh {
    pub header: FsMghHeader,
    pub data_mri_uchar: Option<Array4<u8>>,
    pub data_mri_float: Option<Array4<f32>>,
    pub data_mri_int: Option<Array4<i32>>,
    pub data_mri_short: Option<Array4<i16>>,
}

impl Default for FsMghHeader {
    fn default() -> FsMghHeader {
        FsMghHeader {
            mgh_format_version: MGH_VERSION,
            dim1len: 0,
            dim2len: 0,
            dim3len: 0,
            dim4len: 0,
            dtype: MRI_INT,
            dof: 0,
            is_ras_good: 0,
            delta: [0.; 3],
            mdc_raw: [0.; 9],
            p_xyz_c: [0.; 3],
        }
    }
}

/// The header of an MGH/MGZ file.
impl FsMghHeader {

    /// Read an MGH header from a file.
    /// If the file's name ends with ".mgz" or ".gz", the file is assumed to need GZip decoding.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FsMghHeader> {
        let gz = is_gz_file(&path);
        let mut file = BufReader::new(File::open(path)?);
        if gz {
            FsMghHeader::from_reader(&mut GzDecoder::new(file))
        } else {
            FsMghHeader::from_reader(&mut file)
        }
    }

    /// Read an MGH header from the given byte stream.
    /// It is assumed that the input is currently at the start of the
    /// header. Consumes exactly `MGH_HEADER_USED_BYTES` bytes.
    pub fn from_reader<S>(input: &mut S) -> Result<FsMghHeader>
    where
        S: Read,
    {
        let mut hdr = FsMghHeader::default();

        let mut input = ByteOrdered::be(input);

        hdr.mgh_format_version = input.read_i32()?;

        if hdr.mgh_format_version != MGH_VERSION {
            return Err(VolstatsError::InvalidFsMghFormat);
        }

        hdr.dim1len = input.read_i32()?;
        hdr.dim2len = input.read_i32()?;
        hdr.dim3len = input.read_i32()?;
        hdr.dim4len = input.read_i32()?;

        hdr.dtype = input.read_i32()?;
        hdr.dof = input.read_i32()?;

        hdr.is_ras_good = input.read_i16()?;

        // The RAS block is always present on disk, but only meaningful if is_ras_good is 1.
        for v in &mut hdr.delta { *v = input.read_f32()?; }
        for v in &mut hdr.mdc_raw { *v = input.read_f32()?; }
        for v in &mut hdr.p_xyz_c { *v = input.read_f32()?; }

        if hdr.dims().iter().any(|&d| d <= 0) {
            return Err(VolstatsError::InvalidFsMghFormat);
        }

        Ok(hdr)
    }

    /// The four dimension lengths, the last one being the number of frames.
    pub fn dims(&self) -> [i32; 4] {
        [self.dim1len, self.dim2len, self.dim3len, self.dim4len]
    }

    /// Total number of voxels over all frames. None if the count does not fit into usize.
    pub fn num_voxels(&self) -> Option<usize> {
        self.dims()
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d.max(0) as usize))
    }

    /// Size in bytes of a single voxel value. None for unknown type codes.
    pub fn dtype_size(&self) -> Option<usize> {
        match self.dtype {
            MRI_UCHAR => Some(1),
            MRI_INT | MRI_FLOAT => Some(4),
            MRI_SHORT => Some(2),
            _ => None,
        }
    }

    /// The name of the data type, e.g. "MRI_FLOAT". None for unknown type codes.
    pub fn dtype_name(&self) -> Option<&'static str> {
        MGH_DATATYPE_CODES
            .iter()
            .position(|&c| c == self.dtype)
            .map(|idx| MGH_DATATYPE_NAMES[idx])
    }
}

impl FsMgh {

    /// Read an MGH or MGZ file.
    /// If the file's name ends with ".mgz" or ".gz", the file is assumed to need GZip decoding.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FsMgh> {
        let gz = is_gz_file(&path);
        let file = BufReader::new(File::open(path)?);
        if gz {
            FsMgh::from_reader(GzDecoder::new(file))
        } else {
            FsMgh::from_reader(file)
        }
    }

    /// Read an MGH volume from the given byte stream, which must be at the start of the header.
    pub fn from_reader<S>(mut input: S) -> Result<FsMgh>
    where
        S: Read,
    {
        let hdr = FsMghHeader::from_reader(&mut input)?;
        skip_bytes(&mut input, (MGH_DATA_START - MGH_HEADER_USED_BYTES) as u64)?;

        let dims = hdr.dims();
        let shape = (dims[0] as usize, dims[1] as usize, dims[2] as usize, dims[3] as usize).f();
        let elem_size = hdr.dtype_size().ok_or(VolstatsError::UnsupportedMghDatatype(hdr.dtype))?;
        let num_voxels = hdr.num_voxels().ok_or(VolstatsError::InvalidFsMghFormat)?;
        let num_bytes = num_voxels.checked_mul(elem_size).ok_or(VolstatsError::InvalidFsMghFormat)?;

        // The header sizes are untrusted, so only allocate for data that is actually there.
        let mut raw = Vec::new();
        input.take(num_bytes as u64).read_to_end(&mut raw)?;
        if raw.len() != num_bytes {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("MGH data section has {} bytes, header requires {}", raw.len(), num_bytes),
            )
            .into());
        }

        let mut mgh = FsMgh {
            header: hdr,
            data_mri_uchar: None,
            data_mri_int: None,
            data_mri_float: None,
            data_mri_short: None,
        };

        match mgh.header.dtype {
            MRI_UCHAR => {
                mgh.data_mri_uchar = Some(Array::from_shape_vec(shape, raw)?);
            }
            MRI_INT => {
                let mut input = ByteOrdered::be(&raw[..]);
                let mut data = Vec::with_capacity(num_voxels);
                for _ in 0..num_voxels { data.push(input.read_i32()?); }
                mgh.data_mri_int = Some(Array::from_shape_vec(shape, data)?);
            }
            MRI_FLOAT => {
                let mut input = ByteOrdered::be(&raw[..]);
                let mut data = Vec::with_capacity(num_voxels);
                for _ in 0..num_voxels { data.push(input.read_f32()?); }
                mgh.data_mri_float = Some(Array::from_shape_vec(shape, data)?);
            }
            MRI_SHORT => {
                let mut input = ByteOrdered::be(&raw[..]);
                let mut data = Vec::with_capacity(num_voxels);
                for _ in 0..num_voxels { data.push(input.read_i16()?); }
                mgh.data_mri_short = Some(Array::from_shape_vec(shape, data)?);
            }
            other => return Err(VolstatsError::UnsupportedMghDatatype(other)),
        }

        Ok(mgh)
    }

    /// The voxel data widened to f64, with dynamic dimensionality. Returns None if no data field is set.
    pub fn to_f64(&self) -> Option<ArrayD<f64>> {
        if let Some(data) = &self.data_mri_uchar {
            Some(data.mapv(f64::from).into_dyn())
        } else if let Some(data) = &self.data_mri_int {
            Some(data.mapv(f64::from).into_dyn())
        } else if let Some(data) = &self.data_mri_float {
            Some(data.mapv(f64::from).into_dyn())
        } else {
            self.data_mri_short.as_ref().map(|data| data.mapv(f64::from).into_dyn())
        }
    }
}

/// Read an MGH or MGZ file.
pub fn read_mgh<P: AsRef<Path>>(path: P) -> Result<FsMgh> {
    FsMgh::from_file(path)
}
