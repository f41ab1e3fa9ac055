// Writers for small synthetic volume files, shared by the integration tests.
#![allow(dead_code)]

use byteordered::byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use flate2::write::GzEncoder;
use flate2::Compression;

use std::fs;
use std::path::{Path, PathBuf};

/// The 2x2x2 volume with four background voxels, its nonzero mean is 2.5.
pub const DEMO_VALUES: [f32; 8] = [0., 0., 0., 0., 1., 2., 3., 4.];
pub const ZERO_VALUES: [f32; 8] = [0.; 8];

fn write_maybe_gz(path: &Path, bytes: Vec<u8>, gz: bool) {
    let bytes = if gz {
        use std::io::Write;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&bytes).unwrap();
        encoder.finish().unwrap()
    } else {
        bytes
    };
    fs::write(path, bytes).unwrap();
}

/// Raw bytes of an MGH file. The values are cast to the given MGH data type code.
pub fn mgh_bytes(dims: [i32; 4], dtype: i32, values: &[f32]) -> Vec<u8> {
    mgh_bytes_with_version(1, dims, dtype, values)
}

pub fn mgh_bytes_with_version(version: i32, dims: [i32; 4], dtype: i32, values: &[f32]) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    buf.write_i32::<BigEndian>(version).unwrap();
    for d in dims.iter() {
        buf.write_i32::<BigEndian>(*d).unwrap();
    }
    buf.write_i32::<BigEndian>(dtype).unwrap();
    buf.write_i32::<BigEndian>(0).unwrap(); // dof
    buf.write_i16::<BigEndian>(1).unwrap(); // is_ras_good
    let ras: [f32; 15] = [1., 1., 1., -1., 0., 0., 0., 0., 1., 0., -1., 0., 0., 0., 0.];
    for v in ras.iter() {
        buf.write_f32::<BigEndian>(*v).unwrap();
    }
    buf.resize(284, 0);
    for v in values.iter() {
        match dtype {
            0 => buf.write_u8(*v as u8).unwrap(),
            1 => buf.write_i32::<BigEndian>(*v as i32).unwrap(),
            3 => buf.write_f32::<BigEndian>(*v).unwrap(),
            4 => buf.write_i16::<BigEndian>(*v as i16).unwrap(),
            _ => buf.write_f32::<BigEndian>(*v).unwrap(),
        }
    }
    buf
}

/// Write an MGH file, gzip-compressed if the name ends with ".mgz" or ".gz".
pub fn write_mgh(dir: &Path, name: &str, dims: [i32; 4], dtype: i32, values: &[f32]) -> PathBuf {
    let path = dir.join(name);
    let gz = name.ends_with(".mgz") || name.ends_with(".gz");
    write_maybe_gz(&path, mgh_bytes(dims, dtype, values), gz);
    path
}

/// The 348 byte NIfTI-1 header for float32 data.
pub fn nifti_header_bytes(dims: [i16; 3], magic: &[u8; 4], vox_offset: f32, scl_slope: f32, scl_inter: f32) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    buf.write_i32::<LittleEndian>(348).unwrap(); // sizeof_hdr
    buf.resize(40, 0);
    let dim: [i16; 8] = [3, dims[0], dims[1], dims[2], 1, 1, 1, 1];
    for d in dim.iter() {
        buf.write_i16::<LittleEndian>(*d).unwrap();
    }
    buf.resize(70, 0);
    buf.write_i16::<LittleEndian>(16).unwrap(); // datatype: FLOAT32
    buf.write_i16::<LittleEndian>(32).unwrap(); // bitpix
    buf.resize(76, 0);
    for p in [1.0f32; 8].iter() {
        buf.write_f32::<LittleEndian>(*p).unwrap();
    }
    buf.write_f32::<LittleEndian>(vox_offset).unwrap();
    buf.write_f32::<LittleEndian>(scl_slope).unwrap();
    buf.write_f32::<LittleEndian>(scl_inter).unwrap();
    buf.resize(344, 0);
    buf.extend_from_slice(magic);
    buf
}

fn float_bytes(values: &[f32]) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::with_capacity(values.len() * 4);
    for v in values.iter() {
        buf.write_f32::<LittleEndian>(*v).unwrap();
    }
    buf
}

/// Raw bytes of a single-file NIfTI-1 volume with float32 data.
pub fn nifti_bytes(dims: [i16; 3], values: &[f32], scl_slope: f32, scl_inter: f32) -> Vec<u8> {
    let mut buf = nifti_header_bytes(dims, b"n+1\0", 352.0, scl_slope, scl_inter);
    buf.extend_from_slice(&[0u8; 4]); // no extensions
    buf.extend_from_slice(&float_bytes(values));
    buf
}

/// Write a NIfTI header/image pair `<stem>.hdr` and `<stem>.img`, returning both paths.
pub fn write_nifti_pair(dir: &Path, stem: &str, dims: [i16; 3], values: &[f32]) -> (PathBuf, PathBuf) {
    let hdr = dir.join(format!("{}.hdr", stem));
    let img = dir.join(format!("{}.img", stem));
    fs::write(&hdr, nifti_header_bytes(dims, b"ni1\0", 0.0, 1.0, 0.0)).unwrap();
    fs::write(&img, float_bytes(values)).unwrap();
    (hdr, img)
}

/// Write a NIfTI file, gzip-compressed if the name ends with ".gz".
pub fn write_nifti(dir: &Path, name: &str, dims: [i16; 3], values: &[f32]) -> PathBuf {
    write_scaled_nifti(dir, name, dims, values, 1.0, 0.0)
}

pub fn write_scaled_nifti(
    dir: &Path,
    name: &str,
    dims: [i16; 3],
    values: &[f32],
    scl_slope: f32,
    scl_inter: f32,
) -> PathBuf {
    let path = dir.join(name);
    write_maybe_gz(&path, nifti_bytes(dims, values, scl_slope, scl_inter), name.ends_with(".gz"));
    path
}
