//! NumPy `.npy` files for one-dimensional `f64` arrays.
//!
//! Layout (format version 1.0):
//!
//! ```text
//! \x93NUMPY  major=1 minor=0  header_len:u16le  header  data
//! ```
//!
//! The header is a Python dict literal padded with spaces and ending in `\n`
//! so that the data starts on a 64-byte boundary. Data is little-endian
//! `<f8` in C order.

use crate::{Error, Result};
use ndarray::Array1;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const MAGIC: &[u8; 6] = b"\x93NUMPY";
const PREAMBLE_LEN: usize = MAGIC.len() + 2 + 2;
const ALIGN: usize = 64;

fn header(len: usize) -> String {
    let dict = format!("{{'descr': '<f8', 'fortran_order': False, 'shape': ({len},), }}");
    let unpadded = PREAMBLE_LEN + dict.len() + 1;
    let padding = (ALIGN - unpadded % ALIGN) % ALIGN;
    format!("{dict}{}\n", " ".repeat(padding))
}

/// Write `values` to `path` as a `.npy` file.
pub fn write_npy(path: impl AsRef<Path>, values: &Array1<f64>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let header = header(values.len());
    let header_len = u16::try_from(header.len())
        .map_err(|_| Error::InvalidFormat("npy header too long".into()))?;

    out.write_all(MAGIC)?;
    out.write_all(&[1, 0])?;
    out.write_all(&header_len.to_le_bytes())?;
    out.write_all(header.as_bytes())?;
    for v in values {
        out.write_all(&v.to_le_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Read a one-dimensional `<f8` array written by [`write_npy`] or NumPy.
pub fn read_npy(path: impl AsRef<Path>) -> Result<Array1<f64>> {
    let mut file = BufReader::new(File::open(path)?);
    let mut preamble = [0u8; PREAMBLE_LEN];
    file.read_exact(&mut preamble)?;

    if &preamble[..MAGIC.len()] != MAGIC {
        return Err(Error::InvalidFormat("invalid npy magic number".into()));
    }
    if (preamble[6], preamble[7]) != (1, 0) {
        return Err(Error::InvalidFormat(format!(
            "unsupported npy version {}.{}",
            preamble[6], preamble[7]
        )));
    }

    let header_len = u16::from_le_bytes([preamble[8], preamble[9]]) as usize;
    let mut header = vec![0u8; header_len];
    file.read_exact(&mut header)?;
    let header = String::from_utf8_lossy(&header);
    if !header.contains("'<f8'") || header.contains("'fortran_order': True") {
        return Err(Error::InvalidFormat(format!("unsupported npy header {header}")));
    }

    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    if data.len() % 8 != 0 {
        return Err(Error::InvalidFormat("truncated npy data".into()));
    }

    Ok(data
        .chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect())
}
