//! Read / write sample grids as raw little-endian `f32` streams.
//!
//! No header, no padding: just consecutive `f32`s in file order. The grid
//! size and geometry live in the TOML sidecar next to the data file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub fn write(data: impl Iterator<Item = f32>, path: &Path) -> std::io::Result<()> {
    let mut buf = BufWriter::new(File::create(path)?);
    for datum in data {
        buf.write_all(&datum.to_le_bytes())?;
    }
    Ok(())
}

type IORes<T> = std::io::Result<T>;

/// Iterator over the `f32`s stored in `path`, in file order.
pub fn read(path: &Path) -> IORes<impl Iterator<Item = IORes<f32>>> {
    let mut buf = BufReader::new(File::open(path)?);
    let mut bytes = [0; 4];

    Ok(std::iter::from_fn(move || {
        use std::io::ErrorKind::UnexpectedEof;
        match buf.read_exact(&mut bytes) {
            Ok(()) => Some(Ok(f32::from_le_bytes(bytes))),
            Err(e) if e.kind() == UnexpectedEof => None,
            Err(e) => Some(Err(e)),
        }
    }))
}
