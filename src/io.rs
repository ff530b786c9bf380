//! Volumes on disk, and profiles on their way to the plotting side.
//!
//! A volume is stored as two files: a raw little-endian `f32` data file
//! (see [`raw`]) and a TOML sidecar with the same stem describing the grid
//! and its geometry (see [`meta`]). Probed profiles leave the program as
//! CSV with one `label,distance,value` row per sample.

pub mod meta;
pub mod raw;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ndarray::Array3;
use thiserror::Error;

use self::meta::VolumeMeta;
use crate::error::ProbeError;
use crate::profile::LabeledProfile;
use crate::volume::ScalarVolume;

#[derive(Debug, Error)]
pub enum LoadError {

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The TOML sidecar could not be parsed.
    #[error("bad volume metadata: {0}")]
    Meta(#[from] toml::de::Error),

    /// The data file disagrees with the sidecar about the number of samples.
    #[error("volume data holds {got} samples but the sidecar declares {expected}")]
    SizeMismatch { expected: usize, got: usize },

    #[error(transparent)]
    Probe(#[from] ProbeError),
}

/// Sidecar path of a raw data file: same stem, `.toml` extension.
pub fn sidecar_path(data_path: &Path) -> PathBuf { data_path.with_extension("toml") }

/// Load a scalar volume from a raw `f32` data file and its TOML sidecar.
///
/// The sidecar provides the grid size and geometry; an unnamed sidecar
/// falls back to the data file's stem for the volume name.
pub fn load_volume(data_path: &Path) -> Result<ScalarVolume, LoadError> {
    let meta: VolumeMeta = toml::from_str(&fs::read_to_string(sidecar_path(data_path))?)?;
    let affine = meta.affine()?;
    let expected = meta.samples();

    let values: Vec<f32> = raw::read(data_path)?.collect::<Result<_, _>>()?;
    let got = values.len();
    let [nx, ny, nz] = meta.n;
    let data = Array3::from_shape_vec((nx, ny, nz), values)
        .map_err(|_| LoadError::SizeMismatch { expected, got })?;

    let name = match meta.name {
        Some(name) => name,
        None => data_path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default(),
    };
    Ok(ScalarVolume::new(data, affine)?.with_name(name))
}

/// Write labelled profiles as CSV rows, one per sample, under a
/// `label,distance,value` header.
pub fn write_profiles(profiles: &[LabeledProfile], path: &Path) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "label,distance,value")?;
    for labelled in profiles {
        for (distance, value) in labelled.profile.iter() {
            writeln!(out, "{},{},{}", labelled.label, distance, value)?;
        }
    }
    Ok(())
}
