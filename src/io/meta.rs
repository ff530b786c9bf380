//! TOML sidecar describing a raw volume's grid and geometry.
//!
//! ```toml
//! name = "FA"
//! n = [128, 128, 64]
//! spacing = [1.5, 1.5, 3.0]
//! origin = [-95.25, -95.25, -94.5]
//! ```
//!
//! Geometry can be given either as `spacing` + `origin` (axis-aligned
//! grids) or as a full `index_to_world` matrix (four rows of four values);
//! the matrix wins if both appear. A sidecar with neither describes a
//! volume whose voxel indices coincide with world coordinates.

use nalgebra::Matrix4;
use serde::Deserialize;

use crate::{BoxDim_u, Lengthf32};
use crate::error::ProbeError;
use crate::transform::Affine;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VolumeMeta {

    /// Name used to label profiles; data file stem if missing.
    pub name: Option<String>,

    /// Grid size as [nx, ny, nz].
    pub n: BoxDim_u,

    /// Index→world matrix, four rows of four values.
    pub index_to_world: Option<[[Lengthf32; 4]; 4]>,

    /// Voxel size along each grid axis, in world units.
    pub spacing: Option<[Lengthf32; 3]>,

    /// World position of voxel [0, 0, 0].
    pub origin: Option<[Lengthf32; 3]>,
}

impl VolumeMeta {

    /// The world ↔ index geometry this sidecar describes.
    pub fn affine(&self) -> Result<Affine, ProbeError> {
        if let Some(rows) = self.index_to_world {
            return Affine::from_index_to_world(Matrix4::from_fn(|r, c| rows[r][c]));
        }
        let spacing = self.spacing.unwrap_or([1.0; 3]);
        let origin  = self.origin .unwrap_or([0.0; 3]);
        Affine::from_spacing_and_origin(spacing, origin)
    }

    /// Number of samples the data file must hold.
    pub fn samples(&self) -> usize {
        let [nx, ny, nz] = self.n;
        nx * ny * nz
    }
}
