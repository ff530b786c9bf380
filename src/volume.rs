//! In-memory scalar volume and its sampling rules.
//!
//! A `ScalarVolume` is a dense grid of `f32` samples plus the affine
//! geometry relating world coordinates to voxel indices. Sampling takes a
//! continuous index-space position and reduces it to one scalar, either by
//! blending the 8 surrounding grid values (trilinear) or by snapping to the
//! closest voxel (nearest). Positions outside the grid are clamped to its
//! edge, so probing a segment that overhangs the volume keeps returning the
//! boundary value instead of failing.

use clap::ValueEnum;
use ndarray::Array3;

use crate::{Intensityf32, Lengthf32, Pointf32};
use crate::error::ProbeError;
use crate::transform::Affine;

/// How a continuous index-space position turns into a scalar value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Interpolation {
    /// Distance-weighted blend of the 8 voxels surrounding the position.
    #[default]
    Trilinear,
    /// Value of the single closest voxel.
    Nearest,
}

#[derive(Clone, Debug)]
pub struct ScalarVolume {
    /// Name used to label profiles of this volume.
    pub name: String,
    data: Array3<Intensityf32>,
    affine: Affine,
}

impl ScalarVolume {

    /// Wrap a dense sample grid and its geometry. Every axis must have at
    /// least one voxel.
    pub fn new(data: Array3<Intensityf32>, affine: Affine) -> Result<Self, ProbeError> {
        let (nx, ny, nz) = data.dim();
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(ProbeError::EmptyVolume([nx, ny, nz]));
        }
        Ok(Self { name: String::new(), data, affine })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Grid size as (nx, ny, nz)
    pub fn dim(&self) -> (usize, usize, usize) { self.data.dim() }

    pub fn data(&self) -> &Array3<Intensityf32> { &self.data }

    pub fn affine(&self) -> &Affine { &self.affine }

    /// Scalar value at a continuous index-space position.
    pub fn sample_index(&self, p: Pointf32, interpolation: Interpolation) -> Intensityf32 {
        match interpolation {
            Interpolation::Trilinear => self.trilinear(p),
            Interpolation::Nearest   => self.nearest(p),
        }
    }

    /// Scalar value at a world-space position.
    pub fn sample_world(&self, p: Pointf32, interpolation: Interpolation) -> Intensityf32 {
        self.sample_index(self.affine.world_to_index(p), interpolation)
    }

    fn nearest(&self, p: Pointf32) -> Intensityf32 {
        let (nx, ny, nz) = self.data.dim();
        let snap = |c: Lengthf32, n: usize| (c.round().max(0.0) as usize).min(n - 1);
        self.data[[snap(p.x, nx), snap(p.y, ny), snap(p.z, nz)]]
    }

    fn trilinear(&self, p: Pointf32) -> Intensityf32 {
        let (nx, ny, nz) = self.data.dim();
        let x = p.x.clamp(0.0, (nx - 1) as Lengthf32);
        let y = p.y.clamp(0.0, (ny - 1) as Lengthf32);
        let z = p.z.clamp(0.0, (nz - 1) as Lengthf32);

        // Lower corner of the surrounding cell. On the upper grid boundary
        // the cell collapses and the fractional parts become zero.
        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let z0 = z.floor() as usize;
        let x1 = (x0 + 1).min(nx - 1);
        let y1 = (y0 + 1).min(ny - 1);
        let z1 = (z0 + 1).min(nz - 1);

        let dx = x - x0 as Lengthf32;
        let dy = y - y0 as Lengthf32;
        let dz = z - z0 as Lengthf32;

        // Blend along x, then y, then z.
        let c00 = self.data[[x0, y0, z0]].mul_add(1.0 - dx, self.data[[x1, y0, z0]] * dx);
        let c10 = self.data[[x0, y1, z0]].mul_add(1.0 - dx, self.data[[x1, y1, z0]] * dx);
        let c01 = self.data[[x0, y0, z1]].mul_add(1.0 - dx, self.data[[x1, y0, z1]] * dx);
        let c11 = self.data[[x0, y1, z1]].mul_add(1.0 - dx, self.data[[x1, y1, z1]] * dx);

        let c0 = c00.mul_add(1.0 - dy, c10 * dy);
        let c1 = c01.mul_add(1.0 - dy, c11 * dy);

        c0.mul_add(1.0 - dz, c1 * dz)
    }
}
