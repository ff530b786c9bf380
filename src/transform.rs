//! Conversion between world coordinates and continuous voxel indices.
//!
//! A volume's geometry is a 4×4 affine matrix taking world coordinates
//! (implicitly extended with w = 1) to fractional voxel indices, held here
//! together with its inverse. Mapped points are NOT rounded: they keep
//! their fractional components, and whoever consumes them decides how a
//! fractional index turns into a voxel value (see [`crate::volume`]).

use nalgebra::Matrix4;

use crate::{Lengthf32, Pointf32};
use crate::error::ProbeError;

/// World ↔ index geometry of a volume, held as a matched pair of inverses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    to_index: Matrix4<Lengthf32>,
    to_world: Matrix4<Lengthf32>,
}

impl Affine {

    /// Geometry of a volume whose voxel indices coincide with world coordinates.
    pub fn identity() -> Self {
        Self { to_index: Matrix4::identity(), to_world: Matrix4::identity() }
    }

    /// Construct from a world→index matrix. Fails if the matrix has no inverse.
    pub fn from_world_to_index(to_index: Matrix4<Lengthf32>) -> Result<Self, ProbeError> {
        let to_world = to_index.try_inverse().ok_or(ProbeError::SingularTransform)?;
        Ok(Self { to_index, to_world })
    }

    /// Construct from an index→world matrix. Fails if the matrix has no inverse.
    pub fn from_index_to_world(to_world: Matrix4<Lengthf32>) -> Result<Self, ProbeError> {
        let to_index = to_world.try_inverse().ok_or(ProbeError::SingularTransform)?;
        Ok(Self { to_index, to_world })
    }

    /// Axis-aligned geometry: voxel `[0,0,0]` sits at `origin`, and moving
    /// one step along a grid axis moves `spacing` world units along the
    /// corresponding world axis. Fails on a zero spacing component.
    pub fn from_spacing_and_origin(spacing: [Lengthf32; 3], origin: [Lengthf32; 3]) -> Result<Self, ProbeError> {
        let [sx, sy, sz] = spacing;
        let [ox, oy, oz] = origin;
        let to_world = Matrix4::new(
             sx, 0.0, 0.0,  ox,
            0.0,  sy, 0.0,  oy,
            0.0, 0.0,  sz,  oz,
            0.0, 0.0, 0.0, 1.0,
        );
        Self::from_index_to_world(to_world)
    }

    /// Fractional voxel index of the world-space point `p`.
    pub fn world_to_index(&self, p: Pointf32) -> Pointf32 { self.to_index.transform_point(&p) }

    /// World-space position of the fractional voxel index `p`.
    pub fn index_to_world(&self, p: Pointf32) -> Pointf32 { self.to_world.transform_point(&p) }
}
