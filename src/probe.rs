//! Sample a volume at N evenly spaced positions along a world-space segment.
//!
//! The segment's endpoints are mapped once into the volume's continuous
//! index space; each sample position is then a linear blend of the two
//! mapped endpoints with the same parametric fraction `k / (N-1)` that
//! generates the arc-length array. `distances[k]` and `values[k]` therefore
//! always describe the same point on the segment. Coordinates stay
//! continuous all the way to the interpolation step: nothing is rounded
//! while the sampling line is being constructed.

use ndarray::Array1;

use crate::{Intensityf32, Lengthf32};
use crate::error::ProbeError;
use crate::segment::LineSegment;
use crate::volume::{Interpolation, ScalarVolume};

/// Index-aligned result of one probe: `distances[k]` is how far along the
/// segment (in world units) the sample `values[k]` was taken.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeResult {
    pub distances: Vec<Lengthf32>,
    pub values: Vec<Intensityf32>,
}

impl ProbeResult {

    pub fn len(&self) -> usize { self.distances.len() }

    pub fn is_empty(&self) -> bool { self.distances.is_empty() }

    /// (distance, value) pairs in order of increasing distance.
    pub fn iter(&self) -> impl Iterator<Item = (Lengthf32, Intensityf32)> + '_ {
        self.distances.iter().copied().zip(self.values.iter().copied())
    }
}

/// Probe `volume` at `n` evenly spaced positions along `segment`.
///
/// Both endpoints are sampled when `n > 1`; `n == 1` samples the first
/// endpoint only, at distance zero. A zero-length segment is fine: every
/// sample lands on the same point. Requesting zero samples is an error.
pub fn probe(
    volume: &ScalarVolume,
    segment: &LineSegment,
    n: usize,
    interpolation: Interpolation,
) -> Result<ProbeResult, ProbeError> {
    if n < 1 { return Err(ProbeError::InvalidSampleCount(n)); }

    // Arc lengths in world units: 0, L/(n-1), ..., L.
    let distances = Array1::linspace(0.0, segment.length(), n).to_vec();

    // Mapped once; every sample position interpolates between these two.
    let i1 = volume.affine().world_to_index(segment.p1);
    let i2 = volume.affine().world_to_index(segment.p2);
    let step = i2 - i1;

    let last = (n - 1).max(1) as Lengthf32;
    let values = (0..n)
        .map(|k| volume.sample_index(i1 + step * (k as Lengthf32 / last), interpolation))
        .collect();

    Ok(ProbeResult { distances, values })
}
