//! Failure modes of the probing pipeline.

use thiserror::Error;

use crate::BoxDim_u;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {

    /// Fewer than one sample position was requested.
    #[error("sample count must be at least 1 (got {0})")]
    InvalidSampleCount(usize),

    /// The matrix relating world and index coordinates cannot be inverted.
    #[error("volume geometry matrix is singular")]
    SingularTransform,

    /// The caller selected no volume to probe.
    #[error("at least one input volume is required")]
    MissingInput,

    /// A grid with a zero extent has no voxels to sample.
    #[error("volume grid {0:?} has a zero extent")]
    EmptyVolume(BoxDim_u),
}
