pub use crate::error::ProbeError;
pub use crate::transform::Affine;
pub use crate::segment::LineSegment;
pub use crate::volume::{Interpolation, ScalarVolume};
pub use crate::probe::{probe, ProbeResult};
pub use crate::profile::{profile_volumes, LabeledProfile};

pub type Lengthf32    = f32;
pub type Intensityf32 = f32;

pub type Pointf32  = nalgebra::Point3 <Lengthf32>;
pub type Vectorf32 = nalgebra::Vector3<Lengthf32>;

/// Grid size as [nx, ny, nz]
#[allow(non_camel_case_types)] pub type BoxDim_u = [usize; 3];
