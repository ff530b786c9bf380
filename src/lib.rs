//! Intensity profiles of 3D scalar volumes along a world-space line.
//!
//! Given a scalar volume (a dense grid of samples plus the 4×4 affine
//! matrix relating world coordinates to voxel indices) and a ruler (a line
//! segment between two world-space points), [`probe`] samples the volume at
//! N evenly spaced positions along the ruler and returns the sampled
//! intensities together with each sample's distance from the ruler's start.
//! Those two parallel sequences are exactly what an intensity-profile chart
//! plots. [`profile_volumes`] does the same for up to two volumes at once,
//! labelling each series for the chart legend.
//!
//! ```
//! use lineprof::{probe, Affine, Interpolation, LineSegment, ScalarVolume};
//! use ndarray::Array3;
//!
//! let data = Array3::from_shape_fn((10, 10, 10), |(x, _, _)| x as f32);
//! let volume = ScalarVolume::new(data, Affine::identity())?;
//! let ruler = LineSegment::from_components((0.0, 0.0, 0.0), (9.0, 0.0, 0.0));
//!
//! let result = probe(&volume, &ruler, 10, Interpolation::Trilinear)?;
//! assert_eq!(result.distances[3], 3.0);
//! assert!((result.values[3] - 3.0).abs() < 1e-4);
//! # Ok::<(), lineprof::ProbeError>(())
//! ```

mod exports;
pub use exports::*;

pub mod error;
pub mod io;
pub mod probe;
pub mod profile;
pub mod segment;
pub mod transform;
pub mod utils;
pub mod volume;
