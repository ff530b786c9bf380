//! Whole-action entry point: one labelled profile per selected volume.

use crate::error::ProbeError;
use crate::probe::{probe, ProbeResult};
use crate::segment::LineSegment;
use crate::volume::{Interpolation, ScalarVolume};

/// A probe result paired with the legend entry it should be plotted under.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledProfile {
    pub label: String,
    pub profile: ProbeResult,
}

/// Probe up to two volumes along the same ruler.
///
/// Returns one labelled series per present volume, first slot first, with
/// labels following the `"<volume> - <ruler>"` legend convention. The two
/// probes are independent, so they run in parallel. Selecting no volume at
/// all is an error.
pub fn profile_volumes(
    first:  Option<&ScalarVolume>,
    second: Option<&ScalarVolume>,
    ruler: &LineSegment,
    ruler_name: &str,
    samples: usize,
    interpolation: Interpolation,
) -> Result<Vec<LabeledProfile>, ProbeError> {
    if first.is_none() && second.is_none() {
        return Err(ProbeError::MissingInput);
    }

    let run = |volume: Option<&ScalarVolume>| -> Option<Result<LabeledProfile, ProbeError>> {
        volume.map(|volume| {
            let profile = probe(volume, ruler, samples, interpolation)?;
            Ok(LabeledProfile {
                label: format!("{} - {}", volume.name, ruler_name),
                profile,
            })
        })
    };

    let (first, second) = rayon::join(|| run(first), || run(second));

    let mut profiles = Vec::with_capacity(2);
    if let Some(labelled) = first  { profiles.push(labelled?); }
    if let Some(labelled) = second { profiles.push(labelled?); }
    Ok(profiles)
}
