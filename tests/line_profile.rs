// End-to-end checks: phantom volumes written to disk, loaded back, probed
// along a ruler, and the profiles written out as CSV.

use std::error::Error;
use std::path::{Path, PathBuf};

use float_eq::assert_float_eq;
use tempfile::tempdir;

use lineprof::io::{self, raw};
use lineprof::{profile_volumes, Interpolation, LineSegment};

// 16x16x16 grid, 2mm voxels, centred on the origin: world x = 2 * index - 15.
fn write_volume(dir: &Path, stem: &str, name: &str, field: fn(usize, usize, usize) -> f32)
                -> Result<PathBuf, Box<dyn Error>> {
    const N: usize = 16;
    std::fs::write(dir.join(format!("{stem}.toml")), format!(concat!(
        "name = \"{}\"\n",
        "n = [16, 16, 16]\n",
        "spacing = [2.0, 2.0, 2.0]\n",
        "origin = [-15.0, -15.0, -15.0]\n"), name))?;

    let data_path = dir.join(format!("{stem}.f32"));
    let values = (0..N).flat_map(move |x| {
        (0..N).flat_map(move |y| (0..N).map(move |z| field(x, y, z)))
    });
    raw::write(values, &data_path)?;
    Ok(data_path)
}

fn slab(x: usize, _y: usize, _z: usize) -> f32 {
    if (4..=11).contains(&x) { 100.0 } else { 0.0 }
}

fn ramp(x: usize, _y: usize, _z: usize) -> f32 { x as f32 }

#[test]
fn slab_phantom_from_disk_to_csv() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let fa  = io::load_volume(&write_volume(dir.path(), "fa",  "FA",  slab)?)?;
    let adc = io::load_volume(&write_volume(dir.path(), "adc", "ADC", ramp)?)?;

    // Straight through the middle of the grid, along world x.
    let ruler = LineSegment::from_components((-15.0, 0.0, 0.0), (15.0, 0.0, 0.0));
    let profiles = profile_volumes(Some(&fa), Some(&adc), &ruler, "R1", 16,
                                   Interpolation::Trilinear)?;

    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].label, "FA - R1");
    assert_eq!(profiles[1].label, "ADC - R1");

    // 16 samples, 2mm apart, spanning the full 30mm of the ruler.
    let expected_distances: Vec<f32> = (0..16).map(|k| 2.0 * k as f32).collect();
    assert_eq!(profiles[0].profile.distances, expected_distances);
    assert_eq!(profiles[1].profile.distances, expected_distances);

    // Sample k lands on voxel column k, so the slab shows up in samples 4..=11.
    for (k, &value) in profiles[0].profile.values.iter().enumerate() {
        let expected = if (4..=11).contains(&k) { 100.0 } else { 0.0 };
        assert_float_eq!(value, expected, abs <= 1e-2);
    }

    // The ramp volume reproduces its voxel index along the same ruler.
    for (k, &value) in profiles[1].profile.values.iter().enumerate() {
        assert_float_eq!(value, k as f32, abs <= 1e-3);
    }

    let csv_path = dir.path().join("profiles.csv");
    io::write_profiles(&profiles, &csv_path)?;
    let written = std::fs::read_to_string(&csv_path)?;
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("label,distance,value"));
    assert_eq!(lines.next(), Some("FA - R1,0,0"));
    assert_eq!(written.lines().count(), 1 + 2 * 16);
    assert_eq!(written.lines().filter(|line| line.starts_with("ADC - R1,")).count(), 16);

    Ok(())
}

#[test]
fn oblique_ruler_at_chart_resolution() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let fa = io::load_volume(&write_volume(dir.path(), "fa", "FA", slab)?)?;

    let ruler = LineSegment::from_components((-10.0, -12.0, -3.0), (11.0, 7.0, 9.0));
    let profiles = profile_volumes(Some(&fa), None, &ruler, "oblique", 100,
                                   Interpolation::Nearest)?;

    let profile = &profiles[0].profile;
    assert_eq!(profile.distances.len(), 100);
    assert_eq!(profile.values.len(), 100);
    assert_eq!(profile.distances[0], 0.0);
    assert_float_eq!(profile.distances[99], ruler.length(), rel <= 1e-5);
    for pair in profile.distances.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    // Nearest-neighbour sampling can only ever return values present in the grid.
    for &value in &profile.values {
        assert!(value == 0.0 || value == 100.0);
    }
    Ok(())
}
