use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;

use lineprof::{Interpolation, Lengthf32, LineSegment, ScalarVolume};
use lineprof::io;
use lineprof::profile_volumes;
use lineprof::utils::{parse_triplet, timing::Progress};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    let mut progress = Progress::new();

    let volume1 = load(args.volume1.as_deref(), &mut progress)?;
    let volume2 = load(args.volume2.as_deref(), &mut progress)?;

    let ruler = LineSegment::from_components(args.from, args.to);

    progress.start(&format!("Probing {} samples along {}", args.samples, ruler));
    let profiles = profile_volumes(
        volume1.as_ref(), volume2.as_ref(),
        &ruler, &args.ruler_name,
        args.samples, args.interpolation,
    )?;
    progress.done();

    for labelled in &profiles {
        let values = &labelled.profile.values;
        let (lo, hi) = value_range(values);
        println!("  {}: {} samples, intensities {lo:.3} to {hi:.3}", labelled.label, values.len());
    }

    progress.start(&format!("Writing {}", args.output.display()));
    io::write_profiles(&profiles, &args.output)?;
    progress.done();

    Ok(())
}

fn load(path: Option<&Path>, progress: &mut Progress) -> Result<Option<ScalarVolume>, Box<dyn Error>> {
    match path {
        Some(path) => {
            progress.start(&format!("Reading volume {}", path.display()));
            let volume = io::load_volume(path)?;
            progress.done();
            Ok(Some(volume))
        }
        None => Ok(None),
    }
}

fn value_range(values: &[f32]) -> (f32, f32) {
    values.iter().fold((f32::INFINITY, f32::NEG_INFINITY),
                       |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

#[derive(Parser, Debug, Clone)]
#[command(name = "lineprof", about = "Intensity profiles along a line through one or two scalar volumes")]
pub struct Cli {

    /// First volume: raw f32 data file with a TOML sidecar next to it
    #[arg(long, value_name = "FILE")]
    pub volume1: Option<PathBuf>,

    /// Second volume, probed along the same ruler
    #[arg(long, value_name = "FILE")]
    pub volume2: Option<PathBuf>,

    /// Ruler start point in world coordinates
    #[arg(long, value_parser = parse_triplet::<Lengthf32>, allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub from: (Lengthf32, Lengthf32, Lengthf32),

    /// Ruler end point in world coordinates
    #[arg(long, value_parser = parse_triplet::<Lengthf32>, allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub to: (Lengthf32, Lengthf32, Lengthf32),

    /// Number of samples along the ruler, endpoints included
    #[arg(short = 'n', long, default_value_t = 100)]
    pub samples: usize,

    /// How sample positions read the voxel grid
    #[arg(long, value_enum, default_value = "trilinear")]
    pub interpolation: Interpolation,

    /// Ruler name used in the profile labels
    #[arg(long, default_value = "ruler")]
    pub ruler_name: String,

    /// Output CSV file (label,distance,value)
    #[arg(short, long, default_value = "profiles.csv")]
    pub output: PathBuf,
}
