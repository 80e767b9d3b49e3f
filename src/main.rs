use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod physics;
pub mod utils;

use config::{AngleReference, Preferences, SpiralConfig};
use error::{Result, SpiralError};
use model::elements;
use physics::spiral;
use utils::report;

#[derive(Parser)]
#[command(name = "spiralgen")]
#[command(about = "Generates magnetic spiral structures and exports them for 3D visualization")]
#[command(version)]
struct Cli {
    /// Spiral wave vector qx,qy,qz in reciprocal lattice units
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    q: Option<Vec<f64>>,

    /// Initial magnetization vector mx,my,mz
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    moment: Option<Vec<f64>>,

    /// Supercell extents nx,ny,nz
    #[arg(short, long, value_delimiter = ',')]
    size: Option<Vec<u32>>,

    /// Atoms per spiral cycle; shorthand that derives q = (0, f, f) with
    /// f = 0.5 - 0.5/N and a matching N x 2N x 2N supercell
    #[arg(short, long, conflicts_with_all = ["q", "size"])]
    atoms_in_spiral: Option<u32>,

    /// Distance between neighboring atoms in the exported file
    #[arg(long)]
    scale: Option<f64>,

    /// Atomic species tagging exported atoms, as symbol or atomic number
    #[arg(long)]
    species: Option<String>,

    /// Output path; .xyz selects extended XYZ, anything else XSF
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Measure angles against the first moment instead of the previous one
    #[arg(long)]
    angle_from_first: bool,

    /// Persist the given --scale/--species/--output as future defaults
    #[arg(long)]
    save_defaults: bool,

    /// Suppress the per-site table
    #[arg(long)]
    quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let prefs = Preferences::load();
    let config = build_config(&cli, &prefs)?;

    if cli.save_defaults {
        let prefs = Preferences {
            scale: config.scale,
            species: config.species,
            output: config.output.clone(),
        };
        prefs.save()?;
    }

    print!("{}", report::config_summary(&config));

    let structure = spiral::generate(&config)?;

    if !cli.quiet {
        print!("{}", report::structure_table(&structure));
    }

    io::save_structure(&config.output, &structure)?;
    info!("Structure written to {:?}", config.output);

    Ok(())
}

fn build_config(cli: &Cli, prefs: &Preferences) -> Result<SpiralConfig> {
    let defaults = SpiralConfig::default();

    let mut q = match &cli.q {
        Some(values) => parse_triple(values, "--q")?,
        None => defaults.q,
    };
    let mut r_max = match &cli.size {
        Some(values) => parse_triple(values, "--size")?,
        None => defaults.r_max,
    };

    // The shorthand drives both the wave vector and the supercell, the way
    // one cycle of N atoms is usually set up: spiral along y and z, with
    // room for two full cycles on each driven axis.
    if let Some(atoms) = cli.atoms_in_spiral {
        if atoms == 0 {
            return Err(SpiralError::config("--atoms-in-spiral must be positive"));
        }
        let f = spiral::cycle_wave_vector(atoms);
        q = [0.0, f, f];
        r_max = [atoms, 2 * atoms, 2 * atoms];
    }

    let m1 = match &cli.moment {
        Some(values) => parse_triple(values, "--moment")?,
        None => defaults.m1,
    };

    let species = match &cli.species {
        Some(tag) => parse_species(tag)?,
        None => prefs.species,
    };

    let angle_reference = if cli.angle_from_first {
        AngleReference::First
    } else {
        AngleReference::Previous
    };

    let config = SpiralConfig {
        q,
        m1,
        r_max,
        scale: cli.scale.unwrap_or(prefs.scale),
        species,
        angle_reference,
        output: cli.output.clone().unwrap_or_else(|| prefs.output.clone()),
    };
    config.validate()?;
    Ok(config)
}

fn parse_triple<T: Copy>(values: &[T], flag: &str) -> Result<[T; 3]> {
    if values.len() != 3 {
        return Err(SpiralError::config(format!(
            "{} expects three comma-separated values, got {}",
            flag,
            values.len()
        )));
    }
    Ok([values[0], values[1], values[2]])
}

/// Accepts "Fe" as well as "26".
fn parse_species(tag: &str) -> Result<u32> {
    if let Ok(z) = tag.parse::<u32>() {
        return Ok(z);
    }
    match elements::atomic_number(tag) {
        0 => Err(SpiralError::config(format!(
            "unknown element symbol '{}'",
            tag
        ))),
        z => Ok(z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli::parse_from(["spiralgen"])
    }

    #[test]
    fn defaults_mirror_the_reference_setup() {
        let config = build_config(&bare_cli(), &Preferences::default()).unwrap();
        assert_eq!(config.r_max, [3, 6, 6]);
        assert_eq!(config.species, 26);
        assert_eq!(config.scale, 3.0);
        assert_eq!(config.angle_reference, AngleReference::Previous);
        assert!((config.q[1] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn atoms_in_spiral_shorthand() {
        let cli = Cli::parse_from(["spiralgen", "--atoms-in-spiral", "3"]);
        let config = build_config(&cli, &Preferences::default()).unwrap();
        assert_eq!(config.r_max, [3, 6, 6]);
        assert_eq!(config.q[0], 0.0);
        assert!((config.q[1] - 1.0 / 3.0).abs() < 1e-12);
        assert!((config.q[2] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn explicit_vectors_parse() {
        let cli = Cli::parse_from([
            "spiralgen",
            "--q",
            "0,0.25,0.25",
            "--moment",
            "-1,0,0.5",
            "--size",
            "2,4,4",
            "--species",
            "Mn",
        ]);
        let config = build_config(&cli, &Preferences::default()).unwrap();
        assert_eq!(config.q, [0.0, 0.25, 0.25]);
        assert_eq!(config.m1, [-1.0, 0.0, 0.5]);
        assert_eq!(config.r_max, [2, 4, 4]);
        assert_eq!(config.species, 25);
    }

    #[test]
    fn short_vector_is_rejected() {
        let cli = Cli::parse_from(["spiralgen", "--q", "0,0.25"]);
        assert!(build_config(&cli, &Preferences::default()).is_err());
    }

    #[test]
    fn unknown_species_is_rejected() {
        assert!(parse_species("Fe").is_ok());
        assert_eq!(parse_species("26").unwrap(), 26);
        assert!(parse_species("Unobtainium").is_err());
    }
}
