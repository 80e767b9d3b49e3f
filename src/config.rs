// src/config.rs

use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::error::{Result, SpiralError};

// --- Enums ---

/// Which earlier moment each site's angle is measured against.
/// `Previous` compares neighbors in iteration order; `First` reproduces
/// the historical behavior of comparing everything to site (0,0,0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AngleReference {
  Previous,
  First,
}

impl Default for AngleReference {
  fn default() -> Self {
    AngleReference::Previous
  }
}

// --- Generation parameters ---

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpiralConfig {
  /// Spiral wave vector [qx, qy, qz] in reciprocal lattice units.
  pub q: [f64; 3],

  /// Initial magnetization vector [mx, my, mz].
  pub m1: [f64; 3],

  /// Supercell extents [nx, ny, nz], each positive.
  pub r_max: [u32; 3],

  /// Physical distance per lattice step in the exported file.
  pub scale: f64,

  /// Atomic number tagging every exported atom.
  pub species: u32,

  #[serde(default)]
  pub angle_reference: AngleReference,

  /// Destination structure file.
  pub output: PathBuf,
}

impl Default for SpiralConfig {
  fn default() -> Self {
    // The 3-atom cycle along y and z, the configuration the tool was
    // written to produce in the first place.
    Self {
      q: [0.0, 1.0 / 3.0, 1.0 / 3.0],
      m1: [1.0, 0.0, 0.0],
      r_max: [3, 6, 6],
      scale: 3.0,
      species: 26,
      angle_reference: AngleReference::Previous,
      output: PathBuf::from("spiral.xsf"),
    }
  }
}

impl SpiralConfig {
  /// Rejects degenerate parameters before any generation work happens.
  pub fn validate(&self) -> Result<()> {
    if self.r_max.iter().any(|&n| n == 0) {
      return Err(SpiralError::config(format!(
        "supercell extents must be positive, got {}x{}x{}",
        self.r_max[0], self.r_max[1], self.r_max[2]
      )));
    }

    if self.q.iter().any(|c| !c.is_finite()) {
      return Err(SpiralError::config(format!(
        "wave vector components must be finite, got [{}, {}, {}]",
        self.q[0], self.q[1], self.q[2]
      )));
    }

    if self.m1.iter().any(|c| !c.is_finite()) {
      return Err(SpiralError::config(format!(
        "initial moment components must be finite, got [{}, {}, {}]",
        self.m1[0], self.m1[1], self.m1[2]
      )));
    }

    let m_norm_sq: f64 = self.m1.iter().map(|c| c * c).sum();
    if m_norm_sq == 0.0 {
      return Err(SpiralError::config(
        "initial moment has zero magnitude, rotation is undefined",
      ));
    }

    if !self.scale.is_finite() || self.scale <= 0.0 {
      return Err(SpiralError::config(format!(
        "scale must be a positive distance, got {}",
        self.scale
      )));
    }

    if self.species == 0 {
      return Err(SpiralError::config("species must be a valid atomic number"));
    }

    Ok(())
  }
}

// --- Persisted defaults ---

fn default_scale() -> f64 {
  3.0
}

fn default_species() -> u32 {
  26
}

fn default_output() -> PathBuf {
  PathBuf::from("spiral.xsf")
}

/// User defaults for the peripheral knobs (scale, species, output path).
/// The physics parameters are deliberately not persisted; they are the
/// whole point of a run and should always be stated.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Preferences {
  #[serde(default = "default_scale")]
  pub scale: f64,

  #[serde(default = "default_species")]
  pub species: u32,

  #[serde(default = "default_output")]
  pub output: PathBuf,
}

impl Default for Preferences {
  fn default() -> Self {
    Self {
      scale: default_scale(),
      species: default_species(),
      output: default_output(),
    }
  }
}

impl Preferences {
  /// Loads preferences from the standard OS location
  /// (e.g., ~/.config/spiralgen/settings.json), falling back to defaults.
  pub fn load() -> Self {
    let path = Self::get_path();
    if path.exists() {
      match File::open(&path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(prefs) => {
              info!("Preferences loaded from {:?}", path);
              prefs
            }
            Err(e) => {
              warn!("Error parsing preferences: {}", e);
              Self::default()
            }
          }
        }
        Err(e) => {
          warn!("Error opening preferences: {}", e);
          Self::default()
        }
      }
    } else {
      Self::default()
    }
  }

  /// Saves preferences to the standard OS location.
  pub fn save(&self) -> Result<()> {
    let path = Self::get_path();
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    let file = File::create(&path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, self)
      .map_err(|e| SpiralError::Io(e.into()))?;

    info!("Preferences saved to {:?}", path);
    Ok(())
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("com", "example", "spiralgen") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_is_valid() {
    assert!(SpiralConfig::default().validate().is_ok());
  }

  #[test]
  fn rejects_zero_extent() {
    let config = SpiralConfig {
      r_max: [3, 0, 6],
      ..Default::default()
    };
    assert!(matches!(
      config.validate(),
      Err(SpiralError::Config { .. })
    ));
  }

  #[test]
  fn rejects_zero_moment() {
    let config = SpiralConfig {
      m1: [0.0, 0.0, 0.0],
      ..Default::default()
    };
    assert!(matches!(
      config.validate(),
      Err(SpiralError::Config { .. })
    ));
  }

  #[test]
  fn rejects_non_finite_wave_vector() {
    let config = SpiralConfig {
      q: [0.0, f64::NAN, 0.25],
      ..Default::default()
    };
    assert!(config.validate().is_err());

    let config = SpiralConfig {
      q: [f64::INFINITY, 0.0, 0.0],
      ..Default::default()
    };
    assert!(config.validate().is_err());
  }

  #[test]
  fn rejects_bad_scale_and_species() {
    let config = SpiralConfig {
      scale: 0.0,
      ..Default::default()
    };
    assert!(config.validate().is_err());

    let config = SpiralConfig {
      species: 0,
      ..Default::default()
    };
    assert!(config.validate().is_err());
  }
}
