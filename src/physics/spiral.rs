use std::f64::consts::PI;

use crate::config::{AngleReference, SpiralConfig};
use crate::error::Result;
use crate::model::structure::{MagneticStructure, SiteRecord};
use crate::utils::linalg;

/// Wave-vector component for which the spiral closes one cycle after
/// `atoms` sites along an axis: q = 0.5 - 0.5 / atoms.
pub fn cycle_wave_vector(atoms: u32) -> f64 {
    0.5 - 0.5 / atoms as f64
}

/// Generates the moment lattice for `config`.
///
/// Every site R = (i, j, k) with 0 <= i < nx, 0 <= j < ny, 0 <= k < nz is
/// visited in row-major order with k varying fastest. The moment at R is
/// the initial moment with its xy-projection rotated in-plane by the phase
/// 2*pi*(q . R); the z-component never changes, so the moment magnitude is
/// the same at every site.
pub fn generate(config: &SpiralConfig) -> Result<MagneticStructure> {
    config.validate()?;

    let [nx, ny, nz] = config.r_max;
    let capacity = nx as usize * ny as usize * nz as usize;
    let mut sites: Vec<SiteRecord> = Vec::with_capacity(capacity);

    for i in 0..nx {
        for j in 0..ny {
            for k in 0..nz {
                let phase = 2.0
                    * PI
                    * (config.q[0] * i as f64
                        + config.q[1] * j as f64
                        + config.q[2] * k as f64);

                let moment = linalg::rotate_xy(config.m1, phase);

                let reference = match config.angle_reference {
                    AngleReference::Previous => sites.last(),
                    AngleReference::First => sites.first(),
                };
                // First record measures against itself: 0.0 by convention.
                let angle_deg = match reference {
                    Some(record) => linalg::angle_between_deg(moment, record.moment),
                    None => 0.0,
                };

                sites.push(SiteRecord {
                    site: [i, j, k],
                    moment,
                    angle_deg,
                });
            }
        }
    }

    let lattice = [
        [nx as f64 * config.scale, 0.0, 0.0],
        [0.0, ny as f64 * config.scale, 0.0],
        [0.0, 0.0, nz as f64 * config.scale],
    ];

    Ok(MagneticStructure {
        lattice,
        sites,
        species: config.species,
        scale: config.scale,
    })
}
