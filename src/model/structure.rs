use serde::{Deserialize, Serialize};

/// Integer supercell coordinate of one atom: [i, j, k].
pub type LatticeSite = [u32; 3];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SiteRecord {
    pub site: LatticeSite,
    /// Magnetic moment vector [mx, my, mz] at this site.
    pub moment: [f64; 3],
    /// Angle in degrees against the reference moment, in [0, 180].
    /// The first record reports 0.0 (measured against itself).
    pub angle_deg: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MagneticStructure {
    // Lattice vectors: [a_vec, b_vec, c_vec]
    pub lattice: [[f64; 3]; 3],
    pub sites: Vec<SiteRecord>,
    /// Atomic number used to tag every exported atom.
    pub species: u32,
    /// Physical distance per lattice step; positions are site * scale.
    pub scale: f64,
}

impl MagneticStructure {
    /// Cartesian position of a record, site coordinate scaled to distance units.
    pub fn position(&self, record: &SiteRecord) -> [f64; 3] {
        [
            record.site[0] as f64 * self.scale,
            record.site[1] as f64 * self.scale,
            record.site[2] as f64 * self.scale,
        ]
    }
}
