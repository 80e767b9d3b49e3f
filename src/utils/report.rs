// src/utils/report.rs

use crate::config::SpiralConfig;
use crate::model::elements;
use crate::model::structure::MagneticStructure;

/// Echoes the generation parameters before the site table.
pub fn config_summary(config: &SpiralConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Spiral vector q = [{}, {}, {}]\n",
        config.q[0], config.q[1], config.q[2]
    ));
    out.push_str(&format!(
        "Initial moment = [{}, {}, {}]\n",
        config.m1[0], config.m1[1], config.m1[2]
    ));
    out.push_str(&format!(
        "Supercell dimensions = {} x {} x {}\n",
        config.r_max[0], config.r_max[1], config.r_max[2]
    ));
    out.push_str(&format!(
        "Species: {} (Z={}), scale {}\n",
        elements::element_symbol(config.species),
        config.species,
        config.scale
    ));
    out
}

/// Formats the generated sites as an aligned table for human inspection.
/// Purely diagnostic; the exported file is the contractual output.
pub fn structure_table(structure: &MagneticStructure) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Generated {} atomic positions\n\n",
        structure.sites.len()
    ));
    out.push_str("Position (i,j,k) | Magnetic Moment (mx,my,mz) | Angle (deg)\n");
    out.push_str(&"-".repeat(65));
    out.push('\n');

    for record in &structure.sites {
        out.push_str(&format!(
            "{:2} {:2} {:2} | {:7.3} {:7.3} {:7.3} | {:8.3}\n",
            record.site[0],
            record.site[1],
            record.site[2],
            record.moment[0],
            record.moment[1],
            record.moment[2],
            record.angle_deg
        ));
    }

    out
}
