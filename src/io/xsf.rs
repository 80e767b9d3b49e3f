// src/io/xsf.rs

use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::model::MagneticStructure;

/// Writes the structure as an XSF crystal file.
///
/// Section order is fixed by the format: comment header, CRYSTAL, PRIMVEC
/// (the supercell box), PRIMCOORD (one atom per line with its moment
/// vector appended). VESTA displays the trailing three columns as vectors
/// on each atom, so the moments are scaled by the same display factor as
/// the positions.
pub fn write(path: &Path, structure: &MagneticStructure) -> Result<()> {
    crate::io::atomic_write(path, |out| {
        // 1. Header
        writeln!(out, "# XSF file generated for magnetic spiral visualization")?;
        writeln!(out, "# Can be opened in VESTA to visualize magnetic moments")?;
        writeln!(out, "CRYSTAL")?;

        // 2. Unit cell vectors
        writeln!(out, "PRIMVEC")?;
        for vec in &structure.lattice {
            writeln!(out, "{:6.1}  {:6.1}  {:6.1}", vec[0], vec[1], vec[2])?;
        }

        // 3. Atomic coordinates with appended moment vectors
        writeln!(out, "PRIMCOORD")?;
        writeln!(out, "{} 1", structure.sites.len())?;

        let s = structure.scale;
        for record in &structure.sites {
            let [x, y, z] = structure.position(record);
            writeln!(
                out,
                "{}  {:8.4}  {:8.4}  {:8.4}  {:8.4}  {:8.4}  {:8.4}",
                structure.species,
                x,
                y,
                z,
                record.moment[0] * s,
                record.moment[1] * s,
                record.moment[2] * s
            )?;
        }

        writeln!(out)?;
        Ok(())
    })?;

    info!("XSF file written to {:?}", path);
    Ok(())
}
