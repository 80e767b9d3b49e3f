// src/io/xyz.rs

use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::model::{elements, MagneticStructure};

/// Writes the structure as extended XYZ.
///
/// The comment line carries the supercell box in the
/// `Lattice="ax ay az bx by bz cx cy cz"` convention, and each atom line
/// appends the raw (unscaled) moment components after the position, so
/// tools that read extra columns recover the moments exactly.
pub fn write(path: &Path, structure: &MagneticStructure) -> Result<()> {
    let symbol = elements::element_symbol(structure.species);

    crate::io::atomic_write(path, |out| {
        // 1. Number of atoms
        writeln!(out, "{}", structure.sites.len())?;

        // 2. Comment line with the lattice
        let lat = &structure.lattice;
        writeln!(
            out,
            "Lattice=\"{} {} {} {} {} {} {} {} {}\" Properties=species:S:1:pos:R:3:moment:R:3",
            lat[0][0], lat[0][1], lat[0][2],
            lat[1][0], lat[1][1], lat[1][2],
            lat[2][0], lat[2][1], lat[2][2]
        )?;

        // 3. Atoms
        for record in &structure.sites {
            let [x, y, z] = structure.position(record);
            writeln!(
                out,
                "{:<4} {:12.8} {:12.8} {:12.8} {:12.8} {:12.8} {:12.8}",
                symbol,
                x,
                y,
                z,
                record.moment[0],
                record.moment[1],
                record.moment[2]
            )?;
        }

        Ok(())
    })?;

    info!("XYZ file written to {:?}", path);
    Ok(())
}
