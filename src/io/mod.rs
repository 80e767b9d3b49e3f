// src/io/mod.rs
pub mod xsf;
pub mod xyz;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::MagneticStructure;

pub fn save_structure(path: &Path, structure: &MagneticStructure) -> Result<()> {
    let p = path.to_string_lossy().to_lowercase();

    if p.ends_with(".xyz") {
        xyz::write(path, structure)
    } else {
        // Fallback to XSF for unknown or explicit .xsf; it is the format
        // VESTA reads the moment vectors from
        xsf::write(path, structure)
    }
}

/// Serializes through a temporary sibling file, then renames onto `path`.
/// A failed write removes the temporary file, so no partial structure file
/// is ever left at the destination.
pub(crate) fn atomic_write<F>(path: &Path, emit: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let tmp = tmp_path(path);

    let written = (|| -> Result<()> {
        let file = File::create(&tmp)?;
        let mut out = BufWriter::new(file);
        emit(&mut out)?;
        out.flush()?;
        Ok(())
    })();

    match written {
        Ok(()) => {
            fs::rename(&tmp, path)?;
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
