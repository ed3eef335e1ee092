//! The file-level pipeline: read the preset, read the target, merge, write.
//!
//! Both files are read fully before the target is opened for writing, so a
//! read failure on either path leaves the target exactly as it was. There is
//! no temp-file-and-rename step: a failure during the final write can leave
//! the target partially written.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::MergeError;
use crate::merge;
use crate::preset::Preset;

/// Confirmation of a completed merge. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    pub config_path: PathBuf,
    pub preset_path: PathBuf,
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Merged {} symbols into {}",
            self.preset_path.display(),
            self.config_path.display()
        )
    }
}

/// Merge the preset at `preset_path` into the config at `config_path`,
/// rewriting the config in place.
pub fn merge_files(config_path: &Path, preset_path: &Path) -> Result<MergeReport, MergeError> {
    let preset_text = read(preset_path)?;
    let target_text = read(config_path)?;

    let merged = merge::merge(&target_text, Preset::parse(&preset_text));

    std::fs::write(config_path, merged).map_err(|e| MergeError::Write {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    Ok(MergeReport {
        config_path: config_path.to_path_buf(),
        preset_path: preset_path.to_path_buf(),
    })
}

fn read(path: &Path) -> Result<String, MergeError> {
    std::fs::read_to_string(path).map_err(|e| MergeError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}
