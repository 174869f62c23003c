use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{AppError, InstallerSettings, ToolsetLayout};
use crate::services::archive::pack_directory;

#[derive(Debug, Clone)]
pub struct PackOutcome {
    pub archive: PathBuf,
    pub files: usize,
}

/// Store the core folder of the toolset at `toolset_root` into its redistributable archive.
pub fn execute(settings: &InstallerSettings, toolset_root: &Path) -> Result<PackOutcome, AppError> {
    let layout = ToolsetLayout::at(std::path::absolute(toolset_root)?, settings);
    let core = layout.core();
    if !core.is_dir() {
        return Err(AppError::ToolsetNotFound(layout.root().display().to_string()));
    }

    let archive = layout.redist_archive();
    println!("Packing {}...", core.display());
    let files = pack_directory(&core, &archive, layout.core_dir_name())?;
    info!(archive = %archive.display(), files, "packed toolset");

    Ok(PackOutcome { archive, files })
}
