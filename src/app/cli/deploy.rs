use std::path::{Path, PathBuf};

use crate::app::api::{self, DeployOptions};
use crate::domain::{AppError, DriveLetter};

pub fn run_deploy(
    config: Option<&Path>,
    archive: PathBuf,
    install_root: PathBuf,
    map: Option<String>,
) -> Result<(), AppError> {
    let remap_unit = map.as_deref().map(DriveLetter::new).transpose()?;
    let report = api::deploy(config, DeployOptions { archive, install_root, remap_unit })?;
    super::print_report("Toolset deployed to", &report);
    Ok(())
}
