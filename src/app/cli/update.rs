use std::path::{Path, PathBuf};

use crate::app::api::{self, UpdateOptions};
use crate::domain::AppError;

pub fn run_update(
    config: Option<&Path>,
    root: Option<PathBuf>,
    release: Option<String>,
    download: bool,
    rez_archive: Option<PathBuf>,
) -> Result<(), AppError> {
    let options = UpdateOptions {
        toolset_root: root,
        release_path: release,
        fetch_latest: download,
        rez_archive,
    };
    let report = api::update(config, options)?;
    super::print_report("Rez updated in", &report);
    Ok(())
}
