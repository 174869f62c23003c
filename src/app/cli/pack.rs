use std::path::Path;

use crate::app::api;
use crate::domain::AppError;

pub fn run_pack(config: Option<&Path>, toolset_dir: &Path) -> Result<(), AppError> {
    let outcome = api::pack(config, toolset_dir)?;
    println!("✅ Packed {} file(s) into {}", outcome.files, outcome.archive.display());
    Ok(())
}
