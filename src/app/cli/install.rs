//! Install command implementation.

use std::io::{ErrorKind, IsTerminal};
use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::app::api::{self, InstallOptions};
use crate::domain::{AppError, DriveLetter};

const DEFAULT_LOCAL_FOLDER: &str = "C:/";
const DEFAULT_REMAP_UNIT: &str = "T";

#[derive(Args)]
pub struct InstallArgs {
    /// Rez local folder (prompted when omitted on a terminal)
    local_folder: Option<PathBuf>,
    /// Set a remote folder as release_packages_path
    #[arg(short = 'r', long = "release", value_name = "FOLDER")]
    release: Option<String>,
    /// Map the local folder to another disk unit during the install process
    #[arg(short = 'm', long = "map", value_name = "UNIT")]
    map: Option<String>,
    /// Add rez to user Path environment variable
    #[arg(short = 'p', long = "path")]
    add_to_path: bool,
    /// Download latest rez from GitHub
    #[arg(short = 'd', long = "download")]
    download: bool,
    /// Interpreter archive to use instead of the bundled one
    #[arg(long, value_name = "ZIP")]
    python_archive: Option<PathBuf>,
    /// Rez source archive to use instead of the bundled one
    #[arg(long, value_name = "ZIP", conflicts_with = "download")]
    rez_archive: Option<PathBuf>,
}

pub fn run_install(config: Option<&Path>, args: InstallArgs) -> Result<(), AppError> {
    let Some(options) = resolve_install_options(config, args)? else {
        return Ok(());
    };
    let report = api::install(config, options)?;
    super::print_report("Rez is now ready in", &report);
    Ok(())
}

fn resolve_install_options(
    config: Option<&Path>,
    args: InstallArgs,
) -> Result<Option<InstallOptions>, AppError> {
    let mut options = InstallOptions {
        install_root: PathBuf::new(),
        release_path: args.release,
        remap_unit: args.map.as_deref().map(DriveLetter::new).transpose()?,
        add_to_path: args.add_to_path,
        fetch_latest: args.download,
        python_archive: args.python_archive,
        rez_archive: args.rez_archive,
    };

    if let Some(folder) = args.local_folder {
        options.install_root = folder;
        return Ok(Some(options));
    }

    if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
        return Err(AppError::config_error(
            "LOCAL_FOLDER is required when not running interactively",
        ));
    }

    let settings = api::settings(config)?;
    match prompt_text("Rez local folder", Some(DEFAULT_LOCAL_FOLDER.to_string()))? {
        Some(folder) => options.install_root = PathBuf::from(folder),
        None => return Ok(None),
    }
    if options.remap_unit.is_none() {
        let unit = prompt_text(
            &format!("Remap unit (e.g. {}, leave empty to skip)", DEFAULT_REMAP_UNIT),
            None,
        )?;
        match unit {
            Some(value) => options.remap_unit = remap_answer(&value)?,
            None => return Ok(None),
        }
    }
    if options.release_path.is_none() {
        let default = settings.fallback_release_path().map(str::to_string);
        match prompt_text("Release packages folder", default)? {
            Some(value) => options.release_path = Some(value),
            None => return Ok(None),
        }
    }
    if !options.add_to_path {
        match prompt_confirm("Add rez to user Path?")? {
            Some(value) => options.add_to_path = value,
            None => return Ok(None),
        }
    }

    Ok(Some(options))
}

/// An empty answer leaves the toolset unmapped.
fn remap_answer(value: &str) -> Result<Option<DriveLetter>, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    DriveLetter::new(value).map(Some)
}

/// `None` when the prompt was interrupted.
fn prompt_text(prompt: &str, default: Option<String>) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(value) = default {
        input = input.default(value);
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read '{}': {}", prompt, err))),
    }
}

fn prompt_confirm(prompt: &str) -> Result<Option<bool>, AppError> {
    match Confirm::new().with_prompt(prompt).default(false).interact() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read '{}': {}", prompt, err))),
    }
}
