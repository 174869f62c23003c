//! Interpreter and tool acquisition steps.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::InstallState;
use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{CommandSpec, DriveMapper, EnvironmentStore, ProcessRunner, ReleaseSource};
use crate::services::archive;

/// Installer script shipped at the root of the rez sources.
pub const INSTALL_SCRIPT: &str = "install.py";

const DOWNLOADED_TOOL_ARCHIVE: &str = "temp_rez.zip";

pub fn acquire_interpreter<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &InstallState,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let python_dir = state.layout.python_dir();
    let python_exe = state.layout.python_exe();
    if python_exe.is_file() {
        info!(dir = %python_dir.display(), "interpreter already present");
        return Ok(());
    }
    // Left behind by an interrupted run.
    if python_dir.exists() {
        debug!(dir = %python_dir.display(), "removing incomplete interpreter folder");
        fs::remove_dir_all(&python_dir)?;
    }

    let (source, downloaded) = interpreter_archive(ctx, state)?;
    // Bundles carry their own `python/` folder; embeddable downloads do not.
    let dest = if downloaded { python_dir.clone() } else { state.layout.core() };

    println!("Extracting Python...");
    archive::extract_all(&source, &dest)?;
    if downloaded {
        fs::remove_file(&source)?;
    }
    if !python_exe.is_file() {
        return Err(AppError::archive(
            &source,
            format!("archive did not produce {}", python_exe.display()),
        ));
    }
    enable_site_imports(&python_dir)
}

fn interpreter_archive<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &InstallState,
) -> Result<(PathBuf, bool), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    if let Some(explicit) = &state.python_archive {
        return Ok((explicit.clone(), false));
    }

    let python = &ctx.settings().python;
    let bundled = ctx.payload_dir().join(&python.archive);
    if bundled.is_file() {
        return Ok((bundled, false));
    }
    if !state.fetch_latest {
        return Err(AppError::PayloadMissing(bundled.display().to_string()));
    }

    let url = python.download_url()?;
    let file_name = url.path_segments().and_then(|s| s.last()).unwrap_or("python-embed.zip");
    let dest = state.layout.core().join(file_name);
    println!("Downloading Python {}...", python.version);
    ctx.releases().download(url.as_str(), &dest)?;
    Ok((dest, true))
}

/// Uncomment `import site` in the `python*._pth` files of an embeddable distribution.
fn enable_site_imports(python_dir: &Path) -> Result<(), AppError> {
    for entry in fs::read_dir(python_dir)? {
        let path = entry?.path();
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        if !(name.starts_with("python") && name.ends_with("._pth")) {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        let updated = content.replace("#import site", "import site");
        if updated != content {
            fs::write(&path, updated)?;
            debug!(file = %path.display(), "enabled site imports");
        }
    }
    Ok(())
}

pub fn remove_installed_tool(state: &InstallState) -> Result<(), AppError> {
    let rez_dir = state.layout.rez_dir();
    if rez_dir.exists() {
        println!("Deleting installed rez...");
        fs::remove_dir_all(&rez_dir)?;
    }
    Ok(())
}

/// Extract the rez sources into the temp folder, downloading the latest release if requested.
pub fn acquire_tool<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &mut InstallState,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let source = if state.fetch_latest {
        let release = ctx.releases().latest_release(&ctx.settings().rez.latest_release_url)?;
        println!("Downloading rez version: {}", release.label());
        let dest = state.layout.core().join(DOWNLOADED_TOOL_ARCHIVE);
        ctx.releases().download(&release.zipball_url, &dest)?;
        state.rez_release = Some(release.label().to_string());
        state.downloaded_archive = Some(dest.clone());
        dest
    } else {
        state
            .rez_archive
            .clone()
            .unwrap_or_else(|| ctx.payload_dir().join(&ctx.settings().rez.archive))
    };
    if !source.is_file() {
        return Err(AppError::PayloadMissing(source.display().to_string()));
    }

    let temp_dir = state.layout.temp_dir();
    if temp_dir.exists() {
        fs::remove_dir_all(&temp_dir)?;
    }

    println!("Extracting rez source...");
    let extracted = archive::extract_all(&source, &temp_dir)?;
    let tool_source = match extracted.root_dir {
        Some(root) => temp_dir.join(root),
        None => temp_dir,
    };
    if !tool_source.join(INSTALL_SCRIPT).is_file() {
        let script = tool_source.join(INSTALL_SCRIPT);
        return Err(AppError::PayloadMissing(script.display().to_string()));
    }

    debug!(source = %tool_source.display(), "rez sources ready");
    state.tool_source = Some(tool_source);
    Ok(())
}

/// Run rez's `install.py` with the toolset interpreter.
pub fn run_tool_installer<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &InstallState,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let source = state
        .tool_source
        .as_ref()
        .ok_or_else(|| AppError::config_error("rez sources were not extracted"))?;

    println!("Running rez install.py...");
    let command = CommandSpec::new(state.layout.python_exe())
        .path_arg(&source.join(INSTALL_SCRIPT))
        .arg("-v")
        .path_arg(&state.layout.rez_dir());
    let status = ctx.runner().run(&command)?;
    if !status.success() {
        return Err(AppError::ExternalToolError {
            tool: INSTALL_SCRIPT.to_string(),
            error: format!("exited with {:?}", status.code),
        });
    }
    Ok(())
}

pub fn cleanup_temp(state: &InstallState) -> Result<(), AppError> {
    let temp_dir = state.layout.temp_dir();
    if temp_dir.exists() {
        fs::remove_dir_all(&temp_dir)?;
    }
    if let Some(downloaded) = &state.downloaded_archive {
        if downloaded.exists() {
            fs::remove_file(downloaded)?;
        }
    }
    Ok(())
}

/// Unpack a redistributable archive into the toolset root.
pub fn extract_redistributable(state: &InstallState) -> Result<(), AppError> {
    let source = state
        .redist_archive
        .as_ref()
        .ok_or_else(|| AppError::config_error("no redistributable archive given"))?;

    println!("Unpacking {}...", source.display());
    archive::extract_all(source, state.layout.root())?;

    let core = state.layout.core();
    if !core.is_dir() {
        return Err(AppError::archive(
            source,
            format!("archive has no '{}' folder", state.layout.core_dir_name()),
        ));
    }
    Ok(())
}
