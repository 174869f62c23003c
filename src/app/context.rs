use std::path::{Path, PathBuf};

use crate::domain::{AppError, InstallerSettings};
use crate::ports::{DriveMapper, EnvironmentStore, ProcessRunner, ReleaseSource};
use crate::services::TemplateRenderer;

/// Application context holding dependencies for command execution.
pub struct AppContext<E, D, P, R>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    environment: E,
    drives: D,
    runner: P,
    releases: R,
    settings: InstallerSettings,
    payload_dir: PathBuf,
    renderer: TemplateRenderer,
}

impl<E, D, P, R> AppContext<E, D, P, R>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    /// Create a new application context.
    pub fn new(
        environment: E,
        drives: D,
        runner: P,
        releases: R,
        settings: InstallerSettings,
        payload_dir: PathBuf,
    ) -> Result<Self, AppError> {
        Ok(Self {
            environment,
            drives,
            runner,
            releases,
            settings,
            payload_dir,
            renderer: TemplateRenderer::new()?,
        })
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn drives(&self) -> &D {
        &self.drives
    }

    pub fn runner(&self) -> &P {
        &self.runner
    }

    pub fn releases(&self) -> &R {
        &self.releases
    }

    pub fn settings(&self) -> &InstallerSettings {
        &self.settings
    }

    /// Folder holding the bundled interpreter and rez archives.
    pub fn payload_dir(&self) -> &Path {
        &self.payload_dir
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }
}
