use std::path::PathBuf;

/// How a step failure affects the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// Abort the run.
    Fatal,
    /// Log, record a warning, continue.
    BestEffort,
}

/// Named steps of the installer procedures, in the order they may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    PrepareRoot,
    RemapDrive,
    EnsureReleasePath,
    AcquireInterpreter,
    RemoveInstalledTool,
    AcquireTool,
    RunToolInstaller,
    AddToPath,
    WriteConfig,
    BuildPackages,
    CleanupTemp,
    WriteLauncher,
    ExtractRedistributable,
    PersistConfigVar,
    PersistToolsetVar,
}

impl InstallStep {
    pub fn name(self) -> &'static str {
        match self {
            InstallStep::PrepareRoot => "prepare-root",
            InstallStep::RemapDrive => "remap-drive",
            InstallStep::EnsureReleasePath => "ensure-release-path",
            InstallStep::AcquireInterpreter => "acquire-interpreter",
            InstallStep::RemoveInstalledTool => "remove-installed-tool",
            InstallStep::AcquireTool => "acquire-tool",
            InstallStep::RunToolInstaller => "run-tool-installer",
            InstallStep::AddToPath => "add-to-path",
            InstallStep::WriteConfig => "write-config",
            InstallStep::BuildPackages => "build-packages",
            InstallStep::CleanupTemp => "cleanup-temp",
            InstallStep::WriteLauncher => "write-launcher",
            InstallStep::ExtractRedistributable => "extract-redistributable",
            InstallStep::PersistConfigVar => "persist-config-var",
            InstallStep::PersistToolsetVar => "persist-toolset-var",
        }
    }

    pub fn policy(self) -> StepPolicy {
        match self {
            InstallStep::RemapDrive
            | InstallStep::AddToPath
            | InstallStep::CleanupTemp
            | InstallStep::RemoveInstalledTool => StepPolicy::BestEffort,
            _ => StepPolicy::Fatal,
        }
    }

    /// Step sequence of a full installation.
    pub fn install_plan(add_to_path: bool) -> Vec<InstallStep> {
        let mut steps = vec![
            InstallStep::PrepareRoot,
            InstallStep::RemapDrive,
            InstallStep::EnsureReleasePath,
            InstallStep::AcquireInterpreter,
            InstallStep::AcquireTool,
            InstallStep::RunToolInstaller,
        ];
        if add_to_path {
            steps.push(InstallStep::AddToPath);
        }
        steps.extend([
            InstallStep::WriteConfig,
            InstallStep::BuildPackages,
            InstallStep::CleanupTemp,
            InstallStep::WriteLauncher,
            InstallStep::PersistToolsetVar,
        ]);
        steps
    }

    /// Step sequence replacing rez inside an existing toolset.
    pub fn update_plan() -> Vec<InstallStep> {
        vec![
            InstallStep::EnsureReleasePath,
            InstallStep::RemoveInstalledTool,
            InstallStep::AcquireTool,
            InstallStep::RunToolInstaller,
            InstallStep::WriteConfig,
            InstallStep::BuildPackages,
            InstallStep::CleanupTemp,
            InstallStep::WriteLauncher,
        ]
    }

    /// Step sequence unpacking a redistributable toolset archive.
    pub fn deploy_plan() -> Vec<InstallStep> {
        vec![
            InstallStep::PrepareRoot,
            InstallStep::RemapDrive,
            InstallStep::ExtractRedistributable,
            InstallStep::PersistConfigVar,
            InstallStep::PersistToolsetVar,
        ]
    }
}

/// A best-effort step failure that was swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWarning {
    pub step: &'static str,
    pub message: String,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Toolset root as seen by the installed environment (mapped drive when remapped).
    pub toolset_root: PathBuf,
    pub core_dir: PathBuf,
    /// Rez release name when the latest release was downloaded.
    pub rez_release: Option<String>,
    pub completed: Vec<&'static str>,
    pub warnings: Vec<StepWarning>,
}
