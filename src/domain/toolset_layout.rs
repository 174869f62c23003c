use std::path::{Path, PathBuf};

use crate::domain::InstallerSettings;

/// Folder receiving rez's `install.py` output, below the core folder.
pub const REZ_DIR: &str = "rez";
/// Portable interpreter folder, below the core folder.
pub const PYTHON_DIR: &str = "python";
/// Temporary rez source extraction folder, below the core folder.
pub const TEMP_REZ_DIR: &str = "temp_rez";
pub const LAUNCHERS_DIR: &str = "launchers";
pub const LAUNCHER_FILE: &str = "test_rez.bat";
pub const REZCONFIG_FILE: &str = "rezconfig.py";
pub const REDIST_DIR: &str = "redist";
pub const REDIST_ARCHIVE: &str = "RedistributableRez.zip";
/// Executables inside a toolset are Windows binaries whatever the host.
const EXE_SUFFIX: &str = ".exe";

/// Path arithmetic for one toolset installation.
///
/// `root` is the toolset root (`{install_root}/{toolset}`), or the mapped
/// drive root once a remap is in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsetLayout {
    root: PathBuf,
    core_dir: String,
}

impl ToolsetLayout {
    /// Layout for a fresh install below `install_root`.
    pub fn for_install_root(install_root: &Path, settings: &InstallerSettings) -> Self {
        Self::at(install_root.join(&settings.toolset_name), settings)
    }

    /// Layout for an existing toolset root.
    pub fn at(root: impl Into<PathBuf>, settings: &InstallerSettings) -> Self {
        Self { root: root.into(), core_dir: settings.core_dir.clone() }
    }

    /// Same layout re-rooted at `root` (used after a drive remap).
    pub fn rebased(&self, root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), core_dir: self.core_dir.clone() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `{root}/core`
    pub fn core(&self) -> PathBuf {
        self.root.join(&self.core_dir)
    }

    /// `{root}/core/python`
    pub fn python_dir(&self) -> PathBuf {
        self.core().join(PYTHON_DIR)
    }

    /// `{root}/core/python/python.exe`
    pub fn python_exe(&self) -> PathBuf {
        self.python_dir().join(format!("python{}", EXE_SUFFIX))
    }

    /// `{root}/core/rez`
    pub fn rez_dir(&self) -> PathBuf {
        self.core().join(REZ_DIR)
    }

    /// `{root}/core/rez/Scripts/rez`
    pub fn rez_bin_dir(&self) -> PathBuf {
        self.rez_dir().join("Scripts").join("rez")
    }

    /// Executable of a rez entry point, e.g. `rez-build`.
    pub fn rez_tool(&self, name: &str) -> PathBuf {
        self.rez_bin_dir().join(format!("{}{}", name, EXE_SUFFIX))
    }

    /// `{root}/core/rez/packages`
    pub fn local_packages_dir(&self) -> PathBuf {
        self.rez_dir().join("packages")
    }

    /// `{root}/core/rez/rezconfig.py`; sits beside the local packages folder.
    pub fn rezconfig_file(&self) -> PathBuf {
        self.rez_dir().join(REZCONFIG_FILE)
    }

    /// `{root}/core/temp_rez`
    pub fn temp_dir(&self) -> PathBuf {
        self.core().join(TEMP_REZ_DIR)
    }

    pub fn launchers_dir(&self) -> PathBuf {
        self.core().join(LAUNCHERS_DIR)
    }

    pub fn launcher_file(&self) -> PathBuf {
        self.launchers_dir().join(LAUNCHER_FILE)
    }

    /// `{root}/redist/RedistributableRez.zip`
    pub fn redist_archive(&self) -> PathBuf {
        self.root.join(REDIST_DIR).join(REDIST_ARCHIVE)
    }

    pub fn core_dir_name(&self) -> &str {
        &self.core_dir
    }
}
