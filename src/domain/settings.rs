//! Installer settings (`rezgo.toml`).

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Top-level installer settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerSettings {
    /// Name of the whole toolset; used for the root folder and the toolset env var.
    #[serde(default = "default_toolset_name")]
    pub toolset_name: String,
    /// Folder below the toolset root holding interpreter and rez.
    #[serde(default = "default_core_dir")]
    pub core_dir: String,
    /// Bundled payload folder, relative to the executable directory unless absolute.
    #[serde(default = "default_payload_dir")]
    pub payload_dir: String,
    /// Release packages path used when none is given on the command line.
    /// An empty string disables the fallback.
    #[serde(default = "default_release_path")]
    pub default_release_path: String,
    #[serde(default)]
    pub python: PythonSettings,
    #[serde(default)]
    pub rez: RezSettings,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            toolset_name: default_toolset_name(),
            core_dir: default_core_dir(),
            payload_dir: default_payload_dir(),
            default_release_path: default_release_path(),
            python: PythonSettings::default(),
            rez: RezSettings::default(),
        }
    }
}

/// Portable interpreter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PythonSettings {
    /// Interpreter version; also the version of the generated `python` package.
    #[serde(default = "default_python_version")]
    pub version: String,
    /// Bundled interpreter archive file name inside the payload folder.
    #[serde(default = "default_python_archive")]
    pub archive: String,
    /// Base URL of the embeddable distribution downloads.
    #[serde(default = "default_python_download_base")]
    pub download_base: Url,
}

impl Default for PythonSettings {
    fn default() -> Self {
        Self {
            version: default_python_version(),
            archive: default_python_archive(),
            download_base: default_python_download_base(),
        }
    }
}

impl PythonSettings {
    /// URL of the embeddable amd64 distribution for the configured version.
    pub fn download_url(&self) -> Result<Url, AppError> {
        let file = format!("{}/python-{}-embed-amd64.zip", self.version, self.version);
        self.download_base.join(&file).map_err(|e| {
            AppError::config_error(format!("Invalid interpreter download URL: {}", e))
        })
    }
}

/// Rez payload settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RezSettings {
    /// Bundled rez source archive file name inside the payload folder.
    #[serde(default = "default_rez_archive")]
    pub archive: String,
    /// Release listing endpoint returning the latest release metadata.
    #[serde(default = "default_latest_release_url")]
    pub latest_release_url: Url,
}

impl Default for RezSettings {
    fn default() -> Self {
        Self { archive: default_rez_archive(), latest_release_url: default_latest_release_url() }
    }
}

impl InstallerSettings {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.toolset_name.trim().is_empty() {
            return Err(AppError::config_error("toolset_name must not be empty"));
        }
        if self.core_dir.trim().is_empty() {
            return Err(AppError::config_error("core_dir must not be empty"));
        }
        if self.python.version.split('.').count() < 2 {
            return Err(AppError::config_error(format!(
                "python.version '{}' is not a dotted version",
                self.python.version
            )));
        }
        Ok(())
    }

    /// Fallback release packages path, if any.
    pub fn fallback_release_path(&self) -> Option<&str> {
        let path = self.default_release_path.trim();
        if path.is_empty() { None } else { Some(path) }
    }

    /// Name of the persisted env var naming the toolset root (`UTGTOOLS`).
    pub fn toolset_env_var(&self) -> String {
        self.toolset_name.to_uppercase()
    }

    /// Registry value name of the startup remap command.
    pub fn remap_value_name(&self) -> String {
        format!("Map_{}_unit", self.toolset_name)
    }
}

fn default_toolset_name() -> String {
    "utgtools".to_string()
}

fn default_core_dir() -> String {
    "core".to_string()
}

fn default_payload_dir() -> String {
    "payload".to_string()
}

fn default_release_path() -> String {
    r"\\foofa\utgtools\.rez\packages".to_string()
}

fn default_python_version() -> String {
    "3.9.5".to_string()
}

fn default_python_archive() -> String {
    "winpython_395.zip".to_string()
}

fn default_python_download_base() -> Url {
    Url::parse("https://www.python.org/ftp/python/").expect("Default download URL must be valid")
}

fn default_rez_archive() -> String {
    "rez.zip".to_string()
}

fn default_latest_release_url() -> Url {
    Url::parse("https://api.github.com/repos/AcademySoftwareFoundation/rez/releases/latest")
        .expect("Default release URL must be valid")
}
