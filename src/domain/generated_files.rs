//! Files the installer generates from embedded templates.

use serde::Serialize;

/// A generated text artifact and its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratedFile {
    /// `rezconfig.py`
    RezConfig,
    /// `package.py` of the interpreter package.
    PythonPackage,
    /// `rezbuild.py` used by the interpreter package.
    PythonBuildScript,
    /// `test_rez.bat`
    Launcher,
}

impl GeneratedFile {
    pub const ALL: [GeneratedFile; 4] = [
        GeneratedFile::RezConfig,
        GeneratedFile::PythonPackage,
        GeneratedFile::PythonBuildScript,
        GeneratedFile::Launcher,
    ];

    pub fn template_name(self) -> &'static str {
        match self {
            GeneratedFile::RezConfig => "rezconfig.py.j2",
            GeneratedFile::PythonPackage => "package.py.j2",
            GeneratedFile::PythonBuildScript => "rezbuild.py.j2",
            GeneratedFile::Launcher => "test_rez.bat.j2",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            GeneratedFile::RezConfig => "rezconfig.py",
            GeneratedFile::PythonPackage => "package.py",
            GeneratedFile::PythonBuildScript => "rezbuild.py",
            GeneratedFile::Launcher => "test_rez.bat",
        }
    }
}

/// Values substituted into `rezconfig.py`.
#[derive(Debug, Clone, Serialize)]
pub struct RezConfigValues {
    pub local_packages_path: String,
    pub release_packages_path: Option<String>,
}

impl RezConfigValues {
    /// Read the package paths back from an existing `rezconfig.py`.
    ///
    /// Returns `None` when no `local_packages_path` assignment is present.
    pub fn parse(content: &str) -> Option<Self> {
        let mut local = None;
        let mut release = None;
        for line in content.lines() {
            if let Some(value) = assignment(line, "local_packages_path") {
                local = Some(value);
            } else if let Some(value) = assignment(line, "release_packages_path") {
                release = Some(value);
            }
        }
        local.map(|local_packages_path| Self { local_packages_path, release_packages_path: release })
    }
}

/// Value of a `name = r"value"` line.
fn assignment(line: &str, name: &str) -> Option<String> {
    let rest = line.trim().strip_prefix(name)?.trim_start().strip_prefix('=')?.trim();
    let quoted = rest.strip_prefix('r').unwrap_or(rest);
    let value = quoted.strip_prefix('"')?.strip_suffix('"')?;
    Some(value.to_string())
}

/// Values substituted into the interpreter package descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct PythonPackageValues {
    pub version: String,
}

/// Values substituted into the launcher.
#[derive(Debug, Clone, Serialize)]
pub struct LauncherValues {
    pub packages: Vec<String>,
    pub command: String,
}

impl Default for LauncherValues {
    fn default() -> Self {
        Self { packages: vec!["python".to_string()], command: "rez-context".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generated_assignments() {
        let content = concat!(
            "packages_path = [\n",
            "\tr\"T:\\core\\rez\\packages\",\n",
            "]\n",
            "local_packages_path = r\"T:\\core\\rez\\packages\"\n",
            "release_packages_path = r\"\\\\srv\\packages\"\n",
        );
        let values = RezConfigValues::parse(content).unwrap();
        assert_eq!(values.local_packages_path, r"T:\core\rez\packages");
        assert_eq!(values.release_packages_path.as_deref(), Some(r"\\srv\packages"));
    }

    #[test]
    fn ignores_comments_and_packages_path() {
        let content = "#REZ_LOCAL_PACKAGES_PATH\nlocal_packages_path = r\"/t/pkgs\"\n";
        let values = RezConfigValues::parse(content).unwrap();
        assert_eq!(values.local_packages_path, "/t/pkgs");
        assert_eq!(values.release_packages_path, None);
    }

    #[test]
    fn missing_local_assignment_is_none() {
        assert!(RezConfigValues::parse("packages_path = []\n").is_none());
    }
}
