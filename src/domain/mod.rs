pub mod drive_letter;
pub mod error;
pub mod generated_files;
pub mod install_step;
pub mod path_entries;
pub mod release;
pub mod settings;
pub mod toolset_layout;

pub use drive_letter::DriveLetter;
pub use error::AppError;
pub use generated_files::{GeneratedFile, LauncherValues, PythonPackageValues, RezConfigValues};
pub use install_step::{InstallReport, InstallStep, StepPolicy, StepWarning};
pub use release::ReleaseInfo;
pub use settings::{InstallerSettings, PythonSettings, RezSettings};
pub use toolset_layout::ToolsetLayout;
