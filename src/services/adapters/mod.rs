pub mod github_release_client;
pub mod process_command;
pub mod registry_environment;
pub mod subst_drive_mapper;

pub use github_release_client::HttpReleaseClient;
pub use process_command::CommandProcessRunner;
pub use registry_environment::RegistryEnvironment;
pub use subst_drive_mapper::SubstDriveMapper;
