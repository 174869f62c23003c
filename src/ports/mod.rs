mod drive_mapper;
mod environment_store;
mod process_runner;
mod release_source;

pub use drive_mapper::DriveMapper;
pub use environment_store::EnvironmentStore;
pub use process_runner::{CommandSpec, ProcessRunner, ProcessStatus};
pub use release_source::ReleaseSource;
