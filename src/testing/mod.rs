mod fake_drive_mapper;
mod fake_release_source;
mod memory_environment;
mod recording_process_runner;
mod zip_fixtures;

pub use fake_drive_mapper::FakeDriveMapper;
pub use fake_release_source::FakeReleaseSource;
pub use memory_environment::MemoryEnvironment;
pub use recording_process_runner::RecordingProcessRunner;
pub use zip_fixtures::{write_rez_zip, write_winpython_zip, write_zip};
