//! Zip fixtures for CLI tests.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Write a zip archive at `path` holding `(name, content)` entries.
pub(crate) fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create archive parent directory");
    }
    let file = File::create(path).expect("Failed to create archive");
    let mut writer = ZipWriter::new(file);
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).expect("Failed to start entry");
        writer.write_all(content.as_bytes()).expect("Failed to write entry");
    }
    writer.finish().expect("Failed to finish archive");
}
