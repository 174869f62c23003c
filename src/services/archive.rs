//! Zip extraction and packing.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Component, Path};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::domain::AppError;

/// Summary of an extracted archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArchive {
    /// Top-level directory shared by every entry, if there is exactly one.
    pub root_dir: Option<String>,
    pub entries: usize,
}

fn open(archive: &Path) -> Result<ZipArchive<BufReader<File>>, AppError> {
    if !archive.is_file() {
        return Err(AppError::PayloadMissing(archive.display().to_string()));
    }
    let file = File::open(archive)?;
    ZipArchive::new(BufReader::new(file)).map_err(|e| AppError::archive(archive, e))
}

fn shared_root(
    zip: &mut ZipArchive<BufReader<File>>,
    archive: &Path,
) -> Result<Option<String>, AppError> {
    let mut root: Option<String> = None;
    for index in 0..zip.len() {
        let entry = zip.by_index(index).map_err(|e| AppError::archive(archive, e))?;
        let Some(path) = entry.enclosed_name() else {
            return Err(AppError::archive(
                archive,
                format!("entry '{}' escapes the extraction folder", entry.name()),
            ));
        };
        let mut components = path.components();
        let first = match components.next() {
            Some(Component::Normal(first)) => first.to_string_lossy().into_owned(),
            _ => continue,
        };
        // A file at top level means there is no wrapping directory.
        if components.next().is_none() && !entry.is_dir() {
            return Ok(None);
        }
        match &root {
            None => root = Some(first),
            Some(existing) if *existing == first => {}
            Some(_) => return Ok(None),
        }
    }
    Ok(root)
}

/// Extract every entry of `archive` below `dest`, creating `dest` as needed.
pub fn extract_all(archive: &Path, dest: &Path) -> Result<ExtractedArchive, AppError> {
    let mut zip = open(archive)?;
    let root_dir = shared_root(&mut zip, archive)?;
    let entries = zip.len();

    fs::create_dir_all(dest)?;
    zip.extract(dest).map_err(|e| AppError::archive(archive, e))?;
    debug!(archive = %archive.display(), dest = %dest.display(), entries, "extracted archive");

    Ok(ExtractedArchive { root_dir, entries })
}

/// Store every file below `source` into a new archive at `archive`, under `root_name/`.
///
/// Entries are stored uncompressed. Returns the number of files written.
pub fn pack_directory(source: &Path, archive: &Path, root_name: &str) -> Result<usize, AppError> {
    if let Some(parent) = archive.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(archive)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    let mut count = 0;
    let mut pending = vec![source.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let mut children: Vec<_> = fs::read_dir(&dir)?.collect::<Result<_, io::Error>>()?;
        children.sort_by_key(|entry| entry.file_name());

        for child in children {
            let path = child.path();
            // The archive may be written inside the packed tree.
            if path == archive {
                continue;
            }
            let relative = path.strip_prefix(source).map_err(|e| AppError::archive(archive, e))?;
            let name = archive_name(root_name, relative);

            if child.file_type()?.is_dir() {
                writer
                    .add_directory(format!("{}/", name), options)
                    .map_err(|e| AppError::archive(archive, e))?;
                pending.push(path);
            } else {
                let large = child.metadata()?.len() >= u64::from(u32::MAX);
                writer
                    .start_file(name, options.large_file(large))
                    .map_err(|e| AppError::archive(archive, e))?;
                io::copy(&mut File::open(&path)?, &mut writer)?;
                count += 1;
            }
        }
    }

    writer.finish().map_err(|e| AppError::archive(archive, e))?;
    Ok(count)
}

fn archive_name(root_name: &str, relative: &Path) -> String {
    let mut parts = vec![root_name.to_string()];
    parts.extend(relative.components().map(|c| c.as_os_str().to_string_lossy().into_owned()));
    parts.join("/")
}
