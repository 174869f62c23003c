use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Write a zip archive at `path` holding `(name, content)` entries.
pub fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

/// WinPython-style archive: everything below a `python/` folder.
pub fn write_winpython_zip(path: &Path) {
    write_zip(path, &[("python/python.exe", "MZ"), ("python/Lib/os.py", "")]);
}

/// Rez source archive with a single wrapping folder, like a GitHub zipball.
pub fn write_rez_zip(path: &Path, root: &str) {
    let install = format!("{}/install.py", root);
    let setup = format!("{}/src/rez/__init__.py", root);
    write_zip(path, &[(install.as_str(), "print('install')"), (setup.as_str(), "")]);
}
