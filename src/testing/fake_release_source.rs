use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{AppError, ReleaseInfo};
use crate::ports::ReleaseSource;

/// Release source serving local files in place of remote downloads.
#[derive(Default)]
pub struct FakeReleaseSource {
    pub release: RefCell<Option<ReleaseInfo>>,
    /// url -> local file served for it
    pub files: RefCell<HashMap<String, PathBuf>>,
    pub requested: RefCell<Vec<String>>,
}

impl FakeReleaseSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_release(self, name: &str, zipball_url: &str) -> Self {
        *self.release.borrow_mut() = Some(ReleaseInfo {
            name: Some(name.to_string()),
            tag_name: Some(name.to_string()),
            zipball_url: zipball_url.to_string(),
        });
        self
    }

    pub fn serve(self, url: &str, file: &Path) -> Self {
        self.files.borrow_mut().insert(url.to_string(), file.to_path_buf());
        self
    }
}

impl ReleaseSource for FakeReleaseSource {
    fn latest_release(&self, listing_url: &Url) -> Result<ReleaseInfo, AppError> {
        self.requested.borrow_mut().push(listing_url.to_string());
        self.release
            .borrow()
            .clone()
            .ok_or_else(|| AppError::Http(format!("{} returned 404: Not Found", listing_url)))
    }

    fn download(&self, url: &str, dest: &Path) -> Result<u64, AppError> {
        self.requested.borrow_mut().push(url.to_string());
        let files = self.files.borrow();
        let source =
            files.get(url).ok_or_else(|| AppError::Http(format!("{} returned 404: Not Found", url)))?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(fs::copy(source, dest)?)
    }
}
