//! Release metadata and download port.

use std::path::Path;

use url::Url;

use crate::domain::{AppError, ReleaseInfo};

pub trait ReleaseSource {
    /// Metadata of the latest published release at `listing_url`.
    fn latest_release(&self, listing_url: &Url) -> Result<ReleaseInfo, AppError>;

    /// Download `url` into the file `dest`, replacing it.
    fn download(&self, url: &str, dest: &Path) -> Result<u64, AppError>;
}
