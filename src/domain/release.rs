use serde::Deserialize;

/// Release metadata from the release listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseInfo {
    /// Human-readable release name (e.g. `3.2.1`).
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
    /// Source archive of the release.
    pub zipball_url: String,
}

impl ReleaseInfo {
    /// Best label for log lines: name, then tag.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.tag_name.as_deref())
            .unwrap_or("unknown")
    }
}
