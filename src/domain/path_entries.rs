//! User `Path` value manipulation.

/// Whether `entry` already appears anywhere in a `;`-separated `Path` value.
///
/// Matching is a substring search after normalizing separators to `/` and
/// ASCII case, so `C:\Tools\rez` is found inside `c:/tools/rez/bin`.
pub fn contains_entry(path_value: &str, entry: &str) -> bool {
    let needle = normalize(entry);
    if needle.is_empty() {
        return true;
    }
    normalize(path_value).contains(&needle)
}

/// Value of `path_value` with `entry` appended, or `None` when already present.
pub fn append_entry(path_value: &str, entry: &str) -> Option<String> {
    if contains_entry(path_value, entry) {
        return None;
    }
    let trimmed = path_value.trim_end_matches(';');
    if trimmed.trim().is_empty() {
        Some(entry.to_string())
    } else {
        Some(format!("{};{}", trimmed, entry))
    }
}

fn normalize(value: &str) -> String {
    value.trim().replace('\\', "/").trim_end_matches('/').to_ascii_lowercase()
}
