//! Root-path detection for the page header.

/// Home page path for a deployment prefix: `"/blog"` -> `"/blog/"`, `""` -> `"/"`.
pub fn root_path(path_prefix: &str) -> String {
    format!("{}/", path_prefix.trim_end_matches('/'))
}

/// Whether `current_path` is the site's home page.
///
/// Exact comparison, no normalization: anything that is not literally the
/// root path (including malformed input) is treated as an inner page.
pub fn is_root(current_path: &str, path_prefix: &str) -> bool {
    current_path == root_path(path_prefix)
}
