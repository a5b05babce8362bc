//! Request path normalization

const INDEX_SUFFIX: &str = "/index.html";

/// Canonical form of a request path for routing
///
/// Trims surrounding whitespace, maps an empty path to `/`, collapses runs
/// of slashes, and strips a trailing slash and a trailing `/index.html`:
/// `//inventory//` and `/inventory/index.html/` both become `/inventory`,
/// `/index.html/` becomes `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return "/".to_string();
    }

    let mut normalized = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && normalized.ends_with('/') {
            continue;
        }
        normalized.push(c);
    }

    strip_trailing_slash(&mut normalized);
    if normalized.ends_with(INDEX_SUFFIX) {
        normalized.truncate(normalized.len() - INDEX_SUFFIX.len());
        if normalized.is_empty() {
            normalized.push('/');
        }
    }
    strip_trailing_slash(&mut normalized);
    normalized
}

fn strip_trailing_slash(path: &mut String) {
    while path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
}
