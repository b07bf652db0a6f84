//! Forward-slash path helpers for output paths.
//!
//! Output paths are always `/`-separated regardless of platform; the file
//! writer joins them onto the output directory.

/// Join `parts` with `/` and normalize the result.
///
/// Empty parts are skipped, so an empty pagination subdir leaves no `//`.
pub fn join(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");
    normalize(&joined)
}

/// Normalize a `/`-separated path.
///
/// - `.` segments and empty segments (`//`) are dropped
/// - `..` removes the preceding segment (kept when there is none on a relative path)
/// - leading `/` is preserved, trailing `/` is removed
/// - an empty relative result becomes `.`
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Split at the last `/` into (directory, file name).
///
/// `/index.html` -> (`/`, `index.html`), `index.html` -> (``, `index.html`)
pub fn split_dir_base(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(0) => ("/", &path[1..]),
        Some(pos) => (&path[..pos], &path[pos + 1..]),
        None => ("", path),
    }
}
