//! Output path resolution.
//!
//! ```text
//! build link          subdir   output path
//! posts/hello/        ""       posts/hello/index.html
//! posts/test.html     "1/"     posts/1/test.html
//! /url/               ""       /url/index.html
//! ```

use std::borrow::Cow;
use std::path::Path;

use super::Permalink;
use crate::utils::path;

/// File name appended to build links ending in `/`.
pub const DEFAULT_FILENAME: &str = "index.html";

impl Permalink {
    /// Output path relative to the output directory, `None` when nothing is written.
    pub fn to_output_path(&self) -> Option<String> {
        let link = self.build_link.as_deref()?;

        let link = if link.ends_with('/') {
            Cow::Owned(format!("{link}{DEFAULT_FILENAME}"))
        } else {
            Cow::Borrowed(link)
        };

        let (dir, base) = path::split_dir_base(&link);
        Some(path::join(&[dir, self.extra_pagination_subdir.as_str(), base]))
    }

    /// Normalized location of the output file inside `output_dir`.
    ///
    /// A leading `/` on the output path does not escape `output_dir`.
    pub fn to_path(&self, output_dir: &Path) -> Option<String> {
        let output = self.to_output_path()?;
        Some(path::normalize(&format!("{}/{output}", output_dir.to_string_lossy())))
    }

    /// Normalized output path, without a trailing slash.
    pub fn to_path_from_root(&self) -> Option<String> {
        self.to_output_path().map(|output| path::normalize(&output))
    }
}
