//! Conventional build links for pages without an authored permalink.
//!
//! ```text
//! dir          stem        ext    build link
//! .            index       html   ./index.html
//! .            test        html   ./test/index.html
//! component/   component   html   component//index.html   (duplicate folder)
//! .            test        css    ./test.css
//! ```

use super::Permalink;

const HTML_EXTENSION: &str = "html";

impl Permalink {
    /// Build the conventional permalink for `dir/filename_no_ext`.
    ///
    /// HTML pages get pretty URLs (`test/index.html`) unless the file is
    /// already an index or `dir` already ends in a folder named like the
    /// file. Other extensions stay flat. `file_extension` defaults to `html`.
    pub fn generate(
        dir: &str,
        filename_no_ext: &str,
        extra_subdir: Option<&str>,
        suffix: Option<&str>,
        file_extension: Option<&str>,
    ) -> Self {
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };
        let suffix = suffix.unwrap_or_default();
        let extension = file_extension.unwrap_or(HTML_EXTENSION);

        let link = if extension == HTML_EXTENSION {
            if filename_no_ext == "index" || Self::has_duplicate_folder(dir, filename_no_ext) {
                format!("{prefix}index{suffix}.html")
            } else {
                format!("{prefix}{filename_no_ext}/index{suffix}.html")
            }
        } else {
            format!("{prefix}{filename_no_ext}{suffix}.{extension}")
        };

        Self::from_build_link(Some(link), extra_subdir)
    }

    /// Whether the last folder of `dir` is named `base`.
    pub fn has_duplicate_folder(dir: &str, base: &str) -> bool {
        let mut folders: Vec<&str> = dir.split('/').collect();
        if folders.last().is_some_and(|last| last.is_empty()) {
            folders.pop();
        }
        folders.last().is_some_and(|last| *last == base)
    }
}
