//! Published-path mapping.
//!
//! The carousel links to the *published* site, not to the source tree. The
//! site build renders each source root into its own output directory and drops
//! each script's first generated figure into a shared images directory:
//!
//! ```text
//! examples/foo/plot_foo.py
//!   page:  _build/html/doc/_examples_auto/foo/plot_foo.html
//!   image: _build/html/_images/plot_foo_1.png
//! ```
//!
//! All paths are doc-root-relative strings with forward slashes, exactly as
//! they appear in the manifest.
//!
//! Prefix replacement is deliberately forgiving: a path that doesn't start
//! with the root's directory is passed through unchanged. The site build owns
//! the published layout; a stale path here degrades to a dead link, not a
//! broken build.

use crate::config::{PublishConfig, SourceRoot};

/// Map a source path under `root` to its published location.
///
/// `examples/foo/plot_foo.py` → `_build/html/doc/_examples_auto/foo/plot_foo.py`.
/// No-op when the path doesn't start with the root directory.
pub fn published_path(source_path: &str, root: &SourceRoot, publish: &PublishConfig) -> String {
    match source_path.strip_prefix(&format!("{}/", root.dir)) {
        Some(rest) => format!("{}/{}/{}", publish.pages_dir, root.published, rest),
        None => source_path.to_string(),
    }
}

/// Derive the published page URL: the published path with the source
/// extension replaced by the page extension.
pub fn page_url(published: &str, source_ext: &str, page_ext: &str) -> String {
    let (dir, name) = split_dir_name(published);
    let page_name = match name.strip_suffix(&format!(".{source_ext}")) {
        Some(stem) => format!("{stem}.{page_ext}"),
        None => name.to_string(),
    };
    join_dir_name(dir, &page_name)
}

/// Derive the published first-figure path: images dir + script stem + the
/// image suffix + `.png`.
pub fn image_path(source_path: &str, source_ext: &str, publish: &PublishConfig) -> String {
    let (_, name) = split_dir_name(source_path);
    let stem = name
        .strip_suffix(&format!(".{source_ext}"))
        .unwrap_or(name);
    format!(
        "{}/{}{}.png",
        publish.images_dir, stem, publish.image_suffix
    )
}

fn split_dir_name(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((dir, name)) => (dir, name),
        None => ("", path),
    }
}

fn join_dir_name(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
