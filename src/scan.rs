//! Filesystem scanning and manifest generation.
//!
//! Stage 1 of the doc-gal build pipeline. Discovers gallery scripts under the
//! configured source roots, extracts their RST section titles, and produces a
//! structured manifest that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! Doc Gal expects the conventional documentation layout:
//!
//! ```text
//! doc/                             # Doc root
//! ├── gallery.toml                 # Gallery configuration (optional)
//! ├── examples/                    # Source root (scanned first)
//! │   ├── foo/
//! │   │   ├── plot_foo.py          # Qualifies: marker + extension
//! │   │   └── helpers.py           # Ignored: no marker
//! │   └── bar/
//! │       └── plot_bar.py
//! ├── tutorials/                   # Source root (scanned second)
//! │   └── intro/
//! │       └── plot_intro.py
//! ├── _build/html/                 # Site build output (not scanned)
//! └── _templates/                  # Carousel fragment destination
//! ```
//!
//! Scripts qualify when they sit in an *immediate* subdirectory of a source
//! root and their filename contains the marker and carries the source
//! extension. Deeper nesting and files directly under a root are ignored,
//! matching the layout the site build itself consumes.
//!
//! ## Ordering
//!
//! Roots are scanned in config order (examples before tutorials); within a
//! root, discovery is sorted by file name so repeated scans of the same tree
//! produce identical manifests.
//!
//! ## Validation
//!
//! Every qualifying script must contain at least one RST section title. A
//! script without one aborts the scan — a caption-less carousel item would
//! ship broken markup, so the build fails before anything is written. Zero
//! qualifying scripts is not an error.

use crate::config::{self, GalleryConfig, SourceRoot};
use crate::titles::{self, TitleError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Title(#[from] TitleError),
}

/// Manifest output from the scan stage, serialized to JSON between stages.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub entries: Vec<GalleryEntry>,
    pub config: GalleryConfig,
}

/// One discovered gallery script paired with its caption.
///
/// Path and title travel together from the moment of extraction; there are no
/// parallel lists to keep aligned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntry {
    /// Doc-root-relative source path, forward slashes (`examples/foo/plot_foo.py`).
    pub source_path: String,
    /// Source root directory this entry was discovered under.
    pub root: String,
    /// Caption: the script's first RST section title.
    pub title: String,
}

/// Scan the doc root into a manifest: discover scripts under each source
/// root in order, extract a title for each.
pub fn scan(doc_root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(doc_root)?;

    let mut entries = Vec::new();
    for root in &config.roots {
        for source_path in discover(doc_root, root, &config)? {
            let text = fs::read_to_string(doc_root.join(&source_path))?;
            let title = titles::first_title(&text, Path::new(&source_path))?;
            entries.push(GalleryEntry {
                source_path,
                root: root.dir.clone(),
                title,
            });
        }
    }

    Ok(Manifest { entries, config })
}

/// Discover qualifying scripts in immediate subdirectories of one source
/// root. A missing root directory yields an empty list, not an error.
fn discover(
    doc_root: &Path,
    root: &SourceRoot,
    config: &GalleryConfig,
) -> Result<Vec<String>, ScanError> {
    let root_dir = doc_root.join(&root.dir);
    if !root_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(&root_dir)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !qualifies(&name, config) {
            continue;
        }
        let rel = entry.path().strip_prefix(doc_root).unwrap();
        found.push(rel.to_string_lossy().replace('\\', "/"));
    }
    Ok(found)
}

/// A filename qualifies when its stem contains the marker and it carries the
/// source extension.
fn qualifies(name: &str, config: &GalleryConfig) -> bool {
    match name.strip_suffix(&format!(".{}", config.source_ext)) {
        Some(stem) => stem.contains(&config.marker),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{doc_tree, write_script};
    use crate::titles::TitleError;
    use tempfile::TempDir;

    #[test]
    fn scan_finds_scripts_in_both_roots() {
        let tmp = doc_tree();
        write_script(tmp.path(), "examples/foo/plot_foo.py", "Example Foo");
        write_script(tmp.path(), "tutorials/intro/plot_intro.py", "Intro");

        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(manifest.entries.len(), 2);
    }

    #[test]
    fn examples_scanned_before_tutorials() {
        let tmp = doc_tree();
        write_script(tmp.path(), "tutorials/zeta/plot_z.py", "Zeta");
        write_script(tmp.path(), "examples/alpha/plot_a.py", "Alpha");

        let manifest = scan(tmp.path()).unwrap();
        let roots: Vec<&str> = manifest.entries.iter().map(|e| e.root.as_str()).collect();
        assert_eq!(roots, vec!["examples", "tutorials"]);
    }

    #[test]
    fn entries_pair_path_with_title() {
        let tmp = doc_tree();
        write_script(tmp.path(), "examples/foo/plot_foo.py", "Example Foo");

        let manifest = scan(tmp.path()).unwrap();
        let entry = &manifest.entries[0];
        assert_eq!(entry.source_path, "examples/foo/plot_foo.py");
        assert_eq!(entry.title, "Example Foo");
        assert_eq!(entry.root, "examples");
    }

    #[test]
    fn discovery_sorted_within_root() {
        let tmp = doc_tree();
        write_script(tmp.path(), "examples/b/plot_b.py", "B");
        write_script(tmp.path(), "examples/a/plot_a.py", "A");
        write_script(tmp.path(), "examples/a/plot_c.py", "C");

        let manifest = scan(tmp.path()).unwrap();
        let paths: Vec<&str> = manifest
            .entries
            .iter()
            .map(|e| e.source_path.as_str())
            .collect();
        assert_eq!(
            paths,
            vec![
                "examples/a/plot_a.py",
                "examples/a/plot_c.py",
                "examples/b/plot_b.py"
            ]
        );
    }

    #[test]
    fn files_without_marker_ignored() {
        let tmp = doc_tree();
        write_script(tmp.path(), "examples/foo/plot_foo.py", "Example Foo");
        write_script(tmp.path(), "examples/foo/helpers.py", "Helpers");

        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(manifest.entries.len(), 1);
    }

    #[test]
    fn files_with_wrong_extension_ignored() {
        let tmp = doc_tree();
        write_script(tmp.path(), "examples/foo/plot_foo.rst", "Not A Script");

        let manifest = scan(tmp.path()).unwrap();
        assert!(manifest.entries.is_empty());
    }

    #[test]
    fn marker_must_be_in_stem_not_extension() {
        assert!(qualifies("plot_foo.py", &GalleryConfig::default()));
        assert!(!qualifies("foo.py", &GalleryConfig::default()));
        assert!(!qualifies("plot_foo.pyc", &GalleryConfig::default()));
    }

    #[test]
    fn files_directly_under_root_ignored() {
        let tmp = doc_tree();
        write_script(tmp.path(), "examples/plot_stray.py", "Stray");
        write_script(tmp.path(), "examples/foo/plot_foo.py", "Example Foo");

        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(manifest.entries.len(), 1);
        assert_eq!(manifest.entries[0].source_path, "examples/foo/plot_foo.py");
    }

    #[test]
    fn deeply_nested_files_ignored() {
        let tmp = doc_tree();
        write_script(tmp.path(), "examples/foo/deep/plot_deep.py", "Deep");

        let manifest = scan(tmp.path()).unwrap();
        assert!(manifest.entries.is_empty());
    }

    #[test]
    fn missing_roots_yield_empty_manifest() {
        let tmp = TempDir::new().unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert!(manifest.entries.is_empty());
    }

    #[test]
    fn script_without_heading_is_fatal() {
        let tmp = doc_tree();
        write_script(tmp.path(), "examples/ok/plot_ok.py", "Fine");
        std::fs::create_dir_all(tmp.path().join("examples/bad")).unwrap();
        std::fs::write(
            tmp.path().join("examples/bad/plot_bad.py"),
            "import foo\n# no docstring heading\n",
        )
        .unwrap();

        let result = scan(tmp.path());
        assert!(matches!(
            result,
            Err(ScanError::Title(TitleError::MissingHeading(_)))
        ));
    }

    #[test]
    fn crlf_authored_script_scans_cleanly() {
        let tmp = doc_tree();
        std::fs::create_dir_all(tmp.path().join("examples/win")).unwrap();
        std::fs::write(
            tmp.path().join("examples/win/plot_win.py"),
            "\"\"\"\r\nWindows Example\r\n---------------\r\n\r\nBody.\r\n\"\"\"\r\nimport matplotlib.pyplot as plt\r\n",
        )
        .unwrap();

        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(manifest.entries.len(), 1);
        assert_eq!(manifest.entries[0].title, "Windows Example");
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let tmp = doc_tree();
        write_script(tmp.path(), "examples/foo/plot_foo.py", "Example Foo");

        let manifest = scan(tmp.path()).unwrap();
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let back: Manifest = serde_json::from_str(&json).unwrap();

        assert_eq!(back.entries.len(), 1);
        assert_eq!(back.entries[0].title, "Example Foo");
        assert_eq!(back.config.marker, manifest.config.marker);
    }
}
