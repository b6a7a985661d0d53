//! Shared test utilities for the doc-gal test suite.
//!
//! Builds throwaway documentation trees in temp directories. Fixtures are
//! constructed programmatically rather than copied from disk — a gallery
//! script is just a docstring with an RST heading, so each test spells out
//! exactly the tree it needs.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = doc_tree();
//! write_script(tmp.path(), "examples/foo/plot_foo.py", "Example Foo");
//!
//! let manifest = scan(tmp.path()).unwrap();
//! assert_eq!(manifest.entries[0].title, "Example Foo");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create an empty doc root with the source roots and the `_templates`
/// destination directory in place.
pub fn doc_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for dir in ["examples", "tutorials", "_templates"] {
        fs::create_dir_all(tmp.path().join(dir)).unwrap();
    }
    tmp
}

/// Write a gallery script at `rel_path` (creating parent directories) whose
/// docstring carries `title` as an RST section heading.
pub fn write_script(doc_root: &Path, rel_path: &str, title: &str) {
    let path = doc_root.join(rel_path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, script_body(title)).unwrap();
}

/// A minimal gallery script: docstring with a dash-underlined heading,
/// followed by token plotting code.
pub fn script_body(title: &str) -> String {
    format!(
        "\"\"\"\n{}\n{}\n\nGenerated test fixture.\n\"\"\"\nimport matplotlib.pyplot as plt\nplt.plot([1, 2, 3])\n",
        title,
        "-".repeat(title.len())
    )
}
