//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entry is its semantic identity — positional index and caption —
//! with filesystem paths shown as secondary context via indented `Source:`
//! lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Gallery entries
//! 001 Example Foo
//!     Source: examples/foo/plot_foo.py
//! 002 Intro
//!     Source: tutorials/intro/plot_intro.py
//!
//! 2 entries (1 from examples, 1 from tutorials)
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 Example Foo → _build/html/doc/_examples_auto/foo/plot_foo.html
//! 002 Intro → _build/html/doc/_tutorials_auto/intro/plot_intro.html  [active]
//!
//! Active: Intro
//! Gallery written to _templates/gallery.html (2 items)
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure — no I/O, no side effects.

use crate::generate::Gallery;
use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output: the discovered entry inventory plus a per-root
/// summary line.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Gallery entries".to_string());
    for (i, entry) in manifest.entries.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), entry.title));
        lines.push(format!("    Source: {}", entry.source_path));
    }

    lines.push(String::new());
    let per_root: Vec<String> = manifest
        .config
        .roots
        .iter()
        .map(|root| {
            let n = manifest.entries.iter().filter(|e| e.root == root.dir).count();
            format!("{} from {}", n, root.dir)
        })
        .collect();
    let noun = if manifest.entries.len() == 1 {
        "entry"
    } else {
        "entries"
    };
    lines.push(format!(
        "{} {} ({})",
        manifest.entries.len(),
        noun,
        per_root.join(", ")
    ));

    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output: one `caption → page` line per item, the
/// active pick, and where the fragment was written.
pub fn format_generate_output(gallery: &Gallery, out_path: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, item) in gallery.items.iter().enumerate() {
        let marker = if item.active { "  [active]" } else { "" };
        lines.push(format!(
            "{} {} → {}{}",
            format_index(i + 1),
            item.caption,
            item.url,
            marker
        ));
    }

    lines.push(String::new());
    match gallery.active_index {
        Some(ix) => lines.push(format!("Active: {}", gallery.items[ix].caption)),
        None => lines.push("No entries - wrote an empty carousel".to_string()),
    }
    let noun = if gallery.items.len() == 1 {
        "item"
    } else {
        "items"
    };
    lines.push(format!(
        "Gallery written to {} ({} {})",
        out_path.display(),
        gallery.items.len(),
        noun
    ));

    lines
}

pub fn print_generate_output(gallery: &Gallery, out_path: &Path) {
    for line in format_generate_output(gallery, out_path) {
        println!("{}", line);
    }
}
