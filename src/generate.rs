//! Carousel fragment generation.
//!
//! Stage 2 of the doc-gal build pipeline. Takes the scan manifest and writes
//! the sidebar carousel fragment the site build includes from its template
//! directory.
//!
//! ## Output Structure
//!
//! The fragment is a Bootstrap-style carousel: a fixed wrapper, one item per
//! gallery entry in discovery order, and prev/next controls. Exactly one item
//! is marked active — that is the slide visible when the page loads — and the
//! pick is uniform over all entries:
//!
//! ```text
//! <!-- This file is automatically generated by doc-gal -->
//! <div id="sidebar_example_gallery" class="carousel slide">
//! <div class="carousel-inner">
//! <div class="item">...</div>
//! <div class="active item">...</div>
//! <div class="item">...</div>
//! </div>
//! <a class="carousel-control left" ...>&lsaquo;</a>
//! <a class="carousel-control right" ...>&rsaquo;</a>
//! </div>
//! ```
//!
//! With `--seed` the pick comes from a seeded RNG, making the whole output
//! byte-reproducible. An empty manifest renders the wrapper with no items and
//! no active pick.
//!
//! ## HTML Generation
//!
//! Items are rendered with [maud](https://maud.lambda.xyz/) — type-safe
//! compile-time templates with automatic escaping of captions.

use crate::config::GalleryConfig;
use crate::rewrite;
use crate::scan::{GalleryEntry, Manifest};
use maud::{Markup, html};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One carousel item with its derived published locations.
#[derive(Debug)]
pub struct RenderedItem {
    /// Published page URL (`_build/html/doc/_examples_auto/foo/plot_foo.html`).
    pub url: String,
    /// Published first-figure path (`_build/html/_images/plot_foo_1.png`).
    pub image: String,
    /// Caption text, straight from the entry title.
    pub caption: String,
    /// Whether this item is the initially visible slide.
    pub active: bool,
}

/// The rendered carousel: items in discovery order plus the final document.
#[derive(Debug)]
pub struct Gallery {
    pub items: Vec<RenderedItem>,
    /// Index of the active item; `None` only for an empty gallery.
    pub active_index: Option<usize>,
    pub html: String,
}

const HTML_TOP: &str = "\
<!-- This file is automatically generated by doc-gal -->
<div id=\"sidebar_example_gallery\" class=\"carousel slide\">
<div class=\"carousel-inner\">";

const HTML_BOTTOM: &str = "\
</div>
<a class=\"carousel-control left\" href=\"#sidebar_example_gallery\" data-slide=\"prev\">&lsaquo;</a>
<a class=\"carousel-control right\" href=\"#sidebar_example_gallery\" data-slide=\"next\">&rsaquo;</a>
</div>";

/// Read the scan manifest, render the carousel, and write the fragment to the
/// configured output path under `doc_root`.
///
/// The destination directory is not created here — the template directory
/// belongs to the doc tree, and its absence is a broken tree the caller
/// should hear about.
pub fn generate(
    manifest_path: &Path,
    doc_root: &Path,
    seed: Option<u64>,
) -> Result<(Gallery, PathBuf), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    let gallery = render_gallery(&manifest, seed);

    let out_path = doc_root.join(&manifest.config.publish.output);
    fs::write(&out_path, &gallery.html)?;

    Ok((gallery, out_path))
}

/// Render the carousel from a manifest. Pure — no filesystem access.
pub fn render_gallery(manifest: &Manifest, seed: Option<u64>) -> Gallery {
    let active_index = pick_active(manifest.entries.len(), seed);

    let items: Vec<RenderedItem> = manifest
        .entries
        .iter()
        .enumerate()
        .map(|(ix, entry)| rendered_item(entry, &manifest.config, active_index == Some(ix)))
        .collect();

    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(HTML_TOP.to_string());
    for item in &items {
        lines.push(carousel_item(item).into_string());
    }
    lines.push(HTML_BOTTOM.to_string());

    Gallery {
        items,
        active_index,
        html: lines.join("\n"),
    }
}

/// Pick the initially visible slide: uniform over all entries, seeded when a
/// seed is given. An empty gallery has no pick.
fn pick_active(count: usize, seed: Option<u64>) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let ix = match seed {
        Some(seed) => StdRng::seed_from_u64(seed).random_range(0..count),
        None => rand::rng().random_range(0..count),
    };
    Some(ix)
}

fn rendered_item(entry: &GalleryEntry, config: &GalleryConfig, active: bool) -> RenderedItem {
    // Unknown root (manifest from an older config) degrades to the unrewritten
    // path, same as a prefix mismatch in rewrite.
    let published = match config.roots.iter().find(|r| r.dir == entry.root) {
        Some(root) => rewrite::published_path(&entry.source_path, root, &config.publish),
        None => entry.source_path.clone(),
    };

    RenderedItem {
        url: rewrite::page_url(&published, &config.source_ext, &config.publish.page_ext),
        image: rewrite::image_path(&entry.source_path, &config.source_ext, &config.publish),
        caption: entry.title.clone(),
        active,
    }
}

fn carousel_item(item: &RenderedItem) -> Markup {
    let class = if item.active { "active item" } else { "item" };
    html! {
        div class=(class) {
            a href=(item.url) {
                img src=(item.image);
                div class="carousel-caption" {
                    (item.caption)
                }
            }
        }
    }
}
