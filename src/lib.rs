//! # Doc Gal
//!
//! A build-time sidebar carousel generator for documentation example galleries.
//! Your documentation tree is the data source: example and tutorial scripts are
//! discovered by filename convention, their RST section titles become captions,
//! and the result is one static HTML fragment the site build drops into its
//! sidebar.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Doc Gal processes the documentation tree in two independent stages, with a
//! JSON manifest as the boundary between them:
//!
//! ```text
//! 1. Scan      doc/      →  manifest.json            (filesystem → entries + titles)
//! 2. Generate  manifest  →  _templates/gallery.html  (carousel fragment)
//! ```
//!
//! This separation exists for the same reasons as any staged build:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Testability**: generation is a pure function from manifest to markup,
//!   so unit tests can exercise rendering without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — discovers gallery scripts under the source roots, extracts their titles, produces the scan manifest |
//! | [`titles`] | RST section title parser — the only fatal validation in the pipeline |
//! | [`rewrite`] | Published-path mapping: source paths → built page URLs and image paths |
//! | [`generate`] | Stage 2 — renders the carousel fragment with Maud and writes it out |
//! | [`config`] | `gallery.toml` loading, validation, and stock defaults |
//! | [`output`] | CLI output formatting — inventory-style display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Entries Are Paired At Extraction Time
//!
//! Each discovered script and its extracted title travel together in one
//! [`scan::GalleryEntry`]. Keeping two parallel lists aligned by position is
//! how this kind of tool usually rots; pairing makes misalignment
//! unrepresentable.
//!
//! ## Fail-Fast On Missing Headings
//!
//! A qualifying script with no recognizable RST heading aborts the whole run
//! before anything is written. A silently empty caption would ship broken
//! markup, so the build stops instead.
//!
//! ## Maud Over Template Engines
//!
//! The carousel fragment is generated with [Maud](https://maud.lambda.xyz/),
//! a compile-time HTML macro system: malformed markup is a build error, and
//! caption interpolation is auto-escaped.
//!
//! ## Seedable Active Selection
//!
//! One carousel item starts out "active". The pick is uniform over all entries
//! and the RNG seed is injectable (`--seed`), so builds that need to be
//! reproducible byte-for-byte can be.

pub mod config;
pub mod generate;
pub mod output;
pub mod rewrite;
pub mod scan;
pub mod titles;

#[cfg(test)]
pub(crate) mod test_helpers;
