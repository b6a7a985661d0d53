//! Gallery configuration module.
//!
//! Handles loading and validating `gallery.toml`. Configuration lives in the
//! documentation root; stock defaults match the conventional Sphinx layout, so
//! most trees need no config file at all.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! marker = "plot"       # Scripts qualify when their filename contains this
//! source_ext = "py"     # ...and carry this extension
//!
//! # Source roots, scanned in order. Scripts are matched in any immediate
//! # subdirectory of each root. `published` is the directory the site build
//! # renders that root into, relative to publish.pages_dir.
//! [[roots]]
//! dir = "examples"
//! published = "_examples_auto"
//!
//! [[roots]]
//! dir = "tutorials"
//! published = "_tutorials_auto"
//!
//! [publish]
//! pages_dir = "_build/html/doc"      # Rendered pages land here
//! images_dir = "_build/html/_images" # Generated figures land here
//! page_ext = "html"                  # Script extension becomes this in URLs
//! image_suffix = "_1"                # First-figure suffix: plot_foo.py → plot_foo_1.png
//! output = "_templates/gallery.html" # Where the carousel fragment is written
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `gallery.toml`.
///
/// All fields have defaults matching the conventional documentation layout.
/// User config files need only specify the values they want to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Filename marker — scripts qualify when their name contains this.
    pub marker: String,
    /// Source file extension (without the dot).
    pub source_ext: String,
    /// Source roots, scanned in order.
    pub roots: Vec<SourceRoot>,
    /// Published-output layout.
    pub publish: PublishConfig,
}

/// One source root and the directory the site build publishes it into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceRoot {
    /// Directory under the doc root (e.g. `examples`).
    pub dir: String,
    /// Published directory name under `publish.pages_dir` (e.g. `_examples_auto`).
    pub published: String,
}

/// Where the site build puts rendered pages and figures, and where the
/// carousel fragment goes. All paths are relative to the doc root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    pub pages_dir: String,
    pub images_dir: String,
    /// Extension the source extension is replaced with for page URLs.
    pub page_ext: String,
    /// Suffix appended to the script stem for its first generated figure.
    pub image_suffix: String,
    /// Output path for the carousel fragment.
    pub output: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            marker: "plot".to_string(),
            source_ext: "py".to_string(),
            roots: vec![
                SourceRoot {
                    dir: "examples".to_string(),
                    published: "_examples_auto".to_string(),
                },
                SourceRoot {
                    dir: "tutorials".to_string(),
                    published: "_tutorials_auto".to_string(),
                },
            ],
            publish: PublishConfig::default(),
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            pages_dir: "_build/html/doc".to_string(),
            images_dir: "_build/html/_images".to_string(),
            page_ext: "html".to_string(),
            image_suffix: "_1".to_string(),
            output: "_templates/gallery.html".to_string(),
        }
    }
}

const CONFIG_FILENAME: &str = "gallery.toml";

/// Load `gallery.toml` from the doc root, falling back to stock defaults
/// if the file doesn't exist.
pub fn load_config(doc_root: &Path) -> Result<GalleryConfig, ConfigError> {
    let config_path = doc_root.join(CONFIG_FILENAME);
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        GalleryConfig::default()
    };
    validate(&config)?;
    Ok(config)
}

fn validate(config: &GalleryConfig) -> Result<(), ConfigError> {
    if config.roots.is_empty() {
        return Err(ConfigError::Validation(
            "at least one source root is required".to_string(),
        ));
    }
    if config.marker.is_empty() {
        return Err(ConfigError::Validation(
            "marker must not be empty".to_string(),
        ));
    }
    for ext in [&config.source_ext, &config.publish.page_ext] {
        if ext.is_empty() || ext.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "extension '{ext}' must be non-empty and written without a leading dot"
            )));
        }
    }
    if config.publish.output.is_empty() {
        return Err(ConfigError::Validation(
            "publish.output must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Return a fully documented stock `gallery.toml` for the `gen-config` command.
pub fn stock_config_toml() -> &'static str {
    r#"# Doc Gal configuration. All options are optional - the values below are
# the stock defaults, matching the conventional Sphinx documentation layout.
# Place this file in your documentation root as gallery.toml.

# Scripts qualify when their filename contains the marker and carries the
# source extension, in any immediate subdirectory of a source root.
marker = "plot"
source_ext = "py"

# Source roots, scanned in order. `published` is the directory the site
# build renders that root into, relative to publish.pages_dir.
[[roots]]
dir = "examples"
published = "_examples_auto"

[[roots]]
dir = "tutorials"
published = "_tutorials_auto"

[publish]
pages_dir = "_build/html/doc"      # Rendered pages land here
images_dir = "_build/html/_images" # Generated figures land here
page_ext = "html"                  # Script extension becomes this in URLs
image_suffix = "_1"                # First-figure suffix: plot_foo.py -> plot_foo_1.png
output = "_templates/gallery.html" # Where the carousel fragment is written
"#
}
