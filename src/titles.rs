//! RST section title parsing.
//!
//! Gallery scripts carry their documentation as an RST docstring, and the
//! first section title doubles as the carousel caption. A section title is a
//! non-empty line followed (possibly after blank lines) by an underline made
//! solely of `-` or `=` characters:
//!
//! ```text
//! Example Foo
//! -----------
//! ```
//!
//! The underline length is not checked against the title — any run of one or
//! more adornment characters qualifies. That matches what the documentation
//! build itself accepts in practice.
//!
//! This module is the pipeline's only fatal validation: a qualifying script
//! with no section title aborts the run via [`first_title`].

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TitleError {
    #[error("no RST section title found in {0}")]
    MissingHeading(PathBuf),
}

/// A title line followed by an underline of `-`/`=` characters. Blank lines
/// between title and underline are tolerated, and so are CRLF line endings —
/// scripts authored on Windows must parse the same as LF ones.
static SECTION_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(.+?)\r?\n(?:\r?\n)*[-=]+\r?\n").unwrap());

/// Return all section titles in `text`, in document order.
pub fn section_titles(text: &str) -> Vec<String> {
    SECTION_TITLE
        .captures_iter(text)
        .map(|cap| cap[1].trim_end_matches('\r').to_string())
        .collect()
}

/// Return the first section title in `text`, or fail if there is none.
///
/// `source` is only used for the error message.
pub fn first_title(text: &str, source: &Path) -> Result<String, TitleError> {
    section_titles(text)
        .into_iter()
        .next()
        .ok_or_else(|| TitleError::MissingHeading(source.to_path_buf()))
}
