//! Helpers for writing and checking golden-file test fixtures.
//!
//! Fixtures are textual archives whose comment carries a standard
//! copyright/license boilerplate followed by a caller-supplied description.
//! The checker rebuilds the expected header using whatever year the actual
//! header carries, so fixtures generated in past years stay valid while any
//! wording drift still fails with a diff.

use anyhow::Context;
use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use similar::TextDiff;
use std::fs;
use std::path::Path;

use crate::shared::error::ReportError;
use crate::shared::Result;
use crate::txtar;

static COPYRIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Copyright (\d+)").unwrap());

/// Writes a fixture archive to `path`, creating intermediate directories.
///
/// The archive comment is `comment` prefixed with the copyright boilerplate
/// for the current year.
///
/// # Errors
/// Returns [`ReportError::DirCreateError`] or [`ReportError::FileWriteError`]
/// with the offending path if directory creation or the write fails.
pub fn write_txtar(path: &Path, files: Vec<txtar::File>, comment: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::DirCreateError {
            path: parent.to_path_buf(),
            details: e.to_string(),
        })?;
    }

    let archive = txtar::Archive {
        comment: add_boilerplate(current_year(), comment),
        files,
    };

    fs::write(path, txtar::format(&archive)).map_err(|e| ReportError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    Ok(())
}

/// Checks the comment of a generated fixture.
///
/// Verifies that `got` is the header [`write_txtar`] would produce for
/// `want_comment`, allowing any copyright year.
///
/// For testing.
pub fn check_comment(want_comment: &str, got: &str) -> Result<()> {
    let year = find_copyright_year(got)?;
    let want = add_boilerplate(year, want_comment);

    if want != got {
        let diff = TextDiff::from_lines(want.as_str(), got);
        return Err(ReportError::CommentMismatch {
            diff: diff
                .unified_diff()
                .context_radius(3)
                .header("want", "got")
                .to_string(),
        }
        .into());
    }

    Ok(())
}

// Prepends the copyright notice for the given year to the given comment,
// with some additional spacing for readability.
fn add_boilerplate(year: i32, comment: &str) -> String {
    format!(
        "Copyright {} The Go Authors. All rights reserved.\nUse of this source code is governed by a BSD-style\nlicense that can be found in the LICENSE file.\n\n{}\n\n",
        year, comment
    )
}

fn current_year() -> i32 {
    Local::now().year()
}

// Returns the copyright year in this comment, or an error if none is found.
fn find_copyright_year(comment: &str) -> Result<i32> {
    let captures = COPYRIGHT_RE
        .captures(comment)
        .ok_or(ReportError::MissingCopyrightYear)?;
    let year = captures[1]
        .parse::<i32>()
        .context("Failed to parse copyright year")?;
    Ok(year)
}
