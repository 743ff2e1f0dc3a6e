//! A minimal line-oriented archive format bundling named text files.
//!
//! An archive is a free-text comment followed by a sequence of files, each
//! introduced by a `-- NAME --` marker line and running up to the next marker
//! or the end of input. Any input text parses as some archive, so [`parse`]
//! never fails, and formatting a parsed archive reproduces the input once
//! trailing newlines are normalized.

/// An archive: a leading comment plus an ordered list of named files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Archive {
    pub comment: String,
    pub files: Vec<File>,
}

/// A single named file inside an [`Archive`].
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub name: String,
    pub data: String,
}

impl File {
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Serializes the archive into its textual form.
pub fn format(archive: &Archive) -> String {
    let mut out = String::new();
    push_fixed(&mut out, &archive.comment);
    for file in &archive.files {
        out.push_str("-- ");
        out.push_str(&file.name);
        out.push_str(" --\n");
        push_fixed(&mut out, &file.data);
    }
    out
}

// Appends text, adding a trailing newline if one is missing.
fn push_fixed(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.is_empty() && !text.ends_with('\n') {
        out.push('\n');
    }
}

/// Parses archive text. Lines before the first marker form the comment;
/// every later line belongs to the most recent marker's file.
pub fn parse(text: &str) -> Archive {
    let mut archive = Archive::default();
    let mut current: Option<File> = None;

    for line in text.split_inclusive('\n') {
        if let Some(name) = marker_name(line) {
            if let Some(file) = current.take() {
                archive.files.push(file);
            }
            current = Some(File::new(name, ""));
        } else if let Some(file) = current.as_mut() {
            file.data.push_str(line);
        } else {
            archive.comment.push_str(line);
        }
    }
    if let Some(file) = current {
        archive.files.push(file);
    }

    archive
}

// Extracts the file name if `line` is a `-- NAME --` marker.
fn marker_name(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    let name = line.strip_prefix("-- ")?.strip_suffix(" --")?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
