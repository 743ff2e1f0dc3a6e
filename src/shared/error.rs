use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every report file parsed cleanly
    Success = 0,
    /// One or more report files failed strict parsing
    InvalidReports = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (output write failure, internal error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidReports => write!(f, "Invalid Reports (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for report and fixture handling.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read file: {path}\nDetails: {details}")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse report: {path}\nDetails: {details}\n\n💡 Hint: report files are strict YAML; check field names against the report schema")]
    ParseError { path: PathBuf, details: String },

    #[error("Failed to create directory: {path}\nDetails: {details}")]
    DirCreateError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}")]
    FileWriteError { path: PathBuf, details: String },

    /// A fixture header with no `Copyright <year>` line.
    #[error("comment does not contain a copyright year")]
    MissingCopyrightYear,

    /// A fixture header whose text drifted from the expected form.
    #[error("comment mismatch (-want, +got):\n{diff}")]
    CommentMismatch { diff: String },
}
