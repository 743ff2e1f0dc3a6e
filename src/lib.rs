//! vuln-report - tooling for YAML vulnerability reports
//!
//! This library parses hand-authored YAML vulnerability reports into
//! structured records, and writes textual-archive golden files for tests.
//! Report parsing is strict: unknown fields are rejected, so schema drift in
//! report files surfaces at the boundary rather than being silently dropped.
//!
//! # Example
//!
//! ```no_run
//! use vuln_report::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let report = read_report(Path::new("reports/GO-2021-0113.yaml"))?;
//! println!("{} affects {}", report.cves.join(", "), report.module);
//! # Ok(())
//! # }
//! ```

pub mod fixture;
pub mod report;
pub mod shared;
pub mod txtar;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixture::{check_comment, write_txtar};
    pub use crate::report::{
        read_report, to_json, to_yaml, Additional, CveMeta, Links, Report, VersionRange,
    };
    pub use crate::shared::error::ReportError;
    pub use crate::shared::Result;
    pub use crate::txtar::{Archive, File};
}
