//! Vulnerability report data model and YAML loading.
//!
//! Report files are hand-authored YAML documents, one per vulnerability
//! disclosure. Parsing is strict: a key that is not part of the schema is a
//! hard error, so typos and schema drift are caught at the boundary instead
//! of being silently dropped.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::shared::error::ReportError;
use crate::shared::Result;

/// A range of affected module versions.
///
/// An open end means "from the first version" or "not fixed yet".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduced: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<String>,
}

/// An additional package affected by the same vulnerability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Additional {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub module: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symbols: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionRange>,
}

/// Reference URLs for a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Links {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pr: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub commit: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
}

impl Links {
    fn is_empty(&self) -> bool {
        self.pr.is_empty() && self.commit.is_empty() && self.context.is_empty()
    }
}

/// CVE information for a CVE ID assigned by this database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CveMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cwe: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A single vulnerability disclosure record.
///
/// Every field is optional in the YAML source; absent fields deserialize to
/// their zero value. Serialization skips zero values, so a report survives a
/// read/write round trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Report {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub module: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub do_not_export: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_packages: Vec<Additional>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionRange>,

    /// The CVE description from an existing CVE. For a CVE ID assigned by
    /// this database, use `cve_metadata.description` instead.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawn: Option<DateTime<Utc>>,

    /// IDs of existing CVEs covering this vulnerability. Use either `cves`
    /// or `cve_metadata`, not both.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cves: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub credit: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symbols: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub os: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arch: Vec<String>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,

    /// CVE information for a CVE ID assigned by this database. If a CVE
    /// already exists for the issue, fill in `cves` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve_metadata: Option<CveMeta>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Reads a [`Report`] from a YAML file.
///
/// # Errors
/// Returns [`ReportError::FileReadError`] if the file cannot be read, and
/// [`ReportError::ParseError`] if the YAML is malformed or contains a field
/// that is not part of the report schema. Both carry the offending path, so
/// a log line alone identifies which file failed and at what stage.
pub fn read_report(path: &Path) -> Result<Report> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let report: Report = serde_yaml_ng::from_str(&content).map_err(|e| ReportError::ParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    Ok(report)
}

/// Serializes a report to canonical YAML, using the same field names the
/// loader accepts.
pub fn to_yaml(report: &Report) -> Result<String> {
    serde_yaml_ng::to_string(report).context("Failed to serialize report as YAML")
}

/// Serializes a report to pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report as JSON")
}
