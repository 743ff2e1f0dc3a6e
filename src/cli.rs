use clap::Parser;
use std::path::PathBuf;

/// Output formats for canonical report printing.
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'yaml' or 'json'",
                s
            )),
        }
    }
}

/// Parse and validate YAML vulnerability reports
#[derive(Parser, Debug)]
#[command(name = "vuln-report")]
#[command(version)]
#[command(about = "Parse and validate YAML vulnerability reports", long_about = None)]
pub struct Args {
    /// Report files to parse
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Print the parsed reports in canonical form
    #[arg(short, long)]
    pub print: bool,

    /// Output format for --print: yaml or json
    #[arg(short, long, default_value = "yaml")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_yaml() {
        let format = OutputFormat::from_str("yaml").unwrap();
        assert!(matches!(format, OutputFormat::Yaml));

        let format = OutputFormat::from_str("yml").unwrap();
        assert!(matches!(format, OutputFormat::Yaml));
    }

    #[test]
    fn test_output_format_from_str_json() {
        let format = OutputFormat::from_str("json").unwrap();
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        let format = OutputFormat::from_str("YAML").unwrap();
        assert!(matches!(format, OutputFormat::Yaml));

        let format = OutputFormat::from_str("Json").unwrap();
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let result = OutputFormat::from_str("xml");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("xml"));
    }

    #[test]
    fn test_args_parse_files_and_flags() {
        let args = Args::try_parse_from([
            "vuln-report",
            "--print",
            "--format",
            "json",
            "reports/GO-2021-0001.yaml",
        ])
        .unwrap();

        assert_eq!(args.files.len(), 1);
        assert!(args.print);
        assert!(matches!(args.format, OutputFormat::Json));
        assert!(args.output.is_none());
    }

    #[test]
    fn test_args_require_at_least_one_file() {
        let result = Args::try_parse_from(["vuln-report"]);
        assert!(result.is_err());
    }
}
