mod cli;

use cli::{Args, OutputFormat};
use std::fs;
use std::io::{self, Write};
use std::process;

use vuln_report::report::{read_report, to_json, to_yaml, Report};
use vuln_report::shared::error::{ExitCode, ReportError};
use vuln_report::shared::Result;

fn main() {
    let args = Args::parse_args();

    match run(&args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut reports = Vec::new();
    let mut failures = 0usize;

    for path in &args.files {
        match read_report(path) {
            Ok(report) => reports.push(report),
            Err(e) => {
                failures += 1;
                eprintln!("❌ {}: {}", path.display(), e);
            }
        }
    }

    if args.print && !reports.is_empty() {
        let rendered = render(&reports, args.format)?;
        present(&rendered, args)?;
    }

    if failures > 0 {
        eprintln!(
            "{} of {} report files failed validation",
            failures,
            args.files.len()
        );
        return Ok(ExitCode::InvalidReports);
    }

    Ok(ExitCode::Success)
}

fn render(reports: &[Report], format: OutputFormat) -> Result<String> {
    let mut rendered = String::new();
    for (i, report) in reports.iter().enumerate() {
        match format {
            OutputFormat::Yaml => {
                if i > 0 {
                    rendered.push_str("---\n");
                }
                rendered.push_str(&to_yaml(report)?);
            }
            OutputFormat::Json => {
                rendered.push_str(&to_json(report)?);
                rendered.push('\n');
            }
        }
    }
    Ok(rendered)
}

fn present(rendered: &str, args: &Args) -> Result<()> {
    match &args.output {
        Some(path) => {
            fs::write(path, rendered).map_err(|e| ReportError::FileWriteError {
                path: path.clone(),
                details: e.to_string(),
            })?;
            eprintln!("✅ Output complete: {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        }
    }
    Ok(())
}
