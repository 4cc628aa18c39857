//! CLI commands for exporting a worksheet
//!
//! `roi export` writes a printable document or a JSON/YAML/CSV file;
//! `roi template` prints a blank worksheet to fill in.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::worksheet::WorksheetArgs;
use crate::config::Settings;
use crate::error::{RoiError, RoiResult};
use crate::export::{export_json, export_metrics_csv, export_yaml, send_to_printer, write_document};
use crate::models::Worksheet;
use crate::reports::RoiReport;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Printable plain-text document
    Document,
    /// JSON (worksheet + metrics)
    Json,
    /// YAML (worksheet + metrics, human-readable)
    Yaml,
    /// CSV (metrics only)
    Csv,
}

/// Worksheet template format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateFormat {
    Json,
    Yaml,
}

/// Arguments for `roi export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(long, value_enum, default_value = "document")]
    pub format: ExportFormat,

    /// Send the document to the printer after writing it
    #[arg(long)]
    pub print: bool,

    #[command(flatten)]
    pub worksheet: WorksheetArgs,
}

/// Handle `roi export`
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> RoiResult<()> {
    if args.print && args.format != ExportFormat::Document {
        return Err(RoiError::Validation(
            "--print is only available for the document format".into(),
        ));
    }

    let worksheet = args.worksheet.to_worksheet()?;

    match args.format {
        ExportFormat::Document => {
            let report = RoiReport::new(&worksheet, settings);
            let path = write_document(&report, &args.output)?;
            println!("Wrote document to {}", path.display());

            if args.print {
                // The export already succeeded; a printer failure is only reported
                match send_to_printer(&path, &settings.print_command) {
                    Ok(()) => println!("Sent to printer via '{}'", settings.print_command),
                    Err(e) => eprintln!("Warning: {}", e),
                }
            }
        }
        ExportFormat::Json => {
            let mut writer = create_output(&args.output)?;
            export_json(&worksheet, &mut writer, true)?;
            writer.flush()?;
            println!("Exported JSON to {}", args.output.display());
        }
        ExportFormat::Yaml => {
            let mut writer = create_output(&args.output)?;
            export_yaml(&worksheet, &mut writer)?;
            writer.flush()?;
            println!("Exported YAML to {}", args.output.display());
        }
        ExportFormat::Csv => {
            let writer = create_output(&args.output)?;
            export_metrics_csv(&worksheet, writer)?;
            println!("Exported CSV to {}", args.output.display());
        }
    }

    Ok(())
}

/// Handle `roi template`
pub fn handle_template_command(format: TemplateFormat) -> RoiResult<()> {
    let worksheet = Worksheet::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        TemplateFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &worksheet)?;
            writeln!(out)?;
        }
        TemplateFormat::Yaml => serde_yaml::to_writer(&mut out, &worksheet)?,
    }

    Ok(())
}

fn create_output(path: &Path) -> RoiResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        RoiError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
