//! `roi calc`: print the comparison for a worksheet

use clap::Args;
use std::io::{self, IsTerminal, Write};

use super::worksheet::WorksheetArgs;
use crate::config::Settings;
use crate::display::format_amount_colored;
use crate::error::RoiResult;
use crate::export::export_json;
use crate::reports::RoiReport;

/// Arguments for `roi calc`
#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub worksheet: WorksheetArgs,

    /// Print the JSON export instead of the report
    #[arg(long)]
    pub json: bool,

    /// Print only the comparison table
    #[arg(long, conflicts_with = "json")]
    pub summary: bool,
}

/// Handle `roi calc`
pub fn handle_calc_command(settings: &Settings, args: CalcArgs) -> RoiResult<()> {
    let worksheet = args.worksheet.to_worksheet()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        export_json(&worksheet, &mut out, true)?;
        writeln!(out)?;
        return Ok(());
    }

    let report = RoiReport::new(&worksheet, settings);
    tracing::debug!(metrics = ?report.metrics, "derived metrics");

    if args.summary {
        writeln!(out, "{}", report.comparison_table())?;
    } else {
        write!(out, "{}", report.format_terminal())?;
    }

    let savings = if io::stdout().is_terminal() {
        format_amount_colored(report.metrics.yearly_savings, &settings.currency_symbol)
    } else {
        report.money(report.metrics.yearly_savings)
    };
    writeln!(out)?;
    writeln!(out, "Projected savings / yr.: {}", savings)?;

    Ok(())
}
