//! Worksheet arguments shared by `calc` and `export`
//!
//! Field flags take raw text exactly as a user would type it into the form
//! (`--profit-per-truck '$4,000'`); normalization happens later.

use clap::Args;
use std::path::PathBuf;

use crate::error::RoiResult;
use crate::models::{InputField, PlanKind, Worksheet};

/// Flags that build a worksheet
#[derive(Args, Debug, Clone, Default)]
pub struct WorksheetArgs {
    /// Worksheet file (.json, .yaml or .yml) to start from
    #[arg(short, long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Pricing plan (dfy or dwy)
    #[arg(short, long)]
    pub plan: Option<PlanKind>,

    /// Company name for the report header
    #[arg(long)]
    pub company: Option<String>,

    /// Representative for the report header
    #[arg(long)]
    pub representative: Option<String>,

    /// Report date (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Number of trucks
    #[arg(long, allow_hyphen_values = true)]
    pub trucks: Option<String>,

    /// Empty trucks
    #[arg(long, allow_hyphen_values = true)]
    pub empty_trucks: Option<String>,

    /// Average hires per month
    #[arg(long, allow_hyphen_values = true)]
    pub hires_per_month: Option<String>,

    /// Profit per truck per month
    #[arg(long, allow_hyphen_values = true)]
    pub profit_per_truck: Option<String>,

    /// Current driver marketing spend per month
    #[arg(long, allow_hyphen_values = true)]
    pub marketing: Option<String>,

    /// DFY monthly fee
    #[arg(long, allow_hyphen_values = true)]
    pub dfy_monthly: Option<String>,

    /// DWY one-time fee
    #[arg(long, allow_hyphen_values = true)]
    pub dwy_one_time: Option<String>,

    /// Months to amortize the DWY fee over
    #[arg(long, allow_hyphen_values = true)]
    pub amortization_months: Option<String>,

    /// Average drivers needed per month
    #[arg(long, allow_hyphen_values = true)]
    pub drivers_needed: Option<String>,

    /// Estimated ad spend per driver
    #[arg(long, allow_hyphen_values = true)]
    pub ad_spend_per_driver: Option<String>,
}

impl WorksheetArgs {
    /// Build the worksheet: file values first, then flag overrides
    pub fn to_worksheet(&self) -> RoiResult<Worksheet> {
        let mut worksheet = match &self.from {
            Some(path) => Worksheet::load(path)?,
            None => Worksheet::default(),
        };

        if let Some(plan) = self.plan {
            worksheet.inputs.plan = plan;
        }
        override_text(&mut worksheet.company_name, &self.company);
        override_text(&mut worksheet.representative, &self.representative);
        override_text(&mut worksheet.date, &self.date);
        override_text(&mut worksheet.notes, &self.notes);

        for (field, value) in self.field_flags() {
            if let Some(value) = value {
                worksheet.inputs.set(field, value.clone());
            }
        }

        tracing::debug!(?worksheet, "built worksheet from arguments");
        Ok(worksheet)
    }

    fn field_flags(&self) -> [(InputField, &Option<String>); 10] {
        [
            (InputField::Trucks, &self.trucks),
            (InputField::EmptyTrucks, &self.empty_trucks),
            (InputField::HiresPerMonth, &self.hires_per_month),
            (InputField::ProfitPerTruckPerMonth, &self.profit_per_truck),
            (InputField::CurrentMarketingMonthly, &self.marketing),
            (InputField::DfyMonthly, &self.dfy_monthly),
            (InputField::DwyOneTime, &self.dwy_one_time),
            (InputField::DwyAmortizationMonths, &self.amortization_months),
            (InputField::DriversNeededMonthly, &self.drivers_needed),
            (InputField::CiAdMonthly, &self.ad_spend_per_driver),
        ]
    }
}

fn override_text(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}
