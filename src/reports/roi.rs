//! ROI Comparison Report
//!
//! Captures a worksheet (header, echoed inputs, notes) together with its
//! derived metrics and renders the before/after comparison for the terminal.
//! The printable document and the file exports are built from this report.

use chrono::{Local, NaiveDate};
use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::display::{double_separator, format_header, format_usd, label_value, separator, truncate};
use crate::models::{DerivedMetrics, InputField, PlanKind, Worksheet};

/// Width of the rendered report
pub const REPORT_WIDTH: usize = 64;

/// One echoed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEcho {
    pub field: InputField,
    pub label: &'static str,
    /// Raw text as typed, or `-` when blank
    pub value: String,
}

impl InputEcho {
    fn new(field: InputField, raw: &str) -> Self {
        Self {
            field,
            label: field.label(),
            value: echo(raw),
        }
    }
}

/// A row of the comparison table
#[derive(Debug, Clone, Tabled)]
pub struct ComparisonRow {
    #[tabled(rename = "Period")]
    pub period: &'static str,
    #[tabled(rename = "Current")]
    pub current: String,
    #[tabled(rename = "With plan")]
    pub with_plan: String,
    #[tabled(rename = "Savings")]
    pub savings: String,
}

/// ROI comparison report for one worksheet
#[derive(Debug, Clone)]
pub struct RoiReport {
    /// Report title, e.g. "Carrier Intelligence ROI Calculator"
    pub title: String,
    /// Brand used for the plan section and footer
    pub brand: String,
    pub company_name: String,
    pub representative: String,
    /// Worksheet date, or today's date when the worksheet left it blank
    pub date: String,
    pub plan: PlanKind,
    /// Current-situation inputs as typed
    pub current_inputs: Vec<InputEcho>,
    /// Inputs for the selected plan as typed
    pub plan_inputs: Vec<InputEcho>,
    pub metrics: DerivedMetrics,
    pub notes: Option<String>,
    pub currency_symbol: String,
}

impl RoiReport {
    /// Build a report, filling a blank date with today's local date
    pub fn new(worksheet: &Worksheet, settings: &Settings) -> Self {
        Self::with_today(worksheet, settings, Local::now().date_naive())
    }

    /// Build a report with an explicit "today"
    pub fn with_today(worksheet: &Worksheet, settings: &Settings, today: NaiveDate) -> Self {
        let inputs = &worksheet.inputs;
        let plan = inputs.plan;

        let date = if worksheet.date.trim().is_empty() {
            settings.format_date(today)
        } else {
            worksheet.date.clone()
        };

        let current_inputs = InputField::CURRENT
            .iter()
            .map(|f| InputEcho::new(*f, inputs.get(*f)))
            .collect();

        let plan_inputs = InputField::PLAN
            .iter()
            .filter(|f| f.applies_to(plan))
            .map(|f| InputEcho::new(*f, inputs.get(*f)))
            .collect();

        Self {
            title: format!("{} ROI Calculator", settings.brand_name),
            brand: settings.brand_name.clone(),
            company_name: echo(&worksheet.company_name),
            representative: echo(&worksheet.representative),
            date,
            plan,
            current_inputs,
            plan_inputs,
            metrics: worksheet.metrics(),
            notes: worksheet.notes_text().map(str::to_string),
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    /// Format an amount with the configured symbol
    pub fn money(&self, value: f64) -> String {
        format_usd(value, &self.currency_symbol)
    }

    /// Monthly and yearly before/after rows
    pub fn comparison_rows(&self) -> Vec<ComparisonRow> {
        let m = &self.metrics;
        vec![
            ComparisonRow {
                period: "Monthly",
                current: self.money(m.current_monthly_cost),
                with_plan: self.money(m.with_monthly_cost),
                savings: self.money(m.monthly_savings),
            },
            ComparisonRow {
                period: "Yearly",
                current: self.money(m.current_yearly_total),
                with_plan: self.money(m.with_yearly_total),
                savings: self.money(m.yearly_savings),
            },
        ]
    }

    /// The comparison block as a table
    pub fn comparison_table(&self) -> String {
        Table::new(self.comparison_rows())
            .with(Style::rounded())
            .to_string()
    }

    /// One-line savings summary
    pub fn summary_line(&self) -> String {
        format!(
            "Savings: {} / mo., {} / yr.",
            self.money(self.metrics.monthly_savings),
            self.money(self.metrics.yearly_savings)
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let m = &self.metrics;
        let mut output = String::new();

        // Header
        output.push_str(&format_header(&self.title, REPORT_WIDTH));
        output.push('\n');
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Company:        {}\n",
            truncate(&self.company_name, REPORT_WIDTH - 16)
        ));
        output.push_str(&format!("Representative: {}\n", self.representative));
        output.push_str(&format!("Date:           {}\n", self.date));

        // Current situation
        section(&mut output, "Current situation");
        for input in &self.current_inputs {
            line(&mut output, input.label, &input.value);
        }
        output.push('\n');
        line(&mut output, "Spending / mo.", &self.money(m.current_monthly_total));
        line(&mut output, "Lost rev. / mo.", &self.money(m.lost_revenue_monthly));
        line(&mut output, "Current cost / yr.", &self.money(m.current_yearly_total));

        // With the plan
        section(&mut output, &self.brand);
        line(&mut output, "Plan", self.plan.label());
        for input in &self.plan_inputs {
            line(&mut output, input.label, &input.value);
        }
        output.push('\n');
        line(&mut output, "Plan cost / mo.", &self.money(m.monthly_plan_fee));
        line(&mut output, "Ad spend / mo.", &self.money(m.monthly_ad_spend));
        line(&mut output, "Cost / yr.", &self.money(m.with_yearly_total));

        // Comparison
        section(&mut output, "Comparison — Before vs After");
        line(&mut output, "Current cost / mo.", &self.money(m.current_monthly_cost));
        line(&mut output, "CI cost / mo.", &self.money(m.with_monthly_cost));
        line(&mut output, "Savings / mo.", &self.money(m.monthly_savings));
        line(&mut output, "Savings / yr.", &self.money(m.yearly_savings));
        output.push('\n');
        output.push_str(&self.comparison_table());
        output.push('\n');

        // Notes
        section(&mut output, "Notes");
        match &self.notes {
            Some(notes) => {
                for note in notes.lines() {
                    output.push_str(&format!("  {}\n", note));
                }
            }
            None => output.push_str("  -\n"),
        }

        output
    }
}

/// Raw text verbatim, or `-` when blank
pub fn echo(raw: &str) -> String {
    if raw.trim().is_empty() {
        "-".to_string()
    } else {
        raw.to_string()
    }
}

fn section(output: &mut String, title: &str) {
    output.push('\n');
    output.push_str(&title.to_uppercase());
    output.push('\n');
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
}

fn line(output: &mut String, label: &str, value: &str) {
    output.push_str("  ");
    output.push_str(&label_value(label, value, REPORT_WIDTH - 2));
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_worksheet() -> Worksheet {
        let mut worksheet = Worksheet::default();
        worksheet.company_name = "Acme Freight".into();
        worksheet.inputs.trucks = "40".into();
        worksheet.inputs.empty_trucks = "3".into();
        worksheet.inputs.profit_per_truck_per_month = "$4,000".into();
        worksheet.inputs.current_marketing_monthly = "2000".into();
        worksheet.inputs.dfy_monthly = "1000".into();
        worksheet.inputs.dwy_one_time = "12000".into();
        worksheet.inputs.drivers_needed_monthly = "5".into();
        worksheet.inputs.ci_ad_monthly = "200".into();
        worksheet
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn test_blank_fields_echo_dash() {
        let report = RoiReport::with_today(&sample_worksheet(), &Settings::default(), today());

        assert_eq!(report.representative, "-");
        let hires = report
            .current_inputs
            .iter()
            .find(|i| i.field == InputField::HiresPerMonth)
            .unwrap();
        assert_eq!(hires.value, "-");
    }

    #[test]
    fn test_inputs_echo_verbatim() {
        let report = RoiReport::with_today(&sample_worksheet(), &Settings::default(), today());
        let profit = report
            .current_inputs
            .iter()
            .find(|i| i.field == InputField::ProfitPerTruckPerMonth)
            .unwrap();
        assert_eq!(profit.value, "$4,000");
    }

    #[test]
    fn test_blank_date_uses_today() {
        let report = RoiReport::with_today(&sample_worksheet(), &Settings::default(), today());
        assert_eq!(report.date, "03/07/2025");

        let mut worksheet = sample_worksheet();
        worksheet.date = "Q2 review".into();
        let report = RoiReport::with_today(&worksheet, &Settings::default(), today());
        assert_eq!(report.date, "Q2 review");
    }

    #[test]
    fn test_plan_inputs_follow_selection() {
        let mut worksheet = sample_worksheet();
        let report = RoiReport::with_today(&worksheet, &Settings::default(), today());
        let fields: Vec<_> = report.plan_inputs.iter().map(|i| i.field).collect();
        assert!(fields.contains(&InputField::DfyMonthly));
        assert!(!fields.contains(&InputField::DwyOneTime));

        worksheet.inputs.plan = PlanKind::Dwy;
        let report = RoiReport::with_today(&worksheet, &Settings::default(), today());
        let fields: Vec<_> = report.plan_inputs.iter().map(|i| i.field).collect();
        assert!(!fields.contains(&InputField::DfyMonthly));
        assert!(fields.contains(&InputField::DwyOneTime));
        assert!(fields.contains(&InputField::DwyAmortizationMonths));
    }

    #[test]
    fn test_terminal_format() {
        let report = RoiReport::with_today(&sample_worksheet(), &Settings::default(), today());
        let output = report.format_terminal();

        assert!(output.contains("Carrier Intelligence ROI Calculator"));
        assert!(output.contains("Acme Freight"));
        assert!(output.contains("CURRENT SITUATION"));
        assert!(output.contains("DFY (Monthly)"));
        assert!(output.contains("$168,000"));
        assert!(output.contains("$14,000"));
        assert!(output.contains("$144,000"));
        assert!(output.contains("CI cost / mo."));
    }

    #[test]
    fn test_comparison_rows() {
        let report = RoiReport::with_today(&sample_worksheet(), &Settings::default(), today());
        let rows = report.comparison_rows();

        assert_eq!(rows[0].current, "$14,000");
        assert_eq!(rows[0].with_plan, "$2,000");
        assert_eq!(rows[0].savings, "$12,000");
        assert_eq!(rows[1].with_plan, "$24,000");
        assert!(report.comparison_table().contains("With plan"));
    }

    #[test]
    fn test_default_notes_render_dash() {
        let report = RoiReport::with_today(&sample_worksheet(), &Settings::default(), today());
        assert!(report.notes.is_none());
        assert!(report.format_terminal().contains("NOTES"));
    }

    #[test]
    fn test_summary_line() {
        let report = RoiReport::with_today(&sample_worksheet(), &Settings::default(), today());
        assert_eq!(report.summary_line(), "Savings: $12,000 / mo., $144,000 / yr.");
    }
}
