//! Calculator inputs
//!
//! `RawInputs` holds exactly what the user typed. `NormalizedInputs` is the
//! only thing the engine accepts, and it can only be built by running every
//! raw field through the normalizer.

use serde::{Deserialize, Deserializer, Serialize};

use super::metrics::DerivedMetrics;
use super::plan::{Plan, PlanKind};
use crate::engine;
use crate::normalize::{normalize, normalize_months};

/// Default amortization period for a DWY one-time fee
pub const DEFAULT_AMORTIZATION_MONTHS: &str = "12";

/// A free-text field on the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Trucks,
    EmptyTrucks,
    HiresPerMonth,
    ProfitPerTruckPerMonth,
    CurrentMarketingMonthly,
    DfyMonthly,
    DwyOneTime,
    DwyAmortizationMonths,
    DriversNeededMonthly,
    CiAdMonthly,
}

impl InputField {
    /// Current-situation fields, in form order
    pub const CURRENT: &'static [InputField] = &[
        InputField::Trucks,
        InputField::EmptyTrucks,
        InputField::HiresPerMonth,
        InputField::ProfitPerTruckPerMonth,
        InputField::CurrentMarketingMonthly,
    ];

    /// Plan-side fields, in form order (includes both plans' fields)
    pub const PLAN: &'static [InputField] = &[
        InputField::DfyMonthly,
        InputField::DwyOneTime,
        InputField::DwyAmortizationMonths,
        InputField::DriversNeededMonthly,
        InputField::CiAdMonthly,
    ];

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            Self::Trucks => "Number of trucks",
            Self::EmptyTrucks => "Empty trucks",
            Self::HiresPerMonth => "Average hires / mo.",
            Self::ProfitPerTruckPerMonth => "Profit / truck / mo.",
            Self::CurrentMarketingMonthly => "Driver marketing / mo.",
            Self::DfyMonthly => "DFY monthly fee",
            Self::DwyOneTime => "DWY one-time fee",
            Self::DwyAmortizationMonths => "Amortize DWY over (months)",
            Self::DriversNeededMonthly => "Avg drivers needed / mo.",
            Self::CiAdMonthly => "Estimated ad spend / driver",
        }
    }

    /// Whether the field holds a currency amount
    pub fn is_currency(self) -> bool {
        matches!(
            self,
            Self::ProfitPerTruckPerMonth
                | Self::CurrentMarketingMonthly
                | Self::DfyMonthly
                | Self::DwyOneTime
                | Self::CiAdMonthly
        )
    }

    /// The plan a field belongs to, or `None` if it is always shown
    pub fn plan(self) -> Option<PlanKind> {
        match self {
            Self::DfyMonthly => Some(PlanKind::Dfy),
            Self::DwyOneTime | Self::DwyAmortizationMonths => Some(PlanKind::Dwy),
            _ => None,
        }
    }

    /// Whether the field is relevant under the given plan
    pub fn applies_to(self, plan: PlanKind) -> bool {
        self.plan().map_or(true, |p| p == plan)
    }
}

/// Raw text for every calculator field, plus the plan selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    #[serde(deserialize_with = "text_or_number")]
    pub trucks: String,
    #[serde(deserialize_with = "text_or_number")]
    pub empty_trucks: String,
    #[serde(deserialize_with = "text_or_number")]
    pub hires_per_month: String,
    #[serde(deserialize_with = "text_or_number")]
    pub current_marketing_monthly: String,
    #[serde(deserialize_with = "text_or_number")]
    pub profit_per_truck_per_month: String,
    pub plan: PlanKind,
    #[serde(deserialize_with = "text_or_number")]
    pub dfy_monthly: String,
    #[serde(deserialize_with = "text_or_number")]
    pub dwy_one_time: String,
    #[serde(deserialize_with = "text_or_number")]
    pub dwy_amortization_months: String,
    #[serde(deserialize_with = "text_or_number")]
    pub drivers_needed_monthly: String,
    #[serde(deserialize_with = "text_or_number")]
    pub ci_ad_monthly: String,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            trucks: String::new(),
            empty_trucks: String::new(),
            hires_per_month: String::new(),
            current_marketing_monthly: String::new(),
            profit_per_truck_per_month: String::new(),
            plan: PlanKind::default(),
            dfy_monthly: String::new(),
            dwy_one_time: String::new(),
            dwy_amortization_months: DEFAULT_AMORTIZATION_MONTHS.to_string(),
            drivers_needed_monthly: String::new(),
            ci_ad_monthly: String::new(),
        }
    }
}

impl RawInputs {
    /// Text currently entered for a field
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Trucks => &self.trucks,
            InputField::EmptyTrucks => &self.empty_trucks,
            InputField::HiresPerMonth => &self.hires_per_month,
            InputField::ProfitPerTruckPerMonth => &self.profit_per_truck_per_month,
            InputField::CurrentMarketingMonthly => &self.current_marketing_monthly,
            InputField::DfyMonthly => &self.dfy_monthly,
            InputField::DwyOneTime => &self.dwy_one_time,
            InputField::DwyAmortizationMonths => &self.dwy_amortization_months,
            InputField::DriversNeededMonthly => &self.drivers_needed_monthly,
            InputField::CiAdMonthly => &self.ci_ad_monthly,
        }
    }

    /// Mutable text for a field
    pub fn get_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Trucks => &mut self.trucks,
            InputField::EmptyTrucks => &mut self.empty_trucks,
            InputField::HiresPerMonth => &mut self.hires_per_month,
            InputField::ProfitPerTruckPerMonth => &mut self.profit_per_truck_per_month,
            InputField::CurrentMarketingMonthly => &mut self.current_marketing_monthly,
            InputField::DfyMonthly => &mut self.dfy_monthly,
            InputField::DwyOneTime => &mut self.dwy_one_time,
            InputField::DwyAmortizationMonths => &mut self.dwy_amortization_months,
            InputField::DriversNeededMonthly => &mut self.drivers_needed_monthly,
            InputField::CiAdMonthly => &mut self.ci_ad_monthly,
        }
    }

    /// Replace a field's text
    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Normalize every field
    pub fn normalized(&self) -> NormalizedInputs {
        NormalizedInputs::from_raw(self)
    }

    /// Normalize, then derive the comparison
    pub fn derive(&self) -> DerivedMetrics {
        engine::derive(&self.normalized())
    }
}

/// Accept `"4"`, `4` or `4.5` for a text field so hand-written worksheet
/// files don't need every number quoted
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
        Null(()),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(n) => n.to_string(),
        TextOrNumber::Float(n) => n.to_string(),
        TextOrNumber::Null(()) => String::new(),
    })
}

/// Finite numeric image of `RawInputs`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInputs {
    pub(crate) trucks: f64,
    pub(crate) empty_trucks: f64,
    pub(crate) hires_per_month: f64,
    pub(crate) current_marketing_monthly: f64,
    pub(crate) profit_per_truck_per_month: f64,
    pub(crate) plan: Plan,
    pub(crate) drivers_needed_monthly: f64,
    pub(crate) ci_ad_monthly: f64,
}

impl NormalizedInputs {
    /// Normalize raw field text. Fields that don't belong to the selected
    /// plan are ignored.
    pub fn from_raw(raw: &RawInputs) -> Self {
        let plan = match raw.plan {
            PlanKind::Dfy => Plan::Dfy {
                monthly_fee: normalize(&raw.dfy_monthly),
            },
            PlanKind::Dwy => Plan::dwy(
                normalize(&raw.dwy_one_time),
                normalize_months(&raw.dwy_amortization_months),
            ),
        };

        Self {
            trucks: normalize(&raw.trucks),
            empty_trucks: normalize(&raw.empty_trucks),
            hires_per_month: normalize(&raw.hires_per_month),
            current_marketing_monthly: normalize(&raw.current_marketing_monthly),
            profit_per_truck_per_month: normalize(&raw.profit_per_truck_per_month),
            plan,
            drivers_needed_monthly: normalize(&raw.drivers_needed_monthly),
            ci_ad_monthly: normalize(&raw.ci_ad_monthly),
        }
    }

    /// Value a fleet count field counts as; `None` for money and plan fields
    pub fn count(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::Trucks => Some(self.trucks),
            InputField::EmptyTrucks => Some(self.empty_trucks),
            InputField::HiresPerMonth => Some(self.hires_per_month),
            _ => None,
        }
    }
}
