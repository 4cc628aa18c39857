//! Derived metrics
//!
//! Every value is recomputed from scratch by `engine::derive`; nothing here is
//! ever updated in place.

use serde::{Deserialize, Serialize};

/// Before/after comparison figures, all in currency units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Idle trucks times profit per truck
    pub lost_revenue_monthly: f64,
    /// Current driver marketing spend
    pub current_monthly_total: f64,
    /// (marketing + lost revenue) over a year
    pub current_yearly_total: f64,
    /// DFY fee, or DWY fee spread over the amortization period
    pub monthly_plan_fee: f64,
    pub monthly_ad_spend: f64,
    pub with_monthly_cost: f64,
    /// Cash outflow for a year under the plan (DWY fee counted once)
    pub with_yearly_total: f64,
    /// `current_yearly_total / 12`; includes lost revenue
    pub current_monthly_cost: f64,
    pub monthly_savings: f64,
    pub yearly_savings: f64,
}

/// Report section a metric is shown under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSection {
    Current,
    WithPlan,
    Comparison,
}

impl MetricSection {
    pub fn title(self) -> &'static str {
        match self {
            Self::Current => "Current situation",
            Self::WithPlan => "With plan",
            Self::Comparison => "Comparison",
        }
    }
}

impl DerivedMetrics {
    /// Every metric with its section and display label, in report order
    pub fn entries(&self) -> [(MetricSection, &'static str, f64); 10] {
        use MetricSection::*;
        [
            (Current, "Spending / mo.", self.current_monthly_total),
            (Current, "Lost rev. / mo.", self.lost_revenue_monthly),
            (Current, "Current cost / yr.", self.current_yearly_total),
            (WithPlan, "Plan cost / mo.", self.monthly_plan_fee),
            (WithPlan, "Ad spend / mo.", self.monthly_ad_spend),
            (WithPlan, "Cost with plan / mo.", self.with_monthly_cost),
            (WithPlan, "Cost with plan / yr.", self.with_yearly_total),
            (Comparison, "Current cost / mo.", self.current_monthly_cost),
            (Comparison, "Savings / mo.", self.monthly_savings),
            (Comparison, "Savings / yr.", self.yearly_savings),
        ]
    }

    /// Whether the plan saves money over a year
    pub fn is_saving(&self) -> bool {
        self.yearly_savings > 0.0
    }
}
