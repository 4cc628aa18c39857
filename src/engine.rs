//! Derivation engine
//!
//! Maps normalized inputs to the full set of before/after metrics. Pure and
//! total: no I/O, no state, safe to call on every keystroke.

use crate::models::{DerivedMetrics, NormalizedInputs, Plan};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Compute every derived metric from normalized inputs.
///
/// Under DWY the monthly plan fee is amortized, but the yearly total counts
/// the one-time fee once as actual cash out, not `monthly * 12`.
pub fn derive(inputs: &NormalizedInputs) -> DerivedMetrics {
    // Before
    let lost_revenue_monthly = inputs.empty_trucks * inputs.profit_per_truck_per_month;
    let current_monthly_total = inputs.current_marketing_monthly;
    let current_yearly_total = (current_monthly_total + lost_revenue_monthly) * MONTHS_PER_YEAR;

    // After
    let monthly_ad_spend = inputs.drivers_needed_monthly * inputs.ci_ad_monthly;
    let (monthly_plan_fee, with_monthly_cost, with_yearly_total) = match inputs.plan {
        Plan::Dfy { monthly_fee } => {
            let with_monthly_cost = monthly_fee + monthly_ad_spend;
            (
                monthly_fee,
                with_monthly_cost,
                with_monthly_cost * MONTHS_PER_YEAR,
            )
        }
        Plan::Dwy {
            one_time_fee,
            amortization_months,
        } => {
            let monthly_fee = one_time_fee / amortization_months.max(1.0);
            (
                monthly_fee,
                monthly_fee + monthly_ad_spend,
                monthly_ad_spend * MONTHS_PER_YEAR + one_time_fee,
            )
        }
    };

    // Comparison
    let current_monthly_cost = current_yearly_total / MONTHS_PER_YEAR;

    DerivedMetrics {
        lost_revenue_monthly,
        current_monthly_total,
        current_yearly_total,
        monthly_plan_fee,
        monthly_ad_spend,
        with_monthly_cost,
        with_yearly_total,
        current_monthly_cost,
        monthly_savings: current_monthly_cost - with_monthly_cost,
        yearly_savings: current_yearly_total - with_yearly_total,
    }
}
