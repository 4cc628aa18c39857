//! Pricing plans
//!
//! `PlanKind` is the selector the user toggles; `Plan` is the normalized
//! tagged union the engine matches on, carrying only the fields that matter
//! for the selected plan.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which pricing plan is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanKind {
    /// Done For You: recurring monthly fee
    #[default]
    #[serde(alias = "dfy")]
    Dfy,
    /// Do With You: one-time fee, amortized for the monthly comparison
    #[serde(alias = "dwy")]
    Dwy,
}

impl PlanKind {
    /// The other plan
    pub fn toggled(self) -> Self {
        match self {
            Self::Dfy => Self::Dwy,
            Self::Dwy => Self::Dfy,
        }
    }

    /// Button-style label, e.g. "DFY (Monthly)"
    pub fn label(self) -> &'static str {
        match self {
            Self::Dfy => "DFY (Monthly)",
            Self::Dwy => "DWY (One-time)",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dfy => write!(f, "DFY"),
            Self::Dwy => write!(f, "DWY"),
        }
    }
}

impl FromStr for PlanKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfy" => Ok(Self::Dfy),
            "dwy" => Ok(Self::Dwy),
            other => Err(format!("unknown plan '{}' (expected dfy or dwy)", other)),
        }
    }
}

/// A normalized pricing plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Plan {
    Dfy {
        monthly_fee: f64,
    },
    Dwy {
        one_time_fee: f64,
        /// Always `>= 1`
        amortization_months: f64,
    },
}

impl Plan {
    /// Build a DWY plan, flooring the amortization period at one month
    pub fn dwy(one_time_fee: f64, amortization_months: f64) -> Self {
        Self::Dwy {
            one_time_fee,
            amortization_months: amortization_months.max(1.0),
        }
    }
}
