use clap::ValueEnum;
use serde::Serialize;

pub mod compare;
pub mod format;
pub mod harness;
pub mod kernels;
pub mod runner;
pub mod schema;
pub mod suite;

/// Suite variant to run. Each variant is versioned together with its parameter table.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteVariant {
    /// Five kernels: recursion, loops and a 100,000-step string concatenation.
    Basic,
    /// Eleven kernels; string concatenation reduced to 1,000 steps.
    #[default]
    Extended,
    /// The extended suite plus the Takeuchi function.
    Full,
}

impl SuiteVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuiteVariant::Basic => "basic",
            SuiteVariant::Extended => "extended",
            SuiteVariant::Full => "full",
        }
    }
}
