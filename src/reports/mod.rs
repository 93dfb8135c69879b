//! Reports module for the budget tracker
//!
//! Pure aggregations over a slice of transactions: period summaries,
//! per-category breakdowns and the monthly trend. Nothing here touches the
//! store; callers load transactions first and pass them in.

pub mod breakdown;
pub mod summary;
pub mod trend;

pub use breakdown::{breakdown_by_category, breakdown_total, CategoryAmount};
pub use summary::{summarize, summarize_records, Summary, Tone};
pub use trend::{available_years, filter_period, monthly_trend, MonthlyTotals};
