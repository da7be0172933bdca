//! Aggregation engine for recipe delivery records.
//!
//! Records are validated with [`Record::is_valid`], fed one at a time into a
//! [`SummaryCalculator`], and summarized with [`SummaryCalculator::aggregate`].

mod aggregation;
mod calculator;
mod error;
mod filter;
mod record;
mod time_window;

pub use aggregation::{Aggregation, BusiestPostcode, PostcodeAndTimeCount, RecipeCount};
pub use calculator::{Calculator, SummaryCalculator};
pub use error::StatsError;
pub use filter::Filter;
pub use record::{Record, MAX_POSTCODE_CHARS, MAX_RECIPE_CHARS};
pub use time_window::{extract_begin_hour, extract_end_hour, HourToken, TimeWindow};
