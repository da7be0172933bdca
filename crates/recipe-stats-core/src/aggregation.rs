use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::StatsError;

const REPORT_INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, Default, Serialize, Eq, PartialEq)]
pub struct RecipeCount {
    pub recipe: String,
    pub count: u64,
}

/// Postcode with the most deliveries; ties go to the smallest postcode string.
#[derive(Debug, Clone, Default, Serialize, Eq, PartialEq)]
pub struct BusiestPostcode {
    pub postcode: String,
    pub delivery_count: u64,
}

/// Deliveries to the filter postcode inside the filter time range.
///
/// `from` and `to` carry the hour tokens of the filter range as written, e.g.
/// `"10AM"` and `"3PM"`. All fields stay zero-valued until the first match.
#[derive(Debug, Clone, Default, Serialize, Eq, PartialEq)]
pub struct PostcodeAndTimeCount {
    pub postcode: String,
    pub from: String,
    pub to: String,
    pub delivery_count: u64,
}

/// Immutable report produced by [`crate::SummaryCalculator::aggregate`].
#[derive(Debug, Clone, Default, Serialize, Eq, PartialEq)]
pub struct Aggregation {
    pub unique_recipe_count: usize,
    pub count_per_recipe: Vec<RecipeCount>,
    pub busiest_postcode: BusiestPostcode,
    pub count_per_postcode_and_time: PostcodeAndTimeCount,
    pub match_by_name: Vec<String>,
}

impl Aggregation {
    /// Render the report as JSON indented with four spaces.
    ///
    /// # Errors
    /// Returns [`StatsError::Serialization`] if the JSON writer fails.
    pub fn to_pretty_json(&self) -> Result<String, StatsError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(REPORT_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .map_err(|err| StatsError::Serialization(err.to_string()))?;
        String::from_utf8(buffer).map_err(|err| StatsError::Serialization(err.to_string()))
    }
}

impl Display for Aggregation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let json = self.to_pretty_json().map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}
