use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Deserializer};

use crate::{StatsError, TimeWindow};

pub const MAX_RECIPE_CHARS: usize = 100;
pub const MAX_POSTCODE_CHARS: usize = 10;

static DELIVERY: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^\S+\s+(1[0-2]|0?[1-9])[Aa][Mm]\s+-\s+(1[0-2]|0?[1-9])[Pp][Mm]").ok()
});

/// One delivered recipe as read from the input list.
///
/// Absent and `null` keys decode to empty strings so that the record is
/// rejected by [`Record::validate`] instead of failing the whole decode.
#[derive(Debug, Clone, Default, Deserialize, Eq, PartialEq, Hash)]
pub struct Record {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub postcode: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recipe: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub delivery: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Record {
    #[must_use]
    pub fn new(
        postcode: impl Into<String>,
        recipe: impl Into<String>,
        delivery: impl Into<String>,
    ) -> Self {
        Self { postcode: postcode.into(), recipe: recipe.into(), delivery: delivery.into() }
    }

    /// Check the record shape: field lengths and the `"<weekday> <H>AM - <H>PM"`
    /// delivery grammar. Content after the grammar is tolerated.
    ///
    /// # Errors
    /// Returns [`StatsError::Validation`] naming the first rule that failed.
    pub fn validate(&self) -> Result<(), StatsError> {
        let recipe_chars = self.recipe.chars().count();
        if recipe_chars == 0 || recipe_chars > MAX_RECIPE_CHARS {
            return Err(StatsError::Validation(format!(
                "recipe MUST have 1..={MAX_RECIPE_CHARS} characters, got {recipe_chars}"
            )));
        }

        let postcode_chars = self.postcode.chars().count();
        if postcode_chars == 0 || postcode_chars > MAX_POSTCODE_CHARS {
            return Err(StatsError::Validation(format!(
                "postcode MUST have 1..={MAX_POSTCODE_CHARS} characters, got {postcode_chars}"
            )));
        }

        if !(*DELIVERY).as_ref().is_some_and(|re| re.is_match(&self.delivery)) {
            return Err(StatsError::Validation(format!(
                "delivery MUST look like \"<weekday> <H>AM - <H>PM\", got {:?}",
                self.delivery
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether this delivery fits `time_range` (`"{H}AM - {H}PM"`).
    ///
    /// A range or delivery that cannot be parsed never matches.
    #[must_use]
    pub fn delivered_between(&self, time_range: &str) -> bool {
        TimeWindow::parse(time_range).is_ok_and(|window| self.delivered_within(&window))
    }

    /// Same as [`Record::delivered_between`] with the range already parsed.
    #[must_use]
    pub fn delivered_within(&self, window: &TimeWindow) -> bool {
        TimeWindow::parse(&self.delivery).is_ok_and(|delivery| window.accepts(&delivery))
    }
}
