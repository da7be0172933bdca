use std::collections::BTreeMap;

use crate::{
    extract_begin_hour, extract_end_hour, Aggregation, BusiestPostcode, Filter,
    PostcodeAndTimeCount, RecipeCount, Record, StatsError, TimeWindow,
};

/// Receives validated records one at a time.
pub trait Calculator {
    fn calculate(&mut self, record: &Record);
}

/// Single-threaded accumulator behind the aggregation report.
///
/// All state is owned by the instance and mutated in place by
/// [`Calculator::calculate`]; callers that ingest from several threads must
/// either serialize access or build one calculator per partition and combine
/// them with [`SummaryCalculator::merge`].
#[derive(Debug, Clone)]
pub struct SummaryCalculator {
    filter: Filter,
    filter_window: Option<TimeWindow>,
    filter_from: String,
    filter_to: String,
    recipe_counts: BTreeMap<String, u64>,
    postcode_counts: BTreeMap<String, u64>,
    filtered_delivery: PostcodeAndTimeCount,
    matched_names: Vec<String>,
}

impl SummaryCalculator {
    #[must_use]
    pub fn new(filter: Filter) -> Self {
        let filter_window = TimeWindow::parse(&filter.time_range).ok();
        let filter_from = extract_begin_hour(&filter.time_range)
            .map(|from| from.token.to_string())
            .unwrap_or_default();
        let filter_to =
            extract_end_hour(&filter.time_range).map(|to| to.token.to_string()).unwrap_or_default();
        Self {
            filter,
            filter_window,
            filter_from,
            filter_to,
            recipe_counts: BTreeMap::new(),
            postcode_counts: BTreeMap::new(),
            filtered_delivery: PostcodeAndTimeCount::default(),
            matched_names: Vec::new(),
        }
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Snapshot the accumulated state.
    #[must_use]
    pub fn aggregate(&self) -> Aggregation {
        Aggregation {
            unique_recipe_count: self.recipe_counts.len(),
            count_per_recipe: self.count_per_recipe(),
            busiest_postcode: self.busiest_postcode(),
            count_per_postcode_and_time: self.filtered_delivery.clone(),
            match_by_name: self.matched_names.clone(),
        }
    }

    /// Fold the state of a calculator that ingested a different partition of
    /// the same input.
    ///
    /// # Errors
    /// Returns [`StatsError::Validation`] when the two calculators were built
    /// with different filters.
    pub fn merge(&mut self, other: SummaryCalculator) -> Result<(), StatsError> {
        if self.filter != other.filter {
            return Err(StatsError::Validation(
                "calculators MUST share the same filter to be merged".to_string(),
            ));
        }

        for (recipe, count) in other.recipe_counts {
            *self.recipe_counts.entry(recipe).or_insert(0) += count;
        }
        for (postcode, count) in other.postcode_counts {
            *self.postcode_counts.entry(postcode).or_insert(0) += count;
        }
        for name in other.matched_names {
            self.insert_matched_name(name);
        }

        if other.filtered_delivery.delivery_count > 0 {
            let delivery_count =
                self.filtered_delivery.delivery_count + other.filtered_delivery.delivery_count;
            self.filtered_delivery =
                PostcodeAndTimeCount { delivery_count, ..other.filtered_delivery };
        }

        Ok(())
    }

    fn count_per_recipe(&self) -> Vec<RecipeCount> {
        self.recipe_counts
            .iter()
            .map(|(recipe, count)| RecipeCount { recipe: recipe.clone(), count: *count })
            .collect()
    }

    fn busiest_postcode(&self) -> BusiestPostcode {
        self.postcode_counts
            .iter()
            .max_by(|(lhs_postcode, lhs_count), (rhs_postcode, rhs_count)| {
                lhs_count.cmp(rhs_count).then_with(|| rhs_postcode.cmp(lhs_postcode))
            })
            .map(|(postcode, count)| BusiestPostcode {
                postcode: postcode.clone(),
                delivery_count: *count,
            })
            .unwrap_or_default()
    }

    fn add_to_name_matches(&mut self, record: &Record) {
        if self.filter.matches_name(&record.recipe) {
            self.insert_matched_name(record.recipe.clone());
        }
    }

    fn insert_matched_name(&mut self, name: String) {
        if let Err(index) = self.matched_names.binary_search(&name) {
            self.matched_names.insert(index, name);
        }
    }

    // Weekdays are not part of the match.
    fn count_filtered_delivery(&mut self, record: &Record) {
        if record.postcode != self.filter.postcode {
            return;
        }
        let Some(window) = self.filter_window else {
            return;
        };
        if !record.delivered_within(&window) {
            return;
        }

        self.filtered_delivery.delivery_count += 1;
        self.filtered_delivery.postcode.clone_from(&record.postcode);
        self.filtered_delivery.from.clone_from(&self.filter_from);
        self.filtered_delivery.to.clone_from(&self.filter_to);
    }
}

impl Calculator for SummaryCalculator {
    /// Count one record. The record is assumed to have passed
    /// [`Record::validate`]; nothing is re-checked here.
    fn calculate(&mut self, record: &Record) {
        *self.recipe_counts.entry(record.recipe.clone()).or_insert(0) += 1;
        *self.postcode_counts.entry(record.postcode.clone()).or_insert(0) += 1;
        self.add_to_name_matches(record);
        self.count_filtered_delivery(record);
    }
}
