/// Criteria for the postcode/time count and the recipe name matches.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Filter {
    pub postcode: String,
    pub time_range: String,
    pub recipe_names: Vec<String>,
}

impl Filter {
    #[must_use]
    pub fn new(
        postcode: impl Into<String>,
        time_range: impl Into<String>,
        recipe_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            postcode: postcode.into(),
            time_range: time_range.into(),
            recipe_names: recipe_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-insensitive substring match of `recipe` against any filter name.
    #[must_use]
    pub fn matches_name(&self, recipe: &str) -> bool {
        let recipe = recipe.to_lowercase();
        self.recipe_names.iter().any(|name| recipe.contains(&name.to_lowercase()))
    }
}
