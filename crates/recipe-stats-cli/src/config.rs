use std::path::PathBuf;

use clap::Parser;
use recipe_stats_core::Filter;

pub const DEFAULT_POSTCODE: &str = "10120";
pub const DEFAULT_TIME_RANGE: &str = "10AM - 3PM";
pub const DEFAULT_NAMES: [&str; 3] = ["Potato", "Veggie", "Mushroom"];

#[derive(Debug, Parser)]
#[command(name = "recipe-stats")]
#[command(about = "Aggregate recipe delivery statistics from a JSON list")]
#[command(
    after_help = "Example:\n  recipe-stats -f deliveries.json -r 'Friday 10AM - 2PM' -p 10021 -n 'Veggie,Potato'"
)]
pub struct Cli {
    /// JSON array of `{postcode, recipe, delivery}` objects.
    #[arg(short = 'f', long)]
    pub filename: PathBuf,

    /// Postcode counted in `count_per_postcode_and_time`.
    #[arg(short = 'p', long, default_value = DEFAULT_POSTCODE)]
    pub postcode: String,

    /// Delivery window in the `{H}AM - {H}PM` format.
    #[arg(short = 'r', long, default_value = DEFAULT_TIME_RANGE)]
    pub timerange: String,

    /// Comma separated recipe name fragments for `match_by_name`.
    #[arg(short = 'n', long, value_delimiter = ',', default_values = DEFAULT_NAMES)]
    pub names: Vec<String>,

    /// Print input, progress and elapsed time to stderr.
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Write the report here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Filter handed to the calculator. Empty name fragments are dropped since
    /// they would match every recipe.
    #[must_use]
    pub fn filter(&self) -> Filter {
        Filter::new(
            self.postcode.clone(),
            self.timerange.clone(),
            self.names.iter().filter(|name| !name.is_empty()).cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) => panic!("failed to parse {args:?}: {err}"),
        }
    }

    #[test]
    fn defaults_build_the_standard_filter() {
        let cli = parse(&["recipe-stats", "-f", "deliveries.json"]);

        assert_eq!(
            cli.filter(),
            Filter::new("10120", "10AM - 3PM", ["Potato", "Veggie", "Mushroom"])
        );
        assert!(!cli.verbose);
        assert!(cli.output.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&[
            "recipe-stats",
            "--filename",
            "deliveries.json",
            "-p",
            "10021",
            "-r",
            "Friday 10AM - 2PM",
            "-n",
            "Veggie,,Potato",
            "-v",
        ]);

        assert_eq!(cli.filter(), Filter::new("10021", "Friday 10AM - 2PM", ["Veggie", "Potato"]));
        assert!(cli.verbose);
    }

    #[test]
    fn filename_is_required() {
        assert!(Cli::try_parse_from(["recipe-stats", "-p", "10021"]).is_err());
    }
}
