//! Command-line adapter for the Lumea recommendation engine.
//!
//! The binary owns everything the engine deliberately does not: it
//! reads the wall clock, assembles a [`UserProfile`] from flags, and
//! serializes results as JSON for inspection. The engine itself stays a
//! pure function of its arguments.

#![forbid(unsafe_code)]

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use eyre::WrapErr;

use lumea_core::{Catalog, Goal, HairConcern, HairType, ProductId, SkinConcern, UserProfile};
use lumea_picks::{DEFAULT_COMMUNITY_LIMIT, DEFAULT_DAILY_LIMIT, Recommender};
use lumea_scorer::RuleScorer;

/// Recommend beauty products from the built-in catalog.
#[derive(Debug, Parser)]
#[command(name = "lumea", version, about)]
pub struct Cli {
    /// Skin concern code; repeat for several concerns.
    #[arg(long = "skin-concern", value_name = "CODE")]
    skin_concerns: Vec<SkinConcern>,

    /// Hair type code.
    #[arg(long = "hair-type", value_name = "CODE")]
    hair_type: Option<HairType>,

    /// Hair concern code; repeat for several concerns.
    #[arg(long = "hair-concern", value_name = "CODE")]
    hair_concerns: Vec<HairConcern>,

    /// Goal code; repeat for several goals.
    #[arg(long = "goal", value_name = "CODE")]
    goals: Vec<Goal>,

    /// Calendar date driving the rotation; defaults to today.
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the hero top pick.
    Top,
    /// Print the rotated daily picks.
    Daily {
        /// Maximum number of picks to print.
        #[arg(long, default_value_t = DEFAULT_DAILY_LIMIT)]
        limit: usize,
    },
    /// Print the community-popular picks.
    Community {
        /// Maximum number of picks to print.
        #[arg(long, default_value_t = DEFAULT_COMMUNITY_LIMIT)]
        limit: usize,
        /// Product id to exclude; repeat for several ids.
        #[arg(long = "exclude", value_name = "ID")]
        exclude: Vec<ProductId>,
    },
    /// Print one product with its match info.
    Show {
        /// Product id to look up.
        id: ProductId,
    },
}

impl Cli {
    /// Run the selected command and return its JSON output.
    ///
    /// # Errors
    /// Returns an error when the result cannot be serialized.
    pub fn execute(&self) -> eyre::Result<String> {
        let profile = self.profile();
        let now = self.now();
        let recommender = Recommender::new(Catalog::builtin(), RuleScorer::new());

        let json = match &self.command {
            Command::Top => serde_json::to_string_pretty(&recommender.top_pick(&profile)),
            Command::Daily { limit } => serde_json::to_string_pretty(
                &recommender.daily_picks_with_limit(&profile, now, *limit),
            ),
            Command::Community { limit, exclude } => serde_json::to_string_pretty(
                &recommender.community_picks_with_limit(now, exclude, *limit),
            ),
            Command::Show { id } => {
                serde_json::to_string_pretty(&recommender.product_match(*id, &profile))
            }
        };
        json.wrap_err("failed to serialize recommendation output")
    }

    fn profile(&self) -> UserProfile {
        let mut profile = UserProfile::new()
            .with_skin_concerns(self.skin_concerns.iter().copied())
            .with_hair_concerns(self.hair_concerns.iter().copied())
            .with_goals(self.goals.iter().copied());
        if let Some(hair_type) = self.hair_type {
            profile = profile.with_hair_type(hair_type);
        }
        profile
    }

    fn now(&self) -> NaiveDateTime {
        self.date.map_or_else(
            || Local::now().naive_local(),
            |date| date.and_time(NaiveTime::MIN),
        )
    }
}

/// Parse arguments, run the command, and print the result.
///
/// # Errors
/// Propagates serialization failures from [`Cli::execute`].
pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();
    let output = cli.execute()?;
    print_output(&output);
    Ok(())
}

#[expect(clippy::print_stdout, reason = "command output belongs on stdout")]
fn print_output(output: &str) {
    println!("{output}");
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests should fail fast when setup breaks"
    )]

    use clap::CommandFactory;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[rstest]
    fn daily_command_produces_json_picks() {
        let cli = Cli::try_parse_from([
            "lumea",
            "--skin-concern",
            "dryness",
            "--date",
            "2024-01-01",
            "daily",
            "--limit",
            "2",
        ])
        .expect("arguments parse");

        let output = cli.execute().expect("command runs");
        let picks: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        let ids: Vec<_> = picks
            .as_array()
            .expect("an array of picks")
            .iter()
            .map(|pick| pick.get("product").and_then(|p| p.get("id")).cloned())
            .collect();
        assert_eq!(ids, vec![Some(9.into()), Some(8.into())]);
    }

    #[rstest]
    fn show_command_reports_unknown_ids_as_null() {
        let cli = Cli::try_parse_from(["lumea", "show", "999"]).expect("arguments parse");
        assert_eq!(cli.execute().expect("command runs"), "null");
    }

    #[rstest]
    fn community_command_honours_exclusions() {
        let cli = Cli::try_parse_from([
            "lumea",
            "--date",
            "2024-01-01",
            "community",
            "--exclude",
            "1",
            "--exclude",
            "2",
        ])
        .expect("arguments parse");

        let output = cli.execute().expect("command runs");
        let picks: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        for pick in picks.as_array().expect("an array of picks") {
            let id = pick
                .get("product")
                .and_then(|p| p.get("id"))
                .and_then(serde_json::Value::as_u64)
                .expect("numeric id");
            assert!(id != 1 && id != 2, "excluded id {id} surfaced");
        }
    }
}
