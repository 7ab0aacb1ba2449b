pub mod activities;
pub mod config;
pub mod edit;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;

use clap::ArgMatches;

/// The --format value shared by the list subcommands.
pub fn output_format(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| "table".to_string())
}
