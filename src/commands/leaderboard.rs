use clap::ArgMatches;

use crate::client::ApiClient;
use crate::config::get_api_url;
use crate::constants::LEADERBOARD;
use crate::error::OctoResult;
use crate::formatting::tables::print_leaderboard;
use crate::models::LeaderboardEntry;

pub async fn handle_leaderboard(matches: &ArgMatches) -> OctoResult<()> {
    let api_url = get_api_url()?;
    let client = ApiClient::new(api_url);

    let entries: Vec<LeaderboardEntry> = client.list(LEADERBOARD).await?;

    print_leaderboard(&entries, &super::output_format(matches));
    Ok(())
}
