use clap::ArgMatches;

use crate::client::ApiClient;
use crate::config::get_api_url;
use crate::constants::TEAMS;
use crate::error::OctoResult;
use crate::formatting::tables::print_teams;
use crate::models::Team;

pub async fn handle_teams(matches: &ArgMatches) -> OctoResult<()> {
    let api_url = get_api_url()?;
    let client = ApiClient::new(api_url);

    let teams: Vec<Team> = client.list(TEAMS).await?;

    print_teams(&teams, &super::output_format(matches));
    Ok(())
}
