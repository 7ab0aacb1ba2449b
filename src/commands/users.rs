use clap::ArgMatches;

use crate::client::ApiClient;
use crate::config::get_api_url;
use crate::constants::{TEAMS, USERS};
use crate::error::OctoResult;
use crate::formatting::tables::print_users;
use crate::models::{Team, User};

pub async fn handle_users(matches: &ArgMatches) -> OctoResult<()> {
    let api_url = get_api_url()?;
    let client = ApiClient::new(api_url);

    // The team column is derived, so the users view always needs both
    // collections.
    let users: Vec<User> = client.list(USERS).await?;
    let teams: Vec<Team> = client.list(TEAMS).await?;

    print_users(&users, &teams, &super::output_format(matches));
    Ok(())
}
