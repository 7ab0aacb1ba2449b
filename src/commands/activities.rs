use clap::ArgMatches;

use crate::client::ApiClient;
use crate::config::get_api_url;
use crate::constants::ACTIVITIES;
use crate::error::OctoResult;
use crate::formatting::tables::print_activities;
use crate::models::Activity;

pub async fn handle_activities(matches: &ArgMatches) -> OctoResult<()> {
    let api_url = get_api_url()?;
    let client = ApiClient::new(api_url);

    let activities: Vec<Activity> = client.list(ACTIVITIES).await?;

    print_activities(&activities, &super::output_format(matches));
    Ok(())
}
