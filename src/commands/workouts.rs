use clap::ArgMatches;

use crate::client::ApiClient;
use crate::config::get_api_url;
use crate::constants::WORKOUTS;
use crate::error::OctoResult;
use crate::formatting::tables::print_workouts;
use crate::models::Workout;

pub async fn handle_workouts(matches: &ArgMatches) -> OctoResult<()> {
    let api_url = get_api_url()?;
    let client = ApiClient::new(api_url);

    let workouts: Vec<Workout> = client.list(WORKOUTS).await?;

    print_workouts(&workouts, &super::output_format(matches));
    Ok(())
}
