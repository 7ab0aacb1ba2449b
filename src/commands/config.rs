use clap::ArgMatches;

use crate::client::ApiClient;
use crate::config::{load_config, save_config};
use crate::constants::USERS;
use crate::error::OctoResult;
use crate::models::User;

pub async fn handle_config(matches: &ArgMatches) -> OctoResult<()> {
    if let Some(api_url) = matches.get_one::<String>("api-url") {
        let mut config = load_config();
        config.api_url = Some(api_url.trim_end_matches('/').to_string());
        save_config(&config)?;
        println!("API URL saved successfully!");

        // Probe the server so a typo surfaces now rather than later.
        let client = ApiClient::new(api_url.clone());
        match client.list::<User>(USERS).await {
            Ok(users) => println!("✅ Connected — {} users visible", users.len()),
            Err(e) => println!("❌ Saved, but the server did not answer: {}", e),
        }
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.api_url {
            Some(url) => println!("API URL: {}", url),
            None => println!("No API URL configured"),
        }
    } else {
        println!("Usage: octofit config --api-url <URL> or octofit config --show");
    }
    Ok(())
}
