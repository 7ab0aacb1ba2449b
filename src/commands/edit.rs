use clap::ArgMatches;
use colored::*;

use crate::client::ApiClient;
use crate::config::get_api_url;
use crate::constants::{TEAMS, USERS};
use crate::error::OctoResult;
use crate::membership::reconciler::{apply_save, plan_save, EditDraft};
use crate::models::{Team, User};
use crate::octo_error;

/// Non-interactive user edit: same reconciliation flow as the dashboard
/// popup, driven from flags.
pub async fn handle_edit(matches: &ArgMatches) -> OctoResult<()> {
    let target = matches
        .get_one::<String>("user")
        .expect("clap enforces the required arg");

    let api_url = get_api_url()?;
    let client = ApiClient::new(api_url);

    let users: Vec<User> = client.list(USERS).await?;
    let teams: Vec<Team> = client.list(TEAMS).await?;

    let user = users
        .iter()
        .find(|u| u.username == *target)
        .ok_or_else(|| octo_error!(InvalidInput, "no user with username '{}'", target))?;

    let mut draft = EditDraft::from_user(user, &teams);

    if let Some(username) = matches.get_one::<String>("username") {
        draft.username = username.clone();
    }
    if let Some(name) = matches.get_one::<String>("name") {
        draft.name = name.clone();
    }
    if let Some(email) = matches.get_one::<String>("email") {
        draft.email = email.clone();
    }
    if let Some(password) = matches.get_one::<String>("password") {
        draft.password = password.clone();
    }

    if matches.get_flag("no-team") {
        draft.team_id.clear();
    } else if let Some(team_arg) = matches.get_one::<String>("team") {
        let team = teams
            .iter()
            .find(|t| t.id == *team_arg || t.name.eq_ignore_ascii_case(team_arg))
            .ok_or_else(|| octo_error!(InvalidInput, "no team named '{}'", team_arg))?;
        draft.team_id = team.id.clone();
    }

    let plan = plan_save(user, &draft, &teams);
    apply_save(&client, &plan).await?;

    println!(
        "{} Updated {} ({} write{})",
        "✓".green().bold(),
        draft.username.green(),
        plan.write_count(),
        if plan.write_count() == 1 { "" } else { "s" }
    );

    for write in &plan.member_writes {
        let team_name = teams
            .iter()
            .find(|t| t.id == write.team_id)
            .map(|t| t.name.as_str())
            .unwrap_or(write.team_id.as_str());
        println!(
            "  {} {} -> [{}]",
            "teams:".dimmed(),
            team_name.cyan(),
            write.members.join(", ")
        );
    }

    Ok(())
}
