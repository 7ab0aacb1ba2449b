use std::process;

use clap::{Arg, Command};

use octofit_cli::commands::{
    activities::handle_activities, config::handle_config, edit::handle_edit,
    leaderboard::handle_leaderboard, teams::handle_teams, users::handle_users,
    workouts::handle_workouts,
};
use octofit_cli::interactive::run_dashboard;
use octofit_cli::logging::{get_log_file_path, init_logging};

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help("Output format: table, json")
        .default_value("table")
}

#[tokio::main]
async fn main() {
    let app = Command::new("octofit")
        .about("OctoFit Tracker - browse the fitness dashboard from your terminal")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("users")
                .about("List users and their teams")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("teams")
                .about("List teams and their members")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("activities")
                .about("List logged activities")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("workouts")
                .about("List suggested workouts")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("leaderboard")
                .about("Show the leaderboard")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit a user's profile and team membership")
                .arg(
                    Arg::new("user")
                        .value_name("USERNAME")
                        .help("Username of the user to edit")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("username")
                        .long("username")
                        .value_name("USERNAME")
                        .help("New username"),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .value_name("NAME")
                        .help("New display name"),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .value_name("EMAIL")
                        .help("New email address"),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .value_name("PASSWORD")
                        .help("New password (omit to keep the current one)"),
                )
                .arg(
                    Arg::new("team")
                        .long("team")
                        .short('t')
                        .value_name("TEAM")
                        .help("Team name or id to move the user into"),
                )
                .arg(
                    Arg::new("no-team")
                        .long("no-team")
                        .help("Remove the user from their team")
                        .action(clap::ArgAction::SetTrue)
                        .conflicts_with("team"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Configure the OctoFit API endpoint")
                .arg(
                    Arg::new("api-url")
                        .long("api-url")
                        .value_name("URL")
                        .help("Set the API base URL"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the configured API URL")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("dashboard").about("Open the interactive dashboard"));

    let matches = app.get_matches();

    if let Err(e) = init_logging() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let result = match matches.subcommand() {
        Some(("users", sub_matches)) => handle_users(sub_matches).await,
        Some(("teams", sub_matches)) => handle_teams(sub_matches).await,
        Some(("activities", sub_matches)) => handle_activities(sub_matches).await,
        Some(("workouts", sub_matches)) => handle_workouts(sub_matches).await,
        Some(("leaderboard", sub_matches)) => handle_leaderboard(sub_matches).await,
        Some(("edit", sub_matches)) => handle_edit(sub_matches).await,
        Some(("config", sub_matches)) => handle_config(sub_matches).await,
        Some(("dashboard", _)) => run_dashboard().await,
        _ => {
            eprintln!("Unknown command. Use 'octofit --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(log_file) = get_log_file_path() {
            eprintln!("Log file: {}", log_file.display());
        }
        process::exit(1);
    }
}
