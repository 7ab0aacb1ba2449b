use colored::*;

use crate::membership::find_team_of;
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};

use super::utils::{format_date, format_duration, medal, truncate};

pub fn print_users(users: &[User], teams: &[Team], format: &str) {
    if users.is_empty() {
        println!("{}", "No users found.".dimmed());
        return;
    }

    if format == "json" {
        let json = serde_json::to_string_pretty(&users).unwrap();
        println!("{}", json);
        return;
    }

    println!("{}", "─".repeat(100).dimmed());
    println!(
        "{:<4} {:<22} {:<16} {:<30} {:<16}",
        "#".bold(),
        "Name".bold(),
        "Username".bold(),
        "Email".bold(),
        "Team".bold()
    );
    println!("{}", "─".repeat(100).dimmed());

    for (idx, user) in users.iter().enumerate() {
        let team = find_team_of(&user.username, teams);
        let name = if user.name.is_empty() {
            "—".dimmed()
        } else {
            user.name.normal()
        };

        println!(
            "{:<4} {:<22} {:<16} {:<30} {:<16}",
            (idx + 1).to_string().dimmed(),
            name,
            user.username.green(),
            user.email,
            match team {
                Some(team) => team.name.cyan(),
                None => "No team".dimmed(),
            }
        );
    }
    println!("{}", "─".repeat(100).dimmed());
}

pub fn print_teams(teams: &[Team], format: &str) {
    if teams.is_empty() {
        println!("{}", "No teams found.".dimmed());
        return;
    }

    if format == "json" {
        let json = serde_json::to_string_pretty(&teams).unwrap();
        println!("{}", json);
        return;
    }

    println!("{}", "Teams:".bold());
    for (idx, team) in teams.iter().enumerate() {
        let members = team.member_list();
        println!(
            "  {} {} ({}) - {}",
            (idx + 1).to_string().dimmed(),
            team.name.cyan(),
            format!("{} members", members.len()).dimmed(),
            if members.is_empty() {
                "no members".dimmed().to_string()
            } else {
                members.join(", ")
            }
        );
    }
}

pub fn print_activities(activities: &[Activity], format: &str) {
    if activities.is_empty() {
        println!("{}", "No activities found.".dimmed());
        return;
    }

    if format == "json" {
        let json = serde_json::to_string_pretty(&activities).unwrap();
        println!("{}", json);
        return;
    }

    println!("{}", "─".repeat(80).dimmed());
    println!(
        "{:<4} {:<16} {:<20} {:<12} {:<14}",
        "#".bold(),
        "Username".bold(),
        "Activity".bold(),
        "Duration".bold(),
        "Date".bold()
    );
    println!("{}", "─".repeat(80).dimmed());

    for (idx, activity) in activities.iter().enumerate() {
        println!(
            "{:<4} {:<16} {:<20} {:<12} {:<14}",
            (idx + 1).to_string().dimmed(),
            activity.username.green(),
            activity.activity_type.yellow(),
            format_duration(activity.duration),
            format_date(&activity.date).dimmed()
        );
    }
    println!("{}", "─".repeat(80).dimmed());
}

pub fn print_workouts(workouts: &[Workout], format: &str) {
    if workouts.is_empty() {
        println!("{}", "No workouts found.".dimmed());
        return;
    }

    if format == "json" {
        let json = serde_json::to_string_pretty(&workouts).unwrap();
        println!("{}", json);
        return;
    }

    for workout in workouts {
        println!("\n{} {}", "▸".cyan(), workout.name.bold());

        if !workout.description.trim().is_empty() {
            println!("  {}", truncate(workout.description.trim(), 70).dimmed());
        }

        match workout.exercise_names() {
            Some(exercises) if !exercises.is_empty() => {
                println!("  {}: {}", "Exercises".dimmed(), exercises.join(", ").magenta());
            }
            Some(_) => {}
            None => {
                // Not a list; show whatever the server sent.
                println!("  {}: {}", "Exercises".dimmed(), workout.exercises);
            }
        }
    }
    println!();
}

pub fn print_leaderboard(entries: &[LeaderboardEntry], format: &str) {
    if entries.is_empty() {
        println!("{}", "No leaderboard entries found.".dimmed());
        return;
    }

    if format == "json" {
        let json = serde_json::to_string_pretty(&entries).unwrap();
        println!("{}", json);
        return;
    }

    println!("{}", "─".repeat(60).dimmed());
    println!(
        "{:<6} {:<16} {:<10} {:<12}",
        "Rank".bold(),
        "Username".bold(),
        "Score".bold(),
        "Calories".bold()
    );
    println!("{}", "─".repeat(60).dimmed());

    for (idx, entry) in entries.iter().enumerate() {
        let rank = idx + 1;
        let username = if rank == 1 {
            entry.username.yellow().bold()
        } else {
            entry.username.green()
        };
        let calories = entry
            .calories
            .map(|c| format!("{} kcal", c))
            .unwrap_or_else(|| "—".to_string());

        println!(
            "{:<6} {:<16} {:<10} {:<12}",
            medal(rank),
            username,
            entry.score,
            calories.dimmed()
        );
    }
    println!("{}", "─".repeat(60).dimmed());
}
