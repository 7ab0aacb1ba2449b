use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::utils::{format_date, format_duration, medal, truncate};
use crate::interactive::app::{DashboardApp, View};
use crate::interactive::layout::app_layout;
use crate::interactive::popups;
use crate::membership::find_team_of;

pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.size();
    let layout = app_layout(area);

    draw_tabs(frame, layout.tabs, app);
    draw_body(frame, layout.body, app);
    draw_footer(frame, layout.footer, app);

    if app.popup.is_some() {
        popups::edit::draw(frame, area, app);
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let mut spans: Vec<Span> = vec![Span::styled(
        " OctoFit ",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, view) in View::ALL.iter().enumerate() {
        spans.push(Span::raw(" "));
        let label = format!(" {}:{} ", i + 1, view.title());
        let style = if *view == app.view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
    }

    let tabs = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, area);
}

fn draw_body(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let title = format!(" {} ({}) ", app.view.title(), app.row_count());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));

    if app.loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if let Some(error) = &app.error_message {
        let error = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(error, area);
        return;
    }

    let inner_height = area.height.saturating_sub(3) as usize; // borders + header row
    let scroll_offset = if app.selected >= inner_height && inner_height > 0 {
        app.selected - inner_height + 1
    } else {
        0
    };

    let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(Span::styled(
        header_row(app.view),
        Style::default().add_modifier(Modifier::BOLD),
    )))];

    items.extend(
        (0..app.row_count())
            .skip(scroll_offset)
            .take(inner_height)
            .map(|i| {
                let style = if i == app.selected {
                    Style::default()
                        .bg(Color::Rgb(30, 35, 50))
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(Span::styled(data_row(app, i), style)))
            }),
    );

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn header_row(view: View) -> String {
    match view {
        View::Users => format!(
            " {:<4} {:<20} {:<16} {:<28} {:<16}",
            "#", "Name", "Username", "Email", "Team"
        ),
        View::Teams => format!(" {:<4} {:<20} {}", "#", "Team", "Members"),
        View::Activities => format!(
            " {:<4} {:<16} {:<18} {:<10} {:<14}",
            "#", "Username", "Activity", "Duration", "Date"
        ),
        View::Leaderboard => format!(
            " {:<6} {:<16} {:<8} {:<10}",
            "Rank", "Username", "Score", "Calories"
        ),
        View::Workouts => format!(" {:<4} {:<20} {:<34} {}", "#", "Name", "Description", "Exercises"),
    }
}

fn data_row(app: &DashboardApp, i: usize) -> String {
    match app.view {
        View::Users => {
            let user = &app.users[i];
            let team = find_team_of(&user.username, &app.teams)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "No team".to_string());
            let name = if user.name.is_empty() { "—" } else { &user.name };
            format!(
                " {:<4} {:<20} {:<16} {:<28} {:<16}",
                i + 1,
                truncate(name, 20),
                truncate(&user.username, 16),
                truncate(&user.email, 28),
                truncate(&team, 16)
            )
        }
        View::Teams => {
            let team = &app.teams[i];
            let members = team.member_list();
            let members = if members.is_empty() {
                "no members".to_string()
            } else {
                members.join(", ")
            };
            format!(
                " {:<4} {:<20} {}",
                i + 1,
                truncate(&team.name, 20),
                truncate(&members, 60)
            )
        }
        View::Activities => {
            let activity = &app.activities[i];
            format!(
                " {:<4} {:<16} {:<18} {:<10} {:<14}",
                i + 1,
                truncate(&activity.username, 16),
                truncate(&activity.activity_type, 18),
                format_duration(activity.duration),
                format_date(&activity.date)
            )
        }
        View::Leaderboard => {
            let entry = &app.leaderboard[i];
            let calories = entry
                .calories
                .map(|c| format!("{} kcal", c))
                .unwrap_or_else(|| "—".to_string());
            format!(
                " {:<6} {:<16} {:<8} {:<10}",
                medal(i + 1),
                truncate(&entry.username, 16),
                entry.score,
                calories
            )
        }
        View::Workouts => {
            let workout = &app.workouts[i];
            let exercises = match workout.exercise_names() {
                Some(names) => names.join(", "),
                None => workout.exercises.to_string(),
            };
            format!(
                " {:<4} {:<20} {:<34} {}",
                i + 1,
                truncate(&workout.name, 20),
                truncate(&workout.description, 34),
                truncate(&exercises, 40)
            )
        }
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let hints = if app.popup.is_some() {
        "Tab/↓: Next field  ←/→: Choose team  Ctrl-S: Save  Esc: Cancel"
    } else if app.view == View::Users {
        "j/k: Navigate  1-5/Tab: Switch view  e/Enter: Edit user  r: Refresh  q: Quit"
    } else {
        "j/k: Navigate  1-5/Tab: Switch view  r: Refresh  q: Quit"
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
