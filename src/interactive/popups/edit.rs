use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::formatting::utils::truncate;
use crate::interactive::app::{DashboardApp, EDIT_FIELDS, TEAM_FIELD};
use crate::interactive::layout::centered_popup;
use crate::membership::reconciler::SaveState;

/// Draw the user edit popup: four text inputs, a team picker row, and a
/// status banner wired to the save state machine.
pub fn draw(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let Some(popup) = &app.popup else { return };

    let width: u16 = 58;
    let height: u16 = (EDIT_FIELDS.len() as u16) * 2 + 5;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Edit User — {} ", popup.user.username))
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = Vec::new();

    for (i, label) in EDIT_FIELDS.iter().enumerate() {
        let active = i == popup.field;

        let value = match i {
            0 => popup.draft.name.clone(),
            1 => popup.draft.username.clone(),
            2 => popup.draft.email.clone(),
            3 => "•".repeat(popup.draft.password.len()),
            _ => match app.team_name_for(&popup.draft.team_id) {
                Some(name) => name.to_string(),
                None => "— No team —".to_string(),
            },
        };

        let shown = if i == TEAM_FIELD && active {
            format!("◄ {} ►", value)
        } else if i == 3 && value.is_empty() {
            "(leave blank to keep current)".to_string()
        } else {
            value
        };

        let value_style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if i == 3 && popup.draft.password.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<14}", label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!(" {} ", truncate(&shown, 36)), value_style),
        ]));
        lines.push(Line::default());
    }

    let banner = match &popup.save_state {
        SaveState::Idle => Line::from(Span::styled(
            "",
            Style::default().fg(Color::DarkGray),
        )),
        SaveState::Saving => Line::from(Span::styled(
            " Saving…",
            Style::default().fg(Color::Yellow),
        )),
        SaveState::Success => Line::from(Span::styled(
            " Saved successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        SaveState::Failed(message) => Line::from(Span::styled(
            format!(" {}", truncate(message, (width as usize).saturating_sub(4))),
            Style::default().fg(Color::Red),
        )),
    };
    lines.push(banner);

    let form = Paragraph::new(lines);
    frame.render_widget(form, inner);
}
