use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::client::ApiClient;
use crate::config::get_api_url;
use crate::constants::{ACTIVITIES, LEADERBOARD, SAVE_CLOSE_TICKS, TEAMS, USERS, WORKOUTS};
use crate::error::OctoResult;
use crate::logging::{log_error, log_info};
use crate::membership::reconciler::{apply_save, plan_save, EditDraft, SaveState};
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Users,
    Teams,
    Activities,
    Leaderboard,
    Workouts,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Users,
        View::Teams,
        View::Activities,
        View::Leaderboard,
        View::Workouts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Users => "Users",
            View::Teams => "Teams",
            View::Activities => "Activities",
            View::Leaderboard => "Leaderboard",
            View::Workouts => "Workouts",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    fn next(self) -> View {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> View {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Edit form fields, in display order. The team row is a picker, the rest
/// are text inputs.
pub const EDIT_FIELDS: [&str; 5] = ["Full Name", "Username", "Email", "New Password", "Team"];
pub const TEAM_FIELD: usize = 4;

pub struct EditPopup {
    /// The record as it was fetched; the reconciler diffs the draft
    /// against this.
    pub user: User,
    pub draft: EditDraft,
    pub field: usize,
    pub save_state: SaveState,
    /// Ticks left before the popup closes itself after a successful save.
    pub close_in: Option<u8>,
}

impl EditPopup {
    fn next_field(&mut self) {
        self.field = (self.field + 1) % EDIT_FIELDS.len();
    }

    fn prev_field(&mut self) {
        self.field = (self.field + EDIT_FIELDS.len() - 1) % EDIT_FIELDS.len();
    }

    fn active_input(&mut self) -> Option<&mut String> {
        match self.field {
            0 => Some(&mut self.draft.name),
            1 => Some(&mut self.draft.username),
            2 => Some(&mut self.draft.email),
            3 => Some(&mut self.draft.password),
            _ => None,
        }
    }
}

pub struct DashboardApp {
    pub client: ApiClient,
    pub view: View,
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub activities: Vec<Activity>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub workouts: Vec<Workout>,
    pub selected: usize,
    pub loading: bool,
    pub error_message: Option<String>,
    pub popup: Option<EditPopup>,
    pub should_quit: bool,
    /// Set by key handling; the main loop performs the async work.
    pub pending_refresh: bool,
    pub pending_save: bool,
}

impl DashboardApp {
    pub async fn new() -> OctoResult<Self> {
        let api_url = get_api_url()?;
        let client = ApiClient::new(api_url);

        let mut app = Self {
            client,
            view: View::Users,
            users: Vec::new(),
            teams: Vec::new(),
            activities: Vec::new(),
            leaderboard: Vec::new(),
            workouts: Vec::new(),
            selected: 0,
            loading: false,
            error_message: None,
            popup: None,
            should_quit: false,
            pending_refresh: false,
            pending_save: false,
        };

        // A dead server still gets a dashboard; the error shows in the body.
        app.refresh().await;
        Ok(app)
    }

    pub fn row_count(&self) -> usize {
        match self.view {
            View::Users => self.users.len(),
            View::Teams => self.teams.len(),
            View::Activities => self.activities.len(),
            View::Leaderboard => self.leaderboard.len(),
            View::Workouts => self.workouts.len(),
        }
    }

    /// Re-fetch the active view's collection from the server. Loading and
    /// error are mutually exclusive; whichever fetch fails first wins.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error_message = None;

        let result = match self.view {
            View::Users => self.fetch_users_and_teams().await,
            View::Teams => match self.client.list(TEAMS).await {
                Ok(teams) => {
                    self.teams = teams;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            View::Activities => match self.client.list(ACTIVITIES).await {
                Ok(activities) => {
                    self.activities = activities;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            View::Leaderboard => match self.client.list(LEADERBOARD).await {
                Ok(entries) => {
                    self.leaderboard = entries;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            View::Workouts => match self.client.list(WORKOUTS).await {
                Ok(workouts) => {
                    self.workouts = workouts;
                    Ok(())
                }
                Err(e) => Err(e),
            },
        };

        self.loading = false;
        if let Err(e) = result {
            log_error(&format!("refresh failed for {}: {}", self.view.title(), e));
            self.error_message = Some(format!("Failed to load {}: {}", self.view.title(), e));
        }

        if self.selected >= self.row_count() {
            self.selected = self.row_count().saturating_sub(1);
        }
    }

    /// The users table joins against teams for its Team column, so both
    /// collections load together.
    async fn fetch_users_and_teams(&mut self) -> OctoResult<()> {
        self.users = self.client.list(USERS).await?;
        self.teams = self.client.list(TEAMS).await?;
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.popup.is_some() {
            self.handle_popup_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Char('r') => self.pending_refresh = true,
            KeyCode::Tab => self.switch_view(self.view.next()),
            KeyCode::BackTab => self.switch_view(self.view.prev()),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = (c as u8 - b'1') as usize;
                self.switch_view(View::ALL[idx]);
            }
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit(),
            _ => {}
        }
    }

    fn handle_popup_key(&mut self, key: KeyEvent) {
        let Some(popup) = self.popup.as_mut() else { return };

        // A save in flight or a closing popup ignores input.
        if popup.save_state == SaveState::Saving || popup.close_in.is_some() {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            popup.save_state = SaveState::Saving;
            self.pending_save = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                // Draft discarded; a failed save keeps whatever partial
                // writes already landed until the next refresh.
                self.popup = None;
                self.pending_refresh = true;
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => popup.next_field(),
            KeyCode::BackTab | KeyCode::Up => popup.prev_field(),
            KeyCode::Left if popup.field == TEAM_FIELD => {
                Self::cycle_team(&mut popup.draft.team_id, &self.teams, false);
            }
            KeyCode::Right if popup.field == TEAM_FIELD => {
                Self::cycle_team(&mut popup.draft.team_id, &self.teams, true);
            }
            KeyCode::Char(c) => {
                if let Some(input) = popup.active_input() {
                    input.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = popup.active_input() {
                    input.pop();
                }
            }
            _ => {}
        }
    }

    /// Step through the team options: "no team", then each team in order.
    fn cycle_team(team_id: &mut String, teams: &[Team], forward: bool) {
        let count = teams.len() + 1;
        let current = teams
            .iter()
            .position(|t| t.id == *team_id)
            .map(|i| i + 1)
            .unwrap_or(0);

        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };

        *team_id = if next == 0 {
            String::new()
        } else {
            teams[next - 1].id.clone()
        };
    }

    fn switch_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.selected = 0;
            self.pending_refresh = true;
        }
    }

    fn move_selection_down(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    fn move_selection_up(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = if self.selected == 0 {
                count - 1
            } else {
                self.selected - 1
            };
        }
    }

    fn open_edit(&mut self) {
        if self.view != View::Users {
            return;
        }
        let Some(user) = self.users.get(self.selected) else { return };

        let draft = EditDraft::from_user(user, &self.teams);
        self.popup = Some(EditPopup {
            user: user.clone(),
            draft,
            field: 0,
            save_state: SaveState::Idle,
            close_in: None,
        });
    }

    /// Run the reconciliation save for the open popup. Called from the
    /// main loop so the UI can show the Saving state first.
    pub async fn submit_save(&mut self) {
        let (user, draft) = match self.popup.as_mut() {
            Some(popup) => {
                popup.save_state = SaveState::Saving;
                (popup.user.clone(), popup.draft.clone())
            }
            None => return,
        };

        let plan = plan_save(&user, &draft, &self.teams);
        match apply_save(&self.client, &plan).await {
            Ok(()) => {
                log_info(&format!("saved user {}", draft.username));
                // Local state is never trusted after a write: re-fetch both
                // collections before showing success.
                self.refresh().await;
                if let Some(popup) = self.popup.as_mut() {
                    popup.save_state = SaveState::Success;
                    popup.close_in = Some(SAVE_CLOSE_TICKS);
                }
            }
            Err(e) => {
                log_error(&format!("save failed for {}: {}", draft.username, e));
                if let Some(popup) = self.popup.as_mut() {
                    popup.save_state = SaveState::Failed(e.to_string());
                }
            }
        }
    }

    pub fn on_tick(&mut self) {
        let close_now = match self.popup.as_mut() {
            Some(popup) => match popup.close_in {
                Some(0) => true,
                Some(ticks) => {
                    popup.close_in = Some(ticks - 1);
                    false
                }
                None => false,
            },
            None => false,
        };

        if close_now {
            self.popup = None;
        }
    }

    pub fn team_name_for(&self, team_id: &str) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .map(|t| t.name.as_str())
    }
}
