pub const API_URL_ENV: &str = "OCTOFIT_API_URL";
pub const CONFIG_FILE: &str = ".octofit-cli-config.json";

// REST collection names, appended to the base URL as /api/{resource}/
pub const USERS: &str = "users";
pub const TEAMS: &str = "teams";
pub const ACTIVITIES: &str = "activities";
pub const WORKOUTS: &str = "workouts";
pub const LEADERBOARD: &str = "leaderboard";

// Ticks (at the dashboard tick rate) to keep the "Saved" banner up before
// the edit popup auto-closes.
pub const SAVE_CLOSE_TICKS: u8 = 9;
