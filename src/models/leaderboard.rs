use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LeaderboardEntry {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub username: String,
    pub score: i64,
    /// Older records predate the calories column.
    #[serde(default)]
    pub calories: Option<i64>,
}
