use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Activity {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub username: String,
    pub activity_type: String,
    /// Duration in minutes.
    pub duration: f64,
    pub date: String,
}
