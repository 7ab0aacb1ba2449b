use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Workout {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Usually a JSON array of exercise names; tolerate anything else by
    /// rendering it raw.
    #[serde(default)]
    pub exercises: Value,
}

impl Workout {
    /// Exercise names when the field is a proper list, None otherwise.
    pub fn exercise_names(&self) -> Option<Vec<String>> {
        match &self.exercises {
            Value::Array(items) => Some(
                items
                    .iter()
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            _ => None,
        }
    }
}
