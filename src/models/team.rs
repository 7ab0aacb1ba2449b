use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::membership::parse_members;

/// A team and its member list — the authoritative membership relation.
/// `members` is kept raw because the backing store serializes it either as
/// a JSON array or as a foreign textual list repr.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Team {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub members: Value,
}

impl Team {
    /// The member usernames, normalized to a canonical ordered sequence.
    pub fn member_list(&self) -> Vec<String> {
        parse_members(&self.members)
    }
}
