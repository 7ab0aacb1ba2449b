//! Team membership is a derived relation: a user belongs to whichever team
//! lists their username. Nothing on the user record stores it, so reads
//! scan the team collection and writes go through the reconciler.

pub mod reconciler;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::logging::log_warn;
use crate::models::Team;

lazy_static! {
    static ref TRUE_TOKEN: Regex = Regex::new(r"\bTrue\b").unwrap();
    static ref FALSE_TOKEN: Regex = Regex::new(r"\bFalse\b").unwrap();
    static ref NONE_TOKEN: Regex = Regex::new(r"\bNone\b").unwrap();
}

/// Normalize a member-list field into an ordered list of usernames.
///
/// The backing store sometimes hands the list back as a textual repr with
/// single quotes and `True`/`False`/`None` literals instead of JSON. Those
/// strings are rewritten to JSON and parsed. Anything that does not come
/// out as a list of strings yields an empty list — this never errors.
pub fn parse_members(members: &Value) -> Vec<String> {
    match members {
        Value::Array(items) => string_items(items),
        Value::String(raw) => parse_list_repr(raw),
        _ => Vec::new(),
    }
}

fn parse_list_repr(raw: &str) -> Vec<String> {
    // "['alice', 'bob']" -> ["alice", "bob"]
    let json = raw.replace('\'', "\"");
    let json = TRUE_TOKEN.replace_all(&json, "true");
    let json = FALSE_TOKEN.replace_all(&json, "false");
    let json = NONE_TOKEN.replace_all(&json, "null");

    match serde_json::from_str::<Value>(&json) {
        Ok(Value::Array(items)) => string_items(&items),
        _ => Vec::new(),
    }
}

fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// The team whose member list contains `username`, if any.
///
/// Valid data has at most one owner per username; if more than one team
/// claims it we take the first and record a data-integrity warning.
pub fn find_team_of<'a>(username: &str, teams: &'a [Team]) -> Option<&'a Team> {
    let mut owners = teams
        .iter()
        .filter(|team| team.member_list().iter().any(|m| m == username));

    let first = owners.next();
    if first.is_some() && owners.next().is_some() {
        log_warn(&format!(
            "username '{}' appears in more than one team's member list",
            username
        ));
    }
    first
}
