//! Applies a user edit and keeps the team member lists in agreement with
//! the "user belongs to one team" view. The write set is planned as pure
//! data first, then applied as sequential PATCHes; a failure aborts the
//! remaining writes and whatever already landed stays (no rollback, last
//! write wins).

use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::constants::{TEAMS, USERS};
use crate::error::OctoResult;
use crate::logging::{log_debug, log_info};
use crate::models::{Team, User};

use super::find_team_of;

/// Lifecycle of a save operation as surfaced to the edit UI.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveState {
    Idle,
    Saving,
    Success,
    Failed(String),
}

/// In-progress form values for a user edit. Discarded on cancel or after a
/// successful save-and-close.
#[derive(Debug, Clone, Default)]
pub struct EditDraft {
    pub username: String,
    pub name: String,
    pub email: String,
    /// Empty means keep the current password.
    pub password: String,
    /// Empty means no team.
    pub team_id: String,
}

impl EditDraft {
    pub fn from_user(user: &User, teams: &[Team]) -> Self {
        let team_id = find_team_of(&user.username, teams)
            .map(|t| t.id.clone())
            .unwrap_or_default();

        Self {
            username: user.username.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            team_id,
        }
    }
}

/// One pending write against a team's member list.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberWrite {
    pub team_id: String,
    pub members: Vec<String>,
}

/// Everything a save will send: the user patch first, then the member
/// writes in order. Later writes depend on earlier ones having landed, so
/// the order is part of the contract.
#[derive(Debug, Clone)]
pub struct SavePlan {
    pub user_id: String,
    pub user_fields: Value,
    pub member_writes: Vec<MemberWrite>,
}

impl SavePlan {
    pub fn write_count(&self) -> usize {
        1 + self.member_writes.len()
    }
}

/// Compute the writes needed to bring the server in line with the draft.
///
/// The team collection passed in is the snapshot the edit was made
/// against; membership is read from it by value since the store enforces
/// no referential integrity. Three shapes come out:
/// - team changed: remove the original username from the old team, append
///   the new username to the target (idempotent — never a duplicate entry);
/// - team unchanged, username changed: rewrite the entry in place;
/// - neither changed: no member writes at all.
pub fn plan_save(original: &User, draft: &EditDraft, teams: &[Team]) -> SavePlan {
    let mut user_fields = json!({
        "username": draft.username,
        "name": draft.name,
        "email": draft.email,
    });
    if !draft.password.is_empty() {
        user_fields["password"] = json!(draft.password);
    }

    let mut member_writes = Vec::new();

    let old_team = find_team_of(&original.username, teams);
    let old_team_id = old_team.map(|t| t.id.as_str()).unwrap_or("");

    if draft.team_id != old_team_id {
        if let Some(old) = old_team {
            let members: Vec<String> = old
                .member_list()
                .into_iter()
                .filter(|m| m != &original.username)
                .collect();
            member_writes.push(MemberWrite {
                team_id: old.id.clone(),
                members,
            });
        }

        if !draft.team_id.is_empty() {
            // A target id that no longer resolves plans no add; the next
            // re-fetch surfaces the stale selection to the user.
            if let Some(target) = teams.iter().find(|t| t.id == draft.team_id) {
                let mut members = target.member_list();
                if !members.iter().any(|m| m == &draft.username) {
                    members.push(draft.username.clone());
                }
                member_writes.push(MemberWrite {
                    team_id: target.id.clone(),
                    members,
                });
            }
        }
    } else if let Some(old) = old_team {
        if draft.username != original.username {
            let members: Vec<String> = old
                .member_list()
                .into_iter()
                .map(|m| {
                    if m == original.username {
                        draft.username.clone()
                    } else {
                        m
                    }
                })
                .collect();
            member_writes.push(MemberWrite {
                team_id: old.id.clone(),
                members,
            });
        }
    }

    SavePlan {
        user_id: original.id.clone(),
        user_fields,
        member_writes,
    }
}

/// Issue the planned writes in order. Each step may fail and aborts the
/// rest; partial writes are not compensated. Callers re-fetch both
/// collections after success rather than trusting local state.
pub async fn apply_save(client: &ApiClient, plan: &SavePlan) -> OctoResult<()> {
    log_debug(&format!(
        "applying save: user {} plus {} member write(s)",
        plan.user_id,
        plan.member_writes.len()
    ));

    let _user: User = client.patch(USERS, &plan.user_id, &plan.user_fields).await?;
    log_info(&format!("patched user {}", plan.user_id));

    for write in &plan.member_writes {
        let body = json!({ "members": write.members });
        let _team: Team = client.patch(TEAMS, &write.team_id, &body).await?;
        log_info(&format!(
            "patched team {} members ({} entries)",
            write.team_id,
            write.members.len()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: &str, username: &str) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            name: "Test User".to_string(),
            email: format!("{}@example.com", username),
        }
    }

    fn team(id: &str, members: Value) -> Team {
        Team {
            id: id.to_string(),
            name: format!("Team {}", id),
            members,
        }
    }

    fn draft_for(user: &User, teams: &[Team]) -> EditDraft {
        EditDraft::from_user(user, teams)
    }

    #[test]
    fn test_team_move_removes_then_adds() {
        let teams = vec![
            team("T1", json!(["alice", "bob"])),
            team("T2", json!(["carol"])),
        ];
        let alice = user("u1", "alice");

        let mut draft = draft_for(&alice, &teams);
        assert_eq!(draft.team_id, "T1");
        draft.team_id = "T2".to_string();

        let plan = plan_save(&alice, &draft, &teams);

        assert_eq!(
            plan.member_writes,
            vec![
                MemberWrite {
                    team_id: "T1".to_string(),
                    members: vec!["bob".to_string()],
                },
                MemberWrite {
                    team_id: "T2".to_string(),
                    members: vec!["carol".to_string(), "alice".to_string()],
                },
            ]
        );
        assert_eq!(plan.user_fields["username"], "alice");
    }

    #[test]
    fn test_rename_within_team_keeps_position() {
        let teams = vec![team("T1", json!(["alice", "bob"]))];
        let alice = user("u1", "alice");

        let mut draft = draft_for(&alice, &teams);
        draft.username = "alicia".to_string();

        let plan = plan_save(&alice, &draft, &teams);

        assert_eq!(
            plan.member_writes,
            vec![MemberWrite {
                team_id: "T1".to_string(),
                members: vec!["alicia".to_string(), "bob".to_string()],
            }]
        );
    }

    #[test]
    fn test_leave_team_only_removes() {
        let teams = vec![
            team("T1", json!(["alice", "bob"])),
            team("T2", json!(["carol"])),
        ];
        let alice = user("u1", "alice");

        let mut draft = draft_for(&alice, &teams);
        draft.team_id.clear();

        let plan = plan_save(&alice, &draft, &teams);

        assert_eq!(
            plan.member_writes,
            vec![MemberWrite {
                team_id: "T1".to_string(),
                members: vec!["bob".to_string()],
            }]
        );
    }

    #[test]
    fn test_unchanged_draft_plans_no_member_writes() {
        let teams = vec![team("T1", json!(["alice", "bob"]))];
        let alice = user("u1", "alice");

        let draft = draft_for(&alice, &teams);
        let plan = plan_save(&alice, &draft, &teams);

        assert!(plan.member_writes.is_empty());
        assert_eq!(plan.write_count(), 1);
    }

    #[test]
    fn test_join_is_idempotent() {
        // The target already lists the username: the write goes out (the
        // list is re-asserted) but no duplicate entry is produced.
        let teams = vec![team("T2", json!(["carol", "alice"]))];
        let alice = user("u1", "alice");

        let mut draft = draft_for(&alice, &teams);
        // No old team: from_user found alice already in T2, so force the
        // "joining from nowhere" shape seen when membership data is stale.
        let unowned = user("u1", "dave");
        let mut draft2 = EditDraft::from_user(&unowned, &teams);
        draft2.team_id = "T2".to_string();
        draft2.username = "alice".to_string();

        let plan = plan_save(&unowned, &draft2, &teams);
        assert_eq!(
            plan.member_writes,
            vec![MemberWrite {
                team_id: "T2".to_string(),
                members: vec!["carol".to_string(), "alice".to_string()],
            }]
        );

        // And re-running the no-op save: nothing to write.
        draft.team_id = "T2".to_string();
        let plan = plan_save(&alice, &draft, &teams);
        assert!(plan.member_writes.is_empty());
    }

    #[test]
    fn test_unresolvable_target_plans_no_add() {
        let teams = vec![team("T1", json!(["alice"]))];
        let alice = user("u1", "alice");

        let mut draft = draft_for(&alice, &teams);
        draft.team_id = "deleted-team".to_string();

        let plan = plan_save(&alice, &draft, &teams);

        // Removal still happens; the add is silently skipped.
        assert_eq!(
            plan.member_writes,
            vec![MemberWrite {
                team_id: "T1".to_string(),
                members: Vec::new(),
            }]
        );
    }

    #[test]
    fn test_password_sent_only_when_provided() {
        let teams: Vec<Team> = Vec::new();
        let alice = user("u1", "alice");

        let draft = draft_for(&alice, &teams);
        let plan = plan_save(&alice, &draft, &teams);
        assert!(plan.user_fields.get("password").is_none());

        let mut draft = draft_for(&alice, &teams);
        draft.password = "hunter2".to_string();
        let plan = plan_save(&alice, &draft, &teams);
        assert_eq!(plan.user_fields["password"], "hunter2");
    }

    #[test]
    fn test_repr_members_survive_a_move() {
        let teams = vec![
            team("T1", json!("['alice', 'bob']")),
            team("T2", json!("['carol']")),
        ];
        let alice = user("u1", "alice");

        let mut draft = draft_for(&alice, &teams);
        draft.team_id = "T2".to_string();

        let plan = plan_save(&alice, &draft, &teams);
        assert_eq!(plan.member_writes[0].members, vec!["bob"]);
        assert_eq!(plan.member_writes[1].members, vec!["carol", "alice"]);
    }
}
