//! Reviewer selection rules.
//!
//! Pure decision logic over an in-memory roster: the caller fetches the
//! roster (in stable position order, see `entity::team_member`) inside its
//! transaction and applies whatever these functions decide. Nothing here
//! touches the database, so the rules are deterministic for a given roster.

use entity::user;

/// Upper bound on reviewers assigned at PR creation.
pub const MAX_REVIEWERS: usize = 2;

/// Picks up to [`MAX_REVIEWERS`] reviewers for a new pull request: active
/// members of the author's team, excluding the author, first-come
/// first-served in roster order. Fewer than two (including zero) is valid.
pub fn select_reviewers<'a>(author_id: &str, roster: &'a [user::Model]) -> Vec<&'a user::Model> {
    roster
        .iter()
        .filter(|m| m.user_id != author_id && m.is_active)
        .take(MAX_REVIEWERS)
        .collect()
}

/// Picks a replacement for `old_reviewer_id`: the first roster member that is
/// active, not the outgoing reviewer, and not in `excluded_ids` (the PR's
/// current reviewer set plus its author). `None` means no candidate exists
/// and the reviewer set must be left untouched.
pub fn pick_replacement<'a>(
    old_reviewer_id: &str,
    roster: &'a [user::Model],
    excluded_ids: &[String],
) -> Option<&'a user::Model> {
    roster.iter().find(|m| {
        m.is_active
            && m.user_id != old_reviewer_id
            && !excluded_ids.iter().any(|id| *id == m.user_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn member(user_id: &str, is_active: bool) -> user::Model {
        let now = Utc::now();
        user::Model {
            user_id: user_id.to_string(),
            username: format!("user {}", user_id),
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    fn ids(picked: &[&user::Model]) -> Vec<String> {
        picked.iter().map(|m| m.user_id.clone()).collect()
    }

    #[test]
    fn skips_author_and_inactive_members() {
        // backend = {u1 active, u2 active, u3 inactive}, author u1
        let roster = vec![member("u1", true), member("u2", true), member("u3", false)];

        let picked = select_reviewers("u1", &roster);

        assert_eq!(ids(&picked), vec!["u2"]);
    }

    #[test]
    fn takes_first_two_in_roster_order() {
        let roster = vec![
            member("u1", true),
            member("u2", true),
            member("u3", true),
            member("u4", true),
        ];

        let picked = select_reviewers("u1", &roster);

        assert_eq!(ids(&picked), vec!["u2", "u3"]);
    }

    #[test]
    fn zero_reviewers_is_valid() {
        let roster = vec![member("u1", true), member("u2", false)];

        assert!(select_reviewers("u1", &roster).is_empty());
    }

    #[test]
    fn selection_never_includes_the_author() {
        let roster = vec![member("u1", true), member("u2", true), member("u3", true)];

        for author in ["u1", "u2", "u3"] {
            let picked = select_reviewers(author, &roster);
            assert!(picked.iter().all(|m| m.user_id != author));
            assert!(picked.len() <= MAX_REVIEWERS);
        }
    }

    #[test]
    fn replacement_respects_exclusions() {
        let roster = vec![
            member("u1", true),
            member("u2", false),
            member("u3", true),
            member("u4", true),
        ];
        // u2 steps down from a PR authored by u1, u3 already assigned
        let excluded = vec!["u2".to_string(), "u3".to_string(), "u1".to_string()];

        let picked = pick_replacement("u2", &roster, &excluded);

        assert_eq!(picked.map(|m| m.user_id.as_str()), Some("u4"));
    }

    #[test]
    fn no_candidate_when_only_author_remains_active() {
        // Scenario C: author u1 is the only other active member
        let roster = vec![member("u1", true), member("u2", false), member("u3", false)];
        let excluded = vec!["u2".to_string(), "u1".to_string()];

        assert!(pick_replacement("u2", &roster, &excluded).is_none());
    }

    #[test]
    fn replacement_is_first_qualifying_in_roster_order() {
        let roster = vec![
            member("u5", true),
            member("u4", true),
            member("u3", true),
        ];
        let excluded = vec!["u3".to_string()];

        let picked = pick_replacement("u3", &roster, &excluded);

        assert_eq!(picked.map(|m| m.user_id.as_str()), Some("u5"));
    }
}
