use crate::types::user::{MemberInput, UserView};
use entity::user;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RTeamCreate {
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<MemberInput>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RMassDeactivate {
    pub team_name: String,
    #[serde(default)]
    pub exclude_users: Vec<String>,
}

/// Team with its roster in position order, as held by the store.
#[derive(Debug)]
pub struct TeamDetail {
    pub name: String,
    pub members: Vec<user::Model>,
}

#[derive(Serialize, Debug)]
pub struct TeamView {
    pub team_name: String,
    pub members: Vec<UserView>,
}

impl From<TeamDetail> for TeamView {
    fn from(detail: TeamDetail) -> Self {
        TeamView {
            team_name: detail.name,
            members: detail
                .members
                .into_iter()
                .map(UserView::from_model)
                .collect(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct TeamEnvelope {
    pub team: TeamView,
}

/// Result of a bulk deactivation. `reassigned_prs` lists one entry per
/// swapped reviewer link, so a PR that lost both reviewers appears twice.
#[derive(Serialize, Debug)]
pub struct MassDeactivateOutcome {
    pub team_name: String,
    pub deactivated_users: u64,
    pub reassigned_prs: Vec<String>,
    pub reassigned_count: usize,
}
