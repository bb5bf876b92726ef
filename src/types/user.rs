use entity::user;
use serde::{Deserialize, Serialize};

/// Roster entry in a team-creation request. Upsert semantics: a user_id seen
/// before gets its username and is_active overwritten.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MemberInput {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RSetActive {
    pub user_id: String,
    pub is_active: bool,
}

#[derive(Serialize, Debug)]
pub struct UserView {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

impl UserView {
    pub fn from_model(u: user::Model) -> Self {
        UserView {
            user_id: u.user_id,
            username: u.username,
            is_active: u.is_active,
            team_name: None,
        }
    }

    pub fn with_team(u: user::Model, team_name: Option<String>) -> Self {
        UserView {
            team_name,
            ..Self::from_model(u)
        }
    }
}

#[derive(Serialize, Debug)]
pub struct UserEnvelope {
    pub user: UserView,
}
