use std::collections::HashMap;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::team::TeamDetail;
use crate::types::user::MemberInput;
use chrono::Utc;
use entity::team::{ActiveModel as TeamActive, Entity as Team};
use entity::team_member::{self, ActiveModel as TeamMemberActive, Entity as TeamMember};
use entity::user::{self, ActiveModel as UserActive, Entity as User};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// Team name for a user, if any. A user effectively belongs to one team; the
/// oldest membership wins should the join table ever hold more.
pub(crate) async fn team_of_user<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> Result<Option<String>, AppError> {
    Ok(TeamMember::find()
        .filter(team_member::Column::UserId.eq(user_id))
        .order_by_asc(team_member::Column::CreatedAt)
        .one(conn)
        .await?
        .map(|m| m.team_name))
}

/// Full roster of a team in position order. Position order is the stable
/// selection order the assignment rules depend on.
pub(crate) async fn roster<C: ConnectionTrait>(
    conn: &C,
    team_name: &str,
) -> Result<Vec<user::Model>, AppError> {
    let memberships = TeamMember::find()
        .filter(team_member::Column::TeamName.eq(team_name))
        .order_by_asc(team_member::Column::Position)
        .all(conn)
        .await?;

    let ids: Vec<String> = memberships.iter().map(|m| m.user_id.clone()).collect();
    let users = User::find()
        .filter(user::Column::UserId.is_in(ids))
        .all(conn)
        .await?;

    let mut by_id: HashMap<String, user::Model> =
        users.into_iter().map(|u| (u.user_id.clone(), u)).collect();
    Ok(memberships
        .iter()
        .filter_map(|m| by_id.remove(&m.user_id))
        .collect())
}

impl PostgresService {
    /// Creates a team and upserts its roster in one transaction. Fails with
    /// `TeamExists` on a duplicate name without committing any member.
    pub async fn create_team(&self, name: &str, members: &[MemberInput]) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if Team::find_by_id(name).one(&txn).await?.is_some() {
            return Err(AppError::TeamExists);
        }

        let now = Utc::now();
        Team::insert(TeamActive {
            name: Set(name.to_owned()),
            created_at: Set(now),
        })
        .exec(&txn)
        .await?;

        for (position, m) in members.iter().enumerate() {
            User::insert(UserActive {
                user_id: Set(m.user_id.clone()),
                username: Set(m.username.clone()),
                is_active: Set(m.is_active),
                created_at: Set(now),
                updated_at: Set(now),
            })
            .on_conflict(
                OnConflict::column(user::Column::UserId)
                    .update_columns([
                        user::Column::Username,
                        user::Column::IsActive,
                        user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

            TeamMember::insert(TeamMemberActive {
                team_name: Set(name.to_owned()),
                user_id: Set(m.user_id.clone()),
                position: Set(position as i32),
                created_at: Set(now),
            })
            .on_conflict(
                OnConflict::columns([
                    team_member::Column::TeamName,
                    team_member::Column::UserId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn get_team(&self, name: &str) -> Result<TeamDetail, AppError> {
        let team = Team::find_by_id(name)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        let members = roster(&self.db, &team.name).await?;
        Ok(TeamDetail {
            name: team.name,
            members,
        })
    }
}
