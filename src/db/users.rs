use crate::db::postgres_service::PostgresService;
use crate::db::teams::team_of_user;
use crate::types::error::AppError;
use chrono::Utc;
use entity::user::{self, ActiveModel as UserActive, Entity as User};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl PostgresService {
    /// Flips the activity flag and returns the user together with their team
    /// name, when affiliated. Existing reviewer assignments are untouched;
    /// activity only gates future selection.
    pub async fn set_user_active(
        &self,
        user_id: &str,
        active: bool,
    ) -> Result<(user::Model, Option<String>), AppError> {
        let existing = User::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut am: UserActive = existing.into();
        am.is_active = Set(active);
        am.updated_at = Set(Utc::now());
        let updated = am.update(&self.db).await?;

        let team_name = team_of_user(&self.db, user_id).await?;
        Ok((updated, team_name))
    }
}
