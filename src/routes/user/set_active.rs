use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RSetActive, UserEnvelope, UserView};

#[post("/setIsActive")]
async fn set_is_active(
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RSetActive>,
) -> ApiResult<UserEnvelope> {
    if data.user_id.is_empty() {
        return Err(AppError::Validation("user_id is required".into()));
    }

    let (user, team_name) = db.set_user_active(&data.user_id, data.is_active).await?;
    Ok(ApiResponse::Ok(UserEnvelope {
        user: UserView::with_team(user, team_name),
    }))
}
