use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{RTeamCreate, TeamEnvelope, TeamView};

#[post("/add")]
async fn add(
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RTeamCreate>,
) -> ApiResult<TeamEnvelope> {
    if data.team_name.is_empty() {
        return Err(AppError::Validation("team_name is required".into()));
    }
    if data.members.iter().any(|m| m.user_id.is_empty()) {
        return Err(AppError::Validation(
            "every member needs a user_id".into(),
        ));
    }

    db.create_team(&data.team_name, &data.members).await?;
    let detail = db.get_team(&data.team_name).await?;

    Ok(ApiResponse::Created(TeamEnvelope {
        team: TeamView::from(detail),
    }))
}
