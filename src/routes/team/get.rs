use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::TeamView;

#[derive(Deserialize)]
pub struct TeamQuery {
    pub team_name: String,
}

#[get("/get")]
async fn get(
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<TeamQuery>,
) -> ApiResult<TeamView> {
    if query.team_name.is_empty() {
        return Err(AppError::Validation("team_name is required".into()));
    }

    let detail = db.get_team(&query.team_name).await?;
    Ok(ApiResponse::Ok(TeamView::from(detail)))
}
