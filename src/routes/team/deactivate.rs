use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{MassDeactivateOutcome, RMassDeactivate};

/// Bulk deactivation with exclusions. PRs left without an active reviewer
/// because no candidate existed are not an error here; they simply stay
/// as they are.
#[post("/deactivate")]
async fn deactivate(
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RMassDeactivate>,
) -> ApiResult<MassDeactivateOutcome> {
    if data.team_name.is_empty() {
        return Err(AppError::Validation("team_name is required".into()));
    }

    let outcome = db
        .mass_deactivate(&data.team_name, &data.exclude_users)
        .await?;
    Ok(ApiResponse::Ok(outcome))
}
