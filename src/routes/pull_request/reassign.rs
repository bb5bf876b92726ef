use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::pull_request::{PrView, RPrReassign, ReassignEnvelope};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/reassign")]
async fn reassign(
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RPrReassign>,
) -> ApiResult<ReassignEnvelope> {
    if data.pull_request_id.is_empty() || data.old_user_id.is_empty() {
        return Err(AppError::Validation("Missing required fields".into()));
    }

    let (detail, new_reviewer_id) = db
        .reassign_reviewer(&data.pull_request_id, &data.old_user_id)
        .await?;

    Ok(ApiResponse::Ok(ReassignEnvelope {
        pr: PrView::from(detail),
        replaced_by: new_reviewer_id,
    }))
}
