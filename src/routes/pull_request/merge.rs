use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::pull_request::{PrEnvelope, PrView, RPrMerge};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/merge")]
async fn merge(
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RPrMerge>,
) -> ApiResult<PrEnvelope> {
    if data.pull_request_id.is_empty() {
        return Err(AppError::Validation("pull_request_id is required".into()));
    }

    let detail = db.merge_pr(&data.pull_request_id).await?;
    Ok(ApiResponse::Ok(PrEnvelope {
        pr: PrView::from(detail),
    }))
}
