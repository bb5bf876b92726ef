use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::pull_request::{PrEnvelope, PrView, RPrCreate};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/create")]
async fn create(
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RPrCreate>,
) -> ApiResult<PrEnvelope> {
    if data.pull_request_id.is_empty()
        || data.pull_request_name.is_empty()
        || data.author_id.is_empty()
    {
        return Err(AppError::Validation("Missing required fields".into()));
    }

    let detail = db
        .create_pr(&data.pull_request_id, &data.pull_request_name, &data.author_id)
        .await?;

    Ok(ApiResponse::Created(PrEnvelope {
        pr: PrView::from(detail),
    }))
}
