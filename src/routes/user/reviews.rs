use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::pull_request::{AssignedReviews, PrShort};
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Deserialize)]
pub struct ReviewQuery {
    pub user_id: String,
}

#[get("/getReview")]
async fn get_review(
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ReviewQuery>,
) -> ApiResult<AssignedReviews> {
    if query.user_id.is_empty() {
        return Err(AppError::Validation("user_id is required".into()));
    }

    let details = db.list_prs_assigned_to(&query.user_id).await?;
    Ok(ApiResponse::Ok(AssignedReviews {
        user_id: query.user_id.clone(),
        pull_requests: details.iter().map(PrShort::from).collect(),
    }))
}
