use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::stats::StatsView;

#[get("/stats")]
async fn stats(db: web::Data<Arc<PostgresService>>) -> ApiResult<StatsView> {
    let stats = db.get_stats().await?;
    Ok(ApiResponse::Ok(stats))
}
