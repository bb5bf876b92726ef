use actix_web::{web, App};
use pr_review_service::db::postgres_service::PostgresService;
use pr_review_service::types::user::MemberInput;
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(pr_review_service::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn seed_team(&self, name: &str, members: &[MemberInput]) {
        self.db
            .create_team(name, members)
            .await
            .expect("Failed to seed team");
    }

    #[allow(dead_code)]
    pub async fn seed_pr(&self, pr_id: &str, title: &str, author_id: &str) -> Vec<String> {
        let detail = self
            .db
            .create_pr(pr_id, title, author_id)
            .await
            .expect("Failed to seed PR");
        detail.reviewers.into_iter().map(|r| r.user_id).collect()
    }
}
