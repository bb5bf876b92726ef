use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{client::TestClient, test_data, TestContext};

async fn active_flags(ctx: &TestContext, team: &str) -> Vec<(String, bool)> {
    ctx.db
        .get_team(team)
        .await
        .unwrap()
        .members
        .into_iter()
        .map(|m| (m.user_id, m.is_active))
        .collect()
}

#[tokio::test]
async fn test_mass_deactivate_reassigns_where_possible() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client
        .seed_team(
            "backend",
            &[
                test_data::member("u1", true),
                test_data::member("u2", true),
                test_data::member("u3", true),
                test_data::member("u4", true),
            ],
        )
        .await;
    let reviewers = client.seed_pr("pr-1", "caught in the purge", "u1").await;
    assert_eq!(reviewers, vec!["u2", "u3"]);

    let req = test::TestRequest::post()
        .uri("/team/deactivate")
        .set_json(json!({"team_name": "backend", "exclude_users": ["u4"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["team_name"], "backend");
    assert_eq!(body["deactivated_users"], 3);
    // u2's slot goes to u4; u3 has no candidate left and is skipped silently
    assert_eq!(body["reassigned_count"], 1);
    assert_eq!(body["reassigned_prs"].as_array().unwrap().len(), 1);
    assert_eq!(body["reassigned_prs"][0], "pr-1");

    let detail = ctx.db.get_pr("pr-1").await.unwrap();
    let ids: Vec<String> = detail.reviewers.iter().map(|r| r.user_id.clone()).collect();
    assert_eq!(ids, vec!["u4", "u3"]);
    // the unlucky PR keeps an inactive reviewer
    assert!(!detail.reviewers[1].is_active);

    assert_eq!(
        active_flags(&ctx, "backend").await,
        vec![
            ("u1".to_string(), false),
            ("u2".to_string(), false),
            ("u3".to_string(), false),
            ("u4".to_string(), true),
        ]
    );
}

#[tokio::test]
async fn test_mass_deactivate_is_idempotent_on_state() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client
        .seed_team(
            "backend",
            &[
                test_data::member("u1", true),
                test_data::member("u2", true),
                test_data::member("u3", true),
                test_data::member("u4", true),
            ],
        )
        .await;
    client.seed_pr("pr-1", "steady", "u1").await;

    let payload = json!({"team_name": "backend", "exclude_users": ["u4"]});

    let req = test::TestRequest::post()
        .uri("/team/deactivate")
        .set_json(&payload)
        .to_request();
    test::call_service(&app, req).await;

    let flags_after_first = active_flags(&ctx, "backend").await;
    let reviewers_after_first: Vec<String> = ctx
        .db
        .get_pr("pr-1")
        .await
        .unwrap()
        .reviewers
        .into_iter()
        .map(|r| r.user_id)
        .collect();

    let req = test::TestRequest::post()
        .uri("/team/deactivate")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let second: serde_json::Value = test::read_body_json(resp).await;

    // nothing left to reassign the second time
    assert_eq!(second["reassigned_count"], 0);
    assert_eq!(active_flags(&ctx, "backend").await, flags_after_first);
    let reviewers_after_second: Vec<String> = ctx
        .db
        .get_pr("pr-1")
        .await
        .unwrap()
        .reviewers
        .into_iter()
        .map(|r| r.user_id)
        .collect();
    assert_eq!(reviewers_after_second, reviewers_after_first);
}

#[tokio::test]
async fn test_mass_deactivate_skips_merged_prs() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client
        .seed_team(
            "backend",
            &[
                test_data::member("u1", true),
                test_data::member("u2", true),
                test_data::member("u3", true),
                test_data::member("u4", true),
            ],
        )
        .await;
    let reviewers = client.seed_pr("pr-1", "already shipped", "u1").await;
    ctx.db.merge_pr("pr-1").await.unwrap();

    let req = test::TestRequest::post()
        .uri("/team/deactivate")
        .set_json(json!({"team_name": "backend", "exclude_users": ["u4"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["reassigned_count"], 0);

    // merged PR keeps its (now inactive) reviewers
    let detail = ctx.db.get_pr("pr-1").await.unwrap();
    let after: Vec<String> = detail.reviewers.into_iter().map(|r| r.user_id).collect();
    assert_eq!(after, reviewers);
}

#[tokio::test]
async fn test_mass_deactivate_unknown_team_is_a_no_op() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/team/deactivate")
        .set_json(json!({"team_name": "ghosts", "exclude_users": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["deactivated_users"], 0);
    assert_eq!(body["reassigned_count"], 0);
}
