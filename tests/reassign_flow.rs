use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{client::TestClient, test_data, TestContext};

#[tokio::test]
async fn test_reassignment_swaps_in_place() {
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
    let reviewers = client.seed_pr("pr-1", "swap me", "u1").await;
    assert_eq!(reviewers, vec!["u2", "u3"]);

    let req = test::TestRequest::post()
        .uri("/pullRequest/reassign")
        .set_json(json!({"pull_request_id": "pr-1", "old_user_id": "u2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["replaced_by"], "u4");

    let ids: Vec<&str> = body["pr"]["assigned_reviewers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["user_id"].as_str().unwrap())
        .collect();
    // count unchanged, old id gone, new id once, slot preserved
    assert_eq!(ids, vec!["u4", "u3"]);
}

#[tokio::test]
async fn test_reassignment_on_merged_pr_fails() {
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
            ],
        )
        .await;
    let reviewers = client.seed_pr("pr-1", "done deal", "u1").await;
    ctx.db.merge_pr("pr-1").await.unwrap();

    let req = test::TestRequest::post()
        .uri("/pullRequest/reassign")
        .set_json(json!({"pull_request_id": "pr-1", "old_user_id": "u2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "PR_MERGED");

    // reviewer set untouched
    let detail = ctx.db.get_pr("pr-1").await.unwrap();
    let after: Vec<String> = detail.reviewers.into_iter().map(|r| r.user_id).collect();
    assert_eq!(after, reviewers);
}

#[tokio::test]
async fn test_reassigning_unassigned_reviewer_fails() {
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
    client.seed_pr("pr-1", "change", "u1").await; // reviewers u2, u3

    let req = test::TestRequest::post()
        .uri("/pullRequest/reassign")
        .set_json(json!({"pull_request_id": "pr-1", "old_user_id": "u4"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "NOT_ASSIGNED");
}

#[tokio::test]
async fn test_no_candidate_leaves_reviewers_unchanged() {
    // Scenario: the author is the only other active team member.
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client
        .seed_team(
            "backend",
            &[
                test_data::member("u1", true),
                test_data::member("u2", true),
                test_data::member("u3", false),
            ],
        )
        .await;
    let reviewers = client.seed_pr("pr-1", "stuck", "u1").await;
    assert_eq!(reviewers, vec!["u2"]);

    ctx.db.set_user_active("u2", false).await.unwrap();

    let req = test::TestRequest::post()
        .uri("/pullRequest/reassign")
        .set_json(json!({"pull_request_id": "pr-1", "old_user_id": "u2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "NO_CANDIDATE");

    let detail = ctx.db.get_pr("pr-1").await.unwrap();
    assert_eq!(detail.reviewers.len(), 1);
    assert_eq!(detail.reviewers[0].user_id, "u2");
}

#[tokio::test]
async fn test_reassignment_on_unknown_pr_fails() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/pullRequest/reassign")
        .set_json(json!({"pull_request_id": "pr-none", "old_user_id": "u1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
