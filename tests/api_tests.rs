mod common;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::{CannedFetcher, test_router};

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_company(app: &Router, name: &str, careers_url: Option<&str>) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/companies",
        Some(json!({ "name": name, "careersUrl": careers_url })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = test_router(CannedFetcher::default());
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "fmro-backend");
    assert_eq!(body["store"], "in-memory");
}

#[tokio::test]
async fn test_company_crud() {
    let app = test_router(CannedFetcher::default());
    let id = create_company(&app, "Unitree", Some("https://unitree.test/careers")).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/companies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Unitree");
    assert_eq!(body[0]["active"], true);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/companies/{}", id),
        Some(json!({ "active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], false);
    assert_eq!(body["careersUrl"], "https://unitree.test/careers");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/companies/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/v1/companies/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_bad_requests() {
    let app = test_router(CannedFetcher::default());
    create_company(&app, "Unitree", None).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/companies",
        Some(json!({ "name": "Unitree" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("already exists"));

    let (status, body) = send(&app, Method::POST, "/api/v1/companies", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = send(&app, Method::DELETE, "/api/v1/companies/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid path parameter: id");

    let (status, _) = send(&app, Method::GET, "/api/v1/jobs?companyId=nope", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/api/v1/applications?stage=Ghosted", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid stage: Ghosted");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/jobs",
        Some(json!({ "companyId": 999, "title": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_company_delete_cascades() {
    let app = test_router(CannedFetcher::default());
    let company_id = create_company(&app, "Deep Robotics", None).await;

    let (status, job) = send(
        &app,
        Method::POST,
        "/api/v1/jobs",
        Some(json!({ "companyId": company_id, "title": "Controls Intern" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(job["status"], "open");
    let job_id = job["id"].as_i64().unwrap();

    let (status, app_body) = send(
        &app,
        Method::POST,
        "/api/v1/applications",
        Some(json!({ "jobPostingId": job_id, "companyName": "Deep Robotics", "role": "Controls Intern" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let application_id = app_body["id"].as_i64().unwrap();

    send(&app, Method::DELETE, &format!("/api/v1/companies/{}", company_id), None).await;

    let (_, jobs) = send(&app, Method::GET, "/api/v1/jobs", None).await;
    assert!(jobs.as_array().unwrap().is_empty());

    let (_, apps) = send(&app, Method::GET, "/api/v1/applications", None).await;
    assert_eq!(apps[0]["id"].as_i64(), Some(application_id));
    assert!(apps[0]["jobPostingId"].is_null());
}

#[tokio::test]
async fn test_application_stage_flow_and_rounds() {
    let app = test_router(CannedFetcher::default());

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/applications",
        Some(json!({ "companyName": "AgiBot", "role": "Perception Intern", "stage": "hr" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["stage"], "HR");
    let id = created["id"].as_i64().unwrap();

    let advance = format!("/api/v1/applications/{}/advance", id);
    let (_, body) = send(&app, Method::POST, &advance, None).await;
    assert_eq!(body["stage"], "Offer");
    let (status, body) = send(&app, Method::POST, &advance, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stage"], "Offer");

    let (_, filtered) = send(&app, Method::GET, "/api/v1/applications?stage=offer", None).await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);

    let rounds = format!("/api/v1/applications/{}/rounds", id);
    for round_no in [2, 1] {
        let (status, _) = send(
            &app,
            Method::POST,
            &rounds,
            Some(json!({ "roundNo": round_no, "scheduledAt": "2026-03-02T09:00:00Z" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (_, listed) = send(&app, Method::GET, &rounds, None).await;
    let numbers: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["roundNo"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2]);

    let round_id = listed[0]["id"].as_i64().unwrap();
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/rounds/{}", round_id),
        Some(json!({ "outcome": "passed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["outcome"], "passed");
    assert_eq!(updated["scheduledAt"], "2026-03-02T09:00:00Z");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/applications/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/rounds/{}", round_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_crawl_then_review() {
    let fetcher = CannedFetcher::default().with_page(
        "https://unitree.test/careers",
        200,
        "<html><head><title>Unitree Internship Program</title></head></html>",
    );
    let app = test_router(fetcher);
    create_company(&app, "Unitree", Some("https://unitree.test/careers")).await;
    create_company(&app, "No Careers Page", None).await;

    let (status, run) = send(&app, Method::POST, "/api/v1/crawler/run", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(run["scannedCompanies"], 1);
    assert_eq!(run["queuedItems"], 1);

    let (_, run) = send(&app, Method::POST, "/api/v1/crawler/run", None).await;
    assert_eq!(run["queuedItems"], 0);
    assert_eq!(run["skippedDuplicates"], 1);

    let (_, pending) = send(&app, Method::GET, "/api/v1/review-queue?status=pending", None).await;
    assert_eq!(pending.as_array().unwrap().len(), 1);
    assert_eq!(pending[0]["payload"]["title"], "Unitree Intern");
    let review_id = pending[0]["id"].as_i64().unwrap();

    let (_, overview) = send(&app, Method::GET, "/api/v1/overview", None).await;
    assert_eq!(overview["pendingReviews"], 1);

    let approve = format!("/api/v1/review-queue/{}/approve", review_id);
    let (status, job) = send(&app, Method::POST, &approve, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(job["title"], "Unitree Intern");
    assert_eq!(job["applyUrl"], "https://unitree.test/careers");

    let (status, _) = send(&app, Method::POST, &approve, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, jobs) = send(&app, Method::GET, "/api/v1/jobs", None).await;
    assert_eq!(jobs.as_array().unwrap().len(), 1);

    // An open job with the same title and URL also counts as a duplicate.
    let (_, run) = send(&app, Method::POST, "/api/v1/crawler/run", None).await;
    assert_eq!(run["skippedDuplicates"], 1);

    let (status, _) = send(&app, Method::POST, "/api/v1/review-queue/999/reject", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_manual_review_reject() {
    let app = test_router(CannedFetcher::default());

    let (status, review) = send(
        &app,
        Method::POST,
        "/api/v1/review-queue",
        Some(json!({ "sourceType": "manual", "payload": { "title": "Maybe" }, "confidence": 0.3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["status"], "pending");

    let (status, rejected) = send(
        &app,
        Method::POST,
        &format!("/api/v1/review-queue/{}/reject", review["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rejected["status"], "rejected");
    assert!(rejected["reviewedAt"].is_string());

    let (_, pending) = send(&app, Method::GET, "/api/v1/review-queue?status=pending", None).await;
    assert!(pending.as_array().unwrap().is_empty());
}
