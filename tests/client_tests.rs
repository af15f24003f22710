mod common;

use fmro_backend::client::{ClientError, FmroApiClient, Preferences, TrackerState};
use fmro_backend::presentation::http::dto::{
    CreateApplicationRequestDto, CreateCompanyRequestDto, CreateJobPostingRequestDto,
    UpdateApplicationRequestDto,
};

use common::{CannedFetcher, spawn_server};

fn company(name: &str, careers_url: Option<&str>) -> CreateCompanyRequestDto {
    CreateCompanyRequestDto {
        name: name.to_string(),
        careers_url: careers_url.map(str::to_string),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_api_client_round_trip() {
    let base_url = spawn_server(CannedFetcher::default()).await;
    let client = FmroApiClient::new(base_url.trim_end_matches('/')).unwrap();
    assert_eq!(client.base_url(), base_url);

    let created = client.create_company(&company("Unitree", None)).await.unwrap();
    let job = client
        .create_job(&CreateJobPostingRequestDto {
            company_id: created.id,
            title: "Locomotion Intern".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(client.jobs(Some(created.id)).await.unwrap(), vec![job.clone()]);
    assert!(client.jobs(Some(created.id + 1)).await.unwrap().is_empty());

    let app = client
        .create_application(&CreateApplicationRequestDto {
            job_posting_id: Some(job.id),
            company_name: "Unitree".to_string(),
            role: job.title.clone(),
            ..Default::default()
        })
        .await
        .unwrap();
    let advanced = client.advance_application(app.id).await.unwrap();
    assert_eq!(advanced.stage, "OA");

    let overview = client.overview().await.unwrap();
    assert_eq!(overview.pending_reviews, 0);
}

#[tokio::test]
async fn test_api_errors_carry_status_and_message() {
    let base_url = spawn_server(CannedFetcher::default()).await;
    let client = FmroApiClient::new(&base_url).unwrap();

    client.create_company(&company("Unitree", None)).await.unwrap();
    let duplicate = client.create_company(&company("Unitree", None)).await.unwrap_err();
    match duplicate {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("already exists"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let missing = client
        .update_application(
            404,
            &UpdateApplicationRequestDto {
                stage: Some("OA".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(missing, ClientError::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_tracker_state_sync() {
    let base_url = spawn_server(CannedFetcher::default()).await;
    let preferences = Preferences {
        backend_base_url: base_url.clone(),
        ..Default::default()
    };
    let mut state = TrackerState::from_preferences(&preferences).unwrap();

    state.add_application("Deep Robotics", "Controls Intern").await;
    assert_eq!(state.error(), None);
    let id = state.applications()[0].id;
    assert!(id > 0);
    assert_eq!(state.selected_id(), Some(id));

    state.move_to_next_stage(id).await;
    state.mark_offer(id).await;
    state.refresh().await;
    assert_eq!(state.applications()[0].stage, "Offer");
    assert!(state.select_stage("Offer"));
    assert_eq!(state.visible_applications().len(), 1);

    // Server is up but the client points elsewhere: delete must roll back.
    state.set_backend_base_url("http://127.0.0.1:1/api/v1").unwrap();
    state.delete_application(id).await;
    assert_eq!(state.applications().len(), 1);
    assert_eq!(state.error(), Some("Delete failed (API unreachable)"));

    state.set_backend_base_url(&base_url).unwrap();
    state.delete_application(id).await;
    state.refresh().await;
    assert!(state.applications().is_empty());
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn test_tracker_crawl_imports_reviews() {
    let fetcher = CannedFetcher::default()
        .with_page("https://a.test/jobs", 200, "<title>Join our team</title>")
        .with_page("https://b.test/jobs", 200, "<title>Intern hiring</title>")
        .with_page("https://c.test/jobs", 200, "<title>Home</title>");
    let base_url = spawn_server(fetcher).await;
    let client = FmroApiClient::new(&base_url).unwrap();
    for (name, url) in [
        ("Alpha", "https://a.test/jobs"),
        ("Beta", "https://b.test/jobs"),
        ("Gamma", "https://c.test/jobs"),
    ] {
        client.create_company(&company(name, Some(url))).await.unwrap();
    }

    let mut state = TrackerState::new(client, 2);
    state.run_crawler().await;

    assert_eq!(state.error(), None);
    assert_eq!(state.status(), Some("Crawled 3 companies, imported 2 entries"));
    assert_eq!(state.jobs().len(), 2);
    assert_eq!(state.review_queue().len(), 1);
    assert!(!state.is_syncing());

    let leftover = state.review_queue()[0].id;
    state.reject_review(leftover).await;
    assert!(state.review_queue().is_empty());
    assert_eq!(state.error(), None);

    state.approve_review(leftover).await;
    assert!(state.error().unwrap().starts_with("Approve failed: "));
    assert_eq!(state.jobs().len(), 2);

    let job = &state.jobs()[0];
    assert!(["Alpha", "Beta", "Gamma"].contains(&job.company.as_str()));
    assert_eq!(job.location, "Unknown");
}

#[tokio::test]
async fn test_tracker_applies_from_filtered_job() {
    let base_url = spawn_server(CannedFetcher::default()).await;
    let client = FmroApiClient::new(&base_url).unwrap();
    let unitree = client.create_company(&company("Unitree", None)).await.unwrap();
    let agibot = client.create_company(&company("AgiBot", None)).await.unwrap();
    for (company_id, title, location) in [
        (unitree.id, "Locomotion Intern", "Hangzhou"),
        (agibot.id, "Perception Intern", "Shanghai"),
    ] {
        let request = CreateJobPostingRequestDto {
            company_id,
            title: title.to_string(),
            location: Some(location.to_string()),
            ..Default::default()
        };
        client.create_job(&request).await.unwrap();
    }

    let mut state = TrackerState::new(client, 50);
    state.refresh().await;
    assert!(state.selected_job().is_some());

    state.set_job_keyword("intern");
    state.set_city_filter("shanghai");
    let visible: Vec<i64> = state.visible_jobs().iter().map(|job| job.id).collect();
    assert_eq!(visible.len(), 1);
    state.select_job(Some(visible[0]));

    state.add_application_from_job(visible[0]).await;
    assert_eq!(state.error(), None);

    let stored = FmroApiClient::new(&base_url).unwrap().applications(None).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].company_name, "AgiBot");
    assert_eq!(stored[0].role, "Perception Intern");
    assert_eq!(stored[0].job_posting_id, Some(visible[0]));
}
