//! Router-level tests for release tracking, projects and the dashboard

mod common;

use common::{login, login_admin, request, test_router};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn release_lifecycle() {
    let router = test_router();
    let token = login_admin(&router).await;

    // Create
    let (status, body) = request(
        &router,
        "POST",
        "/api/versions",
        Some(&token),
        Some(json!({
            "version": "v2.2.0",
            "name": "Spring release",
            "releaseDate": "2024-03-01",
            "developer": "Alice Chen"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    let id = body["data"]["id"].as_u64().unwrap();
    assert_eq!(body["data"]["status"], json!("in_development"));

    // Duplicate version
    let (status, body) = request(
        &router,
        "POST",
        "/api/versions",
        Some(&token),
        Some(json!({
            "version": "v2.2.0",
            "name": "Duplicate",
            "releaseDate": "2024-03-02",
            "developer": "Bob Li"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], json!(6002));

    // Bad version format
    let (status, body) = request(
        &router,
        "POST",
        "/api/versions",
        Some(&token),
        Some(json!({
            "version": "2.2.1",
            "name": "Bad format",
            "releaseDate": "2024-03-02",
            "developer": "Bob Li"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!(6003));

    // Update then delete
    let (status, _) = request(
        &router,
        "PUT",
        &format!("/api/versions/{id}"),
        Some(&token),
        Some(json!({ "status": "in_testing" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &router,
        "DELETE",
        &format!("/api/versions/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn released_version_cannot_be_deleted() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(&router, "DELETE", "/api/versions/1", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], json!(6004));
}

#[tokio::test]
async fn developer_cannot_manage_releases() {
    let router = test_router();
    let token = login(&router, "alice.chen@company.com", "dev12345").await;

    // Reads are open to any authenticated user
    let (status, body) = request(&router, "GET", "/api/versions", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["total"], json!(4));

    let (status, body) = request(
        &router,
        "POST",
        "/api/versions",
        Some(&token),
        Some(json!({
            "version": "v9.0.0",
            "name": "Nope",
            "releaseDate": "2024-03-01",
            "developer": "Alice Chen"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], json!(2002));
}

#[tokio::test]
async fn rollback_requires_existing_target() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/versions/1/rollback",
        Some(&token),
        Some(json!({ "rollbackVersion": "v0.0.1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!(6005));

    let (status, body) = request(
        &router,
        "POST",
        "/api/versions/1/rollback",
        Some(&token),
        Some(json!({ "rollbackVersion": "v2.0.8" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("rolled_back"));
    assert_eq!(body["data"]["rollbackVersion"], json!("v2.0.8"));
}

#[tokio::test]
async fn deployments_reference_known_versions() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/versions/deployments",
        Some(&token),
        Some(json!({
            "environment": "staging",
            "version": "v9.9.9",
            "operator": "Bob Li"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!(6001));

    let (status, body) = request(
        &router,
        "POST",
        "/api/versions/deployments",
        Some(&token),
        Some(json!({
            "environment": "staging",
            "version": "v2.1.0",
            "operator": "Bob Li"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("in_progress"));

    let (status, body) = request(
        &router,
        "GET",
        "/api/versions/deployments/list?environment=staging",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["total"], json!(2));
}

#[tokio::test]
async fn release_list_filtering_and_sorting() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "GET",
        "/api/versions?status=released&sortBy=version&sortOrder=asc",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["version"], json!("v2.0.8"));
    assert_eq!(items[1]["version"], json!("v2.1.0"));
}

#[tokio::test]
async fn project_crud_and_cascade() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "GET",
        "/api/projects/projects",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // Deleting a project clears its dependents
    let (status, _) = request(
        &router,
        "DELETE",
        "/api/projects/projects/proj_1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = request(
        &router,
        "GET",
        "/api/projects/branches?projectId=proj_1",
        Some(&token),
        None,
    )
    .await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (_, body) = request(
        &router,
        "GET",
        "/api/projects/milestones?projectId=proj_1",
        Some(&token),
        None,
    )
    .await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn milestone_completion_stamps_once() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/projects/milestones",
        Some(&token),
        Some(json!({
            "title": "Release candidate",
            "dueDate": "2024-04-01",
            "projectId": "proj_2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["completedAt"], json!(null));

    let (_, body) = request(
        &router,
        "PUT",
        &format!("/api/projects/milestones/{id}"),
        Some(&token),
        Some(json!({ "status": "completed", "progress": 100 })),
    )
    .await;
    assert!(body["data"]["completedAt"].is_string());
}

#[tokio::test]
async fn project_statistics_aggregate() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "GET",
        "/api/projects/statistics",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["projects"]["totalProjects"], json!(3));
    assert_eq!(body["data"]["codeQuality"]["totalReviews"], json!(3));
    assert!(body["data"]["recentActivities"].as_array().unwrap().len() >= 3);
}

#[tokio::test]
async fn dashboard_overview_and_applications() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "GET",
        "/api/dashboard/overview",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalApplications"], json!(5));
    assert_eq!(body["data"]["pendingApplications"], json!(2));

    let (status, body) = request(
        &router,
        "PUT",
        "/api/dashboard/applications/1/status",
        Some(&token),
        Some(json!({ "status": "approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("approved"));

    let (status, body) = request(
        &router,
        "GET",
        "/api/dashboard/applications?status=approved",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["total"], json!(3));
}
