//! Router-level tests for auth and member management

mod common;

use common::{login, login_admin, request, test_router};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_is_public() {
    let router = test_router();
    let (status, body) = request(&router, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn api_routes_require_auth() {
    let router = test_router();
    let (status, body) = request(&router, "GET", "/api/members/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["code"], json!(1001));
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let router = test_router();
    let (status, body) = request(
        &router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "bob.li@company.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], json!(1002));
}

#[tokio::test]
async fn login_by_employee_id_and_me() {
    let router = test_router();
    let token = login(&router, "U002", "admin123").await;

    let (status, body) = request(&router, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], json!("bob.li@company.com"));
    // password hash never leaves the server
    assert!(body["data"].get("passwordHash").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn logout_revokes_token() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, _) = request(&router, "GET", "/api/members/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&router, "POST", "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(&router, "GET", "/api/members/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], json!(1005));
}

#[tokio::test]
async fn user_list_wraps_items_and_pagination() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "GET",
        "/api/members/users?page=1&limit=2",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["pagination"]["total"], json!(5));
    assert_eq!(body["data"]["pagination"]["pageSize"], json!(2));
    assert_eq!(body["data"]["pagination"]["pages"], json!(3));
}

#[tokio::test]
async fn user_search_filter() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "GET",
        "/api/members/users?search=alice",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], json!("Alice Chen"));
}

fn user_payload(employee_id: &str, email: &str, department_id: &str) -> serde_json::Value {
    json!({
        "employeeId": employee_id,
        "name": "Test User",
        "email": email,
        "phone": "13812347777",
        "departmentId": department_id,
        "position": "Engineer",
        "roleId": "role_3",
        "status": "active"
    })
}

#[tokio::test]
async fn create_user_and_duplicate_email_conflict() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/members/users",
        Some(&token),
        Some(user_payload("U100", "test.user@company.com", "dept_1")),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    assert_eq!(body["data"]["department"], json!("Technology"));
    assert_eq!(body["data"]["role"], json!("Member"));

    let (status, body) = request(
        &router,
        "POST",
        "/api/members/users",
        Some(&token),
        Some(user_payload("U101", "test.user@company.com", "dept_1")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], json!(3002));
}

#[tokio::test]
async fn developer_cannot_create_users() {
    let router = test_router();
    // Alice is a Developer without user.create
    let token = login(&router, "alice.chen@company.com", "dev12345").await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/members/users",
        Some(&token),
        Some(user_payload("U100", "test.user@company.com", "dept_1")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], json!(2001));
}

#[tokio::test]
async fn department_admin_scoped_to_own_department() {
    let router = test_router();
    // Carol is a Department Admin of dept_2 with user.create
    let token = login(&router, "carol.wang@company.com", "carol123").await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/members/users",
        Some(&token),
        Some(user_payload("U100", "scoped.user@company.com", "dept_1")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], json!(2004));

    let (status, _) = request(
        &router,
        "POST",
        "/api/members/users",
        Some(&token),
        Some(user_payload("U100", "scoped.user@company.com", "dept_2")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn role_permission_change_propagates_via_api() {
    let router = test_router();
    let token = login_admin(&router).await;

    // Create role "QA" with project.read, then a user holding it
    let (status, body) = request(
        &router,
        "POST",
        "/api/members/roles",
        Some(&token),
        Some(json!({
            "name": "QA",
            "code": "QA_ENGINEER",
            "description": "Quality assurance",
            "permissions": ["project.read"],
            "level": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let role_id = body["data"]["id"].as_str().unwrap().to_string();

    let mut payload = user_payload("U100", "qa.user@company.com", "dept_1");
    payload["roleId"] = json!(role_id);
    let (status, body) = request(&router, "POST", "/api/members/users", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    let user_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["permissions"], json!(["project.read"]));

    // Widen the role's permissions
    let (status, _) = request(
        &router,
        "PUT",
        &format!("/api/members/roles/{role_id}"),
        Some(&token),
        Some(json!({ "permissions": ["project.read", "project.update"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(
        &router,
        "GET",
        &format!("/api/members/users/{user_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["permissions"],
        json!(["project.read", "project.update"])
    );
}

#[tokio::test]
async fn role_delete_blocked_with_count() {
    let router = test_router();
    let token = login_admin(&router).await;

    // role_4 (Developer) is held by Alice
    let (status, body) = request(
        &router,
        "DELETE",
        "/api/members/roles/role_4",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], json!(4004));
    assert!(body["message"].as_str().unwrap().contains('1'));
}

#[tokio::test]
async fn department_rename_propagates_via_api() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, _) = request(
        &router,
        "PUT",
        "/api/members/departments/dept_1",
        Some(&token),
        Some(json!({ "name": "Platform Engineering" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = request(
        &router,
        "GET",
        "/api/members/users/user_1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body["data"]["department"], json!("Platform Engineering"));
}

#[tokio::test]
async fn department_delete_blocked_reports_member_count() {
    let router = test_router();
    let token = login_admin(&router).await;

    // dept_1 has 2 seeded members
    let (status, body) = request(
        &router,
        "DELETE",
        "/api/members/departments/dept_1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], json!(5004));
    assert!(body["message"].as_str().unwrap().contains('2'));
}

#[tokio::test]
async fn department_level_ordering_enforced() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/members/departments",
        Some(&token),
        Some(json!({
            "name": "Platform",
            "code": "PLATFORM",
            "manager": "Bob Li",
            "parentId": "dept_1",
            "level": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], json!(5006));

    let (status, _) = request(
        &router,
        "POST",
        "/api/members/departments",
        Some(&token),
        Some(json!({
            "name": "Platform",
            "code": "PLATFORM",
            "manager": "Bob Li",
            "parentId": "dept_1",
            "level": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_admin_cannot_manage_roles() {
    let router = test_router();
    let token = login(&router, "carol.wang@company.com", "carol123").await;

    let (status, body) = request(
        &router,
        "POST",
        "/api/members/roles",
        Some(&token),
        Some(json!({
            "name": "Rogue",
            "code": "ROGUE",
            "description": "should not exist",
            "level": 5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], json!(2003));
}

#[tokio::test]
async fn permission_tree_is_deterministic() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (_, first) = request(
        &router,
        "GET",
        "/api/members/permissions/tree",
        Some(&token),
        None,
    )
    .await;
    let (_, second) = request(
        &router,
        "GET",
        "/api/members/permissions/tree",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(first["data"], second["data"]);
    assert_eq!(first["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn statistics_reports_breakdowns() {
    let router = test_router();
    let token = login_admin(&router).await;

    let (status, body) = request(
        &router,
        "GET",
        "/api/members/statistics",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["users"]["total"], json!(5));
    assert_eq!(body["data"]["users"]["pending"], json!(1));
    assert_eq!(body["data"]["roles"]["total"], json!(4));
    assert_eq!(body["data"]["recentUsers"].as_array().unwrap().len(), 5);
}
