//! Integration tests for the typed endpoint surface and envelope
//! handling, against a wiremock server.

mod common;

use common::*;
use famtrack::api::{ApiError, EntryDraft, LoginRequest, RegisterRequest};
use famtrack::session::{Role, SessionStore};
use chrono::TimeZone;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn auth_payload() -> serde_json::Value {
    serde_json::json!({
        "user": {
            "id": "u-1",
            "name": "Ada",
            "email": "ada@example.com",
            "role": "ADMIN",
            "familyId": "f-1",
            "familyCode": "FAM123",
            "familyName": "Lovelace"
        },
        "accessToken": "access-a",
        "refreshToken": "refresh-r"
    })
}

// ---------------------------------------------------------------------------
// Auth endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_returns_session_material() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({
            "familyCode": "FAM123",
            "email": "ada@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(auth_payload())))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = anonymous_client(&server.uri());

    let data = client
        .login(&LoginRequest {
            family_code: "FAM123".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .expect("login failed");

    assert_eq!(data.user.role, Role::Admin);

    let session = data.into_session();
    store.store(&session).unwrap();
    assert_eq!(store.load().unwrap().access_token, "access-a");
    assert_eq!(store.load().unwrap().refresh_token, "refresh-r");
}

#[tokio::test]
async fn login_rejection_surfaces_envelope_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(rejected_envelope("Invalid credentials")),
        )
        .mount(&server)
        .await;

    let (client, _store) = anonymous_client(&server.uri());

    let err = client
        .login(&LoginRequest {
            family_code: "FAM123".to_string(),
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .expect_err("login must fail");

    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert!(err.to_string().contains("Invalid credentials"));
}

#[tokio::test]
async fn register_surfaces_new_family_code() {
    let server = MockServer::start().await;

    let mut payload = auth_payload();
    payload["familyCode"] = serde_json::json!("FAM999");

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_partial_json(serde_json::json!({
            "name": "Ada",
            "familyName": "Lovelace"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok_envelope(payload)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = anonymous_client(&server.uri());

    let data = client
        .register(&RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            family_name: Some("Lovelace".to_string()),
            family_code: None,
        })
        .await
        .expect("register failed");

    assert_eq!(data.family_code.as_deref(), Some("FAM999"));
}

#[tokio::test]
async fn otp_flow_returns_acknowledgment_messages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/send-otp"))
        .and(body_json(serde_json::json!({"email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "OTP sent to ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/verify-otp"))
        .and(body_json(serde_json::json!({
            "email": "ada@example.com",
            "otp": "482913"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Email verified"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = anonymous_client(&server.uri());

    let ack = client.send_otp("ada@example.com").await.unwrap();
    assert_eq!(ack, "OTP sent to ada@example.com");

    let ack = client.verify_otp("ada@example.com", "482913").await.unwrap();
    assert_eq!(ack, "Email verified");
}

#[tokio::test]
async fn logout_posts_refresh_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(body_json(serde_json::json!({"refreshToken": "refresh-r"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Logged out"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    let ack = client.logout("refresh-r").await.unwrap();
    assert_eq!(ack, "Logged out");
}

// ---------------------------------------------------------------------------
// Ledger endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_expense_sends_camel_case_draft() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/expenses"))
        .and(header("Authorization", "Bearer access-a"))
        .and(body_json(serde_json::json!({
            "amount": 42.5,
            "category": "Food",
            "date": "2026-07-14T00:00:00Z",
            "notes": "groceries"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok_envelope(serde_json::json!({
            "id": "ex-1",
            "amount": 42.5,
            "category": "Food",
            "date": "2026-07-14T00:00:00Z",
            "notes": "groceries"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    let draft = EntryDraft {
        amount: 42.5,
        category: "Food".to_string(),
        date: chrono::Utc.with_ymd_and_hms(2026, 7, 14, 0, 0, 0).unwrap(),
        notes: Some("groceries".to_string()),
    };

    let entry = client.create_expense(&draft).await.expect("create failed");
    assert_eq!(entry.id, "ex-1");
    assert_eq!(entry.notes.as_deref(), Some("groceries"));
}

#[tokio::test]
async fn family_incomes_include_owners() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/incomes/family"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!([
            {
                "id": "in-1",
                "amount": 2500.0,
                "category": "Salary",
                "date": "2026-07-01T00:00:00Z",
                "user": {"id": "u-2", "name": "Grace"}
            }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    let incomes = client.family_incomes().await.unwrap();
    assert_eq!(incomes[0].user.as_ref().unwrap().name, "Grace");
}

#[tokio::test]
async fn delete_income_returns_ack() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/incomes/in-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Income deleted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    assert_eq!(client.delete_income("in-1").await.unwrap(), "Income deleted");
}

#[tokio::test]
async fn rejected_envelope_on_2xx_maps_to_rejected_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/incomes/my/stats"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(rejected_envelope("Stats unavailable")),
        )
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    let err = client.my_income_stats().await.expect_err("must reject");
    assert!(matches!(err, ApiError::Rejected { .. }), "got {err}");
    assert!(err.to_string().contains("Stats unavailable"));
}

// ---------------------------------------------------------------------------
// Dashboard, family, reminders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trends_request_carries_months_window() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/my/trends"))
        .and(query_param("months", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!([
            {"month": "2026-06", "income": 4000.0, "expense": 2500.0}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    let trends = client.my_trends(Some(6)).await.unwrap();
    assert_eq!(trends[0].month, "2026-06");
}

#[tokio::test]
async fn family_dashboard_parses_member_stats() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/family"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({
            "totalIncome": 900.0,
            "totalExpense": 100.0,
            "balance": 800.0,
            "incomeByCategory": {"Salary": 900.0},
            "expenseByCategory": {"Food": 100.0},
            "memberStats": [
                {"userId": "u-1", "userName": "Ada", "income": 600.0, "expense": 50.0, "balance": 550.0}
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    let dashboard = client.family_dashboard().await.unwrap();
    assert_eq!(dashboard.balance, 800.0);
    assert_eq!(dashboard.member_stats.unwrap()[0].user_name, "Ada");
}

#[tokio::test]
async fn remove_family_member_hits_member_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/family/members/u-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Member removed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    assert_eq!(
        client.remove_family_member("u-2").await.unwrap(),
        "Member removed"
    );
}

#[tokio::test]
async fn bulk_reminder_message_is_read_from_data() {
    let server = MockServer::start().await;

    // Acknowledgment nested under data, as the reminder endpoints do
    Mock::given(method("POST"))
        .and(path("/api/reminders/send-bulk"))
        .and(body_json(serde_json::json!({"memberIds": ["u-2", "u-3"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "",
            "data": {"message": "Reminders sent to 2 members"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    let ack = client
        .send_reminder_bulk(&["u-2".to_string(), "u-3".to_string()])
        .await
        .unwrap();
    assert_eq!(ack, "Reminders sent to 2 members");
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn forbidden_maps_to_forbidden_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/reminders/test"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(rejected_envelope("Admins only")),
        )
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    let err = client.send_reminder_test().await.expect_err("must be rejected");
    assert!(matches!(err, ApiError::Forbidden { .. }), "got {err}");
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn server_error_maps_to_server_variant() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/family"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");

    let err = client.family().await.expect_err("must fail");
    assert!(err.is_server_error(), "got {err}");
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    // Nothing listens here
    let (client, _store) = client_with_session("http://127.0.0.1:9", "access-a", "refresh-r");

    let err = client.my_incomes().await.expect_err("must fail");
    assert!(err.is_network_error(), "got {err}");
}

#[tokio::test]
async fn health_check_reflects_server_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (client, _store) = anonymous_client(&server.uri());
    assert!(client.health_check().await.unwrap());
}

#[tokio::test]
async fn validate_session_distinguishes_auth_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/family"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({
            "id": "f-1",
            "familyName": "Lovelace",
            "familyCode": "FAM123"
        }))))
        .mount(&server)
        .await;

    let (client, _store) = client_with_session(&server.uri(), "access-a", "refresh-r");
    assert!(client.validate_session().await.unwrap());
}
