use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use server::upstream::ApiClient;
use shared_types::ApiConfig;

/// Token the mock accepts as a signed-in citizen.
pub const CITIZEN_TOKEN: &str = "citizen-token";
/// Token the mock accepts as an admin.
pub const ADMIN_TOKEN: &str = "admin-token";
/// Password the mock accepts for any email.
pub const GOOD_PASSWORD: &str = "secret1";

/// One request as seen by the mock API.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub request_id: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Handle to a running mock of the remote CityGuard API.
pub struct MockApi {
    pub client: ApiClient,
    state: MockState,
}

impl MockApi {
    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests()
            .pop()
            .expect("mock API received no requests")
    }
}

/// Spawn the mock on an ephemeral port and return a client pointed at it.
pub async fn mock_api() -> MockApi {
    let state = MockState::default();
    let app = Router::new().fallback(handle).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock API");
    let addr = listener.local_addr().expect("mock API address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock API server");
    });

    let client = ApiClient::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
    });
    MockApi { client, state }
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ApiClient::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 2,
    })
}

pub fn user_json(id: &str, email: &str, role: &str) -> Value {
    json!({
        "_id": id,
        "name": email.split('@').next().unwrap_or_default(),
        "email": email,
        "role": role,
        "isBlocked": false,
        "subscriptionStatus": "free",
        "createdAt": "2025-03-01T08:30:00.000Z"
    })
}

pub fn issue_json(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "title": "Pothole on Lake Road",
        "description": "Deep pothole near the school gate",
        "category": "Roads",
        "location": "Lake Road, Gulshan",
        "image": "https://i.ibb.co/pothole.jpg",
        "status": status,
        "priority": "normal",
        "upvoteCount": 3,
        "createdAt": "2025-04-01T10:00:00.000Z",
        "author": {"name": "citizen", "email": "citizen@example.com"},
        "assignedTo": null,
        "timeline": [
            {"status": "pending", "message": "Issue reported", "updatedBy": "citizen", "date": "2025-04-01T10:00:00.000Z"}
        ]
    })
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        request_id: headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    let token = bearer(&headers);
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    if path == "/health" {
        return Json(json!({"status": "ok"})).into_response();
    }

    if segments[0] == "auth" {
        let email = body["email"].as_str().unwrap_or_default().to_string();
        return match (method.as_str(), segments.get(1).copied()) {
            ("POST", Some("login")) if body["password"] == GOOD_PASSWORD => Json(json!({
                "token": CITIZEN_TOKEN,
                "user": user_json("u-1", &email, "citizen")
            }))
            .into_response(),
            ("POST", Some("login")) => error(StatusCode::UNAUTHORIZED, "Invalid email or password"),
            ("POST", Some("register")) if email == "taken@example.com" => {
                error(StatusCode::CONFLICT, "Email already registered")
            }
            ("POST", Some("register")) => (
                StatusCode::CREATED,
                Json(json!({
                    "token": CITIZEN_TOKEN,
                    "user": user_json("u-2", &email, "citizen")
                })),
            )
                .into_response(),
            _ => error(StatusCode::NOT_FOUND, "Not found"),
        };
    }

    if token.is_none() && segments[0] != "issues" {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized access");
    }
    let is_admin = token == Some(ADMIN_TOKEN);

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["issues"]) => Json(json!({
            "issues": [issue_json("iss-1", "pending"), issue_json("iss-2", "resolved")],
            "total": 8,
            "page": 2,
            "totalPages": 2
        }))
        .into_response(),
        ("GET", ["issues", "missing"]) => error(StatusCode::NOT_FOUND, "Issue not found"),
        ("GET", ["issues", id]) => Json(issue_json(id, "pending")).into_response(),
        (_, ["issues", ..]) if token.is_none() => {
            error(StatusCode::UNAUTHORIZED, "Unauthorized access")
        }
        ("POST", ["issues"]) => {
            let mut issue = issue_json("iss-new", "pending");
            issue["title"] = body["title"].clone();
            (StatusCode::CREATED, Json(issue)).into_response()
        }
        ("PATCH", ["issues", id]) => {
            let mut issue = issue_json(id, "pending");
            issue["title"] = body["title"].clone();
            Json(issue).into_response()
        }
        ("DELETE", ["issues", _]) => Json(json!({"deletedCount": 1})).into_response(),
        ("PATCH", ["issues", "voted", "upvote"]) => {
            error(StatusCode::CONFLICT, "You have already upvoted this issue")
        }
        ("PATCH", ["issues", _, "upvote"]) => Json(json!({"modifiedCount": 1})).into_response(),
        ("PATCH", ["issues", _, "status"]) | ("PATCH", ["issues", _, "assign"]) => {
            if is_admin || segments[2] == "status" {
                Json(json!({"modifiedCount": 1})).into_response()
            } else {
                error(StatusCode::FORBIDDEN, "Forbidden access")
            }
        }

        ("GET", ["users", "me"]) if token == Some(CITIZEN_TOKEN) => {
            Json(user_json("u-1", "citizen@example.com", "citizen")).into_response()
        }
        ("GET", ["users", "me"]) if is_admin => {
            Json(user_json("u-9", "admin@example.com", "admin")).into_response()
        }
        ("GET", ["users", "me"]) => error(StatusCode::UNAUTHORIZED, "Session expired"),
        ("PATCH", ["users", "me"]) => {
            let mut user = user_json("u-1", "citizen@example.com", "citizen");
            user["name"] = body["name"].clone();
            user["photoURL"] = body["photoURL"].clone();
            Json(user).into_response()
        }
        (_, ["users", ..]) | (_, ["stats", "admin"]) | ("GET", ["payments"]) if !is_admin => {
            error(StatusCode::FORBIDDEN, "Forbidden access")
        }
        ("GET", ["users"]) => Json(json!([
            user_json("u-1", "citizen@example.com", "citizen"),
            user_json("u-3", "staff@example.com", "staff"),
            user_json("u-9", "admin@example.com", "admin")
        ]))
        .into_response(),
        ("POST", ["users", "staff"]) => {
            let email = body["email"].as_str().unwrap_or_default();
            (StatusCode::CREATED, Json(user_json("u-4", email, "staff"))).into_response()
        }
        ("PATCH", ["users", _, "block"]) => Json(json!({"modifiedCount": 1})).into_response(),
        ("DELETE", ["users", _]) => Json(json!({"deletedCount": 1})).into_response(),

        ("GET", ["payments"]) => Json(json!([{
            "_id": "pay-1",
            "user": {"name": "citizen", "email": "citizen@example.com"},
            "amount": 100,
            "purpose": "boost_issue",
            "transactionId": "pi_mock_1",
            "date": "2025-05-02T10:00:00Z",
            "issueId": "iss-1"
        }]))
        .into_response(),
        ("POST", ["payments"]) => {
            (StatusCode::CREATED, Json(json!({"insertedId": "pay-2"}))).into_response()
        }

        ("GET", ["stats", "admin"]) => Json(json!({
            "totalUsers": 12, "totalIssues": 30, "resolvedIssues": 9, "totalPayments": 1400
        }))
        .into_response(),
        ("GET", ["stats", "citizen"]) => Json(json!({
            "total": 4, "pending": 2, "inProgress": 1, "resolved": 1
        }))
        .into_response(),
        ("GET", ["stats", "staff"]) => {
            Json(json!({"assigned": 5, "resolved": 2})).into_response()
        }

        _ => error(StatusCode::NOT_FOUND, "Not found"),
    }
}
