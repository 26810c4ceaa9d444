//! Integration tests, driven through the real application router against
//! an in-memory database.

mod complaint;

use axum::{
	body::Body,
	http::{header, Method, Request, StatusCode},
	Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::pool::PoolOptions;
use time::OffsetDateTime;
use tower::ServiceExt;

use crate::{
	app,
	db,
	prelude::*,
	utils::config::{DatabaseConfig, RunningEnvironment},
};

/// Builds a full application around a fresh in-memory database.
pub async fn init_test_app() -> AppState {
	let config = AppConfig {
		bind_addr: "127.0.0.1:0".parse().unwrap(),
		password_pepper: "test-pepper".to_string(),
		environment: RunningEnvironment::Development,
		database: DatabaseConfig {
			file: "sqlite::memory:".to_string(),
			connection_limit: 1,
		},
	};

	// A single connection keeps every query on the same in-memory database
	let database = PoolOptions::<DatabaseType>::new()
		.max_connections(1)
		.connect(config.database.file.as_str())
		.await
		.expect("Failed to open in-memory database");

	let app = AppState { config, database };
	db::initialize(&app).await.expect("Failed to initialize database");

	app
}

pub fn test_router(app: &AppState) -> Router {
	app::create_router(app)
}

/// Fires one request at the router and returns the status plus the parsed
/// body (`Value::Null` when the body is empty).
pub async fn request(
	router: &Router,
	method: Method,
	path: &str,
	token: Option<&str>,
	body: Option<Value>,
) -> (StatusCode, Value) {
	let mut builder = Request::builder().method(method).uri(path);
	if let Some(token) = token {
		builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
	}

	let request = if let Some(body) = body {
		builder
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))
	} else {
		builder.body(Body::empty())
	}
	.expect("Failed to build request");

	let response = router
		.clone()
		.oneshot(request)
		.await
		.expect("Failed to execute request");

	let status = response.status();
	let bytes = response
		.into_body()
		.collect()
		.await
		.expect("Failed to read response body")
		.to_bytes();
	let body = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Response body is not JSON")
	};

	(status, body)
}

pub async fn register(router: &Router, email: &str, password: &str) -> StatusCode {
	let (status, _) = request(
		router,
		Method::POST,
		"/register",
		None,
		Some(json!({
			"email": email,
			"password": password,
			"confirmPassword": password,
		})),
	)
	.await;

	status
}

pub async fn sign_in(
	router: &Router,
	email: &str,
	password: &str,
) -> (StatusCode, Option<String>) {
	let (status, body) = request(
		router,
		Method::POST,
		"/login",
		None,
		Some(json!({
			"email": email,
			"password": password,
		})),
	)
	.await;

	let token = body
		.get("accessToken")
		.and_then(Value::as_str)
		.map(str::to_string);

	(status, token)
}

/// Registers an account, optionally promotes it to admin, and signs it in.
pub async fn register_and_sign_in(
	app: &AppState,
	router: &Router,
	email: &str,
	password: &str,
	admin: bool,
) -> String {
	assert_eq!(register(router, email, password).await, StatusCode::CREATED);
	if admin {
		promote_to_admin(app, email).await;
	}

	let (status, token) = sign_in(router, email, password).await;
	assert_eq!(status, StatusCode::OK);

	token.expect("login did not return a token")
}

/// Flips an account's role directly in the store. There is no route for
/// this; roles are an operator concern.
pub async fn promote_to_admin(app: &AppState, email: &str) {
	let mut connection = app.database.acquire().await.unwrap();
	sqlx::query("UPDATE users SET role = 'admin' WHERE email = ?;")
		.bind(email)
		.execute(&mut *connection)
		.await
		.unwrap();
}

pub async fn get_user(app: &AppState, email: &str) -> Option<db::User> {
	let mut connection = app.database.acquire().await.unwrap();
	db::get_user_by_email(&mut connection, email).await.unwrap()
}

pub async fn count_users_with_email(app: &AppState, email: &str) -> i64 {
	let mut connection = app.database.acquire().await.unwrap();
	sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?;")
		.bind(email)
		.fetch_one(&mut *connection)
		.await
		.unwrap()
}

/// Plants a pending code with an arbitrary expiry, bypassing the issuer.
pub async fn force_otp(app: &AppState, email: &str, otp: &str, expiry: OffsetDateTime) {
	let user = get_user(app, email).await.unwrap();
	let mut connection = app.database.acquire().await.unwrap();
	db::set_password_reset_otp(&mut connection, user.id, otp, &expiry)
		.await
		.unwrap();
}

pub async fn complaint_status(app: &AppState, complaint_id: i64) -> Option<String> {
	let mut connection = app.database.acquire().await.unwrap();
	db::get_complaint_by_id(&mut connection, complaint_id)
		.await
		.unwrap()
		.map(|complaint| complaint.status)
}
