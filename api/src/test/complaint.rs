use axum::http::{Method, StatusCode};
use serde_json::json;

use super::*;

#[tokio::test]
async fn submitting_requires_a_session() {
	let app = init_test_app().await;
	let router = test_router(&app);

	let (status, body) = request(
		&router,
		Method::POST,
		"/",
		None,
		Some(json!({ "category": "Billing", "description": "double charge" })),
	)
	.await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(body["error"], "unauthenticated");

	// A made-up token is as good as none
	let (status, _) = request(
		&router,
		Method::POST,
		"/",
		Some("not-a-session"),
		Some(json!({ "category": "Billing", "description": "double charge" })),
	)
	.await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn a_new_complaint_starts_pending() {
	let app = init_test_app().await;
	let router = test_router(&app);

	let token = register_and_sign_in(&app, &router, "a@x.com", "pw1", false).await;
	let owner = get_user(&app, "a@x.com").await.unwrap();

	let (status, body) = request(
		&router,
		Method::POST,
		"/",
		Some(&token),
		Some(json!({ "category": "Billing", "description": "double charge" })),
	)
	.await;

	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body["complaint"]["status"], "Pending");
	assert_eq!(body["complaint"]["category"], "Billing");
	assert_eq!(body["complaint"]["userId"], owner.id);

	let (status, body) = request(&router, Method::GET, "/dashboard", Some(&token), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["complaints"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn listing_is_scoped_by_role() {
	let app = init_test_app().await;
	let router = test_router(&app);

	let alice = register_and_sign_in(&app, &router, "alice@x.com", "pw1", false).await;
	let bob = register_and_sign_in(&app, &router, "bob@x.com", "pw2", false).await;
	let admin = register_and_sign_in(&app, &router, "admin@x.com", "pw3", true).await;

	for (token, description) in [
		(&alice, "no hot water"),
		(&alice, "elevator stuck"),
		(&bob, "parking overcharge"),
	] {
		let (status, _) = request(
			&router,
			Method::POST,
			"/",
			Some(token),
			Some(json!({ "category": "Facilities", "description": description })),
		)
		.await;
		assert_eq!(status, StatusCode::CREATED);
	}

	// Alice sees exactly her own complaints, and no account listing
	let alice_id = get_user(&app, "alice@x.com").await.unwrap().id;
	let (status, body) = request(&router, Method::GET, "/dashboard", Some(&alice), None).await;
	assert_eq!(status, StatusCode::OK);
	let complaints = body["complaints"].as_array().unwrap();
	assert_eq!(complaints.len(), 2);
	assert!(complaints
		.iter()
		.all(|complaint| complaint["userId"] == alice_id));
	assert!(body.get("users").is_none());

	// The admin sees every complaint, plus every account
	let (status, body) = request(&router, Method::GET, "/dashboard", Some(&admin), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["complaints"].as_array().unwrap().len(), 3);

	let users = body["users"].as_array().unwrap();
	assert_eq!(users.len(), 3);
	assert!(users
		.iter()
		.any(|user| user["email"] == "admin@x.com" && user["role"] == "admin"));
}

#[tokio::test]
async fn only_admins_can_update_a_status() {
	let app = init_test_app().await;
	let router = test_router(&app);

	let alice = register_and_sign_in(&app, &router, "alice@x.com", "pw1", false).await;
	let bob = register_and_sign_in(&app, &router, "bob@x.com", "pw2", false).await;

	let (_, body) = request(
		&router,
		Method::POST,
		"/",
		Some(&alice),
		Some(json!({ "category": "Billing", "description": "double charge" })),
	)
	.await;
	let complaint_id = body["complaint"]["id"].as_i64().unwrap();

	// Neither another user nor the owner herself may change the status
	for token in [&bob, &alice] {
		let (status, body) = request(
			&router,
			Method::POST,
			"/status",
			Some(token),
			Some(json!({ "id": complaint_id, "status": "Closed" })),
		)
		.await;
		assert_eq!(status, StatusCode::UNAUTHORIZED);
		assert_eq!(body["error"], "unauthorized");
	}

	assert_eq!(
		complaint_status(&app, complaint_id).await.as_deref(),
		Some("Pending")
	);
}

#[tokio::test]
async fn a_missing_complaint_is_silently_dropped() {
	let app = init_test_app().await;
	let router = test_router(&app);

	let admin = register_and_sign_in(&app, &router, "admin@x.com", "pw1", true).await;

	let (status, _) = request(
		&router,
		Method::POST,
		"/status",
		Some(&admin),
		Some(json!({ "id": 4242, "status": "Closed" })),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn billing_complaint_lifecycle() {
	let app = init_test_app().await;
	let router = test_router(&app);

	let user = register_and_sign_in(&app, &router, "a@x.com", "pw1", false).await;

	let (status, body) = request(
		&router,
		Method::POST,
		"/",
		Some(&user),
		Some(json!({ "category": "Billing", "description": "double charge" })),
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);
	let complaint_id = body["complaint"]["id"].as_i64().unwrap();

	let (status, body) = request(&router, Method::GET, "/dashboard", Some(&user), None).await;
	assert_eq!(status, StatusCode::OK);
	let complaints = body["complaints"].as_array().unwrap();
	assert_eq!(complaints.len(), 1);
	assert_eq!(complaints[0]["status"], "Pending");

	let admin = register_and_sign_in(&app, &router, "admin@x.com", "pw2", true).await;
	let (status, _) = request(
		&router,
		Method::POST,
		"/status",
		Some(&admin),
		Some(json!({ "id": complaint_id, "status": "Resolved" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);

	// The owner's next fetch observes the new status, stored verbatim
	let (status, body) = request(&router, Method::GET, "/dashboard", Some(&user), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["complaints"][0]["status"], "Resolved");
}
