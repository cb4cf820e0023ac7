mod common;

use auth::Claims;
use auth::JwtHandler;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("alice", "pw123").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "username": "alice" }));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;

    app.register("alice", "pw123").await;
    let response = app.register("alice", "different").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 400);
    assert_eq!(body["message"], "Username already exists");
}

#[tokio::test]
async fn test_register_invalid_username() {
    let app = TestApp::spawn().await;

    let response = app.register("al", "pw123").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.register("alice smith", "pw123").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_empty_password() {
    let app = TestApp::spawn().await;

    let response = app.register("alice", "").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.register("alice", "pw123").await;
    let response = app.login("alice", "pw123").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().unwrap();
    assert_eq!(app.jwt_handler.verify(token).unwrap(), "alice");

    let claims = app.jwt_handler.decode(token).unwrap();
    let now = Utc::now().timestamp();
    assert!(claims.exp > now);
    assert!(claims.exp <= now + Duration::minutes(60).num_seconds() + 1);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    app.register("alice", "pw123").await;
    let response = app.login("alice", "wrongpw").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let app = TestApp::spawn().await;

    app.register("alice", "pw123").await;

    let unknown = app.login("unknown_user", "anything").await;
    let unknown_status = unknown.status();
    let unknown_body: serde_json::Value = unknown.json().await.unwrap();

    let wrong = app.login("alice", "wrongpw").await;
    let wrong_status = wrong.status();
    let wrong_body: serde_json::Value = wrong.json().await.unwrap();

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, wrong_status);
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn test_me_with_valid_token() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;

    let response = app
        .get_authenticated("/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 401);
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let app = TestApp::spawn().await;

    let claims = Claims::new("alice", (Utc::now() - Duration::minutes(5)).timestamp());
    let token = app.jwt_handler.encode(&claims).unwrap();

    let response = app
        .get_authenticated("/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_foreign_signature() {
    let app = TestApp::spawn().await;

    let foreign = JwtHandler::new(b"another-secret-key-that-is-long-enough!", Duration::minutes(60));
    let token = foreign.issue("alice").unwrap();

    let response = app
        .get_authenticated("/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_malformed_header() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;

    let response = app
        .get("/users/me")
        .header("Authorization", format!("Token {}", token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_lowercase_scheme() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;

    let response = app
        .get("/users/me")
        .header("Authorization", format!("bearer {}", token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_me_with_token_for_unregistered_subject() {
    let app = TestApp::spawn().await;

    let token = app.jwt_handler.issue("nobody").unwrap();

    let response = app
        .get_authenticated("/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_replace_user_changes_password() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;
    let user_id = app.user_id("alice").await;

    let response = app
        .put_authenticated(&format!("/users/{}", user_id), &token)
        .json(&json!({ "username": "alice", "password": "newpw" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "success" }));

    assert_eq!(
        app.login("alice", "pw123").await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(app.login("alice", "newpw").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_replace_user_rename_keeps_token_subject_bound() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;
    let user_id = app.user_id("alice").await;

    let rename = app
        .put_authenticated(&format!("/users/{}", user_id), &token)
        .json(&json!({ "username": "alice2", "password": "pw123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(rename.status(), StatusCode::BAD_REQUEST);

    // The name was never freed, so nobody else can claim it
    let reclaim = app.register("alice", "attacker").await;
    assert_eq!(reclaim.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        app.login("alice2", "pw123").await.status(),
        StatusCode::UNAUTHORIZED
    );

    let me = app
        .get_authenticated("/users/me", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
    let body: serde_json::Value = me.json().await.unwrap();
    assert_eq!(body["username"], "alice");
    assert_eq!(app.user_id("alice").await, user_id);
}

#[tokio::test]
async fn test_replace_user_of_another_account_forbidden() {
    let app = TestApp::spawn().await;

    app.register("alice", "pw123").await;
    let alice_id = app.user_id("alice").await;
    let bob_token = app.token_for("bob", "pw456").await;

    let response = app
        .put_authenticated(&format!("/users/{}", alice_id), &bob_token)
        .json(&json!({ "username": "alice", "password": "hijacked" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status_code"], 403);

    assert_eq!(app.login("alice", "pw123").await.status(), StatusCode::OK);
    assert_eq!(
        app.login("alice", "hijacked").await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_replace_user_errors() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;

    let bad_id = app
        .put_authenticated("/users/not-a-uuid", &token)
        .json(&json!({ "username": "alice", "password": "pw123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_id.status(), StatusCode::BAD_REQUEST);

    let missing = app
        .put_authenticated(&format!("/users/{}", uuid::Uuid::new_v4()), &token)
        .json(&json!({ "username": "alice", "password": "pw" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let alice_id = app.user_id("alice").await;
    let empty_password = app
        .put_authenticated(&format!("/users/{}", alice_id), &token)
        .json(&json!({ "username": "alice", "password": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(empty_password.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_movie_lifecycle() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;

    let unauthenticated = app
        .post("/movies")
        .json(&json!({ "title": "Heat", "year": 1995 }))
        .send()
        .await
        .unwrap();
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .post_authenticated("/movies", &token)
        .json(&json!({
            "title": "Heat",
            "year": 1995,
            "genres": ["Crime", "Thriller"],
            "director": "Michael Mann",
            "plot": "A group of professional bank robbers...",
            "actors": ["Al Pacino", "Robert De Niro"]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.unwrap();
    let movie_id = body["id"].as_str().unwrap().to_string();

    let movies: serde_json::Value = app.get("/movies").send().await.unwrap().json().await.unwrap();
    let movies = movies.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["id"], movie_id);
    assert_eq!(movies[0]["title"], "Heat");
    assert_eq!(movies[0]["genres"], json!(["Crime", "Thriller"]));

    let deleted = app
        .delete_authenticated(&format!("/movies/{}", movie_id), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let again = app
        .delete_authenticated(&format!("/movies/{}", movie_id), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let bad_id = app
        .delete_authenticated("/movies/42", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(bad_id.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_movie_blank_title() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;

    let response = app
        .post_authenticated("/movies", &token)
        .json(&json!({ "title": "  ", "year": 2000 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_review_lifecycle() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;
    let user_id = app.user_id("alice").await.to_string();
    let movie_id = uuid::Uuid::new_v4().to_string();

    let review = json!({
        "user_id": user_id,
        "movie_id": movie_id,
        "rating": 8.5,
        "comment": "Tense and precise"
    });

    let response = app
        .post_authenticated("/reviews", &token)
        .json(&review)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user_id"], user_id);
    assert_eq!(body["rating"], 8.5);
    let review_id = body["id"].as_str().unwrap().to_string();

    let duplicate = app
        .post_authenticated("/reviews", &token)
        .json(&review)
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = duplicate.json().await.unwrap();
    assert_eq!(body["message"], "Review already exists for this user and movie");

    let replaced = app
        .put_authenticated(&format!("/reviews/{}", review_id), &token)
        .json(&json!({
            "user_id": user_id,
            "movie_id": movie_id,
            "rating": 9.0,
            "comment": null
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(replaced.status(), StatusCode::OK);

    let deleted = app
        .delete_authenticated(&format!("/reviews/{}", review_id), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let missing = app
        .put_authenticated(&format!("/reviews/{}", review_id), &token)
        .json(&review)
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_review_rating_out_of_range() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;

    let response = app
        .post_authenticated("/reviews", &token)
        .json(&json!({
            "user_id": uuid::Uuid::new_v4().to_string(),
            "movie_id": uuid::Uuid::new_v4().to_string(),
            "rating": 11.0
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_recommendations() {
    let app = TestApp::spawn().await;

    let token = app.token_for("alice", "pw123").await;
    let user_id = app.user_id("alice").await;

    let response = app
        .get_authenticated(&format!("/recommendations/{}", user_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "success", "recommendations": [] }));

    let unknown = app
        .get_authenticated(
            &format!("/recommendations/{}", uuid::Uuid::new_v4()),
            &token,
        )
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let bad_id = app
        .get_authenticated("/recommendations/not-a-uuid", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(bad_id.status(), StatusCode::BAD_REQUEST);
}
