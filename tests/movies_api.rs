mod common;

use axum::http::{Method, StatusCode};
use common::app;
use serde_json::{json, Value};

fn alien() -> Value {
    json!({
        "title": "Alien",
        "director": "Ridley Scott",
        "year": "1979",
        "color": "1",
        "duration": 117,
    })
}

#[tokio::test]
async fn movie_lifecycle() {
    let app = app();

    let created = app.post("/api/movies", alien()).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().unwrap();
    assert_eq!(created.body["duration"], 117);

    let list = app.get("/api/movies").await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body.as_array().unwrap()[0]["title"], "Alien");

    let mut replacement = alien();
    replacement["title"] = json!("Aliens");
    replacement["director"] = json!("James Cameron");
    replacement["year"] = json!("1986");
    replacement["duration"] = json!(137);
    let uri = format!("/api/movies/{}", id);
    assert_eq!(app.put(&uri, replacement.clone()).await.status, StatusCode::NO_CONTENT);

    let read = app.get(&uri).await;
    replacement["id"] = json!(id);
    assert_eq!(read.body, replacement);

    assert_eq!(app.delete(&uri).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.get(&uri).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn movie_missing_fields_is_422() {
    let app = app();
    for field in ["title", "director", "year", "color", "duration"] {
        let mut body = alien();
        body.as_object_mut().unwrap().remove(field);
        let resp = app.post("/api/movies", body.clone()).await;
        assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY, "{} omitted", field);
    }
}

#[tokio::test]
async fn movie_with_wrong_duration_type_is_422() {
    let mut body = alien();
    body["duration"] = json!("two hours");
    let resp = app().post("/api/movies", body).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn absent_movie_is_404_for_every_verb() {
    let app = app();
    assert_eq!(app.get("/api/movies/0").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.put("/api/movies/0", alien()).await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.delete("/api/movies/0").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn movies_and_users_have_separate_ids() {
    let app = app();
    let movie = app.post("/api/movies", alien()).await;
    assert_eq!(movie.body["id"], 1);
    let user = app
        .post(
            "/api/users",
            json!({
                "firstname": "Ellen",
                "lastname": "Ripley",
                "email": "ripley@nostromo.co",
                "city": "Nostromo",
                "language": "English",
            }),
        )
        .await;
    assert_eq!(user.body["id"], 1);
    assert_eq!(app.get("/api/users/1").await.body["lastname"], "Ripley");
}

#[tokio::test]
async fn unknown_routes_and_methods() {
    let app = app();
    assert_eq!(app.get("/api/actors").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.send(Method::PATCH, "/api/movies/1", Some(alien())).await.status,
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let mut body = alien();
    body["title"] = json!("x".repeat(movie_api::routes::BODY_LIMIT + 1));
    let resp = app().post("/api/movies", body).await;
    assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn health_ready_and_version() {
    let app = app();
    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");

    let ready = app.get("/ready").await;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.body["database"], "ok");

    let version = app.get("/version").await;
    assert_eq!(version.body["name"], "movie-api");
}

#[tokio::test]
async fn ready_reports_closed_store() {
    use movie_api::Store;

    let app = app();
    app.store.close().await;
    let ready = app.get("/ready").await;
    assert_eq!(ready.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ready.body["status"], "degraded");

    let list = app.get("/api/movies").await;
    assert_eq!(list.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(list.body["error"]["code"], "database_error");
}
