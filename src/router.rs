use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controller::{
    api, assignature, course, institution, item, person, post as post_controller, storage, tag,
    upload,
};
use crate::state::AppState;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:3001"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://127.0.0.1:3001"),
        ]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(86400))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        // Persons
        .route("/persons", get(person::get_all).post(person::create))
        .route(
            "/persons/{id}",
            get(person::get_by_id)
                .put(person::update)
                .delete(person::delete),
        )
        .route("/persons/username/{username}", get(person::get_by_username))
        .route("/persons/{id}/password", put(person::change_password))
        .route("/persons/sign-in", post(person::sign_in))
        // Posts
        .route(
            "/posts",
            get(post_controller::get_all).post(post_controller::create),
        )
        .route(
            "/posts/{id}",
            get(post_controller::get_by_id)
                .put(post_controller::update)
                .delete(post_controller::delete),
        )
        .route("/posts/{id}/restore", post(post_controller::restore))
        .route("/posts/{id}/like", post(post_controller::like))
        .route("/posts/{id}/dislike", post(post_controller::dislike))
        .route("/posts/{id}/comments", post(post_controller::add_comment))
        // Items
        .route("/items", get(item::get_all).post(item::create))
        .route(
            "/items/{id}",
            get(item::get_by_id).put(item::update).delete(item::delete),
        )
        .route("/items/{id}/like", post(item::like))
        .route("/items/{id}/dislike", post(item::dislike))
        // Assignatures
        .route(
            "/assignatures",
            get(assignature::get_all).post(assignature::create),
        )
        .route(
            "/assignatures/{id}",
            get(assignature::get_by_id)
                .put(assignature::update)
                .delete(assignature::delete),
        )
        .route("/assignatures/{id}/like", post(assignature::like))
        .route("/assignatures/{id}/dislike", post(assignature::dislike))
        // Institutions
        .route(
            "/institutions",
            get(institution::get_all).post(institution::create),
        )
        .route(
            "/institutions/{id}",
            get(institution::get_by_id)
                .put(institution::update)
                .delete(institution::delete),
        )
        .route(
            "/institutions/domain/{domain}",
            get(institution::get_by_domain),
        )
        // Courses
        .route("/courses", get(course::get_all).post(course::create))
        .route(
            "/courses/{id}",
            get(course::get_by_id)
                .put(course::update)
                .delete(course::delete),
        )
        .route("/courses/abbr/{abbr}", get(course::get_by_abbr))
        .route("/courses/duration/{anos}", get(course::get_by_duration))
        .route(
            "/courses/{id}/variations",
            post(course::add_variation).delete(course::remove_variation),
        )
        // Tags
        .route("/tags", get(tag::get_all).post(tag::create))
        .route("/tags/popular", get(tag::get_popular))
        .route(
            "/tags/{id}",
            get(tag::get_by_id).put(tag::update).delete(tag::delete),
        )
        .route("/tags/name/{tagName}", get(tag::get_by_name))
        .route("/tags/color/{color}", get(tag::get_by_color))
        // Storage
        .route("/storage", get(storage::get_all).post(storage::create))
        .route("/storage/upload", post(storage::upload))
        .route(
            "/storage/{id}",
            get(storage::get_by_id)
                .put(storage::update)
                .delete(storage::delete),
        )
        .route("/storage/{id}/restore", post(storage::restore))
        .route("/storage/{id}/download", get(storage::download))
        // Uploads
        .route("/uploads", post(upload::upload))
        .route(
            "/uploads/{id}",
            get(upload::get_by_id).delete(upload::delete),
        )
        .route("/uploads/{id}/download", get(upload::download))
        .route("/uploads/{id}/view", get(upload::view))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod test {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use test_utils::builder::TestBuilder;
    use tower::ServiceExt;

    use super::*;
    use crate::service::rate_limit::RegistrationRateLimiter;

    async fn test_app() -> Router {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let state = AppState {
            db: test.db.unwrap(),
            public_url: "http://localhost:3000/".to_string(),
            storage_path: std::env::temp_dir(),
            registration_limiter: RegistrationRateLimiter::new(),
        };
        router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn index_lists_the_resource_collections() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
    }

    #[tokio::test]
    async fn missing_record_yields_a_not_found_envelope() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::get("/courses/999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Course not found");
    }

    #[tokio::test]
    async fn course_create_normalizes_abbr_and_conflicts_on_duplicate() {
        let app = test_app().await;
        let payload = r#"{"curso":"Engenharia","anos":5,"abbr":"eng"}"#;

        let response = app
            .clone()
            .oneshot(
                Request::post("/courses")
                    .header("content-type", "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["abbr"], "ENG");

        let response = app
            .oneshot(
                Request::post("/courses")
                    .header("content-type", "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn validation_failures_report_per_field_rules() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::post("/tags")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"tagName":"x","description":"short","color":"red"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["errors"]["tagName"].is_array());
        assert!(json["errors"]["description"].is_array());
        assert!(json["errors"]["color"].is_array());
    }
}
