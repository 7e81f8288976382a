use axum::{response::IntoResponse, Json};
use serde_json::json;

/// GET / - Service info and the available resource collections.
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "eduhub API",
        "endpoints": [
            "/persons",
            "/posts",
            "/items",
            "/assignatures",
            "/institutions",
            "/courses",
            "/tags",
            "/storage",
            "/uploads",
        ],
    }))
}
