/*
 * Responsibility
 * - GET / (疎通用) と GET /api/hello
 * - 固定メッセージのみ、state は見ない
 */
use axum::Json;

use crate::api::dto::greeting::MessageResponse;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend!",
    })
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::api::test_support::{get_json, test_app};
    use crate::db::DatabaseSlot;

    #[tokio::test]
    async fn root_greets() {
        let app = test_app(DatabaseSlot::Missing);
        let (status, body) = get_json(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"message": "Hello from the backend!"}));
    }

    #[tokio::test]
    async fn api_hello_greets() {
        let app = test_app(DatabaseSlot::Failed("boom".into()));
        let (status, body) = get_json(app, "/api/hello").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello from the backend API!");
    }
}
