/*
 * Responsibility
 * - URL 構造を定義 (すべて静的パス)
 * - 未定義のパスは fallback で JSON 404
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{
    diagnostics::test_database,
    fallback::not_found,
    greeting::{hello, root},
    schema::schema,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/hello", get(hello))
        .route("/test", get(test_database))
        .route("/schema", get(schema))
        .fallback(not_found)
}
