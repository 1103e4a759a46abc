/*
 * Responsibility
 * - GET /schema: 宣言済みデータモデルのフィールド情報を返す
 * - UI が collection を自動生成するための情報 (collection 名は型名の小文字)
 */
use axum::{Json, extract::State};

use crate::{api::dto::schema::SchemaResponse, state::AppState};

pub async fn schema(State(state): State<AppState>) -> Json<SchemaResponse> {
    let response = match state.models.load() {
        Ok(schemas) => SchemaResponse::Schemas { schemas },
        Err(e) => {
            tracing::warn!(error = %e, "model catalog unavailable");
            SchemaResponse::Error {
                error: format!("Unable to import schemas: {e}"),
            }
        }
    };

    Json(response)
}
