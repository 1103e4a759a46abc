/*
 * Responsibility
 * - GET /test: DB が使えるかの診断
 * - 失敗は HTTP エラーにせず、body の文字列で返す (常に 200)
 */
use axum::{Json, extract::State};

use crate::{api::dto::diagnostics::DatabaseReport, db::DatabaseSlot, state::AppState};

const COLLECTION_PREVIEW: usize = 10;
const ERROR_PREVIEW_CHARS: usize = 50;

pub async fn test_database(State(state): State<AppState>) -> Json<DatabaseReport> {
    let mut report = DatabaseReport::not_connected();

    match &state.db {
        DatabaseSlot::Missing => {
            report.database = "❌ Database module not found (run enable-database first)".into();
        }
        DatabaseSlot::Failed(e) => {
            report.database = format!("❌ Error: {}", preview(e));
        }
        DatabaseSlot::Ready(db) if !db.is_initialized() => {
            report.database = "⚠️  Available but not initialized".into();
        }
        DatabaseSlot::Ready(db) => {
            report.connection_status = "Connected";

            match db.list_collections(COLLECTION_PREVIEW).await {
                Ok(mut collections) => {
                    collections.truncate(COLLECTION_PREVIEW);
                    report.collections = collections;
                    report.database = "✅ Connected & Working".into();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "database probe failed");
                    report.database =
                        format!("⚠️  Connected but Error: {}", preview(&e.to_string()));
                }
            }
        }
    }

    report.database_url = set_or_not(state.env.database_url);
    report.database_name = set_or_not(state.env.database_name);

    Json(report)
}

fn set_or_not(present: bool) -> &'static str {
    if present { "✅ Set" } else { "❌ Not Set" }
}

// Error messages can be long (connection strings, driver chains); keep the first few chars.
fn preview(message: &str) -> String {
    message.chars().take(ERROR_PREVIEW_CHARS).collect()
}
