/*
 * Responsibility
 * - GET /test の response DTO
 * - 6 つのキーは DB の状態に関係なく常に返す
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DatabaseReport {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

impl DatabaseReport {
    pub fn not_connected() -> Self {
        Self {
            backend: "✅ Running",
            database: "❌ Not Available".into(),
            database_url: "❌ Not Set",
            database_name: "❌ Not Set",
            connection_status: "Not Connected",
            collections: Vec::new(),
        }
    }
}
