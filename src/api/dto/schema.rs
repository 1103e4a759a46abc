/*
 * Responsibility
 * - GET /schema の response DTO
 * - 成功時は { schemas: {...} }, 読み込み失敗時は { error: "..." } (どちらも 200)
 */
use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::ModelSchema;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SchemaResponse {
    Schemas {
        schemas: BTreeMap<String, ModelSchema>,
    },
    Error {
        error: String,
    },
}
