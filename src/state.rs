/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - db: DatabaseSlot, models: ModelCatalog, 環境変数の有無
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::{config::Config, db::DatabaseSlot, models::ModelCatalog};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DatabaseSlot,
    pub models: Arc<ModelCatalog>,
    pub env: EnvPresence,
}

/// Which database variables were set at startup (reported by `/test`, never their values).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvPresence {
    pub database_url: bool,
    pub database_name: bool,
}

impl EnvPresence {
    pub fn from_config(config: &Config) -> Self {
        Self {
            database_url: config.database_url.is_some(),
            database_name: config.database_name.is_some(),
        }
    }
}

impl AppState {
    pub fn new(db: DatabaseSlot, models: ModelCatalog, env: EnvPresence) -> Self {
        Self {
            db,
            models: Arc::new(models),
            env,
        }
    }
}
