/*
 * Responsibility
 * - データモデル定義と、そのフィールド情報 (reflection) の公開インターフェース
 */
pub mod catalog;
pub mod definitions;
pub mod schema;

pub use catalog::ModelCatalog;
pub use definitions::{Product, User};
pub use schema::{FieldSchema, Model, ModelSchema};

/// Catalog of every model declared in `definitions`.
pub fn catalog() -> ModelCatalog {
    ModelCatalog::new().register::<User>().register::<Product>()
}
