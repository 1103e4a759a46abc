/*
 * Responsibility
 * - 外部 DB ハンドルの公開インターフェース (re-export)
 */
pub mod postgres;
pub mod probe;

pub use probe::DatabaseSlot;
