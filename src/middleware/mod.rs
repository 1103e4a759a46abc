/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - Router 単位で apply(...) する
 */
pub mod cors;
pub mod http;
