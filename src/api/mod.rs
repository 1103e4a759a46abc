/*
 * Responsibility
 * - api の公開ポイント (routes() の re-export など)
 */
pub mod dto;
pub mod handlers;
mod routes;

#[cfg(test)]
pub(crate) mod test_support;

pub use routes::routes;
