pub mod diagnostics;
pub mod fallback;
pub mod greeting;
pub mod schema;
