pub mod diagnostics;
pub mod greeting;
pub mod schema;
