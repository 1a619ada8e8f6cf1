pub mod builtin;
pub mod json;
mod record;

pub use builtin::BuiltinCatalogSource;
pub use json::JsonCatalogSource;
