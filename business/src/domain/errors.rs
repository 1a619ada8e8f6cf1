use super::product::errors::ProductError;

/// Catalog loading errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.io")]
    Io(#[source] std::io::Error),
    #[error("catalog.parse")]
    Parse(String),
    #[error("catalog.invalid")]
    Invalid(#[from] ProductError),
}

impl CatalogError {
    pub fn io(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
    pub fn parse(detail: impl Into<String>) -> Self {
        CatalogError::Parse(detail.into())
    }
}
