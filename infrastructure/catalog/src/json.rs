use std::fs;
use std::path::PathBuf;

use business::domain::errors::CatalogError;
use business::domain::product::model::Product;
use business::domain::product::repository::CatalogSource;

use crate::record::ProductRecord;

/// Reads a catalog from a JSON array of `{id, name, price, img}` objects.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parses catalog JSON that is already in memory.
    pub fn parse(raw: &str) -> Result<Vec<Product>, CatalogError> {
        let records: Vec<ProductRecord> =
            serde_json::from_str(raw).map_err(|e| CatalogError::parse(e.to_string()))?;

        records
            .into_iter()
            .map(|r| r.into_domain().map_err(CatalogError::from))
            .collect()
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> Result<Vec<Product>, CatalogError> {
        let raw = fs::read_to_string(&self.path).map_err(CatalogError::io)?;
        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use business::domain::product::errors::ProductError;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_catalog(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn should_load_products_from_file() {
        let file = write_catalog(
            r#"[
                {"id": 1, "name": "orange juice", "price": 2.99, "img": "orange.jpg"},
                {"id": "sku-2", "name": "apple juice", "price": 3.49}
            ]"#,
        );

        let products = JsonCatalogSource::new(file.path()).load().unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id().as_str(), "1");
        assert_eq!(products[0].image_ref(), Some("orange.jpg"));
        assert_eq!(products[1].id().as_str(), "sku-2");
        assert_eq!(products[1].unit_price(), 3.49);
        assert!(products[1].image_ref().is_none());
    }

    #[test]
    fn should_fail_with_io_error_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonCatalogSource::new(dir.path().join("missing.json"));

        assert!(matches!(source.load(), Err(CatalogError::Io(_))));
    }

    #[test]
    fn should_fail_with_parse_error_on_malformed_json() {
        let result = JsonCatalogSource::parse(r#"[{"id": 1, "name": "x"}"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = JsonCatalogSource::parse(r#"[{"id": 1, "name": "x", "price": -1.0}]"#);

        assert!(matches!(
            result,
            Err(CatalogError::Invalid(ProductError::InvalidPrice))
        ));
    }

    #[test]
    fn should_accept_image_alias() {
        let products =
            JsonCatalogSource::parse(r#"[{"id": 4, "name": "water", "price": 0, "image": "w.png"}]"#)
                .unwrap();

        assert_eq!(products[0].image_ref(), Some("w.png"));
        assert_eq!(products[0].unit_price(), 0.0);
    }
}
