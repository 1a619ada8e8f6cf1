use business::domain::errors::CatalogError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::repository::CatalogSource;

const JUICES: [(u64, &str, f64, &str); 3] = [
    (
        1,
        "orange juice",
        2.99,
        "https://img.freepik.com/photos-gratuite/jus-orange-frais-froid_144627-11208.jpg?w=360",
    ),
    (
        2,
        "apple juice",
        3.49,
        "https://img.freepik.com/photos-gratuite/jus-pomme-frais-froid_144627-11408.jpg?w=360",
    ),
    (
        3,
        "grape juice",
        3.99,
        "https://img.freepik.com/photos-gratuite/vue-laterale-du-jus-raisin-noir-tube-boire-verre-bol-raisins-rouges-feuilles-fond-blanc_141793-27321.jpg?w=740",
    ),
];

/// Default catalog used when no catalog file is configured.
pub struct BuiltinCatalogSource;

impl CatalogSource for BuiltinCatalogSource {
    fn load(&self) -> Result<Vec<Product>, CatalogError> {
        JUICES
            .iter()
            .map(|&(id, name, price, img)| {
                Product::new(NewProductProps {
                    id: id.into(),
                    name: name.to_string(),
                    unit_price: price,
                    image_ref: Some(img.to_string()),
                })
                .map_err(CatalogError::from)
            })
            .collect()
    }
}
