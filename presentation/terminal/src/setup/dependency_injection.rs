use std::sync::Arc;

use anyhow::Context;

use business::application::cart::add_item::AddItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_summary::GetCartSummaryUseCaseImpl;
use business::application::cart::remove_item::RemoveItemUseCaseImpl;
use business::application::cart::seed::SeedCartUseCaseImpl;
use business::application::cart::support::CartListeners;
use business::application::cart::update_quantity::UpdateQuantityUseCaseImpl;
use business::domain::cart::events::CartListener;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_item::AddItemUseCase;
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get_summary::GetCartSummaryUseCase;
use business::domain::cart::use_cases::remove_item::RemoveItemUseCase;
use business::domain::cart::use_cases::seed::{SeedCartParams, SeedCartUseCase};
use business::domain::cart::use_cases::update_quantity::UpdateQuantityUseCase;
use business::domain::logger::Logger;
use business::domain::product::catalog::Catalog;
use business::domain::product::repository::CatalogSource;
use catalog::{BuiltinCatalogSource, JsonCatalogSource};
use logger::TracingLogger;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub catalog: Arc<Catalog>,
    pub logger: Arc<dyn Logger>,
    pub add_item: Arc<dyn AddItemUseCase>,
    pub remove_item: Arc<dyn RemoveItemUseCase>,
    pub update_quantity: Arc<dyn UpdateQuantityUseCase>,
    pub clear: Arc<dyn ClearCartUseCase>,
    pub get_summary: Arc<dyn GetCartSummaryUseCase>,
    pub seed: Arc<dyn SeedCartUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let tracing_logger = Arc::new(TracingLogger);
        let event_tracer: Arc<dyn CartListener> = tracing_logger.clone();

        let source: Box<dyn CatalogSource> = match &config.catalog_path {
            Some(path) => Box::new(JsonCatalogSource::new(path.clone())),
            None => Box::new(BuiltinCatalogSource),
        };

        Self::with_parts(source.as_ref(), tracing_logger, vec![event_tracer]).with_context(|| {
            match &config.catalog_path {
                Some(path) => format!("failed to load catalog {}", path.display()),
                None => "failed to load built-in catalog".to_string(),
            }
        })
    }

    /// Wires every cart use case from explicit collaborators.
    pub fn with_parts(
        source: &dyn CatalogSource,
        logger: Arc<dyn Logger>,
        listeners: Vec<Arc<dyn CartListener>>,
    ) -> anyhow::Result<Self> {
        let catalog = Arc::new(Catalog::new(source.load()?)?);
        logger.info(&format!("Catalog loaded with {} products", catalog.len()));

        let listener: Arc<dyn CartListener> = Arc::new(CartListeners::new(listeners));

        // Cart use cases
        let add_item = Arc::new(AddItemUseCaseImpl {
            catalog: catalog.clone(),
            listener: listener.clone(),
            logger: logger.clone(),
        });
        let remove_item = Arc::new(RemoveItemUseCaseImpl {
            catalog: catalog.clone(),
            listener: listener.clone(),
            logger: logger.clone(),
        });
        let update_quantity = Arc::new(UpdateQuantityUseCaseImpl {
            catalog: catalog.clone(),
            listener: listener.clone(),
            logger: logger.clone(),
        });
        let clear = Arc::new(ClearCartUseCaseImpl {
            listener: listener.clone(),
            logger: logger.clone(),
        });
        let seed = Arc::new(SeedCartUseCaseImpl {
            catalog: catalog.clone(),
            listener,
            logger: logger.clone(),
        });

        Ok(Self {
            catalog,
            logger,
            add_item,
            remove_item,
            update_quantity,
            clear,
            get_summary: Arc::new(GetCartSummaryUseCaseImpl),
            seed,
        })
    }

    /// The cart a session starts with, pre-filled when seeding is enabled.
    pub fn initial_cart(&self, config: &AppConfig) -> anyhow::Result<Cart> {
        let mut cart = Cart::new();
        if config.seed {
            let quantity = config.initial_quantity;
            self.seed
                .execute(&mut cart, SeedCartParams { quantity })
                .with_context(|| format!("failed to seed cart with quantity {}", quantity))?;
        }
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use business::domain::errors::CatalogError;
    use business::domain::product::model::{NewProductProps, Product};
    use mockall::mock;

    use super::*;

    mock! {
        pub Source {}

        impl CatalogSource for Source {
            fn load(&self) -> Result<Vec<Product>, CatalogError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    mock! {
        pub Listener {}

        impl CartListener for Listener {
            fn on_event(&self, event: &business::domain::cart::events::CartEvent);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: u64, price: f64) -> Product {
        Product::new(NewProductProps {
            id: id.into(),
            name: format!("product {id}"),
            unit_price: price,
            image_ref: None,
        })
        .unwrap()
    }

    fn two_products() -> MockSource {
        let mut source = MockSource::new();
        source
            .expect_load()
            .times(1)
            .returning(|| Ok(vec![product(1, 1.0), product(2, 2.0)]));
        source
    }

    #[test]
    fn should_seed_cart_from_source() {
        let config = AppConfig {
            initial_quantity: 2,
            ..AppConfig::default()
        };
        let container =
            DependencyContainer::with_parts(&two_products(), mock_logger(), Vec::new()).unwrap();

        let cart = container.initial_cart(&config).unwrap();

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), 6.0);
    }

    #[test]
    fn should_leave_cart_empty_when_not_seeding() {
        let config = AppConfig {
            seed: false,
            ..AppConfig::default()
        };
        let container =
            DependencyContainer::with_parts(&two_products(), mock_logger(), Vec::new()).unwrap();

        let cart = container.initial_cart(&config).unwrap();

        assert!(cart.is_empty());
        assert_eq!(container.catalog.len(), 2);
    }

    #[test]
    fn should_route_events_to_every_listener() {
        let mut listener = MockListener::new();
        listener.expect_on_event().times(2).returning(|_| ());
        let listener: Arc<dyn CartListener> = Arc::new(listener);
        let container =
            DependencyContainer::with_parts(&two_products(), mock_logger(), vec![listener])
                .unwrap();

        container.initial_cart(&AppConfig::default()).unwrap();
    }

    #[test]
    fn should_fail_seeding_with_non_positive_quantity() {
        let config = AppConfig {
            initial_quantity: 0,
            ..AppConfig::default()
        };
        let container =
            DependencyContainer::with_parts(&two_products(), mock_logger(), Vec::new()).unwrap();

        let err = container.initial_cart(&config).unwrap_err();

        assert!(err.to_string().contains("quantity 0"));
    }

    #[test]
    fn should_name_catalog_path_when_loading_fails() {
        let config = AppConfig {
            catalog_path: Some("does-not-exist/catalog.json".into()),
            ..AppConfig::default()
        };

        let err = DependencyContainer::new(&config).err().unwrap();

        assert_eq!(
            err.to_string(),
            "failed to load catalog does-not-exist/catalog.json"
        );
    }

    #[test]
    fn should_fail_on_duplicate_catalog_ids() {
        let mut source = MockSource::new();
        source
            .expect_load()
            .returning(|| Ok(vec![product(1, 1.0), product(1, 2.0)]));

        let result = DependencyContainer::with_parts(&source, mock_logger(), Vec::new());

        assert!(result.is_err());
    }

    #[test]
    fn should_fail_when_source_fails() {
        let mut source = MockSource::new();
        source
            .expect_load()
            .returning(|| Err(CatalogError::parse("bad json")));

        let result = DependencyContainer::with_parts(&source, mock_logger(), Vec::new());

        assert!(result.is_err());
    }
}
