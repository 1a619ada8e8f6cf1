use std::env;
use std::path::PathBuf;

use anyhow::{Context, bail};

use super::args::Args;

const DEFAULT_INITIAL_QUANTITY: i64 = 1;

/// Startup configuration for a cart session.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog_path: Option<PathBuf>,
    pub initial_quantity: i64,
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            initial_quantity: DEFAULT_INITIAL_QUANTITY,
            seed: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_CATALOG_PATH: JSON catalog file (default: built-in catalog)
    /// - CART_INITIAL_QUANTITY: starting quantity per product (default: 1)
    /// - CART_SEED: "true"/"false", whether to pre-fill the cart (default: true)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("CART_CATALOG_PATH").filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = lookup("CART_INITIAL_QUANTITY") {
            config.initial_quantity = raw
                .trim()
                .parse()
                .with_context(|| format!("CART_INITIAL_QUANTITY is not an integer: {raw}"))?;
        }
        if let Some(raw) = lookup("CART_SEED") {
            config.seed = parse_flag(&raw)
                .with_context(|| format!("CART_SEED is not a boolean: {raw}"))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Command line arguments win over the environment.
    pub fn with_args(mut self, args: Args) -> anyhow::Result<Self> {
        if let Some(path) = args.catalog {
            self.catalog_path = Some(path);
        }
        if let Some(quantity) = args.initial_quantity {
            self.initial_quantity = quantity;
        }
        if args.no_seed {
            self.seed = false;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.seed && self.initial_quantity < 1 {
            bail!(
                "initial quantity must be at least 1, got {}",
                self.initial_quantity
            );
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
