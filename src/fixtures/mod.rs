//! Fixtures
//!
//! Loads products, an order and a promotion configuration from YAML files laid
//! out as `<base>/products/<name>.yml`, `<base>/orders/<name>.yml` and
//! `<base>/promotions/<name>.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    fixtures::{
        orders::{LineFixture, OrderFixture},
        products::ProductsFixture,
        promotions::PromotionsFixture,
    },
    items::{ItemError, OrderItem},
    orders::Order,
    products::Product,
    service::OrderService,
};

pub mod orders;
pub mod products;
pub mod promotions;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid amount format
    #[error("Invalid amount format: {0}")]
    InvalidAmount(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No order lines loaded
    #[error("No order lines loaded; cannot check out")]
    NoItems,

    /// An order line failed validation
    #[error("Invalid order line: {0}")]
    Item(#[from] ItemError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products by fixture key
    products: FxHashMap<String, Product>,

    /// Order lines referencing products by fixture key
    lines: Vec<LineFixture>,

    /// Service configured from the loaded promotions
    service: OrderService,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            lines: Vec::new(),
            service: OrderService::new(),
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a price is invalid.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("products", name)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for (key, product_fixture) in fixture.products {
            self.products.insert(key, product_fixture.try_into()?);
        }

        Ok(self)
    }

    /// Load order lines from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a line
    /// references a product that has not been loaded.
    pub fn load_order(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("orders", name)?;
        let fixture: OrderFixture = serde_norway::from_str(&contents)?;

        if let Some(missing) = fixture
            .items
            .iter()
            .find(|line| !self.products.contains_key(&line.product))
        {
            return Err(FixtureError::ProductNotFound(missing.product.clone()));
        }

        self.lines.extend(fixture.items);

        Ok(self)
    }

    /// Load promotion configuration from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a value is invalid.
    pub fn load_promotions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("promotions", name)?;
        let fixture: PromotionsFixture = serde_norway::from_str(&contents)?;

        fixture.configure(&mut self.service)?;

        Ok(self)
    }

    /// Load a complete fixture set (products, order and promotions with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_products(name)?
            .load_order(name)?
            .load_promotions(name)?;

        Ok(fixture)
    }

    /// Get a product by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product, FixtureError> {
        self.products
            .get(key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Get the configured order service
    pub fn service(&self) -> &OrderService {
        &self.service
    }

    /// Build the order items for the loaded lines
    ///
    /// # Errors
    ///
    /// Returns an error if no lines are loaded, a product is missing, or a
    /// line has a non-positive quantity.
    pub fn items(&self) -> Result<Vec<OrderItem<'_>>, FixtureError> {
        if self.lines.is_empty() {
            return Err(FixtureError::NoItems);
        }

        self.lines
            .iter()
            .map(|line| Ok(OrderItem::new(self.product(&line.product)?, line.quantity)?))
            .collect()
    }

    /// Check out the loaded order with the loaded promotions
    ///
    /// # Errors
    ///
    /// Returns an error if the order items cannot be built.
    pub fn checkout(&self) -> Result<Order<'_>, FixtureError> {
        Ok(self.service.checkout(self.items()?))
    }

    fn read(&self, category: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));

        Ok(fs::read_to_string(file_path)?)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
