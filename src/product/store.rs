use super::model::Product;
use dashmap::DashMap;

/// Thread-safe in-memory product registry.
///
/// Every operation is atomic for the key it touches. There are no multi-key
/// operations, so concurrent writers to the same id resolve as last write wins.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: DashMap<String, Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
        }
    }

    /// A store holding the three sample products the service ships with.
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        for product in [
            Product::new("1", "Laptop", 1200.00),
            Product::new("2", "Mouse", 25.00),
            Product::new("3", "Keyboard", 75.00),
        ] {
            store.put(product.id.clone(), product);
        }
        store
    }

    /// Snapshot of all products. Order is unspecified.
    pub fn list(&self) -> Vec<Product> {
        self.products
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        self.products.get(id).map(|entry| entry.value().clone())
    }

    /// Insert or replace.
    pub fn put(&self, id: impl Into<String>, product: Product) {
        self.products.insert(id.into(), product);
    }

    /// Returns `true` when a product was removed.
    pub fn remove(&self, id: &str) -> bool {
        self.products.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
